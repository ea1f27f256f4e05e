pub mod camera;
pub mod orientation;
pub mod trauma;

pub use camera::*;
pub use orientation::*;
pub use trauma::*;
