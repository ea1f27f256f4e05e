pub mod camera_shake;

pub use camera_shake::*;
