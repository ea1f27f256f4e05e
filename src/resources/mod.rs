pub mod shake_config;

pub use shake_config::*;
