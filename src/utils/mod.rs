pub mod math;
pub mod noise_field;
