pub mod barnsley;
pub mod dragon;
pub mod escape_time;
pub mod fractal_kinds;
pub mod koch;
pub mod sierpinski;
