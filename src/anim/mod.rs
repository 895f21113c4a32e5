//! Animation math. No DOM access here; the components feed in sizes, pointer
//! positions and frame timestamps.

pub mod counter;
pub mod particles;
pub mod spring;
pub mod tilt;
