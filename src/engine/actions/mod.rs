pub mod iterate_point;
pub mod ports;
pub mod render;
