pub mod burning_ship;
pub mod escape_time;
pub mod fractal_kinds;
pub mod julia;
pub mod lambda;
pub mod mandelbrot;
pub mod multibrot;
pub mod newton;
pub mod phoenix;
pub mod tricorn;
