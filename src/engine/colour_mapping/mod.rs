pub mod palette_gradient;
