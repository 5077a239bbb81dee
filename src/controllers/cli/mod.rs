pub mod controller;
pub mod settings;
