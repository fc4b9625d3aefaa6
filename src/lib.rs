pub mod capture;
pub mod config;
pub mod input;
pub mod scene;
pub mod shaders;
pub mod vertex;
pub mod window;
