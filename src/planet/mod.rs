pub mod config;
pub mod occlusion;
pub mod rings;
pub mod shading;
pub mod surface;
