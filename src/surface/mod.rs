pub mod blur;
pub mod buffer;
pub mod composite;
