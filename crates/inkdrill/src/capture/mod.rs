pub mod recorder;
pub mod stroke;
