pub mod protocol;
pub mod stroke_buffer;
