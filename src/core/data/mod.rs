pub mod colour;
pub mod frame_buffer;
pub mod transform;
