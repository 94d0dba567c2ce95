//! Grayscale image I/O

mod gray_tiff;

pub use gray_tiff::{read_image, read_image_from_buffer, write_image, write_image_to_buffer};
