//! Clipboard domain module

mod image;

pub use image::ClipboardImage;
