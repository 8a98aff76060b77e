//! # Frame Renderer
//!
//! A minimal software stand-in for the game's presentation layer. It draws
//! the world as flat rectangles into an [`image::RgbaImage`] so the
//! observation encoder has real frames to consume without sprites, a window
//! or a GPU.

pub mod renderer;
pub mod scene;

pub use renderer::{as_raw_frame, save_png, FrameRenderer};
pub use scene::Palette;

pub use image::RgbaImage;
