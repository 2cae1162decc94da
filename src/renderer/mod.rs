//! Rendering module
//!
//! The scene is drawn into a 1-bit [`FrameBuffer`] through the [`Canvas`]
//! primitives, then handed to the platform display.

pub mod canvas;
pub mod framebuffer;
pub mod scene;
pub mod viewport;

pub use canvas::{Align, Canvas, Color, Font};
pub use framebuffer::{FrameBuffer, TextLabel};
pub use viewport::ViewPort;
