//! wgpu rendering module
//!
//! Flat-color instanced quads and circles in pixel space.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
