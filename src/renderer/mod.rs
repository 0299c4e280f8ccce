//! wgpu rendering module
//!
//! Demos fill a [`DrawList`] each frame; [`RenderState`] uploads and draws it.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::{DrawList, TextureId, UvRect, atlas_uv};
pub use vertex::{Vertex, colors};
