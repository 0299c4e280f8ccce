//! The three programs, each wired to input, simulation and drawing

pub mod platformer;
pub mod pong;
pub mod scene;

pub use platformer::PlatformerDemo;
pub use pong::PongDemo;
pub use scene::SceneDemo;

/// Linear 0-255 colour for placeholder art from a renderer tint
pub(crate) fn rgba8(color: [f32; 4]) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}
