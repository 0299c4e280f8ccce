//! Arcade Demos - three small 2D games sharing one toolbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (Pong, platformer physics + AI, sprite scene)
//! - `renderer`: wgpu textured-quad renderer
//! - `platform`: winit window, keyboard state and the frame loop
//! - `demos`: glue between input, simulation and drawing for each program
//! - `settings`: JSON-configurable asset paths and match rules

pub mod assets;
pub mod demos;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{AppError, AssetError, MapError, RenderError};
pub use settings::Settings;

use glam::{Mat4, Vec2};

/// Game configuration constants
pub mod consts {
    /// Half width of the visible playfield in world units
    pub const VIEW_HALF_WIDTH: f32 = 5.0;
    /// Half height of the visible playfield in world units
    pub const VIEW_HALF_HEIGHT: f32 = 3.75;

    /// Fixed simulation timestep (~60 Hz)
    pub const FIXED_TIMESTEP: f32 = 0.0166666;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame times longer than this are clamped (window drags, breakpoints)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Sky blue shared by all three demos
    pub const BACKGROUND: [f64; 4] = [0.1922, 0.549, 0.9059, 1.0];
}

/// Orthographic projection covering the playfield, centered on the origin
pub fn playfield_projection() -> Mat4 {
    use consts::{VIEW_HALF_HEIGHT, VIEW_HALF_WIDTH};
    Mat4::orthographic_rh(
        -VIEW_HALF_WIDTH,
        VIEW_HALF_WIDTH,
        -VIEW_HALF_HEIGHT,
        VIEW_HALF_HEIGHT,
        -1.0,
        1.0,
    )
}

/// True if `pos` lies outside the playfield rectangle
#[inline]
pub fn outside_playfield(pos: Vec2) -> bool {
    use consts::{VIEW_HALF_HEIGHT, VIEW_HALF_WIDTH};
    pos.x < -VIEW_HALF_WIDTH
        || pos.x > VIEW_HALF_WIDTH
        || pos.y < -VIEW_HALF_HEIGHT
        || pos.y > VIEW_HALF_HEIGHT
}

/// Scale a movement intent down to unit length, leaving shorter vectors alone
#[inline]
pub fn limit_to_unit(v: Vec2) -> Vec2 {
    if v.length() > 1.0 { v.normalize() } else { v }
}
