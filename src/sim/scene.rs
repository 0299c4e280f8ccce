//! Animated sprite scene
//!
//! Two sprites drift right, spin and pulse. Everything is driven by the
//! variable frame time, so the motion speed is independent of frame rate
//! while the pulse direction flips on a frame count.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::VIEW_HALF_WIDTH;

/// Frames between grow/shrink flips
pub const MAX_FRAME: u32 = 40;
/// A sprite past this x reappears on the left
pub const WRAP_X: f32 = VIEW_HALF_WIDTH + 0.5;

/// Order in which a sprite's transform is composed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformOrder {
    /// Spin in place, then pulse along the spinning axes
    TranslateRotateScale,
    /// Pulse along the world axes, then spin
    TranslateScaleRotate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinningSprite {
    pub x: f32,
    pub rotation_deg: f32,
    /// Units per second
    pub speed: f32,
    /// Degrees per second
    pub spin_rate: f32,
    pub pulse_rate: f32,
    pub order: TransformOrder,
    /// This frame's uniform scale
    pub scale: f32,
}

impl SpinningSprite {
    pub fn new(speed: f32, spin_rate: f32, pulse_rate: f32, order: TransformOrder) -> Self {
        Self {
            x: 0.0,
            rotation_deg: 0.0,
            speed,
            spin_rate,
            pulse_rate,
            order,
            scale: 1.0,
        }
    }

    fn update(&mut self, dt: f32, growing: bool) {
        let pulse = dt * self.pulse_rate;
        self.scale = if growing { 1.0 + pulse } else { 1.0 - pulse };
        self.x += self.speed * dt;
        self.rotation_deg += self.spin_rate * dt;
        if self.x > WRAP_X {
            self.x -= 2.0 * WRAP_X;
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let translate = Mat4::from_translation(Vec3::new(self.x, 0.0, 0.0));
        let rotate = Mat4::from_quat(Quat::from_rotation_z(self.rotation_deg.to_radians()));
        let scale = Mat4::from_scale(Vec3::new(self.scale, self.scale, 1.0));
        match self.order {
            TransformOrder::TranslateRotateScale => translate * rotate * scale,
            TransformOrder::TranslateScaleRotate => translate * scale * rotate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneState {
    pub sprites: [SpinningSprite; 2],
    pub frame_counter: u32,
    pub growing: bool,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            sprites: [
                SpinningSprite::new(1.0, 90.0, 8.0, TransformOrder::TranslateRotateScale),
                SpinningSprite::new(0.5, 45.0, 10.0, TransformOrder::TranslateScaleRotate),
            ],
            frame_counter: 0,
            growing: true,
        }
    }
}

impl SceneState {
    pub fn update(&mut self, dt: f32) {
        self.frame_counter += 1;
        if self.frame_counter >= MAX_FRAME {
            self.growing = !self.growing;
            self.frame_counter = 0;
            log::trace!("Scene pulse now {}", if self.growing { "growing" } else { "shrinking" });
        }

        for sprite in &mut self.sprites {
            sprite.update(dt, self.growing);
        }
    }

    pub fn model_matrix(&self, index: usize) -> Mat4 {
        self.sprites[index].model_matrix()
    }
}
