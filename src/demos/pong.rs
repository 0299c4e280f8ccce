//! Pong Clone
//!
//! Arrow keys drive the left paddle, WASD the right one. The program ends
//! when the match is decided.

use glam::{Mat4, Vec2};

use super::rgba8;
use crate::assets;
use crate::error::AppError;
use crate::platform::input::KeyCode;
use crate::platform::{Demo, Flow, KeyInput};
use crate::renderer::{DrawList, RenderState, TextureId, UvRect, colors};
use crate::settings::PongSettings;
use crate::sim::pong::{BALL_SIZE, PADDLE_SIZE, tick};
use crate::sim::{PongEvent, PongInput, PongState};

pub struct PongDemo {
    pub state: PongState,
    ball_texture: TextureId,
}

impl PongDemo {
    pub fn new(settings: &PongSettings) -> Self {
        Self {
            state: PongState::new(settings.points_to_win, settings.seed),
            ball_texture: TextureId::WHITE,
        }
    }
}

/// Map held keys to paddle intents
pub fn pong_input(keys: &KeyInput) -> PongInput {
    PongInput {
        left: Vec2::new(
            keys.axis(KeyCode::ArrowLeft, KeyCode::ArrowRight),
            keys.axis(KeyCode::ArrowDown, KeyCode::ArrowUp),
        ),
        right: Vec2::new(
            keys.axis(KeyCode::KeyA, KeyCode::KeyD),
            keys.axis(KeyCode::KeyS, KeyCode::KeyW),
        ),
    }
}

impl Demo for PongDemo {
    fn title(&self) -> &str {
        "Pong Clone"
    }

    fn window_size(&self) -> (u32, u32) {
        (1280, 960)
    }

    fn load(&mut self, renderer: &mut RenderState) -> Result<(), AppError> {
        let ball = assets::disc(16, rgba8(colors::WHITE));
        self.ball_texture = renderer.create_texture("ball", &ball);
        Ok(())
    }

    fn update(&mut self, input: &KeyInput, dt: f32) -> Flow {
        tick(&mut self.state, &pong_input(input), dt);

        for event in &self.state.events {
            match event {
                PongEvent::PaddleHit(side) => log::debug!("sound: paddle hit ({:?})", side),
                PongEvent::WallBounce => log::debug!("sound: wall bounce"),
                PongEvent::PointScored { .. } | PongEvent::MatchWon { .. } => {}
            }
        }

        if self.state.is_over() {
            Flow::Exit
        } else {
            Flow::Continue
        }
    }

    fn draw(&self, list: &mut DrawList) {
        list.rect(self.state.left.pos, PADDLE_SIZE, colors::PADDLE);
        list.rect(self.state.right.pos, PADDLE_SIZE, colors::PADDLE);

        let ball = Mat4::from_translation(self.state.ball.pos.extend(0.0))
            * Mat4::from_scale(BALL_SIZE.extend(1.0));
        list.quad(self.ball_texture, ball, UvRect::FULL, colors::BALL);
    }
}
