//! Pong: two square paddles and a ball
//!
//! Runs on a variable timestep. Both paddles can move in both axes; the ball
//! bounces off the top and bottom walls and off either paddle, and a goal is
//! scored when it reaches the left or right edge.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::aabb::boxes_overlap;
use super::rng::RngState;
use crate::consts::{VIEW_HALF_HEIGHT, VIEW_HALF_WIDTH};
use crate::limit_to_unit;

/// Paddles are 1x1 squares
pub const PADDLE_SIZE: Vec2 = Vec2::new(1.0, 1.0);
/// Ball is a 0.2x0.2 square
pub const BALL_SIZE: Vec2 = Vec2::new(0.2, 0.2);
/// Paddle speed in units per second
pub const PADDLE_SPEED: f32 = 2.0;
/// Multiplier applied to the ball direction
pub const BALL_SPEED: f32 = 0.5;
/// Initial ball direction (deliberately not normalized)
pub const BALL_START_DIRECTION: Vec2 = Vec2::new(0.5, 1.0);
pub const LEFT_PADDLE_START: Vec2 = Vec2::new(-2.0, 0.0);
pub const RIGHT_PADDLE_START: Vec2 = Vec2::new(2.0, 0.0);

/// Which paddle (player 1 is left, player 2 is right)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// 1-based player number used in messages
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PongPhase {
    Playing,
    MatchOver { winner: Side },
}

/// Something the frontend may want to react to (sound, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PongEvent {
    PaddleHit(Side),
    WallBounce,
    PointScored { scorer: Side },
    MatchWon { winner: Side },
}

/// Movement intents for a single tick, each component in [-1, 1]
#[derive(Debug, Clone, Copy, Default)]
pub struct PongInput {
    pub left: Vec2,
    pub right: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    /// Unit-limited movement applied this tick
    pub movement: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            movement: Vec2::ZERO,
        }
    }

    /// Keep the whole paddle inside the playfield
    fn clamp_to_playfield(&mut self) {
        let limit = Vec2::new(VIEW_HALF_WIDTH, VIEW_HALF_HEIGHT) - PADDLE_SIZE * 0.5;
        self.pos = self.pos.clamp(-limit, limit);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongBall {
    pub pos: Vec2,
    pub direction: Vec2,
}

impl PongBall {
    pub fn velocity(&self) -> Vec2 {
        self.direction * BALL_SPEED
    }
}

/// Complete Pong state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: PongBall,
    /// Points for [left, right]
    pub score: [u32; 2],
    pub points_to_win: u32,
    pub phase: PongPhase,
    pub rng_state: RngState,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<PongEvent>,
}

impl PongState {
    pub fn new(points_to_win: u32, seed: u64) -> Self {
        Self {
            left: Paddle::new(LEFT_PADDLE_START),
            right: Paddle::new(RIGHT_PADDLE_START),
            ball: PongBall {
                pos: Vec2::ZERO,
                direction: BALL_START_DIRECTION,
            },
            score: [0, 0],
            points_to_win: points_to_win.max(1),
            phase: PongPhase::Playing,
            rng_state: RngState::new(seed),
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn score_of(&self, side: Side) -> u32 {
        self.score[side.index()]
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, PongPhase::MatchOver { .. })
    }

    /// Put the ball back in the middle, heading toward `toward`
    fn serve(&mut self, toward: Side) {
        let mut rng = self.rng_state.next_rng();
        let x = match toward {
            Side::Left => -BALL_START_DIRECTION.x,
            Side::Right => BALL_START_DIRECTION.x,
        };
        let y = if rng.random_bool(0.5) {
            BALL_START_DIRECTION.y
        } else {
            -BALL_START_DIRECTION.y
        };
        self.ball.pos = Vec2::ZERO;
        self.ball.direction = Vec2::new(x, y);
    }

    fn award_point(&mut self, scorer: Side) {
        self.score[scorer.index()] += 1;
        self.events.push(PongEvent::PointScored { scorer });
        log::info!(
            "Player {} scores ({} - {})",
            scorer.player_number(),
            self.score[0],
            self.score[1]
        );

        if self.score_of(scorer) >= self.points_to_win {
            self.phase = PongPhase::MatchOver { winner: scorer };
            self.events.push(PongEvent::MatchWon { winner: scorer });
            log::info!("Player {} Wins!", scorer.player_number());
        } else {
            self.serve(scorer.opponent());
        }
    }
}

/// Advance the match by `dt` seconds
pub fn tick(state: &mut PongState, input: &PongInput, dt: f32) {
    state.events.clear();
    if state.is_over() {
        return;
    }

    state.left.movement = limit_to_unit(input.left);
    state.right.movement = limit_to_unit(input.right);

    let half_ball = BALL_SIZE * 0.5;
    let future = state.ball.pos + state.ball.velocity() * dt;

    // Top/bottom walls, only when heading into them so the ball can't stick
    let dir = state.ball.direction;
    if (future.y >= VIEW_HALF_HEIGHT - half_ball.y && dir.y > 0.0)
        || (future.y <= -VIEW_HALF_HEIGHT + half_ball.y && dir.y < 0.0)
    {
        state.ball.direction.y = -dir.y;
        state.events.push(PongEvent::WallBounce);
    }

    // Goals
    if future.x >= VIEW_HALF_WIDTH - half_ball.x {
        state.award_point(Side::Left);
        return;
    } else if future.x <= -VIEW_HALF_WIDTH + half_ball.x {
        state.award_point(Side::Right);
        return;
    }

    // Paddles: flip at most once per tick
    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle(side);
        let approaching = (paddle.pos.x - state.ball.pos.x) * state.ball.direction.x > 0.0;
        if approaching && boxes_overlap(future, BALL_SIZE, paddle.pos, PADDLE_SIZE) {
            state.ball.direction.x = -state.ball.direction.x;
            state.events.push(PongEvent::PaddleHit(side));
            log::debug!("Ball hit paddle {}", side.player_number());
            break;
        }
    }

    for paddle in [&mut state.left, &mut state.right] {
        paddle.pos += paddle.movement * PADDLE_SPEED * dt;
        paddle.clamp_to_playfield();
    }

    state.ball.pos += state.ball.velocity() * dt;
}
