//! Platformer entities: physics, tile-map collision and sprite animation
//!
//! One `Entity` type covers the player and every enemy. Each fixed step it
//! integrates velocity, then resolves against the map one axis at a time:
//! vertical first (so landing wins over wall contact), horizontal second.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::ai::{Ai, AiKind};
use super::map::TileMap;

/// Seconds each walk-cycle frame stays on screen
pub const FRAME_DURATION: f32 = 0.25;
/// Downward acceleration shared by everyone
pub const GRAVITY: Vec2 = Vec2::new(0.0, -9.81);

pub const PLAYER_SPEED: f32 = 2.5;
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 0.8);
pub const PLAYER_JUMP_POWER: f32 = 5.0;
pub const ENEMY_SPEED: f32 = 1.0;
pub const ENEMY_SIZE: Vec2 = Vec2::new(1.0, 1.0);
pub const ENEMY_JUMP_POWER: f32 = 4.0;
/// Corner sample points sit this far inside the box edge, so a wall the
/// entity is pressed against never counts as floor or ceiling
const CORNER_INSET: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
}

/// Walk-cycle direction, also the row set used from the sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
    Up,
    Down,
}

impl Facing {
    fn index(self) -> usize {
        match self {
            Facing::Left => 0,
            Facing::Right => 1,
            Facing::Up => 2,
            Facing::Down => 3,
        }
    }
}

/// Which sides touched the map during the last update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollisionFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

/// Sprite-sheet walk cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animation {
    pub cols: u32,
    pub rows: u32,
    /// Frame indices for each facing, in `Facing` order
    pub walking: [Vec<u32>; 4],
    pub facing: Facing,
    pub frame: usize,
    pub timer: f32,
}

impl Animation {
    /// Four-direction walk cycle on a 4x4 sheet, one column per frame
    pub fn four_way_walk() -> Self {
        Self {
            cols: 4,
            rows: 4,
            walking: [
                vec![1, 5, 9, 13],
                vec![3, 7, 11, 15],
                vec![2, 6, 10, 14],
                vec![0, 4, 8, 12],
            ],
            facing: Facing::Right,
            frame: 0,
            timer: 0.0,
        }
    }

    pub fn frames(&self) -> &[u32] {
        &self.walking[self.facing.index()]
    }

    /// Sheet cell to draw right now
    pub fn current_index(&self) -> u32 {
        let frames = self.frames();
        if frames.is_empty() {
            return 0;
        }
        frames[self.frame % frames.len()]
    }

    pub fn face(&mut self, facing: Facing) {
        self.facing = facing;
    }

    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
        if self.timer >= FRAME_DURATION {
            self.timer = 0.0;
            self.frame += 1;
            if self.frame >= self.frames().len() {
                self.frame = 0;
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub active: bool,
    pub position: Vec2,
    /// Movement intent, x in [-1, 1]
    pub movement: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub speed: f32,
    pub size: Vec2,
    pub jump_power: f32,
    /// Set by input/AI, consumed by the next update
    pub jump_requested: bool,
    pub collisions: CollisionFlags,
    pub ai: Option<Ai>,
    pub animation: Option<Animation>,
}

impl Entity {
    pub fn player(position: Vec2) -> Self {
        Self {
            kind: EntityKind::Player,
            active: true,
            position,
            movement: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: GRAVITY,
            speed: PLAYER_SPEED,
            size: PLAYER_SIZE,
            jump_power: PLAYER_JUMP_POWER,
            jump_requested: false,
            collisions: CollisionFlags::default(),
            ai: None,
            animation: Some(Animation::four_way_walk()),
        }
    }

    pub fn enemy(position: Vec2, kind: AiKind) -> Self {
        Self {
            kind: EntityKind::Enemy,
            active: true,
            position,
            movement: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: GRAVITY,
            speed: ENEMY_SPEED,
            size: ENEMY_SIZE,
            jump_power: ENEMY_JUMP_POWER,
            jump_requested: false,
            collisions: CollisionFlags::default(),
            ai: Some(Ai::new(kind)),
            animation: None,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Both entities are active and their boxes overlap
    pub fn collides_with(&self, other: &Entity) -> bool {
        self.active && other.active && self.aabb().overlaps(&other.aabb())
    }

    /// Latch a jump if standing on something; returns whether it latched
    pub fn request_jump(&mut self) -> bool {
        if self.collisions.bottom {
            self.jump_requested = true;
        }
        self.jump_requested
    }

    /// Advance one fixed step
    ///
    /// `player_pos` feeds enemy AI; the player passes its own position.
    pub fn update(&mut self, dt: f32, player_pos: Vec2, map: &TileMap) {
        if !self.active {
            return;
        }

        let grounded = self.collisions.bottom;
        if let Some(ai) = self.ai.as_mut() {
            let command = ai.think(dt, self.position, player_pos, grounded);
            self.movement = command.movement;
            if command.jump {
                self.jump_requested = true;
            }
        }

        self.collisions = CollisionFlags::default();

        if let Some(animation) = self.animation.as_mut() {
            if self.movement.length() != 0.0 {
                animation.advance(dt);
            }
        }

        self.velocity.x = self.movement.x * self.speed;
        self.velocity += self.acceleration * dt;
        if self.jump_requested {
            self.jump_requested = false;
            self.velocity.y += self.jump_power;
        }

        self.position.y += self.velocity.y * dt;
        self.resolve_vertical(map);

        self.position.x += self.velocity.x * dt;
        self.resolve_horizontal(map);
    }

    fn resolve_vertical(&mut self, map: &TileMap) {
        let half = self.size * 0.5;
        let corner = (half.x - CORNER_INSET).max(0.0);

        if self.velocity.y > 0.0 {
            let points = [
                Vec2::new(0.0, half.y),
                Vec2::new(-corner, half.y),
                Vec2::new(corner, half.y),
            ];
            if let Some(pen) = points.iter().find_map(|p| map.is_solid(self.position + *p)) {
                self.position.y -= pen.y;
                self.velocity.y = 0.0;
                self.collisions.top = true;
            }
        } else if self.velocity.y < 0.0 {
            let points = [
                Vec2::new(0.0, -half.y),
                Vec2::new(-corner, -half.y),
                Vec2::new(corner, -half.y),
            ];
            if let Some(pen) = points.iter().find_map(|p| map.is_solid(self.position + *p)) {
                self.position.y += pen.y;
                self.velocity.y = 0.0;
                self.collisions.bottom = true;
            }
        }
    }

    fn resolve_horizontal(&mut self, map: &TileMap) {
        let half = self.size * 0.5;

        if self.velocity.x < 0.0 {
            if let Some(pen) = map.is_solid(self.position - Vec2::new(half.x, 0.0)) {
                self.position.x += pen.x;
                self.velocity.x = 0.0;
                self.collisions.left = true;
            }
        } else if self.velocity.x > 0.0 {
            if let Some(pen) = map.is_solid(self.position + Vec2::new(half.x, 0.0)) {
                self.position.x -= pen.x;
                self.velocity.x = 0.0;
                self.collisions.right = true;
            }
        }
    }
}
