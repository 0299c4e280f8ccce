//! Enemy AI
//!
//! Each enemy carries an [`Ai`] with a fixed [`AiKind`] and a small state
//! machine. `think` runs once per fixed step before physics and returns the
//! movement intent for that step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Guard starts chasing when the player is closer than this
pub const GUARD_WAKE_DISTANCE: f32 = 3.0;
/// Guard gives up when the player is farther than this
pub const GUARD_GIVE_UP_DISTANCE: f32 = 5.0;
/// Seconds a jumper rests on the ground between jumps
pub const JUMPER_COOLDOWN: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiKind {
    /// Walks left forever
    Walker,
    /// Waits until the player comes near, then chases horizontally
    Guard,
    /// Stays put and hops on a timer
    Jumper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    Idle,
    Walking,
    Attacking,
}

/// What the AI wants its entity to do this step
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AiCommand {
    pub movement: Vec2,
    pub jump: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ai {
    pub kind: AiKind,
    pub state: AiState,
    /// Jumper: time left before the next jump
    pub cooldown: f32,
}

impl Ai {
    pub fn new(kind: AiKind) -> Self {
        Self {
            kind,
            state: AiState::Idle,
            cooldown: JUMPER_COOLDOWN,
        }
    }

    /// Pick this step's command
    ///
    /// `grounded` is the entity's bottom contact from its previous update.
    pub fn think(&mut self, dt: f32, me: Vec2, player: Vec2, grounded: bool) -> AiCommand {
        let before = self.state;
        let command = match self.kind {
            AiKind::Walker => self.walk(),
            AiKind::Guard => self.guard(me, player),
            AiKind::Jumper => self.jump(dt, grounded),
        };
        if self.state != before {
            log::debug!("{:?} AI: {:?} -> {:?}", self.kind, before, self.state);
        }
        command
    }

    fn walk(&mut self) -> AiCommand {
        self.state = AiState::Walking;
        AiCommand {
            movement: Vec2::new(-1.0, 0.0),
            jump: false,
        }
    }

    fn guard(&mut self, me: Vec2, player: Vec2) -> AiCommand {
        let distance = me.distance(player);
        match self.state {
            AiState::Idle => {
                if distance < GUARD_WAKE_DISTANCE {
                    self.state = AiState::Walking;
                }
            }
            AiState::Walking | AiState::Attacking => {
                if distance > GUARD_GIVE_UP_DISTANCE {
                    self.state = AiState::Idle;
                }
            }
        }

        if self.state == AiState::Idle {
            return AiCommand::default();
        }
        let dir = if me.x > player.x { -1.0 } else { 1.0 };
        AiCommand {
            movement: Vec2::new(dir, 0.0),
            jump: false,
        }
    }

    fn jump(&mut self, dt: f32, grounded: bool) -> AiCommand {
        if !grounded {
            return AiCommand::default();
        }

        if self.state == AiState::Attacking {
            // Just landed
            self.state = AiState::Idle;
            self.cooldown = JUMPER_COOLDOWN;
        }

        self.cooldown -= dt;
        if self.cooldown <= 0.0 {
            self.state = AiState::Attacking;
            return AiCommand {
                movement: Vec2::ZERO,
                jump: true,
            };
        }
        AiCommand::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walker_always_walks_left() {
        let mut ai = Ai::new(AiKind::Walker);
        for player_x in [-10.0, 0.0, 10.0] {
            let cmd = ai.think(0.016, Vec2::ZERO, Vec2::new(player_x, 0.0), true);
            assert_eq!(cmd.movement, Vec2::new(-1.0, 0.0));
            assert!(!cmd.jump);
        }
        assert_eq!(ai.state, AiState::Walking);
    }

    #[test]
    fn test_guard_idle_when_far() {
        let mut ai = Ai::new(AiKind::Guard);
        let cmd = ai.think(0.016, Vec2::ZERO, Vec2::new(4.0, 0.0), true);
        assert_eq!(cmd.movement, Vec2::ZERO);
        assert_eq!(ai.state, AiState::Idle);
    }

    #[test]
    fn test_guard_chases_when_near() {
        let mut ai = Ai::new(AiKind::Guard);
        let cmd = ai.think(0.016, Vec2::new(2.0, 0.0), Vec2::new(0.0, 0.0), true);
        assert_eq!(ai.state, AiState::Walking);
        assert_eq!(cmd.movement, Vec2::new(-1.0, 0.0));

        let cmd = ai.think(0.016, Vec2::new(2.0, 0.0), Vec2::new(3.0, 0.0), true);
        assert_eq!(cmd.movement, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_guard_gives_up() {
        let mut ai = Ai::new(AiKind::Guard);
        ai.think(0.016, Vec2::ZERO, Vec2::new(1.0, 0.0), true);
        assert_eq!(ai.state, AiState::Walking);
        // Between wake and give-up range it keeps chasing
        ai.think(0.016, Vec2::ZERO, Vec2::new(4.0, 0.0), true);
        assert_eq!(ai.state, AiState::Walking);
        let cmd = ai.think(0.016, Vec2::ZERO, Vec2::new(6.0, 0.0), true);
        assert_eq!(ai.state, AiState::Idle);
        assert_eq!(cmd.movement, Vec2::ZERO);
    }

    #[test]
    fn test_jumper_waits_for_cooldown() {
        let mut ai = Ai::new(AiKind::Jumper);
        let cmd = ai.think(0.5, Vec2::ZERO, Vec2::ZERO, true);
        assert!(!cmd.jump);
        let cmd = ai.think(0.5, Vec2::ZERO, Vec2::ZERO, true);
        assert!(cmd.jump);
        assert_eq!(ai.state, AiState::Attacking);
        assert_eq!(cmd.movement, Vec2::ZERO);
    }

    #[test]
    fn test_jumper_resets_on_landing() {
        let mut ai = Ai::new(AiKind::Jumper);
        ai.think(1.0, Vec2::ZERO, Vec2::ZERO, true);
        assert_eq!(ai.state, AiState::Attacking);

        // Airborne: nothing happens
        assert!(!ai.think(0.5, Vec2::ZERO, Vec2::ZERO, false).jump);
        assert_eq!(ai.state, AiState::Attacking);

        // Landed: back to idle with a fresh cooldown
        assert!(!ai.think(0.1, Vec2::ZERO, Vec2::ZERO, true).jump);
        assert_eq!(ai.state, AiState::Idle);
        assert!(ai.cooldown > 0.0);
    }

    #[test]
    fn test_jumper_never_jumps_in_air() {
        let mut ai = Ai::new(AiKind::Jumper);
        for _ in 0..100 {
            assert!(!ai.think(0.1, Vec2::ZERO, Vec2::ZERO, false).jump);
        }
    }
}
