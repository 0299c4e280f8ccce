//! Platformer game state
//!
//! A player, three enemies and a tile map, advanced on a fixed timestep.
//! Stomping an enemy from above defeats it; any other contact loses the
//! game, as does falling out of the playfield. Clearing every enemy wins.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ai::AiKind;
use super::entity::{Entity, Facing};
use super::map::TileMap;
use super::timestep::FixedTimestep;
use crate::consts::VIEW_HALF_HEIGHT;
use crate::outside_playfield;

/// Upward speed given to the player after a stomp
pub const STOMP_BOUNCE: f32 = 3.0;

pub const PLAYER_START: Vec2 = Vec2::ZERO;
pub const ENEMY_STARTS: [(Vec2, AiKind); 3] = [
    (Vec2::new(1.0, 0.0), AiKind::Jumper),
    (Vec2::new(2.0, 0.0), AiKind::Guard),
    (Vec2::new(3.0, 0.0), AiKind::Walker),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformerPhase {
    Playing,
    Won,
    Lost,
}

/// Something the frontend may want to react to (sound, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformerEvent {
    Jump,
    EnemyDefeated,
    PlayerCaught,
    PlayerFell,
    Won,
}

/// Player intent for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformerInput {
    /// Negative walks left, positive walks right
    pub horizontal: f32,
    pub jump: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformerState {
    pub player: Entity,
    pub enemies: [Entity; 3],
    pub map: TileMap,
    pub phase: PlatformerPhase,
    pub timestep: FixedTimestep,
    /// World x the camera is centered on
    pub camera_x: f32,
    /// Events from the last frame (cleared at the start of each frame)
    #[serde(skip)]
    pub events: Vec<PlatformerEvent>,
}

impl Default for PlatformerState {
    fn default() -> Self {
        Self::new(TileMap::level_1())
    }
}

impl PlatformerState {
    pub fn new(map: TileMap) -> Self {
        let enemies = ENEMY_STARTS.map(|(pos, kind)| Entity::enemy(pos, kind));
        Self {
            player: Entity::player(PLAYER_START),
            enemies,
            map,
            phase: PlatformerPhase::Playing,
            timestep: FixedTimestep::default(),
            camera_x: 0.0,
            events: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase != PlatformerPhase::Playing
    }

    pub fn active_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.active).count()
    }

    /// Translate this frame's input into player intent
    pub fn apply_input(&mut self, input: &PlatformerInput) {
        self.player.movement = Vec2::ZERO;

        let horizontal = input.horizontal.clamp(-1.0, 1.0);
        if horizontal != 0.0 {
            self.player.movement.x = horizontal;
            let facing = if horizontal < 0.0 {
                Facing::Left
            } else {
                Facing::Right
            };
            if let Some(animation) = self.player.animation.as_mut() {
                animation.face(facing);
            }
        }

        if input.jump && !self.player.jump_requested && self.player.request_jump() {
            log::debug!("Jump");
            self.events.push(PlatformerEvent::Jump);
        }
    }

    /// Run one fixed step
    pub fn step(&mut self, dt: f32) {
        if self.is_over() {
            return;
        }

        let map = &self.map;
        self.player.update(dt, self.player.position, map);

        for (i, enemy) in self.enemies.iter_mut().enumerate() {
            if !enemy.active {
                continue;
            }
            enemy.update(dt, self.player.position, map);

            if self.player.collides_with(enemy) {
                let stomped = self.player.velocity.y < 0.0
                    && self.player.position.y > enemy.position.y;
                if stomped {
                    enemy.deactivate();
                    self.player.velocity.y = STOMP_BOUNCE;
                    log::info!("Enemy {} defeated", i);
                    self.events.push(PlatformerEvent::EnemyDefeated);
                } else {
                    log::info!("Caught by enemy {}", i);
                    self.phase = PlatformerPhase::Lost;
                    self.events.push(PlatformerEvent::PlayerCaught);
                    return;
                }
            }

            if enemy.active && outside_playfield(enemy.position) {
                log::debug!("Enemy {} left the playfield at {:?}", i, enemy.position);
                enemy.deactivate();
            }
        }

        if self.player.position.y < -VIEW_HALF_HEIGHT {
            log::info!("Player fell out of the level");
            self.phase = PlatformerPhase::Lost;
            self.events.push(PlatformerEvent::PlayerFell);
            return;
        }

        if self.active_enemies() == 0 {
            log::info!("All enemies defeated, you win!");
            self.phase = PlatformerPhase::Won;
            self.events.push(PlatformerEvent::Won);
        }
    }

    /// Apply input, then run however many fixed steps this frame covers
    pub fn frame(&mut self, input: &PlatformerInput, frame_dt: f32) {
        self.events.clear();
        if self.is_over() {
            return;
        }

        self.apply_input(input);
        let steps = self.timestep.advance(frame_dt);
        let dt = self.timestep.step();
        for _ in 0..steps {
            self.step(dt);
            if self.is_over() {
                break;
            }
        }

        self.camera_x = self.player.position.x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIXED_TIMESTEP;

    /// Player resting on the level floor at x = 0
    fn grounded_state() -> PlatformerState {
        let mut state = PlatformerState::default();
        state.player.position = Vec2::new(0.0, -1.1);
        state.player.collisions.bottom = true;
        state
    }

    #[test]
    fn test_initial_layout() {
        let state = PlatformerState::default();
        assert_eq!(state.player.position, Vec2::ZERO);
        assert_eq!(state.active_enemies(), 3);
        let kinds: Vec<_> = state
            .enemies
            .iter()
            .map(|e| e.ai.as_ref().unwrap().kind)
            .collect();
        assert_eq!(kinds, vec![AiKind::Jumper, AiKind::Guard, AiKind::Walker]);
        assert_eq!(state.enemies[2].position, Vec2::new(3.0, 0.0));
        assert_eq!(state.phase, PlatformerPhase::Playing);
    }

    #[test]
    fn test_side_contact_loses() {
        let mut state = grounded_state();
        state.enemies[1].deactivate();
        state.enemies[2].deactivate();
        state.enemies[0].position = Vec2::new(0.5, -1.0);

        state.step(FIXED_TIMESTEP);
        assert_eq!(state.phase, PlatformerPhase::Lost);
        assert!(state.events.contains(&PlatformerEvent::PlayerCaught));
    }

    #[test]
    fn test_stomp_defeats_enemy() {
        let mut state = PlatformerState::default();
        state.enemies[0].position = Vec2::new(1.0, -1.0);
        state.player.position = Vec2::new(1.0, -0.15);
        state.player.velocity.y = -2.0;

        state.step(FIXED_TIMESTEP);
        assert!(!state.enemies[0].active);
        assert_eq!(state.player.velocity.y, STOMP_BOUNCE);
        assert!(state.events.contains(&PlatformerEvent::EnemyDefeated));
        assert_eq!(state.phase, PlatformerPhase::Playing);
    }

    #[test]
    fn test_last_stomp_wins() {
        let mut state = PlatformerState::default();
        state.enemies[1].deactivate();
        state.enemies[2].deactivate();
        state.enemies[0].position = Vec2::new(1.0, -1.0);
        state.player.position = Vec2::new(1.0, -0.15);
        state.player.velocity.y = -2.0;

        state.step(FIXED_TIMESTEP);
        assert_eq!(state.phase, PlatformerPhase::Won);
        assert!(state.events.contains(&PlatformerEvent::Won));
    }

    #[test]
    fn test_falling_below_playfield_loses() {
        let mut state = PlatformerState::default();
        // Columns 4 and 5 are a pit with no floor
        state.player.position = Vec2::new(4.5, -3.7);
        state.player.velocity.y = -5.0;

        state.step(FIXED_TIMESTEP);
        assert_eq!(state.phase, PlatformerPhase::Lost);
        assert!(state.events.contains(&PlatformerEvent::PlayerFell));
    }

    #[test]
    fn test_enemy_leaving_playfield_is_removed() {
        let mut state = PlatformerState::default();
        state.enemies[2].position = Vec2::new(-4.995, 0.0);

        state.step(FIXED_TIMESTEP);
        assert!(!state.enemies[2].active);
        assert_eq!(state.phase, PlatformerPhase::Playing);
    }

    #[test]
    fn test_jump_input_needs_ground() {
        let mut state = PlatformerState::default();
        state.apply_input(&PlatformerInput {
            horizontal: 0.0,
            jump: true,
        });
        assert!(!state.player.jump_requested);
        assert!(state.events.is_empty());

        let mut state = grounded_state();
        state.apply_input(&PlatformerInput {
            horizontal: 0.0,
            jump: true,
        });
        assert!(state.player.jump_requested);
        assert_eq!(state.events, vec![PlatformerEvent::Jump]);
    }

    #[test]
    fn test_frame_moves_player_and_camera() {
        let mut state = PlatformerState::default();
        state.frame(
            &PlatformerInput {
                horizontal: -1.0,
                jump: false,
            },
            0.1,
        );
        assert!(state.player.position.x < 0.0);
        assert_eq!(state.camera_x, state.player.position.x);
        let facing = state.player.animation.as_ref().unwrap().facing;
        assert_eq!(facing, Facing::Left);
    }

    #[test]
    fn test_movement_resets_each_frame() {
        let mut state = PlatformerState::default();
        state.apply_input(&PlatformerInput {
            horizontal: 1.0,
            jump: false,
        });
        assert_eq!(state.player.movement.x, 1.0);
        state.apply_input(&PlatformerInput::default());
        assert_eq!(state.player.movement, Vec2::ZERO);
    }

    #[test]
    fn test_finished_game_is_frozen() {
        let mut state = PlatformerState::default();
        state.phase = PlatformerPhase::Lost;
        let before = state.player.position;
        state.frame(
            &PlatformerInput {
                horizontal: 1.0,
                jump: true,
            },
            0.1,
        );
        assert_eq!(state.player.position, before);
        assert!(state.events.is_empty());
    }
}
