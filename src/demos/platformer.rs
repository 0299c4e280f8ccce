//! Hello, Maps!
//!
//! Left/right walk, Space jumps. The camera follows the player along x.
//! After a win or loss the scene stays up with a banner until the window
//! is closed.

use glam::{Mat4, Vec2, Vec3};

use super::rgba8;
use crate::assets;
use crate::error::AppError;
use crate::platform::input::KeyCode;
use crate::platform::{Demo, Flow, KeyInput};
use crate::playfield_projection;
use crate::renderer::{DrawList, RenderState, TextureId, colors};
use crate::settings::PlatformerSettings;
use crate::sim::{Entity, PlatformerEvent, PlatformerInput, PlatformerPhase, PlatformerState};

pub const WIN_TEXT: &str = "You win";
pub const LOSE_TEXT: &str = "You Lose";
const TEXT_SIZE: f32 = 0.5;
const TEXT_SPACING: f32 = 0.05;

#[derive(Debug, Default)]
struct Textures {
    player: TextureId,
    enemy: TextureId,
    tileset: TextureId,
    font: Option<TextureId>,
}

pub struct PlatformerDemo {
    pub state: PlatformerState,
    settings: PlatformerSettings,
    textures: Textures,
}

impl PlatformerDemo {
    pub fn new(settings: PlatformerSettings) -> Self {
        Self {
            state: PlatformerState::default(),
            settings,
            textures: Textures::default(),
        }
    }

    fn draw_entity(list: &mut DrawList, entity: &Entity, texture: TextureId) {
        if !entity.active {
            return;
        }
        let model = Mat4::from_translation(entity.position.extend(0.0))
            * Mat4::from_scale(entity.size.extend(1.0));
        match &entity.animation {
            Some(anim) => {
                list.atlas_sprite(texture, model, anim.current_index(), anim.cols, anim.rows)
            }
            None => list.sprite(texture, model),
        }
    }

    fn draw_banner(&self, list: &mut DrawList) {
        let (text, color) = match self.state.phase {
            PlatformerPhase::Playing => return,
            PlatformerPhase::Won => (WIN_TEXT, colors::WIN_BANNER),
            PlatformerPhase::Lost => (LOSE_TEXT, colors::LOSE_BANNER),
        };
        let camera_x = self.state.camera_x;
        match self.textures.font {
            Some(font) => {
                list.text(
                    font,
                    text,
                    TEXT_SIZE,
                    TEXT_SPACING,
                    Vec2::new(camera_x - 1.0, 0.0),
                );
            }
            None => list.rect(Vec2::new(camera_x, 0.0), Vec2::new(4.0, 1.0), color),
        }
    }
}

/// Map held keys to player intent
pub fn platformer_input(keys: &KeyInput) -> PlatformerInput {
    PlatformerInput {
        horizontal: keys.axis(KeyCode::ArrowLeft, KeyCode::ArrowRight),
        jump: keys.just_pressed(KeyCode::Space),
    }
}

impl Demo for PlatformerDemo {
    fn title(&self) -> &str {
        "Hello, Maps!"
    }

    fn window_size(&self) -> (u32, u32) {
        (640, 480)
    }

    fn load(&mut self, renderer: &mut RenderState) -> Result<(), AppError> {
        let settings = &self.settings;

        let player = assets::load_or(settings.player_sheet.as_deref(), || {
            assets::sprite_sheet(4, 4, [60, 120, 220, 255])
        })?;
        let enemy = assets::load_or(settings.enemy_sprite.as_deref(), || {
            assets::sprite_sheet(1, 1, rgba8(colors::ENEMY))
        })?;
        let map = &self.state.map;
        let tileset = assets::load_or(settings.tileset.as_deref(), || {
            assets::tileset(map.atlas_cols)
        })?;

        self.textures.player = renderer.create_texture("player", &player);
        self.textures.enemy = renderer.create_texture("enemy", &enemy);
        self.textures.tileset = renderer.create_texture("tileset", &tileset);
        self.textures.font = match settings.font.as_deref() {
            Some(path) => Some(renderer.create_texture("font", &assets::load_rgba(path)?)),
            None => {
                log::info!("No font configured, outcome is shown as a plain banner");
                None
            }
        };
        Ok(())
    }

    fn update(&mut self, input: &KeyInput, dt: f32) -> Flow {
        let was_over = self.state.is_over();
        self.state.frame(&platformer_input(input), dt);

        for event in &self.state.events {
            match event {
                PlatformerEvent::Jump => log::debug!("sound: jump"),
                PlatformerEvent::EnemyDefeated => log::debug!("sound: stomp"),
                _ => {}
            }
        }
        if !was_over && self.state.is_over() {
            let text = match self.state.phase {
                PlatformerPhase::Won => WIN_TEXT,
                _ => LOSE_TEXT,
            };
            log::info!("{}", text);
        }

        Flow::Continue
    }

    fn view_proj(&self) -> Mat4 {
        playfield_projection() * Mat4::from_translation(Vec3::new(-self.state.camera_x, 0.0, 0.0))
    }

    fn draw(&self, list: &mut DrawList) {
        Self::draw_entity(list, &self.state.player, self.textures.player);

        let map = &self.state.map;
        let tile_scale = Mat4::from_scale(Vec3::new(map.tile_size(), map.tile_size(), 1.0));
        for (center, tile) in map.solid_tiles() {
            let model = Mat4::from_translation(center.extend(0.0)) * tile_scale;
            list.atlas_sprite(self.textures.tileset, model, tile, map.atlas_cols, map.atlas_rows);
        }

        for enemy in &self.state.enemies {
            Self::draw_entity(list, enemy, self.textures.enemy);
        }

        self.draw_banner(list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_mapping() {
        let mut keys = KeyInput::new();
        keys.press(KeyCode::ArrowLeft);
        keys.press(KeyCode::Space);
        let input = platformer_input(&keys);
        assert_eq!(input.horizontal, -1.0);
        assert!(input.jump);

        keys.end_frame();
        assert!(!platformer_input(&keys).jump);
    }

    #[test]
    fn test_camera_follows_player() {
        let mut demo = PlatformerDemo::new(PlatformerSettings::default());
        demo.state.camera_x = 3.0;
        let p = demo.view_proj().project_point3(Vec3::new(3.0, 0.0, 0.0));
        assert!(p.x.abs() < 1e-5);
    }

    #[test]
    fn test_draw_counts() {
        let demo = PlatformerDemo::new(PlatformerSettings::default());
        let mut list = DrawList::new();
        demo.draw(&mut list);
        let tiles = demo.state.map.solid_tiles().count();
        // Player, tiles, three enemies; no banner while playing
        assert_eq!(list.vertex_count(), (1 + tiles + 3) * 6);
    }

    #[test]
    fn test_banner_after_loss() {
        let mut demo = PlatformerDemo::new(PlatformerSettings::default());
        demo.state.phase = PlatformerPhase::Lost;
        let mut list = DrawList::new();
        demo.draw(&mut list);
        let tiles = demo.state.map.solid_tiles().count();
        assert_eq!(list.vertex_count(), (1 + tiles + 3 + 1) * 6);
    }
}
