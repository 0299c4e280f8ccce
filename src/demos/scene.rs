//! Hello, Delta Time!
//!
//! Two textured sprites drift across the screen, spinning and pulsing.

use super::rgba8;
use crate::assets;
use crate::error::AppError;
use crate::platform::{Demo, Flow, KeyInput};
use crate::renderer::{DrawList, RenderState, TextureId, colors};
use crate::settings::SceneSettings;
use crate::sim::SceneState;

pub struct SceneDemo {
    pub state: SceneState,
    settings: SceneSettings,
    textures: [TextureId; 2],
}

impl SceneDemo {
    pub fn new(settings: SceneSettings) -> Self {
        Self {
            state: SceneState::default(),
            settings,
            textures: [TextureId::WHITE; 2],
        }
    }
}

impl Demo for SceneDemo {
    fn title(&self) -> &str {
        "Hello, Delta Time!"
    }

    fn window_size(&self) -> (u32, u32) {
        (960, 720)
    }

    fn load(&mut self, renderer: &mut RenderState) -> Result<(), AppError> {
        let first = assets::load_or(self.settings.first_sprite.as_deref(), || {
            assets::sprite_sheet(1, 1, rgba8(colors::BALL))
        })?;
        let second = assets::load_or(self.settings.second_sprite.as_deref(), || {
            assets::sprite_sheet(1, 1, rgba8(colors::ENEMY))
        })?;
        self.textures = [
            renderer.create_texture("first_sprite", &first),
            renderer.create_texture("second_sprite", &second),
        ];
        Ok(())
    }

    fn update(&mut self, _input: &KeyInput, dt: f32) -> Flow {
        self.state.update(dt);
        Flow::Continue
    }

    fn draw(&self, list: &mut DrawList) {
        for (i, texture) in self.textures.iter().enumerate() {
            list.sprite(*texture, self.state.model_matrix(i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_advances_scene() {
        let mut demo = SceneDemo::new(SceneSettings::default());
        assert_eq!(demo.update(&KeyInput::new(), 0.5), Flow::Continue);
        assert!((demo.state.sprites[0].x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_draws_both_sprites() {
        let demo = SceneDemo::new(SceneSettings::default());
        let mut list = DrawList::new();
        demo.draw(&mut list);
        assert_eq!(list.vertex_count(), 12);
    }
}
