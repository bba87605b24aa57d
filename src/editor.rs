//! Edit page controller.
//!
//! Bound to [`View::Editor`]. Loading the page yields a sample game with one
//! scene until games are fetched from the backend.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use model::{Game, GameConfig, ModelError, Scene, SceneConfig};

use crate::routes::View;

pub const SAMPLE_GAME_ID: &str = "0001";
pub const SAMPLE_GAME_NAME: &str = "Sample Game";
pub const SAMPLE_SCENE_ID: &str = "---1";
pub const SAMPLE_SCENE_NAME: &str = "First Room";

/// State behind the editor view.
#[derive(Debug, Clone, PartialEq)]
pub struct EditPage {
    pub game: Game,
}

impl EditPage {
    #[must_use]
    pub fn load() -> Self {
        let mut game = Game::new(GameConfig { id: SAMPLE_GAME_ID.to_owned(), name: SAMPLE_GAME_NAME.to_owned() });
        game.add_scene(Scene::new(SceneConfig { id: SAMPLE_SCENE_ID.to_owned(), name: SAMPLE_SCENE_NAME.to_owned() }));
        Self { game }
    }

    /// Controller for a routed view.
    #[must_use]
    pub fn for_view(view: View) -> Self {
        match view {
            View::Editor => Self::load(),
        }
    }

    /// Add a new empty scene with a fresh id and return it.
    pub fn add_scene(&mut self, name: &str) -> &Scene {
        let id = model::new_id();
        self.game.add_scene(Scene::new(SceneConfig { id, name: name.to_owned() }))
    }

    /// Mark a scene as the game's starting point.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownScene`] if the game has no such scene.
    pub fn set_first_scene(&mut self, id: &str) -> Result<(), ModelError> {
        self.game.set_first_scene(id)
    }
}
