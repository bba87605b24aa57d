//! Root authored artifact: scenes in authoring order plus a global item pool.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::record::Record;
use crate::{Item, ModelError, Scene};

/// Required fields for constructing a [`Game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub id: String,
    pub name: String,
}

/// One escape-room game.
///
/// Fields are private: `scenes` only grows through [`Game::add_scene`] and
/// [`Game::add_scene_value`], and `first_scene` only ever names an owned scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGame")]
pub struct Game {
    id: String,
    name: String,
    #[serde(default)]
    scenes: Vec<Scene>,
    #[serde(default)]
    first_scene: Option<String>,
    #[serde(default)]
    items: Vec<Item>,
}

/// Wire shape of a [`Game`] before the first-scene reference is checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGame {
    id: String,
    name: String,
    #[serde(default)]
    scenes: Vec<Scene>,
    #[serde(default)]
    first_scene: Option<String>,
    #[serde(default)]
    items: Vec<Item>,
}

impl TryFrom<RawGame> for Game {
    type Error = ModelError;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        if let Some(id) = raw.first_scene.as_deref() {
            if !raw.scenes.iter().any(|scene| scene.id == id) {
                return Err(ModelError::UnknownScene(id.to_owned()));
            }
        }
        Ok(Self { id: raw.id, name: raw.name, scenes: raw.scenes, first_scene: raw.first_scene, items: raw.items })
    }
}

impl Game {
    /// Create an empty game: no scenes, no items, no first scene.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { id: config.id, name: config.name, scenes: Vec::new(), first_scene: None, items: Vec::new() }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scenes in the order they were added.
    #[must_use]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn first_scene_id(&self) -> Option<&str> {
        self.first_scene.as_deref()
    }

    /// The entry-point scene, if one has been chosen.
    #[must_use]
    pub fn first_scene(&self) -> Option<&Scene> {
        self.first_scene.as_deref().and_then(|id| self.scene(id))
    }

    /// Look up an owned scene by id.
    #[must_use]
    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|scene| scene.id == id)
    }

    /// Append a scene and return it. The type system already guarantees it is a scene.
    pub fn add_scene(&mut self, scene: Scene) -> &Scene {
        debug!(game_id = %self.id, scene_id = %scene.id, "scene added");
        let index = self.scenes.len();
        self.scenes.push(scene);
        &self.scenes[index]
    }

    /// Append a scene arriving as untyped JSON.
    ///
    /// Only a value decoding as a [`Record::Scene`] is accepted. Rejections are
    /// logged and leave `scenes` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotAScene`] when the tag is missing or names another
    /// entity, and [`ModelError::Malformed`] when a scene-tagged value does not decode.
    pub fn add_scene_value(&mut self, value: Value) -> Result<&Scene, ModelError> {
        let found = match value.get("kind") {
            Some(Value::String(kind)) => kind.clone(),
            Some(other) => other.to_string(),
            None => "none".to_owned(),
        };

        let scene = match serde_json::from_value::<Record>(value) {
            Ok(record) => record.into_scene(),
            Err(e) if found == Record::SCENE => {
                warn!(game_id = %self.id, error = %e, "rejected malformed scene");
                return Err(ModelError::Malformed(e));
            }
            Err(_) => None,
        };
        let Some(scene) = scene else {
            warn!(game_id = %self.id, %found, "rejected attempt to add a non-scene value");
            return Err(ModelError::NotAScene { found });
        };

        Ok(self.add_scene(scene))
    }

    /// Choose the entry-point scene.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownScene`] if no owned scene has this id.
    pub fn set_first_scene(&mut self, id: &str) -> Result<(), ModelError> {
        if self.scene(id).is_none() {
            return Err(ModelError::UnknownScene(id.to_owned()));
        }
        self.first_scene = Some(id.to_owned());
        Ok(())
    }

    /// Append an item to the game-global pool.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }
}

impl From<GameConfig> for Game {
    fn from(config: GameConfig) -> Self {
        Self::new(config)
    }
}
