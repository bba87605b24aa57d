#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};

use crate::Event;

/// Required fields for constructing a [`Scene`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub id: String,
    pub name: String,
}

/// One navigable location in a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub name: String,
    /// Background image URL. Empty means no background.
    #[serde(default)]
    pub background: String,
    /// Event run when the player enters the scene.
    #[serde(default)]
    pub enter: Option<Event>,
    /// Event run when the player leaves the scene.
    #[serde(default)]
    pub leave: Option<Event>,
}

impl Scene {
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        Self { id: config.id, name: config.name, background: String::new(), enter: None, leave: None }
    }

    #[must_use]
    pub fn has_background(&self) -> bool {
        !self.background.is_empty()
    }

    pub fn set_background(&mut self, url: impl Into<String>) {
        self.background = url.into();
    }

    /// Replace the enter event, returning the previous one.
    pub fn set_enter(&mut self, event: Option<Event>) -> Option<Event> {
        std::mem::replace(&mut self.enter, event)
    }

    /// Replace the leave event, returning the previous one.
    pub fn set_leave(&mut self, event: Option<Event>) -> Option<Event> {
        std::mem::replace(&mut self.leave, event)
    }
}

impl From<SceneConfig> for Scene {
    fn from(config: SceneConfig) -> Self {
        Self::new(config)
    }
}
