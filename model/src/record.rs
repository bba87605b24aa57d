//! Tagged envelope for entities crossing an untyped boundary.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Serialize};

use crate::{Event, Game, Item, Scene};

/// Any model entity, tagged with `"kind"` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Game(Game),
    Scene(Scene),
    Event(Event),
    Item(Item),
}

impl Record {
    pub const GAME: &'static str = "game";
    pub const SCENE: &'static str = "scene";
    pub const EVENT: &'static str = "event";
    pub const ITEM: &'static str = "item";

    /// Wire tag for this record.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Game(_) => Self::GAME,
            Self::Scene(_) => Self::SCENE,
            Self::Event(_) => Self::EVENT,
            Self::Item(_) => Self::ITEM,
        }
    }

    /// Unwrap a scene record.
    #[must_use]
    pub fn into_scene(self) -> Option<Scene> {
        match self {
            Self::Scene(scene) => Some(scene),
            _ => None,
        }
    }
}

impl From<Scene> for Record {
    fn from(scene: Scene) -> Self {
        Self::Scene(scene)
    }
}

impl From<Event> for Record {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

impl From<Item> for Record {
    fn from(item: Item) -> Self {
        Self::Item(item)
    }
}

impl From<Game> for Record {
    fn from(game: Game) -> Self {
        Self::Game(game)
    }
}
