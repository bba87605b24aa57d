//! Authoring model for escape-room games.
//!
//! A [`Game`] owns an ordered list of [`Scene`]s and a game-global pool of
//! [`Item`]s. Scenes reference up to two [`Event`]s (`enter` / `leave`), each a
//! rectangular touch region carrying an opaque script payload.
//!
//! DESIGN
//! ======
//! Construction is pure field assignment from a required-fields config record;
//! it never fails. The only fallible composition path is
//! [`Game::add_scene_value`], which accepts untyped JSON from the UI or
//! persistence boundary and rejects anything that is not a tagged scene.

mod event;
mod game;
mod item;
mod record;
mod scene;

pub use event::{Event, EventConfig};
pub use game::{Game, GameConfig};
pub use item::{Item, ItemConfig};
pub use record::Record;
pub use scene::{Scene, SceneConfig};

/// Error returned by fallible model operations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The value offered to a game is not tagged as a scene.
    #[error("value is not a scene (kind: {found})")]
    NotAScene { found: String },
    /// The value is tagged as a scene but its fields do not decode.
    #[error("malformed scene: {0}")]
    Malformed(#[from] serde_json::Error),
    /// No scene with this id is owned by the game.
    #[error("scene not found: {0}")]
    UnknownScene(String),
}

/// Generate a fresh entity id for objects created in the editor.
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
