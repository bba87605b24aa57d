//! Touch regions inside a scene.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::{Deserialize, Serialize};

/// Required fields for constructing an [`Event`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventConfig {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A rectangular touch trigger. `x`/`y` are offsets from the scene's top-left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Script run when the region is touched. Opaque to the model.
    #[serde(default)]
    pub code: String,
    /// Sprite URL. Empty renders as a transparent touch target.
    #[serde(default)]
    pub image: String,
}

impl Event {
    /// Build an event with empty `code` and `image`. Geometry is not checked.
    #[must_use]
    pub fn new(config: EventConfig) -> Self {
        Self {
            id: config.id,
            name: config.name,
            x: config.x,
            y: config.y,
            width: config.width,
            height: config.height,
            code: String::new(),
            image: String::new(),
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// True when no sprite is set.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.image.is_empty()
    }

    /// True when the rectangle has non-negative width and height.
    #[must_use]
    pub fn has_valid_area(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    /// Whether a scene-space point falls inside the region.
    ///
    /// Left/top edges are inclusive, right/bottom edges exclusive, so two
    /// adjacent regions never both claim the shared edge.
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

impl From<EventConfig> for Event {
    fn from(config: EventConfig) -> Self {
        Self::new(config)
    }
}
