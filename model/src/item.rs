use serde::{Deserialize, Serialize};

/// Required fields for constructing an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub id: String,
    pub name: String,
    pub image: String,
}

/// A collectible shown in the cross-scene inventory strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub image: String,
}

impl Item {
    #[must_use]
    pub fn new(config: ItemConfig) -> Self {
        Self { id: config.id, name: config.name, image: config.image }
    }
}

impl From<ItemConfig> for Item {
    fn from(config: ItemConfig) -> Self {
        Self::new(config)
    }
}
