//! Packing Item Entity

use serde::{Deserialize, Serialize};

/// One line of the packing checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub packed: bool,
}

impl PackingItem {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            packed: false,
        }
    }
}
