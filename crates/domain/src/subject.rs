use crate::shared::entity::ID;
use serde::{Deserialize, Serialize};

/// A managed animal. Owns its `SubjectEvent`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: ID,
    pub name: String,
    /// Category of the animal, e.g. "Cow" or "Buffalo"
    #[serde(rename = "type")]
    pub kind: String,
    pub image: Option<String>,
}

impl Subject {
    pub fn new(id: ID, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            image: None,
        }
    }
}
