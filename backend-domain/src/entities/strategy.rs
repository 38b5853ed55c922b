// Map strategy entity
// Community tips for a single map

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStrategy {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
}

impl MapStrategy {
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}
