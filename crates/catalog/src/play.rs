use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use playbill_core::{PlayId, PlayType, StatementError, StatementResult};

/// Catalog entry: a play and its pricing type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    #[serde(rename = "type")]
    pub play_type: PlayType,
}

impl Play {
    pub fn new(name: impl Into<String>, play_type: impl Into<PlayType>) -> Self {
        Self {
            name: name.into(),
            play_type: play_type.into(),
        }
    }
}

/// Plays keyed by id.
///
/// Serialized as a JSON object: `{"hamlet": {"name": "Hamlet", "type": "tragedy"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: BTreeMap<PlayId, Play>,
}

impl PlayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Builder-style insert; a repeated id replaces the earlier entry.
    pub fn with_play(mut self, id: impl Into<PlayId>, play: Play) -> Self {
        self.plays.insert(id.into(), play);
        self
    }

    /// Resolve a play by id. Absence is an error, never a default.
    pub fn play(&self, id: &PlayId) -> StatementResult<&Play> {
        self.plays
            .get(id)
            .ok_or_else(|| StatementError::missing_play(id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl FromIterator<(PlayId, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (PlayId, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().collect(),
        }
    }
}
