use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Name,
    Submitter,
}

impl SearchField {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Submitter => "submitter",
        }
    }
}

pub const DEFAULT_SEARCH_FIELDS: [SearchField; 2] = [SearchField::Name, SearchField::Submitter];

/// Anything a query can be matched against.
pub trait Searchable {
    fn field(&self, field: SearchField) -> &str;

    /// Lower-cased, space-joined concatenation of `fields`, in order.
    fn searchable_text(&self, fields: &[SearchField]) -> String {
        let mut out = String::new();
        for (idx, field) in fields.iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            out.push_str(self.field(*field));
        }
        out.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub name: String,
    #[serde(default)]
    pub submitter: String,
    #[serde(default)]
    pub score: Option<f64>,
}

impl LeaderboardRow {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyRowName);
        }

        if let Some(score) = self.score {
            if !score.is_finite() {
                return Err(CoreError::InvalidScore(score));
            }
        }

        Ok(())
    }
}

impl Searchable for LeaderboardRow {
    fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Name => &self.name,
            SearchField::Submitter => &self.submitter,
        }
    }
}
