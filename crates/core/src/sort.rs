use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Field a Pokémon listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Id,
    BaseExperience,
    Generation,
    Height,
    Name,
    Species,
    Weight,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Id,
        SortField::BaseExperience,
        SortField::Generation,
        SortField::Height,
        SortField::Name,
        SortField::Species,
        SortField::Weight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::BaseExperience => "base_experience",
            SortField::Generation => "generation",
            SortField::Height => "height",
            SortField::Name => "name",
            SortField::Species => "species",
            SortField::Weight => "weight",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseError::UnknownSortField(s.to_string()))
    }
}
