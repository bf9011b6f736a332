//! Card record with named fields for each sheet column

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of columns a card line must provide
pub const CARD_FIELD_COUNT: usize = 12;

/// Column order of the card sheet
pub const CARD_COLUMNS: [&str; CARD_FIELD_COUNT] = [
    "Title", "Subtitle", "Faction", "CardType", "Cost", "Provides", "Fighting", "Power", "Body",
    "Text", "Artist", "Designer",
];

/// One card parsed from a sheet line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub title: String,
    pub subtitle: String,
    pub faction: String,
    pub card_type: String,
    pub cost: String,
    /// Resource codes the card provides
    pub provides: String,
    pub fighting: String,
    pub power: String,
    pub body: String,
    /// Rules text
    pub text: String,
    pub artist: String,
    pub designer: String,
}

impl CardRecord {
    /// Build a record from tokenized fields.
    ///
    /// `line` is the 1-based source line, used only for error reporting.
    /// Fields past the last column are ignored.
    pub fn from_fields(fields: Vec<String>, line: usize) -> Result<Self> {
        if fields.len() < CARD_FIELD_COUNT {
            return Err(Error::MalformedRecord {
                line,
                field_count: fields.len(),
                expected: CARD_FIELD_COUNT,
            });
        }

        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();

        Ok(Self {
            title: next(),
            subtitle: next(),
            faction: next(),
            card_type: next(),
            cost: next(),
            provides: next(),
            fighting: next(),
            power: next(),
            body: next(),
            text: next(),
            artist: next(),
            designer: next(),
        })
    }
}
