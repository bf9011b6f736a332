//! Set file assembly: drives a whole card sheet through the converter
//!
//! The first line of a sheet is its header and is skipped. Blank lines are
//! ignored. Every other line becomes one card block, in sheet order.

use crate::card::CardRecord;
use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::render::{transform_record, RenderContext};
use crate::tokenizer::tokenize;
use tracing::{debug, warn};

const SET_PREAMBLE: &str = "mse version: 0.3.8\n\
                            game: shadowfist\n\
                            stylesheet: fullblank\n\
                            set info:\n\
                            \tsymbol:\n";

const SET_POSTAMBLE: &str = "version control:\n\
                             \ttype: none\n\
                             apprentice code:\n";

/// What to do with a line that is not a valid card record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Stop and return the error
    #[default]
    Abort,
    /// Leave the card out and keep going
    Skip,
}

/// A sheet line that was left out of the set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line number in the sheet
    pub line: usize,
    pub field_count: usize,
}

/// Result of converting a sheet
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    /// Rendered card blocks in sheet order
    pub cards: Vec<String>,
    /// Lines left out under [`MalformedPolicy::Skip`]
    pub skipped: Vec<SkippedRecord>,
}

impl Conversion {
    /// Number of cards converted
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Full set file text with all cards
    pub fn to_set_document(&self) -> String {
        let body_len: usize = self.cards.iter().map(String::len).sum();
        let mut doc = String::with_capacity(SET_PREAMBLE.len() + body_len + SET_POSTAMBLE.len());
        doc.push_str(SET_PREAMBLE);
        for card in &self.cards {
            doc.push_str(card);
        }
        doc.push_str(SET_POSTAMBLE);
        doc
    }
}

/// Card lines of a sheet paired with their 1-based line numbers
fn card_lines<I, S>(lines: I) -> impl Iterator<Item = (usize, S)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .skip(1)
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.as_ref().is_empty())
}

/// Convert every card line of a sheet
pub fn convert_lines<I, S>(
    lines: I,
    parser: &ParserConfig,
    context: &RenderContext,
    policy: MalformedPolicy,
) -> Result<Conversion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut conversion = Conversion::default();

    for (line_number, line) in card_lines(lines) {
        match transform_record(line.as_ref(), line_number, parser, context) {
            Ok(block) => {
                debug!(line = line_number, "converted card");
                conversion.cards.push(block);
            }
            Err(Error::MalformedRecord {
                line,
                field_count,
                expected,
            }) if policy == MalformedPolicy::Skip => {
                warn!(line, field_count, expected, "skipping malformed record");
                conversion.skipped.push(SkippedRecord { line, field_count });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(conversion)
}

/// Parse every card line of a sheet into records without rendering
pub fn parse_cards<I, S>(lines: I, parser: &ParserConfig) -> Result<Vec<CardRecord>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    card_lines(lines)
        .map(|(line_number, line)| CardRecord::from_fields(tokenize(line.as_ref(), parser), line_number))
        .collect()
}
