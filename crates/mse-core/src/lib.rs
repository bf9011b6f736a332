//! mse-core: Core library for converting Shadowfist card sheets into Magic Set Editor sets
//!
//! This library provides functionality to:
//! - Tokenize delimited card sheet lines with configurable separator and quote
//! - Map sheet columns onto named card records
//! - Apply card text rules (designator italics, resource codes, attributes)
//! - Render cards as MSE `card:` blocks and assemble a full set file

pub mod card;
pub mod config;
pub mod error;
pub mod render;
pub mod set;
pub mod source;
pub mod text;
pub mod tokenizer;

pub use card::{CardRecord, CARD_COLUMNS, CARD_FIELD_COUNT};
pub use config::{ConverterConfig, ParserConfig, DEFAULT_FILENAME};
pub use error::{Error, Result};
pub use render::{render_card, transform_record, RenderContext, TIMESTAMP_FORMAT};
pub use set::{convert_lines, parse_cards, Conversion, MalformedPolicy, SkippedRecord};
pub use source::{read_lines, read_lines_from_path, read_source};
pub use tokenizer::{tokenize, tokenize_default};
