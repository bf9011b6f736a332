//! Parser settings and persisted converter defaults

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: char = ',';
/// Quote character used when none is configured
pub const DEFAULT_QUOTE: char = '"';
/// Output file name used when none is configured
pub const DEFAULT_FILENAME: &str = "shadowfist-cardset.mse-set";

/// Separator and quote characters for the line tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub separator: char,
    pub quote: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            quote: DEFAULT_QUOTE,
        }
    }
}

impl ParserConfig {
    /// Build a config, substituting defaults for unset values.
    ///
    /// A space counts as unset, so neither setting can be a space.
    pub fn new(separator: Option<char>, quote: Option<char>) -> Self {
        Self {
            separator: resolve(separator, DEFAULT_SEPARATOR),
            quote: resolve(quote, DEFAULT_QUOTE),
        }
    }

    /// Build a config from textual settings (CLI flags, config file).
    ///
    /// Empty strings fall back to the defaults; anything longer than one
    /// character is rejected.
    pub fn from_settings(separator: Option<&str>, quote: Option<&str>) -> Result<Self> {
        Ok(Self::new(
            single_char("separator", separator)?,
            single_char("quote", quote)?,
        ))
    }
}

fn resolve(value: Option<char>, default: char) -> char {
    match value {
        Some(' ') | None => default,
        Some(c) => c,
    }
}

fn single_char(name: &'static str, value: Option<&str>) -> Result<Option<char>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        _ => Err(Error::InvalidConfig {
            name,
            value: value.to_string(),
        }),
    }
}

/// Converter defaults stored as JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Card sheet to read (local path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Directory the set file is written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Set file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    /// Text placed in every card's copyright line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl ConverterConfig {
    /// Load a config file from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the config file to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Tokenizer settings described by this config
    pub fn parser_config(&self) -> Result<ParserConfig> {
        ParserConfig::from_settings(self.separator.as_deref(), self.quote.as_deref())
    }

    /// Where the set file goes: `directory/filename`, falling back to the
    /// given working directory and [`DEFAULT_FILENAME`]
    pub fn output_path(&self, cwd: &Path) -> PathBuf {
        let dir = self.directory.as_deref().unwrap_or(cwd);
        dir.join(self.filename.as_deref().unwrap_or(DEFAULT_FILENAME))
    }
}
