//! Document text formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The text format of a configuration document.
///
/// The format decides how line numbers behave on save: plain key-value
/// documents are renumbered sequentially every time, while structured formats
/// keep the line numbers items were stored with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Properties,
    Xml,
    Json,
    Yml,
    Yaml,
    Txt,
}

impl TextFormat {
    /// Canonical lowercase name, also used as the file extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextFormat::Properties => "properties",
            TextFormat::Xml => "xml",
            TextFormat::Json => "json",
            TextFormat::Yml => "yml",
            TextFormat::Yaml => "yaml",
            TextFormat::Txt => "txt",
        }
    }

    /// Whether saving a document of this format recomputes line numbers
    /// sequentially. Only the plain key-value format does; all others keep
    /// the stored positions.
    pub fn renumbers_lines(&self) -> bool {
        matches!(self, TextFormat::Properties)
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextFormat {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "properties" => Ok(TextFormat::Properties),
            "xml" => Ok(TextFormat::Xml),
            "json" => Ok(TextFormat::Json),
            "yml" => Ok(TextFormat::Yml),
            "yaml" => Ok(TextFormat::Yaml),
            "txt" => Ok(TextFormat::Txt),
            other => Err(TypeError::UnknownFormat(other.to_string())),
        }
    }
}
