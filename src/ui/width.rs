//! Display width of menu labels.
//!
//! The default measure counts any character that needs more than one byte
//! in UTF-8 as two columns. That lines up CJK names against ASCII ones, which
//! is what catalog labels mostly are, but over-counts accented Latin letters
//! and combining marks. `WidthMode::Unicode` switches to the East Asian Width
//! tables instead.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// How label widths are measured
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WidthMode {
    /// Multi-byte characters count as two columns
    #[default]
    Bytes,
    /// Unicode East Asian Width classification
    Unicode,
}

impl WidthMode {
    pub fn measure(self, text: &str) -> usize {
        match self {
            WidthMode::Bytes => display_width(text),
            WidthMode::Unicode => UnicodeWidthStr::width(text),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "bytes" | "byte" => Some(WidthMode::Bytes),
            "unicode" => Some(WidthMode::Unicode),
            _ => None,
        }
    }
}

/// Width of `text` where every multi-byte character takes two columns
pub fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| if c.len_utf8() > 1 { 2 } else { 1 })
        .sum()
}
