//! The two fixed getter shapes this tool removes, and the lines that may sit
//! between a marker comment and its getter signature.

use regex::Regex;
use std::sync::LazyLock;

const DISPLAY_TYPE_MARKER: &str = "/// UI display type for generic rendering.";
const SECTIONS_MARKER: &str = "/// Structured display sections for generic rendering.";

pub const OVERRIDE_ANNOTATION: &str = "@override";
pub const ARROW: &str = "=>";
/// Trailing text that closes an expression-bodied list getter.
pub const LIST_TERMINATOR: &str = "];";
/// Trimmed content of the line closing a block-bodied getter.
pub const BLOCK_CLOSER: &str = "}";

/// `ResultDisplayType get displayType => ...;` on one line.
static RE_DISPLAY_TYPE_GETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bResultDisplayType\s+get\s+displayType\b").unwrap());
/// `List<ResultSection> get sections` opening a multi-line body.
static RE_SECTIONS_GETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bList<ResultSection>\s+get\s+sections\b").unwrap());

/// How a getter's last line is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetterShape {
    /// The signature line is the whole declaration.
    SingleLine,
    /// The declaration ends where delimiter nesting closes.
    Balanced,
}

/// A doc-comment line that anchors a removable getter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    DisplayType,
    Sections,
}

impl Marker {
    /// Match a line against both marker literals after trimming.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            DISPLAY_TYPE_MARKER => Some(Self::DisplayType),
            SECTIONS_MARKER => Some(Self::Sections),
            _ => None,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::DisplayType => DISPLAY_TYPE_MARKER,
            Self::Sections => SECTIONS_MARKER,
        }
    }

    pub fn shape(self) -> GetterShape {
        match self {
            Self::DisplayType => GetterShape::SingleLine,
            Self::Sections => GetterShape::Balanced,
        }
    }

    /// True if `line` contains this marker's getter signature.
    pub fn is_signature(self, line: &str) -> bool {
        match self {
            Self::DisplayType => RE_DISPLAY_TYPE_GETTER.is_match(line),
            Self::Sections => RE_SECTIONS_GETTER.is_match(line),
        }
    }
}

/// Lines allowed between a marker and its signature: blanks, the override
/// annotation, and further `///` doc comments.
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed == OVERRIDE_ANNOTATION || trimmed.starts_with("///")
}
