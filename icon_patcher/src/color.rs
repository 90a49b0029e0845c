//! Icon colors: parsing, mining the ambient default from a previously
//! generated document, and rule-over-ambient precedence.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::error::PatcherError;

/// A color as exactly six hex digits, stored without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Red, used for theft-related interactions.
    pub const RED: Color = Color(Cow::Borrowed("ff0000"));

    /// Light gray, used for closing containers.
    pub const LIGHT_GRAY: Color = Color(Cow::Borrowed("dddddd"));

    /// Parse `ff0000` or `#ff0000`. Case is kept as written.
    pub fn parse(value: &str) -> Result<Self, PatcherError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(Cow::Owned(digits.to_string())))
        } else {
            Err(PatcherError::InvalidColor(value.to_string()))
        }
    }

    /// The six hex digits without `#`.
    pub fn hex(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Color {
    type Error = PatcherError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0.into_owned()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

fn color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"color\s*=\s*['"]#([0-9A-Fa-f]{6})['"]"#).expect("color pattern is valid")
    })
}

/// Extract the color of a `color = '#xxxxxx'` attribute from markup.
pub fn extract_color(markup: &str) -> Option<Color> {
    color_pattern()
        .captures(markup)
        .and_then(|captures| captures.get(1))
        .map(|digits| Color(Cow::Owned(digits.as_str().to_string())))
}

/// A rule-specific color wins over the ambient default.
pub fn resolve_color<'a>(rule: Option<&'a Color>, ambient: Option<&'a Color>) -> Option<&'a Color> {
    rule.or(ambient)
}

/// The only field of a previously generated entry the miner looks at.
#[derive(Debug, Deserialize)]
struct MinedEntry {
    string: String,
}

fn first_entry(path: &Path) -> Result<Option<MinedEntry>, PatcherError> {
    let raw = std::fs::read_to_string(path).map_err(PatcherError::at_path(path))?;
    let entries: Vec<MinedEntry> = serde_json::from_str(&raw)?;
    Ok(entries.into_iter().next())
}

/// Mine the ambient default color from a previously generated document.
///
/// Any failure leaves the ambient color unset; the run continues with
/// uncolored default icons.
pub fn mine_ambient_color(path: &Path) -> Option<Color> {
    if !path.is_file() {
        debug!(path = %path.display(), "no document to mine an ambient color from");
        return None;
    }

    match first_entry(path) {
        Ok(Some(entry)) => {
            let color = extract_color(&entry.string);
            match &color {
                Some(color) => info!(%color, "found ambient color override"),
                None => debug!(path = %path.display(), "first entry carries no color"),
            }
            color
        }
        Ok(None) => {
            debug!(path = %path.display(), "document is empty");
            None
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read ambient color");
            None
        }
    }
}
