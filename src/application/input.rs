//! Where algorithm inputs come from.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Inline literal or file holding one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
}

impl InputSource {
    /// `@path` names a file, anything else is taken literally.
    pub fn from_arg(arg: &str) -> Self {
        match arg.strip_prefix('@') {
            Some(path) if !path.is_empty() => InputSource::File(PathBuf::from(path)),
            _ => InputSource::Inline(arg.to_string()),
        }
    }
}

impl FromStr for InputSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_arg(s))
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Inline(text) => write!(f, "inline {:?}", text),
            InputSource::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// How a digit-chain operand is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Digits least significant first: `[2,4,3]`
    #[default]
    Digits,
    /// Conventional decimal: `342`
    Number,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_prefix_selects_file() {
        assert_eq!(
            InputSource::from_arg("@grid.txt"),
            InputSource::File(PathBuf::from("grid.txt"))
        );
        assert_eq!(
            InputSource::from_arg("[1,2]"),
            InputSource::Inline("[1,2]".to_string())
        );
        assert_eq!(InputSource::from_arg("@"), InputSource::Inline("@".to_string()));
    }
}
