//! Pseudo-encryption codec for cheat scores.
//!
//! A token is `FHE-` followed by standard base64 of the value's shortest
//! round-trip decimal string. Untagged tokens are read as plain decimals so
//! that legacy records written without the codec still display.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::fmt;
use std::str::FromStr;

use crate::CodecError;

/// Tag that marks an encoded score.
pub const TOKEN_PREFIX: &str = "FHE-";

/// Encode a score into a tagged token.
pub fn encode(value: f64) -> String {
    format!("{TOKEN_PREFIX}{}", BASE64.encode(value.to_string()))
}

/// Decode a token back to its score.
///
/// Tagged tokens are base64-decoded first; anything else is parsed as a
/// decimal directly.
pub fn decode(token: &str) -> Result<f64, CodecError> {
    let text = match token.strip_prefix(TOKEN_PREFIX) {
        Some(body) => String::from_utf8(BASE64.decode(body)?)?,
        None => token.to_string(),
    };
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CodecError::NotANumber(trimmed.to_string()))
}

/// Apply `op` to the score carried by `token` and re-encode the result.
pub fn transform(token: &str, op: ScoreOp) -> Result<String, CodecError> {
    let value = decode(token)?;
    Ok(encode(op.apply(value)))
}

/// Truncate a token for display, appending `...` when anything was cut.
pub fn preview(token: &str, max_chars: usize) -> String {
    let mut chars = token.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Arithmetic operations that can be applied to an encoded score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreOp {
    /// Multiply by 1.1.
    Increase10Percent,
    /// Multiply by 0.9.
    Decrease10Percent,
    /// Multiply by 2.
    Double,
    /// Leave the value unchanged. Unrecognised operation names map here.
    Identity,
}

impl ScoreOp {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Increase10Percent => value * 1.1,
            Self::Decrease10Percent => value * 0.9,
            Self::Double => value * 2.0,
            Self::Identity => value,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increase10Percent => "increase10%",
            Self::Decrease10Percent => "decrease10%",
            Self::Double => "double",
            Self::Identity => "identity",
        }
    }
}

impl From<&str> for ScoreOp {
    fn from(name: &str) -> Self {
        match name {
            "increase10%" => Self::Increase10Percent,
            "decrease10%" => Self::Decrease10Percent,
            "double" => Self::Double,
            _ => Self::Identity,
        }
    }
}

impl FromStr for ScoreOp {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ScoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
