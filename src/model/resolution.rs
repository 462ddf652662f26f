//! Digital resolution enum.

use super::ParseError;

/// Vertical pixel count class of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigitalResolution {
    /// 1080p Full HD
    Fhd,
    /// 720p HD
    Hd,
    /// 4K Ultra HD
    Uhd4k,
    /// Unknown or undetected resolution
    #[default]
    Unknown,
}

impl DigitalResolution {
    /// Canonical label used by the serialization contract.
    pub const fn as_str(self) -> &'static str {
        match self {
            DigitalResolution::Fhd => "1080p",
            DigitalResolution::Hd => "720p",
            DigitalResolution::Uhd4k => "4K",
            DigitalResolution::Unknown => "unknown",
        }
    }

    /// Match a single release-name token against the alias table.
    ///
    /// A token must equal an alias exactly after lower-casing; substrings
    /// never match.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "1080" | "1080p" | "1080i" => Some(DigitalResolution::Fhd),
            "720" | "720p" => Some(DigitalResolution::Hd),
            "4k" | "2160p" => Some(DigitalResolution::Uhd4k),
            _ => None,
        }
    }
}

impl std::fmt::Display for DigitalResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DigitalResolution {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("unknown") {
            return Ok(DigitalResolution::Unknown);
        }
        DigitalResolution::from_token(s)
            .ok_or_else(|| ParseError(format!("invalid resolution: {}", s)))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DigitalResolution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DigitalResolution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Unrecognized labels degrade to Unknown instead of failing.
        let label = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(label.parse().unwrap_or_default())
    }
}
