//! Digital source format enum.

use super::ParseError;

/// Source/origin medium of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigitalFormat {
    /// Blu-ray disc rip
    Blueray,
    /// HDTV broadcast capture
    Hdtv,
    /// Web download
    WebDl,
    /// UHD broadcast capture
    Uhdtv,
    /// 3D Blu-ray rip
    Blueray3D,
    /// Unknown or undetected source
    #[default]
    Unknown,
}

impl DigitalFormat {
    /// Canonical label used by the serialization contract.
    pub const fn as_str(self) -> &'static str {
        match self {
            DigitalFormat::Blueray => "blueray",
            DigitalFormat::Hdtv => "hdtv",
            DigitalFormat::WebDl => "webdl",
            DigitalFormat::Uhdtv => "uhdtv",
            DigitalFormat::Blueray3D => "3D",
            DigitalFormat::Unknown => "unknown",
        }
    }

    /// Match a single release-name token against the alias table.
    ///
    /// A token must equal an alias exactly after lower-casing; substrings
    /// never match. The literal "unknown" is a serialization label, not an
    /// alias, so it does not match here.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "bluray" | "blu-ray" | "blueray" | "bd" => Some(DigitalFormat::Blueray),
            "hdtv" => Some(DigitalFormat::Hdtv),
            "webdl" | "web-dl" | "webrip" | "web" => Some(DigitalFormat::WebDl),
            "uhdtv" => Some(DigitalFormat::Uhdtv),
            "3d" | "sbs" => Some(DigitalFormat::Blueray3D),
            _ => None,
        }
    }
}

impl std::fmt::Display for DigitalFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DigitalFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("unknown") {
            return Ok(DigitalFormat::Unknown);
        }
        DigitalFormat::from_token(s)
            .ok_or_else(|| ParseError(format!("invalid digital format: {}", s)))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DigitalFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DigitalFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Unrecognized labels degrade to Unknown instead of failing.
        let label = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(label.parse().unwrap_or_default())
    }
}
