//! Parsed movie record.

use super::{DigitalFormat, DigitalResolution};

/// Structured metadata extracted from one release title.
///
/// Every parse call produces one fresh record; fields that could not be
/// detected hold their sentinel values (`Unknown` variants, empty strings,
/// size 0) rather than signalling an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MovieInfo {
    /// Movie title with separators collapsed to single spaces.
    pub title: String,
    /// Release year; -1 when a non-empty title carried no year token.
    pub year: i32,
    /// Release group, empty if undetected.
    pub group: String,
    /// Source medium of the release.
    pub source: DigitalFormat,
    /// Video resolution class.
    pub resolution: DigitalResolution,
    /// File size in bytes, 0 if the title carried no size annotation.
    pub size: u64,
    /// External identifier reserved for callers; always empty here.
    pub id: String,
    /// Tag of the site convention that produced this record.
    pub site: String,
}

impl MovieInfo {
    /// Zero-valued record carrying only a site tag.
    pub(crate) fn empty(site: &str) -> Self {
        Self {
            site: site.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero_valued() {
        let movie = MovieInfo::default();
        assert!(movie.title.is_empty());
        assert_eq!(movie.year, 0);
        assert!(movie.group.is_empty());
        assert_eq!(movie.source, DigitalFormat::Unknown);
        assert_eq!(movie.resolution, DigitalResolution::Unknown);
        assert_eq!(movie.size, 0);
        assert!(movie.id.is_empty());
        assert!(movie.site.is_empty());
    }

    #[test]
    fn empty_carries_site_tag_only() {
        let movie = MovieInfo::empty("HDChina");
        assert_eq!(movie.site, "HDChina");
        assert_eq!(
            MovieInfo {
                site: String::new(),
                ..movie
            },
            MovieInfo::default()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let movie = MovieInfo {
            title: "Man in Black".to_string(),
            year: 1997,
            group: "HDCTV".to_string(),
            source: DigitalFormat::Uhdtv,
            resolution: DigitalResolution::Uhd4k,
            size: 7_330_000_000,
            id: String::new(),
            site: "HDChina".to_string(),
        };
        let json = serde_json::to_string(&movie).unwrap();
        let back: MovieInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(movie, back);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_missing_fields_default() {
        let movie: MovieInfo = serde_json::from_str("{\"title\":\"Metro\"}").unwrap();
        assert_eq!(movie.title, "Metro");
        assert_eq!(movie.year, 0);
        assert_eq!(movie.source, DigitalFormat::Unknown);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_enum_fields_use_labels() {
        let movie = MovieInfo {
            source: DigitalFormat::Blueray3D,
            resolution: DigitalResolution::Fhd,
            ..MovieInfo::default()
        };
        let json = serde_json::to_string(&movie).unwrap();
        assert!(json.contains("\"source\":\"3D\""));
        assert!(json.contains("\"resolution\":\"1080p\""));
    }
}
