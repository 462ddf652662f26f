//! Site convention configuration.

/// Site tag for HDChina-style titles.
pub const HDCHINA_SITE: &str = "HDChina";

/// Site tag for Putao-style titles.
pub const PUTAO_SITE: &str = "Putao";

/// Title convention of a supported site.
///
/// Conventions differ only in whether a leading bracketed alternate title
/// is stripped and in the tag written into the parsed record; field
/// extraction is otherwise identical across sites.
///
/// ```
/// use ptmeta::SiteConvention;
///
/// let convention = SiteConvention::new("MTeam", true);
/// assert_eq!(convention.site, "MTeam");
/// assert!(convention.strip_leading_bracket);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteConvention {
    /// Tag identifying the site convention in parsed records.
    pub site: String,
    /// Whether titles carry a leading bracketed localized title to drop.
    pub strip_leading_bracket: bool,
}

impl SiteConvention {
    /// Convention for an arbitrary site.
    pub fn new(site: impl Into<String>, strip_leading_bracket: bool) -> Self {
        Self {
            site: site.into(),
            strip_leading_bracket,
        }
    }

    /// HDChina-style titles: a trailing size annotation, no leading
    /// bracket.
    pub fn hdchina() -> Self {
        Self::new(HDCHINA_SITE, false)
    }

    /// Putao-style titles: a leading bracketed localized title plus the
    /// trailing size annotation.
    pub fn putao() -> Self {
        Self::new(PUTAO_SITE, true)
    }
}
