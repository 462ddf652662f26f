//! # ptmeta
//!
//! A fast parser for movie release titles from private trackers.
//!
//! Private-tracker release titles pack structured metadata (title, year,
//! source medium, resolution, release group, file size) into loosely
//! consistent dot- or space-separated strings, with site-specific framing
//! such as a trailing bracketed size annotation or a leading bracketed
//! localized title. This crate turns one such string into a [`MovieInfo`]
//! record.
//!
//! Parsing is best-effort by design: titles are uncontrolled input, so
//! every field degrades to an `Unknown`/empty/zero sentinel instead of
//! failing, and the parse functions never panic.
//!
//! ## Quick Start
//!
//! ```
//! use ptmeta::{parse, DigitalFormat, DigitalResolution, SiteConvention};
//!
//! let movie = parse(
//!     "Man.in.Black.1997.UHDTV.4K.HEVC-HDCTV[7.33 GB]",
//!     &SiteConvention::hdchina(),
//! );
//!
//! assert_eq!(movie.title, "Man in Black");
//! assert_eq!(movie.year, 1997);
//! assert_eq!(movie.group, "HDCTV");
//! assert_eq!(movie.source, DigitalFormat::Uhdtv);
//! assert_eq!(movie.resolution, DigitalResolution::Uhd4k);
//! assert_eq!(movie.size, 7_330_000_000);
//! ```
//!
//! ## Site Conventions
//!
//! ```
//! use ptmeta::parse_putao_title;
//!
//! // Putao titles carry a leading bracketed localized title.
//! let movie = parse_putao_title("[影] Shadow 2018 WEB-DL 1080p H264 AAC-PuTao[2.50 GB]");
//! assert_eq!(movie.title, "Shadow");
//! assert_eq!(movie.group, "PuTao");
//! ```

pub mod config;
pub mod model;

mod lexer;
mod parser;

// Re-export main types for convenience
pub use config::{SiteConvention, HDCHINA_SITE, PUTAO_SITE};
pub use model::{DigitalFormat, DigitalResolution, MovieInfo, ParseError};

/// Parse a release title according to a site convention.
///
/// This is the main entry point. For repeated parsing with one
/// convention, use [`Parser`].
///
/// # Examples
///
/// ```
/// use ptmeta::{parse, SiteConvention};
///
/// let movie = parse(
///     "Mudbound.2017.1080p.NF.WEB-DL.DD5.1.x264-NTG",
///     &SiteConvention::hdchina(),
/// );
/// assert_eq!(movie.title, "Mudbound");
/// assert_eq!(movie.group, "NTG");
/// ```
pub fn parse(input: &str, convention: &SiteConvention) -> MovieInfo {
    parser::parse_with_convention(input, convention)
}

/// Parse an HDChina release title.
pub fn parse_hdchina_title(input: &str) -> MovieInfo {
    parse(input, &SiteConvention::hdchina())
}

/// Parse a Putao release title.
pub fn parse_putao_title(input: &str) -> MovieInfo {
    parse(input, &SiteConvention::putao())
}

/// A release-title parser bound to one site convention.
///
/// ```
/// use ptmeta::{Parser, SiteConvention};
///
/// let parser = Parser::new(SiteConvention::hdchina());
/// let movie = parser.parse("Metro.2013.720p.Blu-Ray.x264.DTS.HDCLUB");
/// assert_eq!(movie.title, "Metro");
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    convention: SiteConvention,
}

impl Parser {
    /// Create a parser for the given site convention.
    pub fn new(convention: SiteConvention) -> Self {
        Self { convention }
    }

    /// The convention this parser applies.
    pub fn convention(&self) -> &SiteConvention {
        &self.convention
    }

    /// Parse a release title into structured metadata.
    pub fn parse(&self, input: &str) -> MovieInfo {
        parse(input, &self.convention)
    }
}
