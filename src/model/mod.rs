//! Data model types for parsed release metadata.
//!
//! This module contains the types produced by the title parser: the
//! [`MovieInfo`] record and the enums describing a release's source
//! medium and resolution class.

mod format;
mod movie;
mod resolution;

pub use format::DigitalFormat;
pub use movie::MovieInfo;
pub use resolution::DigitalResolution;

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse error: {0}")]
pub struct ParseError(pub String);
