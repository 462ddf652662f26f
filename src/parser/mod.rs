//! Shared parsing pipeline for site release titles.
//!
//! Site conventions differ only in whether a leading localized-title
//! bracket is stripped and in the site tag written into the result; field
//! extraction below is one routine shared by every convention.

mod group;
mod quality;
mod size;
mod title;
mod year;

use crate::config::SiteConvention;
use crate::lexer;
use crate::model::MovieInfo;

/// Parse one release title according to a site convention.
///
/// Total for any input: matchers degrade to their sentinel values and an
/// empty input short-circuits to a zero-valued record carrying only the
/// site tag.
pub fn parse_with_convention(input: &str, convention: &SiteConvention) -> MovieInfo {
    if input.is_empty() {
        return MovieInfo::empty(&convention.site);
    }

    let remainder = if convention.strip_leading_bracket {
        lexer::strip_leading_bracket(input)
    } else {
        input
    };
    let (remainder, size_text) = lexer::split_trailing_bracket(remainder);
    let size = if size_text.is_empty() {
        0
    } else {
        size::parse_size(size_text)
    };

    let tokens = lexer::tokenize(remainder);

    let year = year::find_year(&tokens);
    let source = quality::find_source(&tokens);
    let resolution = quality::find_resolution(&tokens);
    let group = group::find_group(&tokens);

    let indices = [
        year.map(|(_, index)| index),
        source.map(|(_, index)| index),
        resolution.map(|(_, index)| index),
    ];
    let movie_title = title::assemble_title(&tokens, indices);

    MovieInfo {
        title: movie_title,
        year: year.map_or(-1, |(value, _)| value),
        group,
        source: source.map(|(value, _)| value).unwrap_or_default(),
        resolution: resolution.map(|(value, _)| value).unwrap_or_default(),
        size,
        id: String::new(),
        site: convention.site.clone(),
    }
}
