//! Source-format and resolution matchers.
//!
//! Both scan left to right and stop at the first token that equals an
//! alias exactly after lower-casing.

use crate::model::{DigitalFormat, DigitalResolution};

/// Find the first token naming a source format.
pub fn find_source(tokens: &[&str]) -> Option<(DigitalFormat, usize)> {
    tokens
        .iter()
        .enumerate()
        .find_map(|(index, token)| DigitalFormat::from_token(token).map(|format| (format, index)))
}

/// Find the first token naming a resolution class.
pub fn find_resolution(tokens: &[&str]) -> Option<(DigitalResolution, usize)> {
    tokens.iter().enumerate().find_map(|(index, token)| {
        DigitalResolution::from_token(token).map(|resolution| (resolution, index))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_source_left_to_right() {
        // "3D" comes before "BluRay", so the 3D variant wins.
        let tokens = ["Sadako", "3D", "2", "2013", "BluRay", "1080p"];
        assert_eq!(find_source(&tokens), Some((DigitalFormat::Blueray3D, 1)));
    }

    #[test]
    fn source_matching_is_case_insensitive() {
        let tokens = ["Metro", "2013", "720p", "Blu-Ray"];
        assert_eq!(find_source(&tokens), Some((DigitalFormat::Blueray, 3)));
    }

    #[test]
    fn no_source_token_is_none() {
        assert_eq!(find_source(&["Some", "Title", "2020"]), None);
        assert_eq!(find_source(&[]), None);
    }

    #[test]
    fn finds_first_resolution() {
        let tokens = ["Movie", "2020", "2160p", "720p"];
        assert_eq!(
            find_resolution(&tokens),
            Some((DigitalResolution::Uhd4k, 2))
        );
    }

    #[test]
    fn no_resolution_token_is_none() {
        assert_eq!(find_resolution(&["Some", "Title"]), None);
    }
}
