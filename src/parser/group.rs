//! Release-group matcher.

/// Extract the release group from the tail of the token sequence.
///
/// The group rides after the last hyphen of the final token. A trailing
/// `"iso"` marker is noise and the token before it is used instead. An
/// `@` attribution marker ("user@group") narrows the result to the part
/// after the last `@`. This matcher contributes nothing to the title
/// boundary.
pub fn find_group(tokens: &[&str]) -> String {
    let Some(&last) = tokens.last() else {
        return String::new();
    };

    let candidate = if last == "iso" {
        match tokens.len().checked_sub(2).map(|index| tokens[index]) {
            Some(token) => token,
            None => return String::new(),
        }
    } else {
        last
    };

    let Some(dash) = candidate.rfind('-') else {
        return String::new();
    };
    let group = &candidate[dash + 1..];
    let group = match group.rfind('@') {
        Some(at) => &group[at + 1..],
        None => group,
    };
    group.to_string()
}
