use std::collections::HashSet;

/// Find the first unfound target spelled by `letters`, read either way.
///
/// Targets are checked in list order and each one tries the forward
/// reading before the reversed one.
pub fn find_match<'a>(
    letters: &str,
    targets: &'a [String],
    found: &HashSet<String>,
) -> Option<&'a str> {
    let reversed: String = letters.chars().rev().collect();

    targets
        .iter()
        .filter(|word| !found.contains(word.as_str()))
        .find(|word| word.as_str() == letters || word.as_str() == reversed)
        .map(String::as_str)
}
