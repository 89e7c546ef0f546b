/// Normalizes a user-entered title before querying the backend.
///
/// Trims surrounding whitespace, lowercases, collapses internal whitespace
/// runs to a single space, and spells `&` out as `and`, matching the folding
/// the recommendation index applies to its titles.
pub fn normalize_title(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('&', "and")
}
