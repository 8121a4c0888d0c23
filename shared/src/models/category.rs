//! Issue categories

/// Categories the reporting form offers.
///
/// Issues carry their category as a free string; anything outside this set
/// is still accepted and shown, it just falls back to default styling.
pub const KNOWN_CATEGORIES: &[&str] = &["Street", "Water", "Electricity", "Sanitation", "Garbage"];

/// Returns true when `category` is one of [`KNOWN_CATEGORIES`] (exact match).
pub fn is_known_category(category: &str) -> bool {
    KNOWN_CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_is_exact() {
        assert!(is_known_category("Water"));
        assert!(!is_known_category("water"));
        assert!(!is_known_category(""));
    }
}
