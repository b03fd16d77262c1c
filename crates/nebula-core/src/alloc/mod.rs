//! Fast hash collections.
//!
//! Keys in Nebula are short strings and ids hashed every frame, so the
//! defaults are AHash-backed. Iteration order is unspecified; reach for
//! `indexmap` where order matters.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_lookup_by_str() {
        let mut settings: HashMap<String, f32> = HashMap::default();
        settings.insert("star_density".to_string(), 1.0);
        assert_eq!(settings.get("star_density"), Some(&1.0));
    }

    #[test]
    fn test_set_deduplicates() {
        let set: HashSet<&str> = ["sol", "vega", "sol"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
