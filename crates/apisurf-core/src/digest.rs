//! Surface digest.

use sha2::{Digest, Sha256};

/// SHA-256 (lowercase hex) of the sorted features joined with `\n`.
///
/// Input order does not matter.
pub fn compute_surface_digest(features: &[String]) -> String {
    let mut sorted: Vec<&str> = features.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut hasher = Sha256::new();
    hasher.update(sorted.join("\n").as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_ignores_input_order() {
        let a = vec!["pkg x, func A()".to_string(), "pkg x, func B()".to_string()];
        let b = vec!["pkg x, func B()".to_string(), "pkg x, func A()".to_string()];
        assert_eq!(compute_surface_digest(&a), compute_surface_digest(&b));
        assert_eq!(compute_surface_digest(&a).len(), 64);
    }

    #[test]
    fn test_empty_surface_digest() {
        assert_eq!(
            compute_surface_digest(&[]),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_changes_with_content() {
        let a = vec!["pkg x, func A()".to_string()];
        let b = vec!["pkg x, func A(int)".to_string()];
        assert_ne!(compute_surface_digest(&a), compute_surface_digest(&b));
    }
}
