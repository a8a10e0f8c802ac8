//! # Id Generation
//!
//! New entities get `<prefix>_<suffix>` ids where the suffix is a UUID v4
//! in simple (unhyphenated) form. Each candidate is checked against the
//! target collection before use.

use tracing::warn;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// Candidates tried before giving up.
const MAX_ID_ATTEMPTS: usize = 8;

/// Generates a fresh id with the given prefix.
///
/// ```rust
/// use bazaar_store::ids::generate_id;
///
/// let id = generate_id("ord");
/// assert!(id.starts_with("ord_"));
/// assert_eq!(id.len(), "ord_".len() + 32);
/// ```
pub fn generate_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Generates an id that `is_taken` does not reject.
pub fn unique_id(prefix: &str, is_taken: impl Fn(&str) -> bool) -> StoreResult<String> {
    unique_id_with(prefix, is_taken, generate_id)
}

/// Same as [`unique_id`] with a caller-supplied generator.
pub fn unique_id_with(
    prefix: &str,
    is_taken: impl Fn(&str) -> bool,
    mut generate: impl FnMut(&str) -> String,
) -> StoreResult<String> {
    for attempt in 1..=MAX_ID_ATTEMPTS {
        let id = generate(prefix);
        if !is_taken(&id) {
            return Ok(id);
        }
        warn!(prefix = %prefix, id = %id, attempt, "Generated id collided, retrying");
    }

    Err(StoreError::IdExhausted {
        prefix: prefix.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_prefix() {
        let id = generate_id("prod");
        assert!(id.starts_with("prod_"));
        assert!(id["prod_".len()..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_id_differs() {
        assert_ne!(generate_id("ord"), generate_id("ord"));
    }

    #[test]
    fn test_unique_id_skips_taken() {
        let mut candidates = vec!["ord_b".to_string(), "ord_a".to_string()];
        let id = unique_id_with("ord", |id| id == "ord_a", |_| {
            candidates.pop().unwrap_or_default()
        })
        .unwrap();
        assert_eq!(id, "ord_b");
    }

    #[test]
    fn test_unique_id_gives_up() {
        let err = unique_id_with("ord", |_| true, |p| format!("{p}_same")).unwrap_err();
        assert_eq!(
            err,
            StoreError::IdExhausted {
                prefix: "ord".to_string()
            }
        );
    }
}
