//! Human-facing public identifier generation.
//!
//! Every externally visible entity (account, job, application) carries a
//! short prefixed identifier alongside its UUID primary key, e.g.
//! `job-x7k2m9qa4p`. The unique column constraint in the database is the
//! collision backstop.

use rand::{Rng, distr::Alphanumeric};

/// Number of random characters after the prefix.
const SUFFIX_LEN: usize = 10;

/// Generate a public identifier of the form `{prefix}-{10 alphanumerics}`.
pub fn generate_public_id(prefix: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    format!("{prefix}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let id = generate_public_id("job");
        assert!(id.starts_with("job-"));
        assert_eq!(id.len(), "job-".len() + SUFFIX_LEN);
        assert!(id[4..].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_distinct() {
        assert_ne!(generate_public_id("user"), generate_public_id("user"));
    }
}
