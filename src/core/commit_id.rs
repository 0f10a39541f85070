//! Deterministic short commit identifiers.
//!
//! Ids are not content addresses: the digest also covers the parent, the
//! message and how many commits the repository already holds, so replaying
//! the same sequence of commits yields the same ids while two identical
//! commits on sibling branches still get different ones.

use crate::core::snapshot::Snapshot;

/// Number of hex digits kept from the digest.
pub const SHORT_ID_LEN: usize = 7;

/// Compute the id for a commit about to be appended as entry `sequence`.
pub fn commit_id(parent: Option<&str>, message: &str, files: &Snapshot, sequence: usize) -> String {
    let mut input = Vec::with_capacity(
        64 + message.len() + files.iter().map(|(k, v)| k.len() + v.len() + 2).sum::<usize>(),
    );

    input.extend_from_slice(parent.unwrap_or("").as_bytes());
    input.push(0);
    input.extend_from_slice(message.as_bytes());
    input.push(0);
    input.extend_from_slice(sequence.to_string().as_bytes());
    input.push(0);
    // Snapshot is a BTreeMap, iteration order is stable.
    for (name, content) in files {
        input.extend_from_slice(name.as_bytes());
        input.push(0);
        input.extend_from_slice(content.as_bytes());
        input.push(0);
    }

    let digest = format!("{:x}", md5::compute(&input));
    digest[..SHORT_ID_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(entries: &[(&str, &str)]) -> Snapshot {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_id_is_short_lowercase_hex() {
        let id = commit_id(None, "first", &snapshot(&[("a", "1")]), 0);
        assert_eq!(id.len(), SHORT_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_same_inputs_same_id() {
        let files = snapshot(&[("a", "1"), ("b", "2")]);
        assert_eq!(
            commit_id(Some("abc1234"), "msg", &files, 3),
            commit_id(Some("abc1234"), "msg", &files, 3)
        );
    }

    #[test]
    fn test_every_input_changes_the_id() {
        let files = snapshot(&[("a", "1")]);
        let base = commit_id(Some("abc1234"), "msg", &files, 1);

        assert_ne!(base, commit_id(None, "msg", &files, 1));
        assert_ne!(base, commit_id(Some("abc1234"), "other", &files, 1));
        assert_ne!(base, commit_id(Some("abc1234"), "msg", &snapshot(&[("a", "2")]), 1));
        assert_ne!(base, commit_id(Some("abc1234"), "msg", &files, 2));
    }

    #[test]
    fn test_field_boundaries_are_not_ambiguous() {
        let left = commit_id(None, "ab", &snapshot(&[("c", "")]), 0);
        let right = commit_id(None, "a", &snapshot(&[("bc", "")]), 0);
        assert_ne!(left, right);
    }
}
