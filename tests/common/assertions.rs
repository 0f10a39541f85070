//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

pub fn on_branch(name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("On branch {name}"))
}

pub fn clean_tree() -> impl Predicate<str> {
    predicates::str::contains("nothing to commit, working tree clean")
}

pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(message.to_string()))
}

/// Status line such as `new file:   a.txt`
pub fn has_status(description: &str, filename: &str) -> impl Predicate<str> {
    let label = format!("{description}:");
    predicates::str::contains(format!("{label:<12}{filename}"))
}
