//! Consolidated test utilities for virtual-git
//!
//! Integration tests drive the real binary against throwaway data directories.

pub mod assertions;
pub mod fixtures;
pub mod repository;
