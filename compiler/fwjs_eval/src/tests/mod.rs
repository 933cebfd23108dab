//! Crate-level unit tests for modules without their own test directory.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
