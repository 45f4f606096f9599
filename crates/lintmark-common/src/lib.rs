//! Common types shared by the lintmark crates.
//!
//! This crate provides:
//! - Rule identity (`RuleId`) and the built-in rule namespace

// Rule identifiers used as lookup keys across the workspace
pub mod rule_id;
pub use rule_id::{RuleId, STANDARD_NAMESPACE};
