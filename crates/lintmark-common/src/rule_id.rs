//! Rule identifiers.
//!
//! A rule is named `<namespace>:<name>`, e.g. `standard:function-signature`.
//! The identifier is an opaque key: it is compared by exact text and is never
//! validated here. Whether `foo` or `a:b:c` is a legal rule id is for the rule
//! provider to decide.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Namespace of the rules shipped with the standard rule set.
pub const STANDARD_NAMESPACE: &str = "standard";

/// Identifier of a lint rule.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    pub fn new(id: impl Into<String>) -> Self {
        RuleId(id.into())
    }

    /// Shorthand for a rule in the `standard` namespace.
    pub fn standard(name: &str) -> Self {
        RuleId(format!("{STANDARD_NAMESPACE}:{name}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the first `:`, if there is one.
    pub fn namespace(&self) -> Option<&str> {
        self.0.split_once(':').map(|(namespace, _)| namespace)
    }

    /// The part after the first `:`. An id without a namespace is all name.
    pub fn name(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(_, name)| name)
    }

    pub fn is_standard(&self) -> bool {
        self.namespace() == Some(STANDARD_NAMESPACE)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        RuleId(id.to_string())
    }
}

impl From<String> for RuleId {
    fn from(id: String) -> Self {
        RuleId(id)
    }
}

impl AsRef<str> for RuleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by `RuleId` be queried with a plain `&str`.
impl Borrow<str> for RuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
