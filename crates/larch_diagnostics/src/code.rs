//! String identifiers for diagnostic rules.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The identifier of one diagnostic rule, e.g. `"unused-variable"`.
///
/// Rule implementations typically declare their code as a constant via
/// [`RuleCode::from_static`]; dynamically configured codes can be built with
/// [`RuleCode::new`]. Codes are compared and hashed by their string value.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct RuleCode(Cow<'static, str>);

impl RuleCode {
    /// Creates a rule code from a static string, usable in `const` contexts.
    pub const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// Creates a rule code from an owned or static string.
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
