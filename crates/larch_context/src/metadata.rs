//! Identity-derived module metadata supplied by the external configuration
//! subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The module type of a document within its project.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ModuleType {
    /// A shared library module.
    Common,
    /// An object module.
    Object,
    /// A form module.
    Form,
    /// The document is not described by the project metadata.
    Unknown,
}

/// How a configuration supports (and restricts editing of) a module.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SupportVariant {
    /// The module is not covered by vendor support.
    NotSupported,
    /// Supported and editable.
    Editable,
    /// Supported with editing locked.
    Locked,
}

/// Identifies one configuration in the project metadata.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ConfigurationId(String);

impl ConfigurationId {
    /// Creates a configuration identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigurationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
