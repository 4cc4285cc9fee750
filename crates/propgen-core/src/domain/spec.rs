//! Class specification aggregate.
//!
//! A [`ClassSpec`] is the parsed form of one input specification file. It is
//! built once by the parser, immutable thereafter, and consumed exactly once
//! by the synthesizer. No instance survives past one generation run.

use std::path::PathBuf;

use super::capability::Capability;
use super::error::DomainError;
use super::property::Property;

/// Imports every generated class starts with. Further `usings` entries are
/// appended after these in encounter order; deduplication and sorting happen
/// at emission time only.
pub const DEFAULT_USINGS: [&str; 4] = [
    "System",
    "System.ComponentModel",
    "System.Collections.Generic",
    "System.Linq",
];

/// Everything the synthesizer needs to emit one class.
///
/// ## Invariants (enforced by [`ClassSpec::validate`], checked at synthesis)
///
/// 1. `namespace` is non-empty
/// 2. `class_name` is non-empty
/// 3. `output_path` is non-empty
///
/// `properties` may be empty — that yields a class with no property block.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    /// Target namespace (last occurrence in the file wins).
    pub namespace: String,
    /// Generated class name (last-wins).
    pub class_name: String,
    /// Emit the change-tracking capability block.
    pub change_tracking: bool,
    /// Emit the change-notification capability block.
    pub property_changed: bool,
    /// Properties in declaration order; order is preserved in output.
    pub properties: Vec<Property>,
    /// Absolute destination path for the generated source (last-wins,
    /// quote characters already stripped).
    pub output_path: PathBuf,
    /// Import entries, seeded with [`DEFAULT_USINGS`]; may hold duplicates
    /// until emission.
    pub usings: Vec<String>,
}

impl Default for ClassSpec {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            class_name: String::new(),
            change_tracking: false,
            property_changed: false,
            properties: Vec::new(),
            output_path: PathBuf::new(),
            usings: DEFAULT_USINGS.iter().map(|u| u.to_string()).collect(),
        }
    }
}

impl ClassSpec {
    /// Turn on the flag backing `capability`.
    pub fn enable(&mut self, capability: Capability) {
        match capability {
            Capability::ChangeTracking => self.change_tracking = true,
            Capability::PropertyChanged => self.property_changed = true,
        }
    }

    /// Enabled capabilities in fixed emission order (tracking before
    /// notification), regardless of the order they appeared in the file.
    pub fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|cap| match cap {
                Capability::ChangeTracking => self.change_tracking,
                Capability::PropertyChanged => self.property_changed,
            })
            .collect()
    }

    /// Check the required-field invariant. Called by the synthesizer before
    /// any rendering happens; a violation rejects the whole specification.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.namespace.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "namespace" });
        }
        if self.class_name.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "classname" });
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "outputfilename",
            });
        }
        Ok(())
    }
}
