//! Optional cross-cutting capabilities a generated class may opt into.
//!
//! Each capability contributes an interface declaration to the class base
//! list, private state, per-property setter logic, and an implementation
//! block. The set is closed: matching is done against a fixed enumeration
//! with an ASCII case fold, never a dynamic lookup.

use std::fmt;

/// A cross-cutting behavior of the generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `IChangeTracking`: original-value snapshots plus an aggregate
    /// changed flag.
    ChangeTracking,
    /// `INotifyPropertyChanged`: raise a notification on every setter call.
    PropertyChanged,
}

impl Capability {
    /// Every capability, in emission order. The base-list clause and the
    /// implementation blocks both follow this order.
    pub const ALL: [Capability; 2] = [Capability::ChangeTracking, Capability::PropertyChanged];

    /// The C# interface identifier emitted for this capability.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::ChangeTracking => "IChangeTracking",
            Self::PropertyChanged => "INotifyPropertyChanged",
        }
    }

    /// Match a specification token against the fixed capability set,
    /// ignoring ASCII case. Returns `None` for anything unrecognized.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|cap| token.eq_ignore_ascii_case(cap.identifier()))
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
