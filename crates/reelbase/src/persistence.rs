//! Outcome types reported by mutating collection operations.

use std::fmt;

/// Whether a mutation reached the backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    /// The collection file was rewritten with the new state
    Persisted,
    /// The change is only held in memory because the write-back failed
    InMemoryOnly {
        /// Description of the write failure
        reason: String,
    },
}

impl Persistence {
    /// Returns true if the change reached the backing file.
    pub fn is_persisted(&self) -> bool { matches!(*self, Self::Persisted) }
}

impl fmt::Display for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Persisted => write!(f, "persisted"),
            Self::InMemoryOnly {
                ref reason,
            } => write!(f, "in memory only ({})", reason),
        }
    }
}

/// The result of a successful mutation: the operation's value plus its persistence outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<T> {
    /// Value produced by the operation
    pub value:       T,
    /// Whether the change was written to disk
    pub persistence: Persistence,
}

impl<T> Mutation<T> {
    /// Creates a mutation outcome.
    pub const fn new(value: T, persistence: Persistence) -> Self {
        Self {
            value,
            persistence,
        }
    }

    /// Returns true if the change reached the backing file.
    pub fn is_durable(&self) -> bool { self.persistence.is_persisted() }

    /// Discards the persistence outcome and returns the value.
    pub fn into_value(self) -> T { self.value }
}
