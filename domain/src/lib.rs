//! Domain library for the param-blog service.
//!
//! This crate holds the domain types, ports (traits), and error definitions,
//! plus the in-memory storage adapter used for tests and local runs. Keep
//! transport and IO concerns out of this crate.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A value persisted by the service: the caller's input with a random
/// alphanumeric suffix appended.
///
/// Immutable once created; the storage collection only ever appends these.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StoredValue(String);

impl StoredValue {
    /// Wrap a string. No validation: empty strings, arbitrary length, and
    /// arbitrary characters are all accepted.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for StoredValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Storage port for the append-only collection of stored values.
///
/// Contract: `store` appends and returns the value unchanged (identity
/// pass-through); `retrieve` returns the most recently appended value and
/// fails with [`CoreError::EmptyStorage`] when nothing has been stored yet.
pub trait ParamStorage: Send + Sync {
    fn store(&self, value: StoredValue) -> Result<StoredValue, CoreError>;
    fn retrieve(&self) -> Result<StoredValue, CoreError>;
}

/// Suffix generator interface; the production implementation draws from a
/// CSPRNG, tests substitute a fixed one.
pub trait SuffixGenerator: Send + Sync {
    fn next_suffix(&self) -> String;
}

/// Core domain errors (no external error crates to keep deps light).
#[derive(Debug)]
pub enum CoreError {
    /// Retrieval attempted on a collection with zero elements.
    EmptyStorage,
    Storage(String),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::EmptyStorage => write!(f, "empty storage"),
            CoreError::Storage(msg) => write!(f, "storage error: {}", msg),
        }
    }
}

impl Error for CoreError {}

/// Return a short about/version line for the binary to print.
pub fn about() -> String {
    // Use env! at compile time; fallback literals kept minimal.
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{} — domain library loaded", pkg, ver)
}

pub mod adapters;
pub mod service;
pub mod suffix;
