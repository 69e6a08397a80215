//! Name roster state management.
//!
//! An ordered collection of unique display names. Insertion order is
//! significant: it determines segment position and color assignment on
//! the wheel. The roster is never persisted; it lives for the lifetime
//! of the application.

/// Minimum number of entries required before a spin is permitted.
pub const MIN_SPIN_ENTRIES: usize = 2;

/// Ordered list of unique names backing the wheel.
#[derive(Debug, Clone, Default)]
pub struct NameRoster {
    names: Vec<String>,
}

impl NameRoster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name to the end of the roster.
    ///
    /// The input is trimmed first. Returns false without mutating if the
    /// trimmed name is empty or already present (exact string match).
    pub fn add(&mut self, raw: &str) -> bool {
        let name = raw.trim();
        if name.is_empty() || self.names.iter().any(|n| n == name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove the entry at `index`, preserving the relative order of the
    /// rest. Returns the removed name, or None if out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.names.len() {
            Some(self.names.remove(index))
        } else {
            None
        }
    }

    /// Get the name at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// All names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of names in the roster.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether enough names are present to spin the wheel.
    pub fn can_spin(&self) -> bool {
        self.names.len() >= MIN_SPIN_ENTRIES
    }
}
