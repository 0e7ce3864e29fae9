//! Promoted-to-absolute alias table.
//!
//! A model exposes short promoted names at its top level while the
//! recorder stores values under fully-qualified absolute names. The table
//! maps each promoted name to the absolute names it stands for, kept in
//! separate halves for inputs and outputs since one promoted name can
//! refer to several connected inputs but only one output.
//!
//! The JSON shape matches what recorders write:
//!
//! ```json
//! { "input": { "x": ["comp1.x", "comp2.x"] }, "output": { "y": ["comp1.y"] } }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Absolute names a promoted name stands for.
///
/// The first name is canonical and is the one resolved against recorded
/// values. An empty entry resolves to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasEntry(Vec<String>);

impl AliasEntry {
    #[must_use]
    pub fn new<I, S>(absolute_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(absolute_names.into_iter().map(Into::into).collect())
    }

    /// The canonical absolute name, if any.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Maps promoted names to absolute names, split by direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTable {
    #[serde(default)]
    input: HashMap<String, AliasEntry>,

    #[serde(default)]
    output: HashMap<String, AliasEntry>,
}

impl AliasTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `promoted` in the given half.
    ///
    /// Returns the previous entry, if there was one.
    pub fn insert<I, S>(
        &mut self,
        direction: Direction,
        promoted: impl Into<String>,
        absolute_names: I,
    ) -> Option<AliasEntry>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.half_mut(direction)
            .insert(promoted.into(), AliasEntry::new(absolute_names))
    }

    /// Builder-style variant of [`AliasTable::insert`].
    #[must_use]
    pub fn with<I, S>(
        mut self,
        direction: Direction,
        promoted: impl Into<String>,
        absolute_names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(direction, promoted, absolute_names);
        self
    }

    /// The half of the table for one direction.
    pub fn half(&self, direction: Direction) -> &HashMap<String, AliasEntry> {
        match direction {
            Direction::Input => &self.input,
            Direction::Output => &self.output,
        }
    }

    fn half_mut(&mut self, direction: Direction) -> &mut HashMap<String, AliasEntry> {
        match direction {
            Direction::Input => &mut self.input,
            Direction::Output => &mut self.output,
        }
    }

    pub fn entry(&self, direction: Direction, promoted: &str) -> Option<&AliasEntry> {
        self.half(direction).get(promoted)
    }

    /// Resolves a promoted name to its canonical absolute name.
    pub fn resolve(&self, direction: Direction, promoted: &str) -> Option<&str> {
        self.entry(direction, promoted).and_then(AliasEntry::first)
    }

    pub fn len(&self, direction: Direction) -> usize {
        self.half(direction).len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty() && self.output.is_empty()
    }
}
