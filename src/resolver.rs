//! Promoted-name access to one recorded variable group.
//!
//! A lookup is two indirections: promoted name to absolute name through
//! the alias table half selected by [`Direction`], then absolute name to
//! value through the group's recorded values. Nothing is checked up
//! front; a resolver over missing or partial data is still constructed
//! and fails on the first lookup that cannot be satisfied.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::alias::AliasTable;
use crate::direction::Direction;
use crate::error::LookupError;
use crate::record::RecordValues;
use crate::value::Value;

/// Resolves promoted variable names against a group of recorded values.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mdao_cases::{AliasTable, Direction, PromotedToAbsoluteMap, RecordValues, Value};
///
/// let prom2abs = Arc::new(AliasTable::new().with(Direction::Output, "x", ["comp.x"]));
/// let values: RecordValues = [("comp.x", 3.5)].into_iter().collect();
///
/// let outputs = PromotedToAbsoluteMap::new(Some(values), prom2abs, Direction::Output);
/// assert_eq!(outputs.get("x").unwrap(), &Value::Float(3.5));
/// assert!(outputs.get("y").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotedToAbsoluteMap {
    values: Option<RecordValues>,
    prom2abs: Arc<AliasTable>,
    direction: Direction,
}

impl PromotedToAbsoluteMap {
    #[must_use]
    pub fn new(
        values: Option<RecordValues>,
        prom2abs: Arc<AliasTable>,
        direction: Direction,
    ) -> Self {
        if values.is_none() {
            trace!(%direction, "variable group has no recorded data");
        }
        Self {
            values,
            prom2abs,
            direction,
        }
    }

    /// Resolver keyed by output names, the common case.
    #[must_use]
    pub fn outputs(values: Option<RecordValues>, prom2abs: Arc<AliasTable>) -> Self {
        Self::new(values, prom2abs, Direction::Output)
    }

    /// Resolver keyed by input names.
    #[must_use]
    pub fn inputs(values: Option<RecordValues>, prom2abs: Arc<AliasTable>) -> Self {
        Self::new(values, prom2abs, Direction::Input)
    }

    /// Looks up the value recorded for a promoted name.
    ///
    /// # Errors
    ///
    /// - `LookupError::MissingAlias` if the promoted name has no usable
    ///   entry in the selected half of the alias table.
    /// - `LookupError::NoData` if the group has no recorded values.
    /// - `LookupError::MissingAbsolute` if the resolved absolute name was
    ///   not recorded.
    pub fn get(&self, promoted: &str) -> Result<&Value, LookupError> {
        let absolute = self.absolute_name(promoted)?;

        let Some(values) = &self.values else {
            debug!(
                promoted,
                absolute,
                direction = %self.direction,
                "lookup on group without data"
            );
            return Err(LookupError::NoData {
                promoted: promoted.to_string(),
            });
        };

        values.get(absolute).ok_or_else(|| {
            debug!(promoted, absolute, direction = %self.direction, "absolute name not recorded");
            LookupError::MissingAbsolute {
                promoted: promoted.to_string(),
                absolute: absolute.to_string(),
            }
        })
    }

    /// Resolves a promoted name to its absolute name without touching values.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::MissingAlias` if the selected half of the alias
    /// table has no usable entry for `promoted`.
    pub fn absolute_name(&self, promoted: &str) -> Result<&str, LookupError> {
        self.prom2abs.resolve(self.direction, promoted).ok_or_else(|| {
            debug!(promoted, direction = %self.direction, "no alias for promoted name");
            LookupError::MissingAlias {
                name: promoted.to_string(),
                direction: self.direction,
            }
        })
    }

    /// Returns true if [`PromotedToAbsoluteMap::get`] would succeed.
    pub fn contains(&self, promoted: &str) -> bool {
        self.resolve_quiet(promoted).is_some()
    }

    pub const fn has_data(&self) -> bool {
        self.values.is_some()
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The raw recorded values, keyed by absolute name.
    pub const fn values(&self) -> Option<&RecordValues> {
        self.values.as_ref()
    }

    pub fn alias_table(&self) -> &AliasTable {
        &self.prom2abs
    }

    /// Promoted names and values for every alias that resolves to recorded data.
    ///
    /// Names are sorted so iteration order is stable.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.sorted_promoted()
            .into_iter()
            .filter_map(move |name| self.resolve_quiet(name).map(|v| (name, v)))
    }

    /// Promoted names in the selected half that would fail to resolve.
    ///
    /// Construction never validates; this is for callers that want to check
    /// coverage eagerly.
    #[must_use]
    pub fn unresolved(&self) -> Vec<&str> {
        self.sorted_promoted()
            .into_iter()
            .filter(|name| self.resolve_quiet(name).is_none())
            .collect()
    }

    fn sorted_promoted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .prom2abs
            .half(self.direction)
            .keys()
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }

    // Same path as `get`, without the diagnostics.
    fn resolve_quiet(&self, promoted: &str) -> Option<&Value> {
        let absolute = self.prom2abs.resolve(self.direction, promoted)?;
        self.values.as_ref()?.get(absolute)
    }
}
