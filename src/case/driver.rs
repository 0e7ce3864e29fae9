//! Driver iterations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alias::AliasTable;
use crate::case::Case;
use crate::record::DriverRecord;
use crate::resolver::PromotedToAbsoluteMap;

/// One recorded iteration of a driver.
///
/// Every group is keyed by output names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverCase {
    case: Case,
    desvars: PromotedToAbsoluteMap,
    responses: PromotedToAbsoluteMap,
    objectives: PromotedToAbsoluteMap,
    constraints: PromotedToAbsoluteMap,
    sysincludes: PromotedToAbsoluteMap,
}

impl DriverCase {
    #[must_use]
    pub fn new(case: Case, record: DriverRecord, prom2abs: Arc<AliasTable>) -> Self {
        let DriverRecord {
            desvars,
            responses,
            objectives,
            constraints,
            sysincludes,
        } = record;

        Self {
            case,
            desvars: PromotedToAbsoluteMap::outputs(desvars, Arc::clone(&prom2abs)),
            responses: PromotedToAbsoluteMap::outputs(responses, Arc::clone(&prom2abs)),
            objectives: PromotedToAbsoluteMap::outputs(objectives, Arc::clone(&prom2abs)),
            constraints: PromotedToAbsoluteMap::outputs(constraints, Arc::clone(&prom2abs)),
            sysincludes: PromotedToAbsoluteMap::outputs(sysincludes, prom2abs),
        }
    }

    pub const fn base(&self) -> &Case {
        &self.case
    }

    /// Design variables.
    pub const fn desvars(&self) -> &PromotedToAbsoluteMap {
        &self.desvars
    }

    pub const fn responses(&self) -> &PromotedToAbsoluteMap {
        &self.responses
    }

    pub const fn objectives(&self) -> &PromotedToAbsoluteMap {
        &self.objectives
    }

    pub const fn constraints(&self) -> &PromotedToAbsoluteMap {
        &self.constraints
    }

    /// Additional system variables the driver was asked to record.
    pub const fn sysincludes(&self) -> &PromotedToAbsoluteMap {
        &self.sysincludes
    }
}
