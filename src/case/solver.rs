//! Solver iterations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alias::AliasTable;
use crate::case::Case;
use crate::record::SolverRecord;
use crate::resolver::PromotedToAbsoluteMap;

/// One recorded iteration of a solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverCase {
    case: Case,
    abs_err: f64,
    rel_err: f64,
    outputs: PromotedToAbsoluteMap,
    residuals: PromotedToAbsoluteMap,
}

impl SolverCase {
    #[must_use]
    pub fn new(case: Case, record: SolverRecord, prom2abs: Arc<AliasTable>) -> Self {
        let SolverRecord {
            abs_err,
            rel_err,
            outputs,
            residuals,
        } = record;

        Self {
            case,
            abs_err,
            rel_err,
            outputs: PromotedToAbsoluteMap::outputs(outputs, Arc::clone(&prom2abs)),
            residuals: PromotedToAbsoluteMap::outputs(residuals, prom2abs),
        }
    }

    pub const fn base(&self) -> &Case {
        &self.case
    }

    /// Absolute residual norm at this iteration.
    pub const fn abs_err(&self) -> f64 {
        self.abs_err
    }

    /// Residual norm relative to the first iteration.
    pub const fn rel_err(&self) -> f64 {
        self.rel_err
    }

    pub const fn outputs(&self) -> &PromotedToAbsoluteMap {
        &self.outputs
    }

    pub const fn residuals(&self) -> &PromotedToAbsoluteMap {
        &self.residuals
    }
}
