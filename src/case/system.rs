//! System iterations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alias::AliasTable;
use crate::case::Case;
use crate::record::SystemRecord;
use crate::resolver::PromotedToAbsoluteMap;

/// One recorded iteration of a system.
///
/// Inputs resolve through the input half of the alias table; outputs and
/// residuals through the output half.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemCase {
    case: Case,
    inputs: PromotedToAbsoluteMap,
    outputs: PromotedToAbsoluteMap,
    residuals: PromotedToAbsoluteMap,
}

impl SystemCase {
    #[must_use]
    pub fn new(case: Case, record: SystemRecord, prom2abs: Arc<AliasTable>) -> Self {
        let SystemRecord {
            inputs,
            outputs,
            residuals,
        } = record;

        Self {
            case,
            inputs: PromotedToAbsoluteMap::inputs(inputs, Arc::clone(&prom2abs)),
            outputs: PromotedToAbsoluteMap::outputs(outputs, Arc::clone(&prom2abs)),
            residuals: PromotedToAbsoluteMap::outputs(residuals, prom2abs),
        }
    }

    pub const fn base(&self) -> &Case {
        &self.case
    }

    pub const fn inputs(&self) -> &PromotedToAbsoluteMap {
        &self.inputs
    }

    pub const fn outputs(&self) -> &PromotedToAbsoluteMap {
        &self.outputs
    }

    pub const fn residuals(&self) -> &PromotedToAbsoluteMap {
        &self.residuals
    }
}
