use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};

/// Tunables of the centerline pipeline, in section length units (metres).
///
/// Deserializes with defaults for any missing field, so a host can send
/// `{"target_length": 0.25}` and keep everything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterlineConfig {
    /// Longest allowed distance between consecutive centerline points.
    pub target_length: f64,
    /// Largest wall thickness accepted as a perpendicular between boundaries.
    pub max_thickness: f64,
    /// Same bound for the cell-to-cell pass that finds the middle web.
    pub mid_web_max_thickness: f64,
    /// Shorter perpendiculars are treated as a vertex touching its own edge.
    pub min_thickness: f64,
    /// Slack on the "foot lies within the edge" test.
    pub span_tolerance: f64,
    /// Decimal places used by the collinearity test of the member classifier.
    pub collinear_decimals: i32,
}

impl Default for CenterlineConfig {
    fn default() -> Self {
        Self {
            target_length: 0.3,
            max_thickness: 1.0,
            mid_web_max_thickness: 0.5,
            min_thickness: 1e-4,
            span_tolerance: 1e-5,
            collinear_decimals: 5,
        }
    }
}

impl CenterlineConfig {
    /// Checks that every length is positive and finite, and that the target
    /// element length is no shorter than the minimum wall thickness.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("target_length", self.target_length),
            ("max_thickness", self.max_thickness),
            ("mid_web_max_thickness", self.mid_web_max_thickness),
            ("min_thickness", self.min_thickness),
            ("span_tolerance", self.span_tolerance),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "{name} must be positive, got {value}"
                ))
                .into());
            }
        }
        if self.min_thickness > self.max_thickness {
            return Err(OperationError::InvalidInput(format!(
                "min_thickness {} exceeds max_thickness {}",
                self.min_thickness, self.max_thickness
            ))
            .into());
        }
        if self.target_length < self.min_thickness {
            return Err(OperationError::InvalidInput(format!(
                "target_length {} is below min_thickness {}",
                self.target_length, self.min_thickness
            ))
            .into());
        }
        if !(0..=12).contains(&self.collinear_decimals) {
            return Err(OperationError::InvalidInput(format!(
                "collinear_decimals must be within 0..=12, got {}",
                self.collinear_decimals
            ))
            .into());
        }
        Ok(())
    }
}
