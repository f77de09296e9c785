use glam::DVec2;

use crate::core::params::{self, ParamError};

/// A single state mutation, applied by `Orrery::apply`.
/// Input handlers build these instead of touching state directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Wheel zoom anchored at a surface-relative pointer position.
    Zoom { pointer: DVec2, delta_y: f64 },
    /// Drag-to-pan.
    Pan(PanCommand),
    /// Edit one body's parameters.
    Edit(EditCommand),
    /// Restore every body from the baseline.
    Reset,
    /// Set the per-frame speed multiplier.
    SetSpeed(f64),
    /// Back to unit zoom and no pan.
    ResetView,
    /// The drawing surface changed size.
    Resize { width: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanCommand {
    Begin(DVec2),
    Move(DVec2),
    End,
}

/// Candidate parameters for one body.
///
/// Numeric fields hold the parse result of the host's text fields. Each
/// field is applied only if it parsed and passes its invariant; the color is
/// applied as given.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    pub index: usize,
    pub axis: Result<f64, ParamError>,
    pub eccentricity: Result<f64, ParamError>,
    pub period: Result<f64, ParamError>,
    pub color: String,
}

impl EditCommand {
    /// Build an edit from already-numeric candidates.
    pub fn new(index: usize, axis: f64, eccentricity: f64, period: f64, color: impl Into<String>) -> Self {
        Self {
            index,
            axis: Ok(axis),
            eccentricity: Ok(eccentricity),
            period: Ok(period),
            color: color.into(),
        }
    }

    /// Build an edit from raw form text.
    pub fn from_fields(index: usize, axis: &str, eccentricity: &str, period: &str, color: &str) -> Self {
        Self {
            index,
            axis: params::parse_number(axis),
            eccentricity: params::parse_number(eccentricity),
            period: params::parse_number(period),
            color: color.to_string(),
        }
    }
}
