use crate::{
    foundation::core::Point,
    foundation::error::{ScratchError, ScratchResult},
    surface::buffer::Surface,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Scratch interaction parameters.
pub struct ScratchParams {
    /// Radius of the erase disc in pixels.
    #[serde(default = "default_erase_radius")]
    pub erase_radius_px: f64,
    /// Erased fraction above which the reveal transition fires
    /// (strictly greater-than).
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
}

fn default_erase_radius() -> f64 {
    20.0
}

fn default_reveal_threshold() -> f64 {
    0.45
}

impl Default for ScratchParams {
    fn default() -> Self {
        Self {
            erase_radius_px: default_erase_radius(),
            reveal_threshold: default_reveal_threshold(),
        }
    }
}

impl ScratchParams {
    /// Validate parameter invariants.
    pub fn validate(&self) -> ScratchResult<()> {
        if !self.erase_radius_px.is_finite() || self.erase_radius_px <= 0.0 {
            return Err(ScratchError::validation(
                "erase_radius_px must be finite and > 0",
            ));
        }
        if !self.reveal_threshold.is_finite()
            || self.reveal_threshold <= 0.0
            || self.reveal_threshold >= 1.0
        {
            return Err(ScratchError::validation(
                "reveal_threshold must be within (0, 1)",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Outcome of processing one pointer sample.
pub struct ScratchOutcome {
    /// Sample position in surface-local coordinates.
    pub local: Point,
    /// Erased fraction after this sample's erase, from a fresh full scan.
    pub erased_fraction: f64,
    /// Whether the erased fraction now exceeds the reveal threshold.
    ///
    /// This reports the condition only; firing the transition exactly once
    /// is the caller's job.
    pub crossed_threshold: bool,
}

/// Process one pointer sample: erase a disc at the local position, then
/// recompute the erased fraction.
pub fn scratch_sample(surface: &mut Surface, params: &ScratchParams, local: Point) -> ScratchOutcome {
    surface.erase_disc(local, params.erase_radius_px);
    let erased_fraction = surface.erased_fraction();
    ScratchOutcome {
        local,
        erased_fraction,
        crossed_threshold: erased_fraction > params.reveal_threshold,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scratch/tracker.rs"]
mod tests;
