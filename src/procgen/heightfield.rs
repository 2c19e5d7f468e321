//! Closed-form terrain elevation shared by every land generator.

use serde::{Deserialize, Serialize};

/// Terrain elevation as a pure function of position.
///
/// Inside the coastal band the ground is flat at `coast_height`. Beyond it a
/// power ramp climbs inland, offset by a slow along-shore swell and a fine
/// lateral ripple. The ramp's slope never drops below the ripple's maximum
/// slope, so elevation keeps growing with lateral distance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightField {
    /// Width of the flat strip behind the quay, in cells
    pub coast_band: i32,
    /// Elevation of the flat strip, in cells
    pub coast_height: i32,
}

/// Offset added to the ramp input so the hillside starts with a step
const RAMP_OFFSET: f64 = 14.0;
const RAMP_RATE: f64 = 0.04;
const RAMP_GAIN: f64 = 5.0;
const RAMP_EXPONENT: f64 = 1.2;
const SWELL_FREQUENCY: f64 = 0.02;
const SWELL_AMPLITUDE: f64 = 8.0;
const RIPPLE_FREQUENCY: f64 = 0.1;
const RIPPLE_AMPLITUDE: f64 = 1.5;

impl Default for HeightField {
    fn default() -> Self {
        Self {
            coast_band: 40,
            coast_height: 2,
        }
    }
}

impl HeightField {
    pub fn new(coast_band: i32, coast_height: i32) -> Self {
        Self { coast_band, coast_height }
    }

    /// Elevation in cells at `lateral` cells inland from the shoreline and
    /// `along` cells along the shore.
    ///
    /// Never below `coast_height`; non-decreasing in `lateral` past the band.
    pub fn elevation(&self, lateral: i32, along: i32) -> i32 {
        if lateral < self.coast_band {
            return self.coast_height;
        }
        let d = lateral as f64;
        let inland = d - self.coast_band as f64 + RAMP_OFFSET;
        let ramp = RAMP_GAIN * (inland * RAMP_RATE).powf(RAMP_EXPONENT);
        let swell = (along as f64 * SWELL_FREQUENCY).sin() * SWELL_AMPLITUDE;
        let ripple = (d * RIPPLE_FREQUENCY).cos() * RIPPLE_AMPLITUDE;
        let h = (self.coast_height as f64 + ramp + swell + ripple).floor() as i32;
        h.max(self.coast_height)
    }

    /// Lowest and highest elevation over an inclusive lateral/along rectangle
    pub fn range_over(&self, lateral: (i32, i32), along: (i32, i32)) -> (i32, i32) {
        let mut lo = i32::MAX;
        let mut hi = i32::MIN;
        for l in lateral.0..=lateral.1 {
            for a in along.0..=along.1 {
                let h = self.elevation(l, a);
                lo = lo.min(h);
                hi = hi.max(h);
            }
        }
        if lo > hi {
            (self.coast_height, self.coast_height)
        } else {
            (lo, hi)
        }
    }
}
