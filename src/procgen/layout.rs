//! Deterministic placement of structure sites from seeds.
//!
//! A seed is a placement index. These helpers turn it into a side-local
//! (lateral, along) site; jitter comes from the seeded PRNG so the same
//! index always lands in the same spot.

use serde::{Deserialize, Serialize};

use super::rng::{Seed, SeedStream};

/// Side-local ground position in cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Site {
    /// Cells from the strait centre line, growing inland
    pub lateral: i32,
    /// Cells along the shore
    pub along: i32,
}

impl Site {
    pub const fn new(lateral: i32, along: i32) -> Self {
        Self { lateral, along }
    }
}

/// Evenly spaced slots along one axis with seeded jitter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRow {
    pub start: i32,
    pub step: i32,
    pub count: u32,
    /// Jitter span in cells, `[0, jitter)`
    pub jitter: i32,
}

impl SlotRow {
    /// Position of slot `index % count`, jittered by `stream.draw(k)`
    pub fn position(&self, index: u32, stream: &SeedStream, k: u64) -> i32 {
        let slot = (index % self.count.max(1)) as i32;
        self.start + slot * self.step + stream.int(k, 0, self.jitter)
    }

    /// Range covered by all slots including jitter
    pub fn span(&self) -> (i32, i32) {
        let last = self.start + (self.count.max(1) as i32 - 1) * self.step;
        (self.start, last + self.jitter.max(0))
    }
}

/// Two-axis grid of slots; seed `i` maps to `(i / lateral.count, i % lateral.count)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGrid {
    pub along: SlotRow,
    pub lateral: SlotRow,
}

impl SlotGrid {
    pub fn len(&self) -> u32 {
        self.along.count * self.lateral.count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Site for `seed`, with lateral measured from the shoreline
    pub fn site(&self, seed: Seed, stream: &SeedStream) -> Site {
        let cols = self.lateral.count.max(1);
        let along = self.along.position(seed / cols, stream, 0);
        let lateral = self.lateral.position(seed % cols, stream, 1);
        Site::new(lateral, along)
    }
}

/// Unjittered along-shore slots for singular landmarks.
///
/// `along = start + (seed mod count) * step`, so a seed picks a slot
/// directly and tests can aim a landmark at a known position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkSlots {
    pub start: i32,
    pub step: i32,
    pub count: u32,
}

impl LandmarkSlots {
    pub fn along(&self, seed: Seed) -> i32 {
        self.start + (seed % self.count.max(1)) as i32 * self.step
    }

    /// Seed whose slot is nearest to `along`
    pub fn seed_for(&self, along: i32) -> Seed {
        let step = self.step.max(1);
        let slot = ((along - self.start) as f32 / step as f32).round() as i64;
        slot.clamp(0, self.count.max(1) as i64 - 1) as Seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_row_positions() {
        let row = SlotRow { start: -182, step: 40, count: 10, jitter: 10 };
        let stream = SeedStream::new(0, 1);
        for i in 0..10 {
            let p = row.position(i, &stream, 0);
            let base = -182 + 40 * i as i32;
            assert!((base..base + 10).contains(&p));
        }
    }

    #[test]
    fn test_slot_row_wraps_index() {
        let row = SlotRow { start: 0, step: 5, count: 3, jitter: 0 };
        let stream = SeedStream::new(0, 0);
        assert_eq!(row.position(4, &stream, 0), 5);
        assert_eq!(row.span(), (0, 10));
    }

    #[test]
    fn test_grid_site_mapping() {
        let grid = SlotGrid {
            along: SlotRow { start: -176, step: 38, count: 10, jitter: 0 },
            lateral: SlotRow { start: 64, step: 38, count: 2, jitter: 0 },
        };
        let stream = SeedStream::new(0, 0);
        assert_eq!(grid.len(), 20);
        assert_eq!(grid.site(0, &stream), Site::new(64, -176));
        assert_eq!(grid.site(1, &stream), Site::new(102, -176));
        assert_eq!(grid.site(5, &stream), Site::new(102, -176 + 2 * 38));
    }

    #[test]
    fn test_landmark_slots() {
        let slots = LandmarkSlots { start: -184, step: 8, count: 47 };
        assert_eq!(slots.along(25), 16);
        assert_eq!(slots.along(18), -40);
        assert_eq!(slots.along(25 + 47), 16);
        assert_eq!(slots.seed_for(16), 25);
        assert_eq!(slots.seed_for(-40), 18);
        assert_eq!(slots.seed_for(10_000), 46);
    }
}
