//! Plan-view hull shapes shared by the boat generators.
//!
//! Boats are built in their own frame: x across the beam, z along the keel
//! with the bow toward +z, y up from the waterline.

/// Narrowing toward one end of the hull.
///
/// Past `start` cells from amidships the width falls to
/// `beam * (1 - depth * t^exponent)`, where `t` runs from 0 at `start` to 1
/// at the hull's end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Taper {
    pub start: i32,
    pub exponent: f32,
    pub depth: f32,
}

impl Taper {
    pub const fn new(start: i32, exponent: f32, depth: f32) -> Self {
        Self { start, exponent, depth }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullProfile {
    pub length: i32,
    pub beam: f32,
    pub bow: Option<Taper>,
    pub stern: Option<Taper>,
    /// Floor on the tapered width at the tips
    pub min_width: f32,
}

impl HullProfile {
    /// Half-length; stations run over `-half..length - half`
    #[inline]
    pub fn half(&self) -> i32 {
        self.length / 2
    }

    /// Full width at station z, before rounding
    pub fn width(&self, z: i32) -> f32 {
        let half = self.half() as f32;
        let (taper, dist) = if z >= 0 { (self.bow, z) } else { (self.stern, -z) };
        let w = match taper {
            Some(t) if dist > t.start => {
                let span = (half - t.start as f32).max(1.0);
                let p = ((dist - t.start) as f32 / span).min(1.0);
                self.beam * (1.0 - t.depth * p.powf(t.exponent))
            }
            _ => self.beam,
        };
        w.max(self.min_width)
    }

    /// Half-width in whole cells at station z
    #[inline]
    pub fn half_width(&self, z: i32) -> i32 {
        (self.width(z).floor() as i32) / 2
    }

    /// `(z, half_width)` for every station from stern to bow
    pub fn stations(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let half = self.half();
        (-half..self.length - half).map(move |z| (z, self.half_width(z)))
    }

    #[inline]
    pub fn bow_z(&self) -> i32 {
        self.length - self.half() - 1
    }

    #[inline]
    pub fn stern_z(&self) -> i32 {
        -self.half()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ferry() -> HullProfile {
        HullProfile {
            length: 64,
            beam: 16.0,
            bow: Some(Taper::new(19, 1.5, 1.0)),
            stern: Some(Taper::new(19, 1.5, 1.0)),
            min_width: 2.0,
        }
    }

    #[test]
    fn test_full_beam_amidships() {
        let h = ferry();
        assert_eq!(h.half_width(0), 8);
        assert_eq!(h.half_width(-10), 8);
    }

    #[test]
    fn test_tapers_toward_tips() {
        let h = ferry();
        let mut prev = h.half_width(19);
        for z in 20..=h.bow_z() {
            let w = h.half_width(z);
            assert!(w <= prev);
            prev = w;
        }
        assert_eq!(h.half_width(h.bow_z()), 1);
    }

    #[test]
    fn test_blunt_stern() {
        let tanker = HullProfile {
            length: 160,
            beam: 22.0,
            bow: Some(Taper::new(48, 2.0, 1.0)),
            stern: Some(Taper::new(64, 3.0, 0.5)),
            min_width: 2.0,
        };
        assert!(tanker.half_width(tanker.stern_z()) >= 5);
        assert!(tanker.half_width(tanker.bow_z()) <= 2);
    }

    #[test]
    fn test_stations_cover_length() {
        let h = ferry();
        let stations: Vec<_> = h.stations().collect();
        assert_eq!(stations.len(), 64);
        assert_eq!(stations[0].0, -32);
        assert_eq!(stations[63].0, 31);
    }
}
