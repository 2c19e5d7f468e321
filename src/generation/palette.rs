//! Fixed color tables consumed by the generators.
//!
//! Mode only ever swaps a [`LightTint`]'s day color for its night color;
//! every other color here is the same by day and by night.

use crate::voxel::Rgb;

/// Color pair for a voxel that glows at night.
///
/// By day the voxel renders opaque in `day` (dark glass, unlit lamp); at
/// night it moves to the light stream in `night`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightTint {
    pub day: Rgb,
    pub night: Rgb,
}

impl LightTint {
    pub const fn new(day: Rgb, night: Rgb) -> Self {
        Self { day, night }
    }
}

/// House windows: slate glass, warm lamplight
pub const WARM_WINDOW: LightTint = LightTint::new(Rgb::hex(0x1e293b), Rgb::hex(0xfef08a));
/// Apartment windows
pub const APARTMENT_WINDOW: LightTint = LightTint::new(Rgb::hex(0x1f2937), Rgb::hex(0xfde68a));
/// Shop fronts
pub const SHOP_WINDOW: LightTint = LightTint::new(Rgb::hex(0x334155), Rgb::hex(0xfef3c7));
/// Mosque central bays
pub const PRAYER_HALL: LightTint = LightTint::new(Rgb::hex(0x1e293b), Rgb::hex(0xfcd34d));
/// Mosque side bays
pub const SIDE_BAY: LightTint = LightTint::new(Rgb::hex(0x1e293b), Rgb::hex(0xfbbf24));
/// Minaret balcony lamps
pub const MINARET_LAMP: LightTint = LightTint::new(Rgb::hex(0xe2e8f0), Rgb::hex(0xfde68a));
/// Aviation beacons on the bridge towers
pub const BEACON: LightTint = LightTint::new(Rgb::hex(0xb91c1c), Rgb::hex(0xef4444));
/// Car headlights
pub const HEADLIGHT: LightTint = LightTint::new(Rgb::hex(0xe5e7eb), Rgb::hex(0xfffbeb));
/// Car tail lights
pub const TAIL_LIGHT: LightTint = LightTint::new(Rgb::hex(0x7f1d1d), Rgb::hex(0xef4444));
/// Ship cabin portholes and bridge windows
pub const CABIN_WINDOW: LightTint = LightTint::new(Rgb::hex(0x0f172a), Rgb::hex(0xfef08a));
/// Masthead and deck lamps on boats
pub const NAV_LAMP: LightTint = LightTint::new(Rgb::hex(0xf1f5f9), Rgb::hex(0xfffbeb));

/// Per-structure color scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub wall: Rgb,
    /// Secondary wall color (siding boards, base course)
    pub accent: Rgb,
    pub trim: Rgb,
    pub roof: Rgb,
    pub glass: LightTint,
}

/// Timber waterfront mansions
pub const MANSION_A: [Palette; 4] = [
    Palette {
        name: "Hekimbasi Red",
        wall: Rgb::hex(0x7f1d1d),
        accent: Rgb::hex(0x991b1b),
        trim: Rgb::hex(0xfef2f2),
        roof: Rgb::hex(0x451a03),
        glass: WARM_WINDOW,
    },
    Palette {
        name: "Koprulu Wood",
        wall: Rgb::hex(0x9a3412),
        accent: Rgb::hex(0xc2410c),
        trim: Rgb::hex(0xfff7ed),
        roof: Rgb::hex(0x431407),
        glass: WARM_WINDOW,
    },
    Palette {
        name: "Bosphorus White",
        wall: Rgb::hex(0xf1f5f9),
        accent: Rgb::hex(0xe2e8f0),
        trim: Rgb::hex(0xffffff),
        roof: Rgb::hex(0x334155),
        glass: WARM_WINDOW,
    },
    Palette {
        name: "Pasha Pink",
        wall: Rgb::hex(0xbe185d),
        accent: Rgb::hex(0x9d174d),
        trim: Rgb::hex(0xfff1f2),
        roof: Rgb::hex(0x881337),
        glass: WARM_WINDOW,
    },
];

/// Neoclassical white palace
pub const MANSION_B: Palette = Palette {
    name: "White Palace",
    wall: Rgb::hex(0xf1f5f9),
    accent: Rgb::hex(0xf8fafc),
    trim: Rgb::hex(0xffffff),
    roof: Rgb::hex(0x94a3b8),
    glass: WARM_WINDOW,
};

/// Turreted mansion; only the roof tile varies
pub const MANSION_C: [Palette; 3] = [
    Palette {
        name: "Burgundy Tile",
        wall: Rgb::hex(0xf8fafc),
        accent: Rgb::hex(0xf1f5f9),
        trim: Rgb::hex(0xe2e8f0),
        roof: Rgb::hex(0x9f1239),
        glass: WARM_WINDOW,
    },
    Palette {
        name: "Oxblood Tile",
        wall: Rgb::hex(0xf8fafc),
        accent: Rgb::hex(0xf1f5f9),
        trim: Rgb::hex(0xe2e8f0),
        roof: Rgb::hex(0x7f1d1d),
        glass: WARM_WINDOW,
    },
    Palette {
        name: "Rose Tile",
        wall: Rgb::hex(0xf8fafc),
        accent: Rgb::hex(0xf1f5f9),
        trim: Rgb::hex(0xe2e8f0),
        roof: Rgb::hex(0x881337),
        glass: WARM_WINDOW,
    },
];

/// Hillside apartment blocks
pub const APARTMENT: [Palette; 6] = [
    apartment("Cream", 0xfef3c7, 0xfffbeb, 0xb91c1c),
    apartment("Light Orange", 0xffedd5, 0xfff7ed, 0x991b1b),
    apartment("White", 0xe5e5e5, 0xf5f5f5, 0xef4444),
    apartment("Stone Grey", 0xd6d3d1, 0xe7e5e4, 0x7f1d1d),
    apartment("Rose", 0xfca5a5, 0xfecaca, 0x881337),
    apartment("Pale Lime", 0xd9f99d, 0xecfccb, 0x9f1239),
];

const fn apartment(name: &'static str, wall: u32, trim: u32, roof: u32) -> Palette {
    Palette {
        name,
        wall: Rgb::hex(wall),
        accent: Rgb::hex(0x57534e),
        trim: Rgb::hex(trim),
        roof: Rgb::hex(roof),
        glass: APARTMENT_WINDOW,
    }
}

/// Shop awning stripes
pub const AWNINGS: [Rgb; 4] = [
    Rgb::hex(0xdc2626),
    Rgb::hex(0x16a34a),
    Rgb::hex(0x2563eb),
    Rgb::hex(0xea580c),
];

/// Car body colors
pub const CAR_BODIES: [Rgb; 6] = [
    Rgb::hex(0xfacc15),
    Rgb::hex(0xf8fafc),
    Rgb::hex(0x1e3a8a),
    Rgb::hex(0xb91c1c),
    Rgb::hex(0x334155),
    Rgb::hex(0x0f766e),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tints_differ_by_mode() {
        for tint in [WARM_WINDOW, APARTMENT_WINDOW, SHOP_WINDOW, PRAYER_HALL, SIDE_BAY,
            MINARET_LAMP, BEACON, HEADLIGHT, TAIL_LIGHT, CABIN_WINDOW, NAV_LAMP] {
            assert_ne!(tint.day, tint.night);
        }
    }

    #[test]
    fn test_palette_names_unique() {
        let mut names: Vec<&str> = MANSION_A.iter()
            .chain(MANSION_C.iter())
            .chain(APARTMENT.iter())
            .map(|p| p.name)
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
