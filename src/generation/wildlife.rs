//! Dolphins and seagulls. Both are modelled on the shared grid and shrunk
//! by their entity scale at render time.

use crate::voxel::{Rgb, VoxelSet};

use super::{GenContext, Mode, Seed, Side, VoxelBuilder};

pub const DOLPHIN_SCALE: f32 = 0.64;
pub const GULL_SCALE: f32 = 0.16;

const BACK: Rgb = Rgb::hex(0x334155);
const FLANK: Rgb = Rgb::hex(0x64748b);
const BELLY: Rgb = Rgb::hex(0xf1f5f9);
const BEAK: Rgb = Rgb::hex(0x475569);

const GULL_WHITE: Rgb = Rgb::hex(0xffffff);
const GULL_GREY: Rgb = Rgb::hex(0xcbd5e1);
const WING_TIP: Rgb = Rgb::hex(0x1f2937);
const GULL_BILL: Rgb = Rgb::hex(0xfacc15);

/// Cross-section of the dolphin body at station z (0 = tail stock):
/// `(horizontal radius, vertical radius, vertical offset)`
pub fn dolphin_section(z: i32) -> Option<(f32, f32, f32)> {
    let zf = z as f32;
    match z {
        0..=2 => Some((0.5 + zf * 0.2, 0.5 + zf * 0.2, 0.0)),
        3..=6 => {
            let r = 1.1 + (zf - 3.0) * 0.15;
            Some((r, r, 0.0))
        }
        7..=10 => Some((1.7, 1.7, 0.0)),
        // the melon sits a little high
        11..=13 => Some((1.7 - (zf - 11.0) * 0.35, 1.7 - (zf - 11.0) * 0.3, 0.2)),
        _ => None,
    }
}

pub fn generate_dolphin(_ctx: &GenContext, _seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let mut b = VoxelBuilder::new(side, mode);

    for z in 0..=13 {
        let Some((rx, ry, y_off)) = dolphin_section(z) else {
            continue;
        };
        for y in (-ry).floor() as i32..=ry.ceil() as i32 {
            for x in (-rx).floor() as i32..=rx.ceil() as i32 {
                let dy = y as f32 - y_off;
                let (xf, rel) = (x as f32, dy / ry);
                if xf * xf / (rx * rx) + dy * dy / (ry * ry) > 1.0 {
                    continue;
                }
                let color = if rel > 0.3 {
                    BACK
                } else if rel < -0.2 {
                    BELLY
                } else {
                    FLANK
                };
                b.put(x, y, z, color);
            }
        }
    }

    // Rostrum
    b.put(0, 0, 14, BEAK);
    b.put(0, 0, 15, BEAK);
    // Dorsal fin, swept back
    for (y, z) in [(2, 7), (2, 8), (3, 8), (2, 9)] {
        b.put(0, y, z, BACK);
    }
    // Pectoral fins
    for sx in [-1, 1] {
        b.put(2 * sx, -1, 10, FLANK);
        b.put(3 * sx, -1, 9, FLANK);
    }
    // Flukes
    for x in [-3i32, -2, -1, 1, 2, 3] {
        if x.abs() < 3 {
            b.put(x, 0, 0, BACK);
        }
        b.put(x, 0, -1, BACK);
    }

    b.finish()
}

pub fn generate_seagull(_ctx: &GenContext, _seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let mut b = VoxelBuilder::new(side, mode);
    for z in 0..=1 {
        for x in -1..=1 {
            b.put(x, 0, z, GULL_WHITE);
        }
    }
    b.put(0, 0, 2, GULL_GREY);
    b.put(0, 0, 3, GULL_BILL);
    // Wings angle up and out from the body
    for i in 1..=4 {
        let color = if i == 4 { WING_TIP } else { GULL_WHITE };
        for sx in [-1, 1] {
            for z in 0..=1 {
                b.put(sx * (1 + i), i / 2, z, color);
            }
        }
    }
    b.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IVec3;

    #[test]
    fn test_dolphin_is_bilateral() {
        let set = generate_dolphin(&GenContext::default(), 0, Side::Asia, Mode::Day);
        assert_eq!(set.cells(), set.mirrored().cells());
    }

    #[test]
    fn test_dolphin_shading() {
        let set = generate_dolphin(&GenContext::default(), 0, Side::Asia, Mode::Day);
        let top = set.iter().filter(|v| v.cell.x == 0 && v.cell.z == 8).max_by_key(|v| v.cell.y);
        let bottom = set.iter().filter(|v| v.cell.x == 0 && v.cell.z == 8).min_by_key(|v| v.cell.y);
        assert_eq!(top.map(|v| v.color), Some(BACK));
        assert_eq!(bottom.map(|v| v.color), Some(BELLY));
    }

    #[test]
    fn test_flukes_spread_behind_tail() {
        let cells = generate_dolphin(&GenContext::default(), 0, Side::Asia, Mode::Day).cells();
        for x in [-3, -2, -1, 1, 2, 3] {
            assert!(cells.contains(&IVec3::new(x, 0, -1)), "x={}", x);
        }
        assert!(cells.contains(&IVec3::new(2, 0, 0)));
        assert!(!cells.contains(&IVec3::new(3, 0, 0)));
    }

    #[test]
    fn test_body_thickest_midships() {
        let (tail, _, _) = dolphin_section(0).unwrap();
        let (mid, _, _) = dolphin_section(8).unwrap();
        let (head, _, _) = dolphin_section(13).unwrap();
        assert!(mid > tail && mid > head);
        assert!(dolphin_section(14).is_none());
    }

    #[test]
    fn test_gull_wingspan() {
        let set = generate_seagull(&GenContext::default(), 0, Side::Asia, Mode::Day);
        let span = set.bounds().map(|b| b.size().x);
        assert_eq!(span, Some(11));
        assert_eq!(set.cells(), set.mirrored().cells());
    }
}
