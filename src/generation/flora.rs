//! Hillside trees: a trunk column topped by a ragged leaf sphere.

use crate::procgen::SeedStream;
use crate::voxel::Rgb;

use super::{GenContext, VoxelBuilder};

const TRUNK: Rgb = Rgb::hex(0x451a03);
const LEAVES: [Rgb; 2] = [Rgb::hex(0x166534), Rgb::hex(0x15803d)];
const LEAF_HIGHLIGHT: Rgb = Rgb::hex(0x4d7c0f);

/// Tallest crown radius a tree can draw, in cells
pub const MAX_CROWN_RADIUS: i32 = 7;

/// Plant a tree with its trunk base at local `(x, base_y, z)`.
///
/// The candidate is tested once against the exclusion zones; a blocked
/// tree is skipped whole. Returns whether the tree was placed.
pub fn plant_tree(
    ctx: &GenContext,
    b: &mut VoxelBuilder,
    stream: &SeedStream,
    x: i32,
    base_y: i32,
    z: i32,
) -> bool {
    let lateral = b.origin().x + x;
    let along = b.origin().z + z;
    if ctx.exclusion.is_site_excluded(lateral as f32, along as f32, None) {
        log::trace!("Skipping tree at ({}, {}): inside exclusion zone", lateral, along);
        return false;
    }

    let trunk_h = stream.int(0, 10, 6);
    let radius = stream.range(1, 5.0, MAX_CROWN_RADIUS as f32);
    let leaf = LEAVES[stream.index(2, LEAVES.len())];

    for t in 0..trunk_h {
        b.put(x, base_y + t, z, TRUNK);
    }

    let cy = base_y + trunk_h;
    let r = radius.ceil() as i32;
    let r_sq = radius * radius;
    for ly in -r..=r {
        for lx in -r..=r {
            for lz in -r..=r {
                if ((lx * lx + ly * ly + lz * lz) as f32) >= r_sq {
                    continue;
                }
                // keep the trunk visible under the crown
                if lx == 0 && lz == 0 && ly < 0 {
                    continue;
                }
                if stream.cell3(3, lx, ly, lz) <= 0.4 {
                    continue;
                }
                let color = if stream.cell3(4, lx, ly, lz) > 0.8 { LEAF_HIGHLIGHT } else { leaf };
                b.put(x + lx, cy + ly, z + lz, color);
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IVec3;
    use crate::generation::{Mode, Side};

    #[test]
    fn test_tree_has_trunk_and_crown() {
        let ctx = GenContext::default();
        let mut b = VoxelBuilder::at(Side::Asia, Mode::Day, IVec3::new(250, 0, 150));
        let placed = plant_tree(&ctx, &mut b, &SeedStream::new(4, 1), 0, 20, 0);
        assert!(placed);
        let set = b.finish();
        let trunk = set.iter().filter(|v| v.color == TRUNK).count();
        assert!((10..16).contains(&trunk));
        assert!(set.len() > trunk + 50);
    }

    #[test]
    fn test_crown_stays_within_radius() {
        let ctx = GenContext::default();
        let mut b = VoxelBuilder::at(Side::Asia, Mode::Day, IVec3::new(250, 0, 150));
        plant_tree(&ctx, &mut b, &SeedStream::new(9, 2), 0, 0, 0);
        for v in b.finish().iter() {
            assert!((v.cell.x - 250).abs() <= MAX_CROWN_RADIUS);
            assert!((v.cell.z - 150).abs() <= MAX_CROWN_RADIUS);
        }
    }

    #[test]
    fn test_tree_in_bridge_corridor_is_skipped() {
        let ctx = GenContext::default();
        let mut b = VoxelBuilder::at(Side::Europe, Mode::Day, IVec3::new(250, 0, -40));
        assert!(!plant_tree(&ctx, &mut b, &SeedStream::new(1, 1), 0, 10, 0));
        assert!(b.is_empty());
    }
}
