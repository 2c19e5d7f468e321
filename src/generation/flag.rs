//! Red flag with a white crescent and star, flown from the tower's pole.
//!
//! Built at micro scale: the renderer shrinks the whole entity by
//! [`FLAG_SCALE`], so one flag cell is a fifth of a grid voxel. The hoist
//! edge sits at x = 0 and the fly runs toward +x.

use crate::voxel::{Rgb, VoxelSet};

use super::{GenContext, Mode, Seed, Side, VoxelBuilder};

pub const FLAG_SCALE: f32 = 0.2;
pub const WIDTH: i32 = 60;
pub const HEIGHT: i32 = 40;

pub const RED: Rgb = Rgb::hex(0xe30a17);
pub const WHITE: Rgb = Rgb::hex(0xffffff);

const ASPECT: f32 = WIDTH as f32 / HEIGHT as f32;

/// Whether cell (x, y) of the field is white.
///
/// The crescent is the difference of two discs; the star is drawn as a
/// small disc, which reads better than a five-point outline at this size.
pub fn is_white(x: i32, y: i32) -> bool {
    let px = x as f32 / WIDTH as f32 * ASPECT;
    let py = y as f32 / HEIGHT as f32;
    let dist = |cx: f32, cy: f32| ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();

    let crescent = dist(0.45 * ASPECT, 0.5) < 0.25 && dist(0.53 * ASPECT, 0.5) >= 0.20;
    let star = dist(0.72 * ASPECT, 0.5) < 0.08;
    crescent || star
}

pub fn generate(_ctx: &GenContext, _seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let mut b = VoxelBuilder::new(side, mode);
    for x in 0..WIDTH {
        for y in 0..HEIGHT {
            b.put(x, y, 0, if is_white(x, y) { WHITE } else { RED });
        }
    }
    b.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_field() {
        let set = generate(&GenContext::default(), 0, Side::Asia, Mode::Day);
        assert_eq!(set.len(), (WIDTH * HEIGHT) as usize);
        assert!(set.iter().all(|v| v.cell.z == 0));
    }

    #[test]
    fn test_emblem_positions() {
        // crescent rim left of centre, its hollow to the right, star further out
        assert!(is_white(20, 20));
        assert!(!is_white(30, 20));
        assert!(is_white(43, 20));
        assert!(!is_white(2, 2));
        assert!(!is_white(59, 39));
    }

    #[test]
    fn test_mostly_red() {
        let white = (0..WIDTH)
            .flat_map(|x| (0..HEIGHT).map(move |y| (x, y)))
            .filter(|&(x, y)| is_white(x, y))
            .count();
        assert!(white > 0);
        assert!(white * 4 < (WIDTH * HEIGHT) as usize);
    }
}
