//! Top-down preview image of a scene

use std::path::Path;

use image::{Rgb as Pixel, RgbImage};

use crate::core::{Error, Result};
use crate::core::types::Vec2;

use super::manager::Scene;

/// World rectangle covered by the preview, as (x, z) corners
pub const PREVIEW_MIN: Vec2 = Vec2::new(-36.0, -30.0);
pub const PREVIEW_MAX: Vec2 = Vec2::new(36.0, 30.0);

/// Render the highest voxel under every pixel at time `t`.
///
/// Only entities generated by the last refresh appear.
pub fn render_top_down(scene: &Scene, t: f32, pixels_per_unit: f32) -> RgbImage {
    let size = (PREVIEW_MAX - PREVIEW_MIN) * pixels_per_unit;
    let (width, height) = (size.x.ceil().max(1.0) as u32, size.y.ceil().max(1.0) as u32);
    let mut image = RgbImage::new(width, height);
    let mut top = vec![f32::NEG_INFINITY; (width * height) as usize];

    for (i, entity) in scene.entities().iter().enumerate() {
        let Some(generated) = scene.generated(i) else {
            continue;
        };
        let transform = entity.transform_at(t);
        for v in generated.voxels.iter() {
            let p = transform.transform_point3(v.position());
            let px = ((p.x - PREVIEW_MIN.x) * pixels_per_unit).floor();
            let pz = ((p.z - PREVIEW_MIN.y) * pixels_per_unit).floor();
            if px < 0.0 || pz < 0.0 || px >= width as f32 || pz >= height as f32 {
                continue;
            }
            let (px, pz) = (px as u32, pz as u32);
            let idx = (pz * width + px) as usize;
            if p.y > top[idx] {
                top[idx] = p.y;
                image.put_pixel(px, pz, Pixel([v.color.r, v.color.g, v.color.b]));
            }
        }
    }
    image
}

pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| Error::Export(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneConfig;

    fn still_scene() -> Scene {
        let mut scene = Scene::new(SceneConfig {
            gulls: 0,
            cars_per_lane: 0,
            boats: false,
            dolphins: false,
            ..Default::default()
        })
        .unwrap();
        scene.refresh();
        scene
    }

    #[test]
    fn test_preview_size() {
        let image = render_top_down(&still_scene(), 0.0, 2.0);
        assert_eq!(image.dimensions(), (144, 120));
    }

    #[test]
    fn test_water_covers_the_strait() {
        let image = render_top_down(&still_scene(), 0.0, 2.0);
        // strait centre, away from the bridge
        let centre = image.get_pixel(72, 100);
        assert_eq!(*centre, Pixel([0x0e, 0xa5, 0xe9]));
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("map.png");
        let image = RgbImage::new(4, 4);
        save_png(&image, &path).unwrap();
        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.width(), 4);
    }
}
