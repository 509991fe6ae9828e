//! Raster-Extraktion: maskierter Ausschnitt eines Quellbildes und
//! seitenverhältnistreue Skalierung.

use super::geometry::IntRect;
use super::path::{bounding_rect, PathShape};
use super::region::Region;
use image::{imageops, RgbaImage};

/// Pixelinhalt innerhalb des zuletzt geschlossenen Pfads.
#[derive(Debug, Clone)]
pub struct CroppedRegion {
    /// Ausschnitt in Größe von `bounds`, außerhalb des Pfads voll transparent
    pub raster: RgbaImage,
    /// Rechteck im Quellbild, aus dem der Ausschnitt stammt
    pub bounds: IntRect,
}

impl CroppedRegion {
    /// Degenerierter Ausschnitt ohne Pixel.
    pub fn empty(bounds: IntRect) -> Self {
        Self {
            raster: RgbaImage::new(0, 0),
            bounds,
        }
    }

    /// `true`, wenn nichts zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty() || self.raster.width() == 0 || self.raster.height() == 0
    }
}

/// Schneidet das Innere eines geschlossenen Pfads aus dem Quellbild aus.
///
/// Das Ergebnis hat exakt die Größe von `bounding_rect(path)` (auf das Bild
/// beschnitten). Pixel außerhalb der Rasterabdeckung bleiben transparent.
/// Bei Breite oder Höhe 0 entsteht ein leerer Ausschnitt.
pub fn crop(source: &RgbaImage, path: &PathShape) -> CroppedRegion {
    let bounds = bounding_rect(path);
    let image_rect = IntRect::from_size(source.width(), source.height());
    let Some(clipped) = bounds.intersect(&image_rect) else {
        log::debug!("Crop übersprungen: degenerierte Grenzen {:?}", bounds);
        return CroppedRegion::empty(bounds);
    };

    let region = Region::from_path(path);
    let mut raster = RgbaImage::new(clipped.width() as u32, clipped.height() as u32);

    for rect in region.rects() {
        let Some(cover) = rect.intersect(&clipped) else {
            continue;
        };
        for y in cover.top..cover.bottom {
            for x in cover.left..cover.right {
                let pixel = *source.get_pixel(x as u32, y as u32);
                raster.put_pixel(
                    (x - clipped.left) as u32,
                    (y - clipped.top) as u32,
                    pixel,
                );
            }
        }
    }

    CroppedRegion {
        raster,
        bounds: clipped,
    }
}

/// Skaliert ein Bild seitenverhältnistreu in die Box `max_width × max_height`.
///
/// Nicht-positive Grenzen lassen das Bild unverändert. Die Zielmaße werden
/// abgeschnitten, mindestens jedoch 1 Pixel.
pub fn resize_to_fit(image: RgbaImage, max_width: i32, max_height: i32) -> RgbaImage {
    if max_width <= 0 || max_height <= 0 || image.width() == 0 || image.height() == 0 {
        return image;
    }

    let ratio_image = image.width() as f32 / image.height() as f32;
    let ratio_max = max_width as f32 / max_height as f32;

    let (mut width, mut height) = (max_width, max_height);
    if ratio_max > ratio_image {
        width = (max_height as f32 * ratio_image) as i32;
    } else {
        height = (max_width as f32 / ratio_image) as i32;
    }
    let (width, height) = (width.max(1) as u32, height.max(1) as u32);

    if (width, height) == image.dimensions() {
        return image;
    }
    log::debug!(
        "Bild skaliert: {}x{} -> {}x{}",
        image.width(),
        image.height(),
        width,
        height
    );
    imageops::resize(&image, width, height, imageops::FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use image::Rgba;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(color))
    }

    fn triangle() -> PathShape {
        let mut path = PathShape::new();
        path.move_to(Vec2::new(10.0, 10.0));
        path.line_to(Vec2::new(30.0, 10.0));
        path.line_to(Vec2::new(10.0, 30.0));
        path.close();
        path
    }

    #[test]
    fn crop_has_exact_bounding_size() {
        let source = solid(64, 64, [200, 10, 10, 255]);
        let cropped = crop(&source, &triangle());
        assert_eq!(cropped.bounds, IntRect::new(10, 10, 30, 30));
        assert_eq!(cropped.raster.dimensions(), (20, 20));
        assert!(!cropped.is_empty());
    }

    #[test]
    fn crop_keeps_inside_and_clears_outside() {
        let source = solid(64, 64, [200, 10, 10, 255]);
        let cropped = crop(&source, &triangle());
        // Nahe der rechten Kathete: innen
        assert_eq!(cropped.raster.get_pixel(1, 1).0, [200, 10, 10, 255]);
        // Gegenüberliegende Ecke: außerhalb der Hypotenuse
        assert_eq!(cropped.raster.get_pixel(19, 19).0[3], 0);
    }

    #[test]
    fn crop_of_degenerate_path_is_empty() {
        let source = solid(16, 16, [1, 2, 3, 255]);
        let mut path = PathShape::new();
        path.move_to(Vec2::new(5.0, 5.0));
        path.line_to(Vec2::new(5.0, 12.0));
        let cropped = crop(&source, &path);
        assert!(cropped.is_empty());
    }

    #[test]
    fn crop_is_clamped_to_the_image() {
        let source = solid(20, 20, [9, 9, 9, 255]);
        let mut path = PathShape::new();
        path.move_to(Vec2::new(10.0, 10.0));
        path.line_to(Vec2::new(40.0, 10.0));
        path.line_to(Vec2::new(40.0, 40.0));
        path.line_to(Vec2::new(10.0, 40.0));
        path.close();
        let cropped = crop(&source, &path);
        assert_eq!(cropped.bounds, IntRect::new(10, 10, 20, 20));
        assert_eq!(cropped.raster.dimensions(), (10, 10));
    }

    #[test]
    fn resize_is_width_constrained_for_wide_images() {
        let resized = resize_to_fit(solid(400, 100, [0, 0, 0, 255]), 200, 200);
        assert_eq!(resized.dimensions(), (200, 50));
    }

    #[test]
    fn resize_is_height_constrained_for_tall_images() {
        let resized = resize_to_fit(solid(100, 400, [0, 0, 0, 255]), 200, 200);
        assert_eq!(resized.dimensions(), (50, 200));
    }

    #[test]
    fn resize_upscales_small_images() {
        let resized = resize_to_fit(solid(10, 10, [0, 0, 0, 255]), 300, 100);
        assert_eq!(resized.dimensions(), (100, 100));
    }

    #[test]
    fn resize_ignores_non_positive_bounds() {
        let resized = resize_to_fit(solid(30, 20, [0, 0, 0, 255]), 0, 100);
        assert_eq!(resized.dimensions(), (30, 20));
    }
}
