/// Text renderer.
/// Draws single lines of white text centered on an anchor, using rusttype
/// for font rasterization.
use image::RgbaImage;
use rusttype::{point, Font, Scale};
use std::path::Path;
use tracing::debug;

use crate::error::{GenError, GenResult};

const TEXT_COLOR: (u8, u8, u8) = (255, 255, 255);

pub struct TextRenderer {
    font: Font<'static>,
}

impl TextRenderer {
    /// Load a TrueType font from disk
    pub fn load(path: &Path) -> GenResult<Self> {
        let data = std::fs::read(path)
            .map_err(|e| GenError::Asset(format!("font {}: {}", path.display(), e)))?;
        let font = Font::try_from_vec(data)
            .ok_or_else(|| GenError::Asset(format!("font {}: not a valid font", path.display())))?;
        Ok(Self { font })
    }

    /// Advance width of `text` at `size` px, rounded up
    pub fn measure(&self, text: &str, size: f32) -> i32 {
        let scale = Scale::uniform(size);
        self.font
            .layout(text, scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
            .ceil() as i32
    }

    /// Draw `text` so it is horizontally centered on `center_x` with the top
    /// of its ascent at `top_y`. Returns the left x the run was drawn at.
    /// Glyphs that fall outside `target` are clipped.
    pub fn draw_centered(
        &self,
        target: &mut RgbaImage,
        text: &str,
        size: f32,
        center_x: i32,
        top_y: i32,
    ) -> i32 {
        let width = self.measure(text, size);
        let x = center_x - width / 2;
        if text.is_empty() {
            return x;
        }

        let scale = Scale::uniform(size);
        let v_metrics = self.font.v_metrics(scale);
        let origin = point(x as f32, top_y as f32 + v_metrics.ascent);

        let tw = target.width() as i32;
        let th = target.height() as i32;
        let (r, g, b) = TEXT_COLOR;

        for glyph in self.font.layout(text, scale, origin) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px < 0 || px >= tw || py < 0 || py >= th {
                    return;
                }
                let a = v.clamp(0.0, 1.0);
                if a <= 0.0 {
                    return;
                }

                let dst = target.get_pixel_mut(px as u32, py as u32);
                let dst_a = dst[3] as f32 / 255.0;
                let out_a = a + dst_a * (1.0 - a);
                if out_a > 0.0 {
                    let blend = |src: u8, d: u8| {
                        ((src as f32 * a + d as f32 * dst_a * (1.0 - a)) / out_a).round() as u8
                    };
                    dst[0] = blend(r, dst[0]);
                    dst[1] = blend(g, dst[1]);
                    dst[2] = blend(b, dst[2]);
                    dst[3] = (out_a * 255.0).round() as u8;
                }
            });
        }

        debug!("Drew '{}' at ({}, {}) size {} width {}", text, x, top_y, size, width);
        x
    }
}

#[cfg(test)]
pub mod test_util {
    use std::path::PathBuf;

    const CANDIDATE_FONTS: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    /// First installed TrueType font from a list of common locations
    pub fn system_font() -> Option<PathBuf> {
        CANDIDATE_FONTS
            .iter()
            .map(PathBuf::from)
            .find(|p| p.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::test_util::system_font;
    use super::*;
    use image::Rgba;

    #[test]
    fn test_load_missing_font() {
        let err = TextRenderer::load(Path::new("/nonexistent/font.ttf"))
            .err()
            .unwrap();
        assert!(matches!(err, GenError::Asset(_)));
    }

    #[test]
    fn test_load_invalid_font() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        assert!(matches!(
            TextRenderer::load(&path).err().unwrap(),
            GenError::Asset(_)
        ));
    }

    #[test]
    fn test_draw_centered_on_anchor() {
        let Some(font_path) = system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let renderer = TextRenderer::load(&font_path).unwrap();
        let mut img = RgbaImage::from_pixel(400, 100, Rgba([0, 0, 0, 255]));

        let width = renderer.measure("Team A", 30.0);
        assert!(width > 0);
        let x = renderer.draw_centered(&mut img, "Team A", 30.0, 200, 20);
        assert_eq!(x, 200 - width / 2);

        let lit: Vec<(u32, u32)> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| p[0] > 0)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!lit.is_empty());
        // Ink stays within the measured run and below the top anchor
        assert!(lit.iter().all(|&(px, py)| {
            px as i32 >= x - 2 && (px as i32) <= x + width + 2 && py >= 20
        }));
    }

    #[test]
    fn test_draw_clips_outside_target() {
        let Some(font_path) = system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let renderer = TextRenderer::load(&font_path).unwrap();
        let mut img = RgbaImage::from_pixel(40, 20, Rgba([0, 0, 0, 255]));
        renderer.draw_centered(&mut img, "A very long league name", 30.0, 20, 5);
        assert_eq!(img.dimensions(), (40, 20));
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let Some(font_path) = system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let renderer = TextRenderer::load(&font_path).unwrap();
        let mut img = RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 255]));
        let before = img.clone();
        renderer.draw_centered(&mut img, "", 20.0, 25, 10);
        assert_eq!(img, before);
    }
}
