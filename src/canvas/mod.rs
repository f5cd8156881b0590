//! Drawing surfaces
//!
//! Every drawing operation receives its surface explicitly:
//! - [`Canvas`]: anti-aliased raster surface, flushed once to an image file
//! - `Recorder` (tests only): keeps the issued operations for inspection

mod path;
#[cfg(test)]
mod recorder;

pub use path::*;
#[cfg(test)]
pub use recorder::*;

use image::{ImageFormat, Rgba, RgbaImage};
use std::path::PathBuf;
use thiserror::Error;
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Pixmap, Stroke, Transform};
use tracing::{debug, info, trace};

use crate::shapes::Color;

/// Something paths can be filled and stroked onto
pub trait Surface {
    fn fill(&mut self, path: &Path, color: Color);
    fn stroke(&mut self, path: &Path, color: Color);
}

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Invalid canvas size: {0}x{0}")]
    InvalidSize(u32),
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Square raster canvas
///
/// Starts fully transparent. Strokes use butt caps and miter joins.
pub struct Canvas {
    pixmap: Pixmap,
    stroke: Stroke,
}

impl Canvas {
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

    pub fn new(size: u32) -> Result<Self, CanvasError> {
        let pixmap = Pixmap::new(size, size).ok_or(CanvasError::InvalidSize(size))?;
        let stroke = Stroke {
            width: Self::DEFAULT_STROKE_WIDTH as f32,
            miter_limit: 10.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            ..Default::default()
        };
        debug!(size, "Canvas created");
        Ok(Self { pixmap, stroke })
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke.width = width as f32;
        self
    }

    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Paint every pixel with `color`
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(skia_color(color));
    }

    /// Raw premultiplied RGBA bytes, row-major
    #[cfg(test)]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Demultiplied RGBA copy of the canvas
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image
    }

    /// Write the canvas to `path`
    ///
    /// The format follows the file extension (PNG when unknown). The image
    /// is encoded next to the target and renamed into place, so a failed
    /// write leaves no file behind.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), CanvasError> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
        let tmp = temp_sibling(path);

        let result = self
            .to_image()
            .save_with_format(&tmp, format)
            .map_err(CanvasError::from)
            .and_then(|()| std::fs::rename(&tmp, path).map_err(CanvasError::from));

        if result.is_err() {
            let _ = std::fs::remove_file(&tmp);
        } else {
            info!("Saved {}x{} image to {}", self.size(), self.size(), path.display());
        }
        result
    }
}

impl Surface for Canvas {
    fn fill(&mut self, path: &Path, color: Color) {
        let Some(path) = path.to_skia() else {
            trace!("Skipping degenerate fill");
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn stroke(&mut self, path: &Path, color: Color) {
        let Some(path) = path.to_skia() else {
            trace!("Skipping degenerate stroke");
            return;
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &self.stroke, Transform::identity(), None);
    }
}

fn skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = true;
    paint
}

fn temp_sibling(path: &std::path::Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Point, RegularPolygon, Shape};

    fn pixel(canvas: &Canvas, x: u32, y: u32) -> [u8; 4] {
        let img = canvas.to_image();
        img.get_pixel(x, y).0
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(Canvas::new(0), Err(CanvasError::InvalidSize(0))));
    }

    #[test]
    fn test_starts_transparent() {
        let canvas = Canvas::new(16).unwrap();
        assert!(canvas.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_filled_square_covers_center() {
        let mut canvas = Canvas::new(100).unwrap();
        RegularPolygon::new(4, Point::new(50.0, 50.0), 40.0, Color::rgb(0.0, 1.0, 0.0))
            .filled()
            .draw(&mut canvas);

        assert_eq!(pixel(&canvas, 50, 50), [0, 255, 0, 255]);
        assert_eq!(pixel(&canvas, 1, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_outline_leaves_center_empty() {
        let mut canvas = Canvas::new(100).unwrap();
        RegularPolygon::new(4, Point::new(50.0, 50.0), 40.0, Color::rgb(0.0, 1.0, 0.0))
            .draw(&mut canvas);

        assert_eq!(pixel(&canvas, 50, 50), [0, 0, 0, 0]);
    }

    #[test]
    fn test_clear_paints_background() {
        let mut canvas = Canvas::new(8).unwrap();
        canvas.clear(Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(pixel(&canvas, 3, 3), [255, 255, 255, 255]);
    }

    #[test]
    fn test_degenerate_paths_are_ignored() {
        let mut canvas = Canvas::new(8).unwrap();
        canvas.fill(&Path::new(), Color::BLACK);
        canvas.stroke(&Path::new(), Color::BLACK);
        assert!(canvas.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_save_writes_png_and_no_temp() {
        let dir = std::env::temp_dir().join(format!("mandala-canvas-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let out = dir.join("square.png");

        let mut canvas = Canvas::new(32).unwrap();
        canvas.clear(Color::rgb(0.5, 0.0, 0.0));
        canvas.save(&out).unwrap();

        let decoded = image::open(&out).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (32, 32));
        assert_eq!(decoded.get_pixel(0, 0).0, [128, 0, 0, 255]);
        assert!(!temp_sibling(&out).exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_save_leaves_nothing() {
        let out = std::env::temp_dir()
            .join(format!("mandala-missing-{}", std::process::id()))
            .join("nested")
            .join("out.png");

        let canvas = Canvas::new(4).unwrap();
        assert!(matches!(canvas.save(&out), Err(CanvasError::Encode(_) | CanvasError::Io(_))));
        assert!(!out.exists());
        assert!(!temp_sibling(&out).exists());
    }
}
