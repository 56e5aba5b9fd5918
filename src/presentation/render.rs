//! Snapshot rendering of views into bitmaps

use std::path::Path;

use thiserror::Error;
use tiny_skia::{
    FillRule, GradientStop, LinearGradient, Mask, MaskType, Paint, PathBuilder, Pixmap, Point,
    Rect, Shader, SpreadMode, Transform,
};
use tracing::debug;

use crate::domain::clipboard::ClipboardImage;

use super::color::Color;
use super::gradient::{GradientDirection, UnitPoint};
use super::view::{Shape, View};

/// Largest bitmap edge a snapshot will allocate, in pixels
pub const MAX_SNAPSHOT_EDGE: u32 = 16_384;

/// Largest bitmap area a snapshot will allocate (64 Mpx, 256 MiB of RGBA).
/// Gradient nodes allocate one more layer of the same size while drawing.
pub const MAX_SNAPSHOT_PIXELS: u64 = 64 * 1024 * 1024;

/// Errors exporting a snapshot
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to encode PNG: {0}")]
    EncodeFailed(String),

    #[error("Failed to write snapshot: {0}")]
    WriteFailed(#[from] std::io::Error),
}

/// Rendered bitmap of a view
#[derive(Debug, Clone)]
pub struct Snapshot {
    pixmap: Pixmap,
    scale: f32,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Pixels per point used when rendering
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Straight-alpha color of a pixel, `None` outside the bitmap
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(p.red(), p.green(), p.blue(), p.alpha()))
    }

    pub fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::EncodeFailed(e.to_string()))
    }

    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        std::fs::write(path, self.to_png()?)?;
        Ok(())
    }

    /// Straight-alpha RGBA copy, suitable for the clipboard
    pub fn to_image(&self) -> Option<ClipboardImage> {
        let mut rgba = Vec::with_capacity(self.pixmap.data().len());
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        ClipboardImage::from_rgba(self.width(), self.height(), rgba).ok()
    }
}

impl View {
    /// Render the view to a bitmap at `scale` pixels per point.
    ///
    /// Animated gradients are captured at their current phase.
    ///
    /// # Returns
    /// `None` if the view has no area, the scale is not positive, or the
    /// bitmap would be too large
    pub fn render(&self, scale: f32) -> Option<Snapshot> {
        if !scale.is_finite() || scale <= 0.0 {
            debug!(scale, "Refusing to render at invalid scale");
            return None;
        }

        let size = self.size();
        if size.is_zero() {
            return None;
        }

        let width = (size.width * scale).ceil();
        let height = (size.height * scale).ceil();
        if width > MAX_SNAPSHOT_EDGE as f32 || height > MAX_SNAPSHOT_EDGE as f32 {
            debug!(width, height, "Snapshot too large");
            return None;
        }
        if width as u64 * height as u64 > MAX_SNAPSHOT_PIXELS {
            debug!(width, height, "Snapshot area too large");
            return None;
        }

        let mut pixmap = Pixmap::new(width as u32, height as u32)?;
        draw(self, &mut pixmap, 0.0, 0.0, Transform::from_scale(scale, scale));

        Some(Snapshot { pixmap, scale })
    }
}

/// Draw `view` with its top-left corner at (`x`, `y`) points
fn draw(view: &View, canvas: &mut Pixmap, x: f32, y: f32, ts: Transform) {
    match view {
        View::Empty | View::Hidden(_) => {}
        View::Shape { shape, size, color } => {
            let Some(rect) = Rect::from_xywh(x, y, size.width, size.height) else {
                return;
            };
            let path = match shape {
                Shape::Rectangle => Some(PathBuilder::from_rect(rect)),
                Shape::Ellipse => PathBuilder::from_oval(rect),
            };
            if let Some(path) = path {
                let mut paint = Paint::default();
                paint.set_color(color.to_skia());
                paint.anti_alias = true;
                canvas.fill_path(&path, &paint, FillRule::Winding, ts, None);
            }
        }
        View::Stack(children) => {
            for child in children {
                draw(child, canvas, x, y, ts);
            }
        }
        View::Row { spacing, children } => {
            let mut cursor = x;
            for child in children.iter().filter(|c| !c.is_empty()) {
                draw(child, canvas, cursor, y, ts);
                cursor += child.size().width + spacing;
            }
        }
        View::Column { spacing, children } => {
            let mut cursor = y;
            for child in children.iter().filter(|c| !c.is_empty()) {
                draw(child, canvas, x, cursor, ts);
                cursor += child.size().height + spacing;
            }
        }
        View::Padding { amount, content } => draw(content, canvas, x + amount, y + amount, ts),
        View::GradientForeground { colors, content } => {
            if let Some(mask) = content_mask(content, canvas, x, y, ts) {
                fill_gradient(canvas, content, x, y, colors, GradientDirection::HORIZONTAL, ts, &mask);
            }
        }
        View::MovingGradientOverlay {
            colors,
            animation,
            content,
        } => {
            draw(content, canvas, x, y, ts);
            if let Some(mask) = content_mask(content, canvas, x, y, ts) {
                fill_gradient(canvas, content, x, y, colors, animation.direction(), ts, &mask);
            }
        }
        View::Shortcut { content, .. } => draw(content, canvas, x, y, ts),
    }
}

/// Alpha coverage of `content` drawn on its own layer
fn content_mask(content: &View, canvas: &Pixmap, x: f32, y: f32, ts: Transform) -> Option<Mask> {
    let mut layer = Pixmap::new(canvas.width(), canvas.height())?;
    draw(content, &mut layer, x, y, ts);
    Some(Mask::from_pixmap(layer.as_ref(), MaskType::Alpha))
}

#[allow(clippy::too_many_arguments)]
fn fill_gradient(
    canvas: &mut Pixmap,
    content: &View,
    x: f32,
    y: f32,
    colors: &[Color],
    direction: GradientDirection,
    ts: Transform,
    mask: &Mask,
) {
    let size = content.size();
    let Some(frame) = Rect::from_xywh(x, y, size.width, size.height) else {
        return;
    };

    let mut paint = Paint::default();
    paint.shader = gradient_shader(frame, colors, direction);
    paint.anti_alias = true;
    canvas.fill_rect(frame, &paint, ts, Some(mask));
}

fn gradient_shader(frame: Rect, colors: &[Color], direction: GradientDirection) -> Shader<'static> {
    let first = colors.first().copied().unwrap_or(Color::CLEAR);
    if colors.len() < 2 {
        return Shader::SolidColor(first.to_skia());
    }

    let last = (colors.len() - 1) as f32;
    let stops = colors
        .iter()
        .enumerate()
        .map(|(i, c)| GradientStop::new(i as f32 / last, c.to_skia()))
        .collect();

    let at = |p: UnitPoint| {
        Point::from_xy(
            frame.x() + p.x * frame.width(),
            frame.y() + p.y * frame.height(),
        )
    };

    LinearGradient::new(
        at(direction.start),
        at(direction.end),
        stops,
        SpreadMode::Pad,
        Transform::identity(),
    )
    .unwrap_or(Shader::SolidColor(first.to_skia()))
}
