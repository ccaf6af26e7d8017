//! Land renderer
//!
//! Rendering is split in two steps:
//! - `render_commands` maps land size, elements and scale to a list of
//!   drawing primitives. It is pure: the same inputs always give the same
//!   commands.
//! - `rasterize` paints those primitives into an RGBA image with tiny-skia.
//!
//! Coordinates are in pixels with the origin at the top-left corner of the
//! land; one meter is `scale` pixels.

use crate::font_manager;
use image::{Rgba, RgbaImage};
use plotkit_core::Element;
use rusttype::{point as rt_point, Scale};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Label font size in pixels.
pub const LABEL_FONT_SIZE: f32 = 12.0;

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    fn to_skia(self) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// Land border.
pub const BORDER_COLOR: RgbaColor = RgbaColor::new(0, 0, 0, 255);
/// Element fill, `rgba(0, 128, 0, 0.5)`.
pub const ELEMENT_FILL: RgbaColor = RgbaColor::new(0, 128, 0, 128);
/// Element label text.
pub const LABEL_COLOR: RgbaColor = RgbaColor::new(0, 0, 0, 255);

/// A single drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Reset the surface to transparent at the given size.
    Clear { width: f64, height: f64 },
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: RgbaColor,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: RgbaColor,
    },
    /// Text centered horizontally and vertically on `(x, y)`.
    Text {
        text: String,
        x: f64,
        y: f64,
        size: f32,
        color: RgbaColor,
    },
    /// A land dimension written just inside `edge`, anchored at `(x, y)`.
    ///
    /// Top and bottom labels are centered on the anchor; left labels start
    /// at it and right labels end at it.
    DimensionLabel {
        text: String,
        edge: LandEdge,
        x: f64,
        y: f64,
        size: f32,
        color: RgbaColor,
    },
}

/// Side of the land drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Gap between a dimension label and the land border, in pixels.
const DIMENSION_INSET: f64 = 4.0;

/// Pixels per meter, switched at a viewport breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderScale {
    pub desktop: f64,
    pub mobile: f64,
    /// Viewports at most this wide (in px) use the mobile scale.
    pub mobile_breakpoint: u32,
}

impl RenderScale {
    pub fn scale_for(&self, viewport_width: u32) -> f64 {
        if viewport_width <= self.mobile_breakpoint {
            self.mobile
        } else {
            self.desktop
        }
    }
}

impl Default for RenderScale {
    fn default() -> Self {
        Self {
            desktop: 5.0,
            mobile: 3.0,
            mobile_breakpoint: 768,
        }
    }
}

/// Formats a length the way labels show it: `10`, `2.5`, never `-0`.
pub fn format_meters(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Label drawn in the middle of an element.
pub fn element_label(element: &Element) -> String {
    format!(
        "{}m x {}m",
        format_meters(element.width),
        format_meters(element.height)
    )
}

/// Builds the drawing commands for a land and its elements.
pub fn render_commands(
    land_width: f64,
    land_height: f64,
    elements: &[Element],
    scale: f64,
) -> Vec<DrawCommand> {
    let surface_width = land_width * scale;
    let surface_height = land_height * scale;

    let mut commands = Vec::with_capacity(2 + elements.len() * 2);
    commands.push(DrawCommand::Clear {
        width: surface_width,
        height: surface_height,
    });
    commands.push(DrawCommand::StrokeRect {
        x: 0.0,
        y: 0.0,
        width: surface_width,
        height: surface_height,
        color: BORDER_COLOR,
    });

    for element in elements {
        commands.push(DrawCommand::FillRect {
            x: element.x * scale,
            y: element.y * scale,
            width: element.width * scale,
            height: element.height * scale,
            color: ELEMENT_FILL,
        });

        let (cx, cy) = element.center();
        commands.push(DrawCommand::Text {
            text: element_label(element),
            x: cx * scale,
            y: cy * scale,
            size: LABEL_FONT_SIZE,
            color: LABEL_COLOR,
        });
    }

    commands
}

/// Width on the top and bottom edges, height on the left and right.
///
/// Kept apart from `render_commands` so callers choose whether to append
/// them.
pub fn dimension_labels(land_width: f64, land_height: f64, scale: f64) -> Vec<DrawCommand> {
    let surface_width = land_width * scale;
    let surface_height = land_height * scale;
    let half_line = f64::from(LABEL_FONT_SIZE) / 2.0;
    let width_text = format!("{}m", format_meters(land_width));
    let height_text = format!("{}m", format_meters(land_height));

    [
        (LandEdge::Top, &width_text, surface_width / 2.0, DIMENSION_INSET + half_line),
        (
            LandEdge::Bottom,
            &width_text,
            surface_width / 2.0,
            surface_height - DIMENSION_INSET - half_line,
        ),
        (LandEdge::Left, &height_text, DIMENSION_INSET, surface_height / 2.0),
        (
            LandEdge::Right,
            &height_text,
            surface_width - DIMENSION_INSET,
            surface_height / 2.0,
        ),
    ]
    .into_iter()
    .map(|(edge, text, x, y)| DrawCommand::DimensionLabel {
        text: text.clone(),
        edge,
        x,
        y,
        size: LABEL_FONT_SIZE,
        color: LABEL_COLOR,
    })
    .collect()
}

/// Paints commands into an image.
///
/// The image size comes from the first `Clear`; without one, or with an
/// empty surface, a 0x0 image is returned.
pub fn rasterize(commands: &[DrawCommand]) -> RgbaImage {
    let Some((width, height)) = commands.iter().find_map(|c| match c {
        DrawCommand::Clear { width, height } => Some((surface_px(*width), surface_px(*height))),
        _ => None,
    }) else {
        return RgbaImage::new(0, 0);
    };

    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbaImage::new(0, 0);
    };

    for command in commands {
        match command {
            DrawCommand::Clear { .. } => pixmap.fill(Color::TRANSPARENT),
            DrawCommand::StrokeRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                let rect = Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
                if let Some(r) = rect {
                    let path = PathBuilder::from_rect(r);
                    let stroke = Stroke {
                        width: 1.0,
                        ..Default::default()
                    };
                    pixmap.stroke_path(&path, &paint(*color), &stroke, Transform::identity(), None);
                }
            }
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                let rect = Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
                if let Some(r) = rect {
                    let path = PathBuilder::from_rect(r);
                    pixmap.fill_path(
                        &path,
                        &paint(*color),
                        FillRule::Winding,
                        Transform::identity(),
                        None,
                    );
                }
            }
            DrawCommand::Text {
                text,
                x,
                y,
                size,
                color,
            } => draw_text(
                &mut pixmap,
                text,
                (*x as f32, *y as f32),
                TextAlign::Center,
                *size,
                *color,
            ),
            DrawCommand::DimensionLabel {
                text,
                edge,
                x,
                y,
                size,
                color,
            } => {
                let align = match edge {
                    LandEdge::Top | LandEdge::Bottom => TextAlign::Center,
                    LandEdge::Left => TextAlign::Start,
                    LandEdge::Right => TextAlign::End,
                };
                draw_text(&mut pixmap, text, (*x as f32, *y as f32), align, *size, *color);
            }
        }
    }

    RgbaImage::from_fn(width, height, |px, py| {
        let idx = (py * width + px) as usize;
        let c = pixmap.pixels()[idx].demultiply();
        Rgba([c.red(), c.green(), c.blue(), c.alpha()])
    })
}

fn surface_px(length: f64) -> u32 {
    if length.is_finite() && length > 0.0 {
        length.ceil() as u32
    } else {
        0
    }
}

fn paint(color: RgbaColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

#[derive(Clone, Copy)]
enum TextAlign {
    Start,
    Center,
    End,
}

fn draw_text(
    pixmap: &mut Pixmap,
    text: &str,
    (ax, cy): (f32, f32),
    align: TextAlign,
    size: f32,
    color: RgbaColor,
) {
    let Some(font) = font_manager::label_font() else {
        return;
    };

    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);

    // Measure at the origin, then shift the run onto the anchor.
    let glyphs: Vec<_> = font.layout(text, scale, rt_point(0.0, 0.0)).collect();
    let text_width = glyphs
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0);
    let origin_x = match align {
        TextAlign::Start => ax,
        TextAlign::Center => ax - text_width / 2.0,
        TextAlign::End => ax - text_width,
    };
    let baseline_y = cy + (v_metrics.ascent + v_metrics.descent) / 2.0;

    let width = pixmap.width() as i32;
    let height = pixmap.height() as i32;
    let data = pixmap.data_mut();

    for glyph in font.layout(text, scale, rt_point(origin_x, baseline_y)) {
        let Some(bounding_box) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bounding_box.min.x;
            let py = gy as i32 + bounding_box.min.y;
            if px < 0 || px >= width || py < 0 || py >= height {
                return;
            }

            let alpha = (coverage * color.a as f32).round().clamp(0.0, 255.0) as u16;
            if alpha == 0 {
                return;
            }

            // Source-over on premultiplied pixels.
            let idx = ((py * width + px) * 4) as usize;
            let pixel = &mut data[idx..idx + 4];
            let inv = 255 - alpha;
            let src = [color.r, color.g, color.b];
            for (channel, s) in pixel.iter_mut().take(3).zip(src) {
                let premultiplied = s as u16 * alpha / 255;
                *channel = (premultiplied + *channel as u16 * inv / 255) as u8;
            }
            pixel[3] = (alpha + pixel[3] as u16 * inv / 255) as u8;
        });
    }
}
