//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Convert HSL (hue in degrees, saturation and lightness in 0-1) to RGBA
pub fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m, alpha]
}

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (r.x, r.y, r.right(), r.bottom());
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for an upward-pointing triangle filling `r`
pub fn spike(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(r.x + r.w / 2.0, r.y, color),
        Vertex::new(r.x, r.bottom(), color),
        Vertex::new(r.right(), r.bottom(), color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for an ellipse squashed horizontally by `x_scale`
///
/// Used for spinning coins: the width follows |cos(rotation)|.
pub fn ellipse(
    center: Vec2,
    radius: f32,
    x_scale: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = circle(Vec2::ZERO, radius, color, segments);
    for v in &mut vertices {
        v.position[0] = center.x + v.position[0] * x_scale;
        v.position[1] += center.y;
    }
    vertices
}

/// Lit segments per digit, bits a..g (top, top-right, bottom-right, bottom,
/// bottom-left, top-left, middle)
const DIGIT_SEGMENTS: [u8; 10] = [
    0b0111111, 0b0000110, 0b1011011, 0b1001111, 0b1100110, 0b1101101, 0b1111101, 0b0000111,
    0b1111111, 0b1101111,
];

/// Horizontal advance of one seven-segment digit of the given height
pub fn digit_advance(height: f32) -> f32 {
    height / 2.0 + height / 5.0
}

/// Generate vertices for a non-negative number in seven-segment style
///
/// `origin` is the top-left of the first digit.
pub fn number(value: u64, origin: Vec2, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = height / 2.0;
    let t = height / 10.0;
    let half = height / 2.0;

    let mut vertices = Vec::new();
    for (i, ch) in value.to_string().bytes().enumerate() {
        let x = origin.x + i as f32 * digit_advance(height);
        let y = origin.y;
        let segments = [
            Rect::new(x, y, w, t),
            Rect::new(x + w - t, y, t, half),
            Rect::new(x + w - t, y + half, t, half),
            Rect::new(x, y + height - t, w, t),
            Rect::new(x, y + half, t, half),
            Rect::new(x, y, t, half),
            Rect::new(x, y + half - t / 2.0, w, t),
        ];
        let mask = DIGIT_SEGMENTS[(ch - b'0') as usize];
        for (bit, segment) in segments.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                vertices.extend(rect(segment, color));
            }
        }
    }
    vertices
}
