use macroquad::color::Color;
use macroquad::math::{vec2, Vec2};
use macroquad::shapes::{draw_circle, draw_line};

// transformed vertices are clamped here so degenerate rotations or scales
// can never hand the rasterizer an unrepresentable endpoint
const COORD_LIMIT: f32 = i32::MAX as f32;

/// Maps local-space model vertices to screen space: rotate, then scale,
/// then translate. The order only matters for non-uniform scale, which the
/// game never uses, but it is fixed regardless.
pub fn transform_model(model: &[(f32, f32)], x: f32, y: f32, rotation: f32, scale: f32) -> Vec<Vec2> {
    let (sin_r, cos_r) = rotation.sin_cos();
    model
        .iter()
        .map(|&(mx, my)| {
            let rotated = vec2(mx * cos_r - my * sin_r, mx * sin_r + my * cos_r);
            let transformed = rotated * scale + vec2(x, y);
            transformed.clamp(Vec2::splat(-COORD_LIMIT), Vec2::splat(COORD_LIMIT))
        })
        .collect()
}

/// Draws the model as a closed polygon outline, last vertex back to the
/// first.
pub fn draw_wire_frame_model(
    model: &[(f32, f32)],
    x: f32,
    y: f32,
    rotation: f32,
    scale: f32,
    color: Color,
) {
    let verts = transform_model(model, x, y, rotation, scale);
    for i in 0..verts.len() {
        let j = (i + 1) % verts.len();
        draw_line(verts[i].x, verts[i].y, verts[j].x, verts[j].y, 1.0, color);
    }
}

pub fn draw_circle_fill(center: Vec2, radius: f32, color: Color) {
    draw_circle(center.x, center.y, radius, color);
}

/// Boundary exclusive: a point exactly on the rim is outside.
pub fn is_point_in_circle(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance(point) < radius
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < TOLERANCE,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn quarter_turn_maps_unit_x_to_unit_y() {
        let verts = transform_model(&[(1.0, 0.0)], 0.0, 0.0, std::f32::consts::FRAC_PI_2, 1.0);
        assert_close(verts[0], vec2(0.0, 1.0));
    }

    #[test]
    fn translation_shifts_every_vertex() {
        let square = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        let origin = transform_model(&square, 0.0, 0.0, 0.3, 2.0);
        let shifted = transform_model(&square, 15.0, -7.0, 0.3, 2.0);
        for (a, b) in origin.iter().zip(shifted.iter()) {
            assert_close(*b, *a + vec2(15.0, -7.0));
        }
    }

    #[test]
    fn scale_applies_after_rotation() {
        let verts = transform_model(&[(1.0, 0.0)], 0.0, 0.0, std::f32::consts::FRAC_PI_2, 3.0);
        assert_close(verts[0], vec2(0.0, 3.0));
    }

    #[test]
    fn point_on_the_rim_is_outside() {
        let center = vec2(100.0, 100.0);
        assert!(!is_point_in_circle(center, 10.0, vec2(110.0, 100.0)));
        assert!(is_point_in_circle(center, 10.0, vec2(109.99, 100.0)));
        assert!(!is_point_in_circle(center, 10.0, vec2(110.01, 100.0)));
    }
}
