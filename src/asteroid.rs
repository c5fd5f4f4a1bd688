use macroquad::color::Color;

use crate::draw;
use crate::space_object::SpaceObject;

/// A drifting rock. It only moves and draws itself; splitting and scoring
/// are resolved by the game when a bullet connects.
pub struct Asteroid {
    pub obj: SpaceObject,
    pub color: Color,
}

impl Asteroid {
    pub fn new(obj: SpaceObject, color: Color) -> Self {
        Self { obj, color }
    }

    pub fn update(&mut self, dt: f32) {
        self.obj.integrate(dt);
    }

    pub fn render(&self) {
        draw::draw_circle_fill(self.obj.position, self.obj.size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::color::YELLOW;
    use macroquad::math::vec2;

    #[test]
    fn update_drifts_along_velocity() {
        let mut asteroid = Asteroid::new(
            SpaceObject::new(vec2(75.0, 450.0), vec2(8.0, -6.0), 0.5, 48.0),
            YELLOW,
        );
        asteroid.update(1.0);
        assert_eq!(asteroid.obj.position, vec2(83.0, 444.0));
    }
}
