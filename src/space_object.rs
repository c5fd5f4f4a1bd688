use macroquad::math::Vec2;

/// Kinematic state shared by the ship, bullets and asteroids.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpaceObject {
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub size: f32,
}

impl SpaceObject {
    pub fn new(position: Vec2, velocity: Vec2, rotation: f32, size: f32) -> Self {
        Self {
            position,
            velocity,
            rotation,
            size,
        }
    }

    /// One linear integration step.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    #[test]
    fn integrate_moves_along_velocity() {
        let mut obj = SpaceObject::new(vec2(10.0, 20.0), vec2(4.0, -2.0), 0.0, 8.0);
        obj.integrate(0.5);
        assert_eq!(obj.position, vec2(12.0, 19.0));

        obj.integrate(0.5);
        assert_eq!(obj.position, vec2(14.0, 18.0));
    }

    #[test]
    fn integrate_with_zero_velocity_is_a_no_op() {
        let mut obj = SpaceObject::new(vec2(1.0, 2.0), Vec2::ZERO, 1.5, 4.0);
        obj.integrate(10.0);
        assert_eq!(obj.position, vec2(1.0, 2.0));
    }
}
