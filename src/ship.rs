use std::collections::HashMap;

use macroquad::color::Color;
use macroquad::input::KeyCode;
use macroquad::math::{vec2, Vec2};

use crate::asteroid::Asteroid;
use crate::constants::{
    BULLET_LIFE_SPAN, BULLET_SIZE, BULLET_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH, SHIP_ACCELERATION,
    SHIP_DRAG, SHIP_MODEL, SHIP_ROTATION_SPEED, SHIP_SIZE,
};
use crate::draw;
use crate::input::InputManager;
use crate::sounds::ShipSounds;
use crate::space_object::SpaceObject;

/// A bullet in flight: kinematic state plus the seconds it has been alive.
pub struct Bullet {
    pub obj: SpaceObject,
    pub age: f32,
}

fn in_playfield(position: Vec2) -> bool {
    position.x >= 0.0 && position.x < SCREEN_WIDTH && position.y >= 0.0 && position.y < SCREEN_HEIGHT
}

/// The player's ship: its kinematics, its wireframe model, the bullets it
/// has fired and the sounds its actions trigger.
pub struct Ship {
    obj: SpaceObject,
    color: Color,
    model: &'static [(f32, f32)],
    bullets: Vec<Bullet>,
    is_dead: bool,
    thrusting: bool,
    sounds: ShipSounds,
}

impl Ship {
    pub fn new(position: Vec2, color: Color, sounds: ShipSounds) -> Self {
        Self {
            obj: SpaceObject::new(position, Vec2::ZERO, 0.0, SHIP_SIZE),
            color,
            model: SHIP_MODEL,
            bullets: Vec::new(),
            is_dead: false,
            thrusting: false,
            sounds,
        }
    }

    pub fn space_object(&self) -> &SpaceObject {
        &self.obj
    }

    pub fn space_object_mut(&mut self) -> &mut SpaceObject {
        &mut self.obj
    }

    pub fn position(&self) -> Vec2 {
        self.obj.position
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    /// Nose direction: up at rotation zero.
    pub fn forward_vector(&self) -> Vec2 {
        vec2(self.obj.rotation.sin(), -self.obj.rotation.cos())
    }

    /// Rotation and thrust read held keys; firing is edge-triggered so one
    /// press is one bullet.
    pub fn process_input(&mut self, input: &InputManager, dt: f32) {
        if input.is_key_down(KeyCode::Left) || input.is_key_down(KeyCode::A) {
            self.obj.rotation -= SHIP_ROTATION_SPEED * dt;
        }
        if input.is_key_down(KeyCode::Right) || input.is_key_down(KeyCode::D) {
            self.obj.rotation += SHIP_ROTATION_SPEED * dt;
        }

        let thrusting = input.is_key_down(KeyCode::Up) || input.is_key_down(KeyCode::W);
        if thrusting {
            self.obj.velocity += self.forward_vector() * SHIP_ACCELERATION * dt;
        }
        if thrusting && !self.thrusting {
            self.sounds.hover.play_looped();
        } else if !thrusting && self.thrusting {
            self.sounds.hover.stop();
        }
        self.thrusting = thrusting;

        if input.is_key_pressed(KeyCode::Space) {
            self.spawn_bullet();
        }
    }

    /// Advances the ship and its bullets, then tests the asteroid field.
    /// Returns the indices of asteroids shot this frame; the caller resolves
    /// splitting and scoring.
    pub fn update(&mut self, dt: f32, asteroids: &HashMap<u32, Asteroid>) -> Vec<u32> {
        self.move_ship(dt);
        let shot = self.update_bullets(dt, asteroids);
        self.check_asteroids_collision(asteroids);
        shot
    }

    fn move_ship(&mut self, dt: f32) {
        self.obj.integrate(dt);
        // velocity bleeds off while the engines are idle
        self.obj.velocity -= self.obj.velocity * SHIP_DRAG * dt;
    }

    pub fn move_bullet(bullet: &mut Bullet, dt: f32) {
        bullet.obj.integrate(dt);
        bullet.age += dt;
    }

    fn update_bullets(&mut self, dt: f32, asteroids: &HashMap<u32, Asteroid>) -> Vec<u32> {
        for bullet in &mut self.bullets {
            Self::move_bullet(bullet, dt);
        }

        let mut shot = Vec::new();
        self.bullets.retain(|bullet| {
            if bullet.age > BULLET_LIFE_SPAN || !in_playfield(bullet.obj.position) {
                return false;
            }
            for (&index, asteroid) in asteroids {
                if draw::is_point_in_circle(
                    asteroid.obj.position,
                    asteroid.obj.size,
                    bullet.obj.position,
                ) {
                    if !shot.contains(&index) {
                        shot.push(index);
                    }
                    return false;
                }
            }
            true
        });

        if !shot.is_empty() {
            self.sounds.hit.play();
        }
        shot
    }

    /// Circle-circle test, boundary exclusive: touching rims do not count.
    pub fn is_colliding_with_asteroid(&self, asteroid: &Asteroid) -> bool {
        self.obj.position.distance(asteroid.obj.position) < self.obj.size + asteroid.obj.size
    }

    fn check_asteroids_collision(&mut self, asteroids: &HashMap<u32, Asteroid>) {
        if self.is_dead {
            return;
        }
        if asteroids
            .values()
            .any(|asteroid| self.is_colliding_with_asteroid(asteroid))
        {
            // stop the hover loop so the death cue is audible
            self.sounds.hover.stop();
            self.sounds.dead.play();
            self.thrusting = false;
            self.is_dead = true;
        }
    }

    fn spawn_bullet(&mut self) {
        let forward = self.forward_vector();
        let nose = self.obj.position + forward * self.obj.size;
        let velocity = forward * BULLET_SPEED + self.obj.velocity;
        self.bullets.push(Bullet {
            obj: SpaceObject::new(nose, velocity, self.obj.rotation, BULLET_SIZE),
            age: 0.0,
        });
        self.sounds.laser.play();
    }

    /// Stops every channel the ship owns; looping effects must not outlive
    /// the game loop.
    pub fn halt_all_sounds(&self) {
        self.sounds.hover.stop();
        self.sounds.laser.stop();
        self.sounds.dead.stop();
        self.sounds.hit.stop();
    }

    pub fn render(&self) {
        draw::draw_wire_frame_model(
            self.model,
            self.obj.position.x,
            self.obj.position.y,
            self.obj.rotation,
            self.obj.size,
            self.color,
        );
        for bullet in &self.bullets {
            draw::draw_circle_fill(bullet.obj.position, bullet.obj.size, self.color);
        }
    }
}
