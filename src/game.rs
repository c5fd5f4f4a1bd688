use std::collections::HashMap;
use std::path::Path;

use log::info;
use macroquad::color::{BLACK, GREEN, RED, YELLOW};
use macroquad::input::KeyCode;
use macroquad::math::{vec2, Vec2};
use macroquad::text::{load_ttf_font, Font};
use macroquad::window::clear_background;
use rand::Rng;

use crate::asteroid::Asteroid;
use crate::constants::{
    ASSETS_DIR, ASTEROID_SPLIT_CHILDREN, ASTEROID_SPLIT_SPEED_SCALE, ASTEROID_SPLIT_THRESHOLD,
    BANNER_FONT_SIZE, DEAD_TEXT, DEAD_TEXT_POSITION, FONT_PATH, HUD_FONT_SIZE, INITIAL_ASTEROIDS,
    MAX_DELTA_TIME, PROMPT_FONT_SIZE, RESTART_TEXT, RESTART_TEXT_POSITION, SCORE_LARGE_ASTEROID,
    SCORE_SMALL_ASTEROID, SCREEN_HEIGHT, SCREEN_WIDTH, SHIP_SPAWN_X, SHIP_SPAWN_Y, WIN_TEXT,
    WIN_TEXT_POSITION,
};
use crate::error::InitError;
use crate::input::InputManager;
use crate::ship::Ship;
use crate::sounds::Sounds;
use crate::space_object::SpaceObject;
use crate::text::TextRenderer;
use crate::timer::Timer;

/// Everything the game needs loaded before the loop starts. The font is
/// fatal to miss; sound effects degrade per file.
#[derive(Default)]
pub struct GameAssets {
    pub font: Option<Font>,
    pub sounds: Sounds,
}

impl GameAssets {
    pub async fn load() -> Result<Self, InitError> {
        if !Path::new(ASSETS_DIR).is_dir() {
            return Err(InitError::Assets {
                path: ASSETS_DIR.to_owned(),
            });
        }

        let font = load_ttf_font(FONT_PATH).await.map_err(|err| InitError::Font {
            path: FONT_PATH.to_owned(),
            message: format!("{err:?}"),
        })?;

        Ok(Self {
            font: Some(font),
            sounds: Sounds::load().await,
        })
    }
}

/// Stall guard: a frame never integrates more than [`MAX_DELTA_TIME`].
pub fn clamp_delta(delta: f32) -> f32 {
    delta.min(MAX_DELTA_TIME)
}

/// Toroidal wrap, each axis independent: past `dimension + size` an object
/// re-enters at `-size`, and symmetrically below `-size`.
pub fn wrap_coordinates(obj: &mut SpaceObject) {
    let size = obj.size;

    if obj.position.x > SCREEN_WIDTH + size {
        obj.position.x = -size;
    } else if obj.position.x < -size {
        obj.position.x = SCREEN_WIDTH + size;
    }

    if obj.position.y > SCREEN_HEIGHT + size {
        obj.position.y = -size;
    } else if obj.position.y < -size {
        obj.position.y = SCREEN_HEIGHT + size;
    }
}

/// The top-level context object: owns the ship, the asteroid field, the
/// timers and the HUD, and drives one round after another.
pub struct Game {
    is_running: bool,
    is_dead: bool,
    player_won: bool,
    ship: Ship,
    asteroids: HashMap<u32, Asteroid>,
    asteroids_index: u32,
    timer: Timer,
    ticks_count: u64,
    delta_time: f32,
    fps: f32,
    score: u32,
    font: Option<Font>,
    sounds: Sounds,
    fps_text: TextRenderer,
    score_text: TextRenderer,
    dead_text: TextRenderer,
    win_text: TextRenderer,
    restart_text: TextRenderer,
}

impl Game {
    pub fn new(assets: GameAssets) -> Self {
        let GameAssets { font, sounds } = assets;
        let mut game = Self {
            is_running: false,
            is_dead: false,
            player_won: false,
            ship: Ship::new(
                vec2(SHIP_SPAWN_X, SHIP_SPAWN_Y),
                GREEN,
                sounds.ship_sounds(),
            ),
            asteroids: HashMap::new(),
            asteroids_index: 0,
            timer: Timer::start(),
            ticks_count: 0,
            delta_time: 0.0,
            fps: 0.0,
            score: 0,
            fps_text: TextRenderer::new("", font.clone(), HUD_FONT_SIZE, RED),
            score_text: TextRenderer::new("", font.clone(), HUD_FONT_SIZE, RED),
            dead_text: TextRenderer::new(DEAD_TEXT, font.clone(), BANNER_FONT_SIZE, RED),
            win_text: TextRenderer::new(WIN_TEXT, font.clone(), BANNER_FONT_SIZE, RED),
            restart_text: TextRenderer::new(RESTART_TEXT, font.clone(), PROMPT_FONT_SIZE, RED),
            font,
            sounds,
        };
        game.restart_game();
        game.is_running = true;
        game
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn quit(&mut self) {
        self.is_running = false;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Escape always quits; Enter restarts a finished round; everything
    /// else belongs to the ship.
    pub fn process_input(&mut self, input: &InputManager) {
        if input.is_key_down(KeyCode::Escape) {
            self.quit();
        }

        if (self.is_dead || self.player_won) && input.is_key_pressed(KeyCode::Enter) {
            self.restart_game();
        }

        self.ship.process_input(input, self.delta_time);
    }

    /// One simulation step: measure the delta, clamp it, advance.
    pub fn update(&mut self) {
        let now = self.timer.peek_milliseconds();
        let delta = clamp_delta((now - self.ticks_count) as f32 / 1000.0);
        self.ticks_count = now;
        self.advance(delta);
    }

    fn advance(&mut self, delta: f32) {
        self.delta_time = delta;
        if delta > 0.0 {
            self.fps = 1.0 / delta;
        }
        self.fps_text.update_text(format!("FPS: {:.0}", self.fps));
        self.score_text.update_text(format!("SCORE: {}", self.score));

        if self.is_dead {
            return;
        }

        let shot = self.ship.update(delta, &self.asteroids);
        wrap_coordinates(self.ship.space_object_mut());

        // asteroids deliberately never wrap; they drift off the field
        for asteroid in self.asteroids.values_mut() {
            asteroid.update(delta);
        }

        for index in shot {
            self.on_asteroid_hit(index);
        }

        if self.ship.is_dead() {
            self.set_is_dead(true);
        }
    }

    pub fn render(&self) {
        clear_background(BLACK);

        if !self.is_dead {
            self.ship.render();
            for asteroid in self.asteroids.values() {
                asteroid.render();
            }

            let line_height = self.fps_text.text_size().y;
            self.fps_text.draw(vec2(10.0, line_height));
            self.score_text.draw(vec2(10.0, line_height * 2.0 + 4.0));

            if self.player_won {
                self.win_text.draw(Vec2::from(WIN_TEXT_POSITION));
                self.restart_text.draw(Vec2::from(RESTART_TEXT_POSITION));
            }
        } else {
            self.dead_text.draw(Vec2::from(DEAD_TEXT_POSITION));
            self.restart_text.draw(Vec2::from(RESTART_TEXT_POSITION));
        }
    }

    /// Indices grow monotonically and are never reused within a session.
    pub fn add_asteroid(&mut self, obj: SpaceObject) {
        self.asteroids_index += 1;
        self.asteroids.insert(self.asteroids_index, Asteroid::new(obj, YELLOW));
    }

    /// A fresh round: new ship, new timer, new HUD, the fixed opening
    /// asteroid layout, index counter back to zero. The score survives the
    /// round boundary; only a process start zeroes it.
    pub fn restart_game(&mut self) {
        info!("starting a new round");

        self.ship = Ship::new(
            vec2(SHIP_SPAWN_X, SHIP_SPAWN_Y),
            GREEN,
            self.sounds.ship_sounds(),
        );
        self.timer = Timer::start();
        self.ticks_count = 0;

        self.fps_text = TextRenderer::new("", self.font.clone(), HUD_FONT_SIZE, RED);
        self.score_text = TextRenderer::new("", self.font.clone(), HUD_FONT_SIZE, RED);
        self.dead_text = TextRenderer::new(DEAD_TEXT, self.font.clone(), BANNER_FONT_SIZE, RED);
        self.win_text = TextRenderer::new(WIN_TEXT, self.font.clone(), BANNER_FONT_SIZE, RED);
        self.restart_text =
            TextRenderer::new(RESTART_TEXT, self.font.clone(), PROMPT_FONT_SIZE, RED);

        self.asteroids.clear();
        self.asteroids_index = 0;
        for &(x, y, vx, vy, rotation, size) in INITIAL_ASTEROIDS {
            self.add_asteroid(SpaceObject::new(vec2(x, y), vec2(vx, vy), rotation, size));
        }

        self.sounds.restart.play();
        self.is_dead = false;
        self.player_won = false;
    }

    /// Becoming dead ends the round: the whole asteroid field is cleared.
    pub fn set_is_dead(&mut self, is_dead: bool) {
        self.is_dead = is_dead;
        if is_dead {
            self.asteroids.clear();
        }
    }

    /// Resolves a shot rock: large ones split in two, small ones vaporize;
    /// smaller is worth more. Emptying the field wins the round.
    fn on_asteroid_hit(&mut self, index: u32) {
        let Some(asteroid) = self.asteroids.remove(&index) else {
            return;
        };
        let obj = asteroid.obj;

        if obj.size > ASTEROID_SPLIT_THRESHOLD {
            let mut rng = rand::thread_rng();
            let speed = obj.velocity.length() * ASTEROID_SPLIT_SPEED_SCALE;
            for _ in 0..ASTEROID_SPLIT_CHILDREN {
                let heading = rng.gen::<f32>() * std::f32::consts::TAU;
                self.add_asteroid(SpaceObject::new(
                    obj.position,
                    vec2(heading.cos(), heading.sin()) * speed,
                    rng.gen::<f32>(),
                    obj.size / 2.0,
                ));
            }
            self.add_score(SCORE_LARGE_ASTEROID);
        } else {
            self.add_score(SCORE_SMALL_ASTEROID);
        }

        if self.asteroids.is_empty() && !self.is_dead {
            info!("field cleared at {} points", self.score);
            self.player_won = true;
        }
    }

    pub fn halt_all_sounds(&self) {
        self.ship.halt_all_sounds();
    }
}
