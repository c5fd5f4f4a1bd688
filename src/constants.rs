pub const WINDOW_TITLE: &str = "Space Rocks";

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

// longest simulation step the game will integrate; anything above this
// (debugger stop, OS stutter) is treated as a 50 ms frame
pub const MAX_DELTA_TIME: f32 = 0.05;

pub const SHIP_SPAWN_X: f32 = 400.0;
pub const SHIP_SPAWN_Y: f32 = 500.0;
pub const SHIP_SIZE: f32 = 16.0;
pub const SHIP_ACCELERATION: f32 = 160.0;
pub const SHIP_ROTATION_SPEED: f32 = 4.0;
// fraction of velocity shed per second while coasting
pub const SHIP_DRAG: f32 = 0.4;

pub const BULLET_SPEED: f32 = 320.0;
pub const BULLET_SIZE: f32 = 2.0;
pub const BULLET_LIFE_SPAN: f32 = 2.0;

// rocks above the threshold break in two, the rest just vaporize
pub const ASTEROID_SPLIT_THRESHOLD: f32 = 48.0;
pub const ASTEROID_SPLIT_CHILDREN: u32 = 2;
pub const ASTEROID_SPLIT_SPEED_SCALE: f32 = 1.5;
pub const SCORE_LARGE_ASTEROID: u32 = 50;
pub const SCORE_SMALL_ASTEROID: u32 = 100;

// ship wireframe in local space, nose up at rotation zero
pub const SHIP_MODEL: &[(f32, f32)] = &[
    (0.0, -1.0),
    (0.65, 0.8),
    (0.0, 0.45),
    (-0.65, 0.8),
];

// opening field layout: (x, y, vx, vy, rotation, size)
pub const INITIAL_ASTEROIDS: &[(f32, f32, f32, f32, f32, f32)] = &[
    (75.0, 450.0, 8.0, -6.0, 0.5, 48.0),
    (75.0, 250.0, 8.0, -6.0, 0.5, 48.0),
    (185.0, 225.0, 8.0, -6.0, 0.5, 48.0),
    (300.0, 100.0, 8.0, -6.0, 0.5, 96.0),
    (600.0, 130.0, 8.0, -6.0, 0.5, 96.0),
    (300.0, 400.0, 8.0, -6.0, 0.5, 96.0),
    (600.0, 400.0, 8.0, -6.0, 0.5, 96.0),
];

pub const ASSETS_DIR: &str = "assets";
pub const FONT_PATH: &str = "assets/fonts/DejaVuSans.ttf";

pub const HUD_FONT_SIZE: u16 = 24;
pub const BANNER_FONT_SIZE: u16 = 26;
pub const PROMPT_FONT_SIZE: u16 = 20;

pub const DEAD_TEXT: &str = "You Are DEAD!";
pub const WIN_TEXT: &str = "Field Cleared!";
pub const RESTART_TEXT: &str = "Press enter to Restart or escape to exit.";

pub const DEAD_TEXT_POSITION: (f32, f32) = (300.0, 250.0);
pub const WIN_TEXT_POSITION: (f32, f32) = (330.0, 250.0);
pub const RESTART_TEXT_POSITION: (f32, f32) = (150.0, 300.0);
