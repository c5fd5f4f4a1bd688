use log::error;
use macroquad::prelude::{next_frame, Conf};

mod asteroid;
mod constants;
mod draw;
mod error;
mod game;
mod input;
mod ship;
mod sounds;
mod space_object;
mod text;
mod timer;

use constants::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use game::{Game, GameAssets};
use input::InputManager;

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        fullscreen: std::env::args().any(|arg| arg == "--fullscreen"),
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let assets = match GameAssets::load().await {
        Ok(assets) => assets,
        Err(err) => {
            error!("initialization failed: {err}");
            std::process::exit(1);
        }
    };

    let mut input = InputManager::new();
    let mut game = Game::new(assets);

    while game.is_running() {
        input.poll();
        game.process_input(&input);
        game.update();
        game.render();
        input.end_frame();
        next_frame().await;
    }

    game.halt_all_sounds();
}
