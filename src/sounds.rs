use log::warn;
use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};

pub const RESTART_SOUND_PATH: &str = "assets/sounds/restart.wav";
pub const LASER_SOUND_PATH: &str = "assets/sounds/laser.wav";
pub const HOVER_SOUND_PATH: &str = "assets/sounds/hover.wav";
pub const DEAD_SOUND_PATH: &str = "assets/sounds/dead.wav";
pub const HIT_SOUND_PATH: &str = "assets/sounds/hit.wav";

// the restart jingle is mixed well below the in-game effects
pub const RESTART_VOLUME: f32 = 1.0 / 3.0;

/// One effect slot. `None` means the asset failed to load and the effect
/// plays as silence.
#[derive(Clone)]
pub struct SoundEffect {
    sound: Option<Sound>,
    volume: f32,
}

impl Default for SoundEffect {
    fn default() -> Self {
        Self {
            sound: None,
            volume: 1.0,
        }
    }
}

impl SoundEffect {
    pub async fn load(path: &str) -> Self {
        match load_sound(path).await {
            Ok(sound) => Self {
                sound: Some(sound),
                volume: 1.0,
            },
            Err(err) => {
                warn!("failed to load sound `{path}`: {err:?}; effect disabled");
                Self::default()
            }
        }
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    pub fn play(&self) {
        if let Some(sound) = &self.sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: self.volume,
                },
            );
        }
    }

    pub fn play_looped(&self) {
        if let Some(sound) = &self.sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: true,
                    volume: self.volume,
                },
            );
        }
    }

    pub fn stop(&self) {
        if let Some(sound) = &self.sound {
            stop_sound(sound);
        }
    }
}

/// Every effect the game plays, loaded once at start-up and cloned into
/// whoever owns the action that triggers it.
#[derive(Clone, Default)]
pub struct Sounds {
    pub restart: SoundEffect,
    pub laser: SoundEffect,
    pub hover: SoundEffect,
    pub dead: SoundEffect,
    pub hit: SoundEffect,
}

impl Sounds {
    pub async fn load() -> Self {
        Self {
            restart: SoundEffect::load(RESTART_SOUND_PATH)
                .await
                .with_volume(RESTART_VOLUME),
            laser: SoundEffect::load(LASER_SOUND_PATH).await,
            hover: SoundEffect::load(HOVER_SOUND_PATH).await,
            dead: SoundEffect::load(DEAD_SOUND_PATH).await,
            hit: SoundEffect::load(HIT_SOUND_PATH).await,
        }
    }

    /// The slots the ship keeps for its own actions.
    pub fn ship_sounds(&self) -> ShipSounds {
        ShipSounds {
            hover: self.hover.clone(),
            laser: self.laser.clone(),
            dead: self.dead.clone(),
            hit: self.hit.clone(),
        }
    }
}

#[derive(Clone, Default)]
pub struct ShipSounds {
    pub hover: SoundEffect,
    pub laser: SoundEffect,
    pub dead: SoundEffect,
    pub hit: SoundEffect,
}
