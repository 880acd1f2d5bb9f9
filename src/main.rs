mod config;
mod engine;
mod error;
mod log;
mod note;
mod ranges;
mod settings;
mod strerr;
mod surface;
mod ticker;
mod track;

use config::{Config, PRESETS};
use engine::Engine;
use log::{Log, log};
use ranges::{GAME_FPS, parse_ranges};
use sdl2::{event::Event, keyboard::Keycode};
use settings::{JsonFileStore, Settings, SettingsStore};
use strerr::Strerr;
use ticker::Ticker;
use track::Track;

const TITLE: &str = "cuedrill";
const SETTINGS_FILE: &str = "cuedrill.json";

const TRACK_X: f32 = 4.0;
const TRACK_Y: f32 = 4.0;
const TRACK_W: f32 = 500.0;
const TRACK_H: f32 = 76.0;
const SIZE: (u32, u32) = (TRACK_W as u32 + 2 * TRACK_X as u32, TRACK_H as u32 + 2 * TRACK_Y as u32);

const OFFSET_STEP: f32 = 1.0;
const SPEED_STEP: f32 = 25.0;
const SPEED_MIN: f32 = 25.0;

fn main() {
    if let Err(e) = practically_main() {
        log(Log::Error, e);
    }
}

/// The live form state: which range list is loaded plus the adjustable
/// settings. A `Config` is built from it fresh on every start.
struct Inputs {
    label: String,
    ranges_text: String,
    preset: usize,
    settings: Settings,
}

impl Inputs {
    fn load_preset(&mut self, index: usize) {
        let preset = &PRESETS[index % PRESETS.len()];

        self.preset = index % PRESETS.len();
        self.label = preset.name.to_string();
        self.ranges_text = preset.frames.to_string();
    }

    fn config(&self) -> Result<Config, error::TrackError> {
        Ok(Config {
            ranges: parse_ranges(&self.ranges_text)?,
            offset: self.settings.offset / GAME_FPS,
            scroll_speed: self.settings.scroll_speed,
            gutter: self.settings.gutter,
        })
    }

    fn status(&self) -> String {
        format!(
            "{TITLE} | {} | offset {:+} | speed {} | {}",
            self.label,
            self.settings.offset,
            self.settings.scroll_speed,
            if self.settings.gutter { "gutter" } else { "no gutter" },
        )
    }
}

fn practically_main() -> Result<(), String> {
    let mut store = JsonFileStore::new(SETTINGS_FILE);
    let settings = store.load().unwrap_or_default();

    let mut inputs = Inputs {
        label: String::new(),
        ranges_text: String::new(),
        preset: 0,
        settings,
    };

    // an argument replaces the preset list's first load with a custom
    // range string; Tab still cycles back to the presets
    match std::env::args().nth(1) {
        Some(text) => {
            inputs.label = "custom".to_string();
            inputs.ranges_text = text;
        }
        None => inputs.load_preset(0),
    }

    let mut engine = Engine::new(TITLE, SIZE)?;
    let mut event_pump = engine.event_pump()?;
    let mut track = Track::new(TRACK_X, TRACK_Y, TRACK_W, TRACK_H);
    let mut ticker = Ticker::new();

    engine.set_title(inputs.status())?;
    log(
        Log::Info,
        "G/Return start | Tab preset | arrows offset/speed | T gutter | S save | Esc quit",
    );

    'main_loop: loop {
        let mut touched = false;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main_loop,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match key {
                    Keycode::ESCAPE => break 'main_loop,
                    Keycode::G | Keycode::RETURN => {
                        match inputs.config().and_then(|config| track.reset(&config, &mut engine)) {
                            Ok(()) => log(
                                Log::Info,
                                format!(
                                    "started \"{}\": {} note(s), target at {}px, strip {}px",
                                    inputs.label,
                                    track.notes().len(),
                                    track.target_x(),
                                    track.display_w(),
                                ),
                            ),
                            Err(e) => log(Log::Warning, format!("start rejected: {e}")),
                        }
                    }
                    Keycode::TAB => {
                        inputs.load_preset(inputs.preset + 1);
                        touched = true;
                    }
                    Keycode::LEFT => {
                        inputs.settings.offset -= OFFSET_STEP;
                        touched = true;
                    }
                    Keycode::RIGHT => {
                        inputs.settings.offset += OFFSET_STEP;
                        touched = true;
                    }
                    Keycode::DOWN => {
                        inputs.settings.scroll_speed =
                            (inputs.settings.scroll_speed - SPEED_STEP).max(SPEED_MIN);
                        touched = true;
                    }
                    Keycode::UP => {
                        inputs.settings.scroll_speed += SPEED_STEP;
                        touched = true;
                    }
                    Keycode::T => {
                        inputs.settings.gutter = !inputs.settings.gutter;
                        touched = true;
                    }
                    Keycode::S => match store.save(&inputs.settings) {
                        Ok(()) => log(Log::Info, "settings saved"),
                        Err(e) => log(Log::Warning, format!("settings not saved ({e})")),
                    },
                    _ => (),
                },
                _ => (),
            }
        }

        if touched {
            engine.set_title(inputs.status())?;
        }

        let dt = ticker.tick();
        track.update(dt).strerr()?;
        track.draw(&mut engine);

        engine.clear();
        engine.render()?;
        engine.present();
    }

    Ok(())
}
