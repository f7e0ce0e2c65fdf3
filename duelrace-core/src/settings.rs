use config::{Config, ConfigError, File};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub tick_ms: u64,

    // world units per tick
    pub car_speed: f64,
    pub car_reverse_speed: f64,
    // degrees
    pub max_steering_angle: f64,
    pub steering_gain: f64,
    // multiplier applied once per tick while no single direction is held
    pub steering_decay: f64,
    pub car_width: f64,
    pub car_length: f64,

    pub winning_laps: u8,
    // seconds
    pub countdown_seconds: f64,
    pub go_banner_seconds: f64,

    pub viewport_width: f64,
    pub viewport_height: f64,
    // either a track name or "random"
    pub track: String,
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("tick_ms", 16)?
            .set_default("car_speed", 4.0)?
            .set_default("car_reverse_speed", 2.0)?
            .set_default("max_steering_angle", 45.0)?
            .set_default("steering_gain", 1.5)?
            .set_default("steering_decay", 0.7)?
            .set_default("car_width", 20.0)?
            .set_default("car_length", 36.0)?
            .set_default("winning_laps", 3)?
            .set_default("countdown_seconds", 3.0)?
            .set_default("go_banner_seconds", 1.0)?
            .set_default("viewport_width", 1920.0)?
            .set_default("viewport_height", 1080.0)?
            .set_default("track", "random")?
            .add_source(File::with_name("config.yaml").required(false))
            .build()?;

        config.try_deserialize()
    }
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Settings = Settings::new().expect("failed to read config file");
}
