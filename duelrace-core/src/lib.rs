pub mod phase;
pub mod player;
mod settings;
pub mod snapshot;
pub mod sound_effect;

pub use settings::GLOBAL_CONFIG;
