pub mod checkpoints;
pub mod console;
pub mod error;
pub mod game;
pub mod physics;
pub mod progress;
pub mod results;
pub mod server;
pub mod track;
