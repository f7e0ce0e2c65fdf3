use serde::{Deserialize, Serialize};

// Cues the simulation raises for whoever plays audio; the simulation never
// plays anything itself
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum SoundEffect {
    GameStart,
    EngineLoopStart,
    NextLap,
    GameEnd,
    EngineLoopStop,
}
