use serde::{Deserialize, Serialize};

// Countdown -> Racing -> Finished, never backwards and never skipping
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum RacePhase {
    // Players can see the track and each other but have no control yet
    Countdown,
    Racing,
    // Someone reached the winning lap count; everything is frozen
    Finished,
}
