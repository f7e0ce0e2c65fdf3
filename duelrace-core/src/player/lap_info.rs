use serde::{Deserialize, Serialize};

pub type LapNumber = u8;
pub type CheckpointID = usize;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LapInformation {
    pub laps_completed: LapNumber,
    // id of the next intermediate checkpoint this player has to drive through;
    // cycles back to 0 after the last intermediate one, the finish line is
    // tracked separately through `checkpoints_passed`
    pub next_checkpoint: CheckpointID,
    // intermediate checkpoints credited since the last completed lap
    pub checkpoints_passed: usize,
    // zone the player was inside on the previous evaluation, so that sitting
    // inside a zone for several ticks only counts as one entry
    pub occupied_zone: Option<CheckpointID>,
}

impl LapInformation {
    pub fn new() -> Self {
        LapInformation {
            laps_completed: 0,
            next_checkpoint: 0,
            checkpoints_passed: 0,
            occupied_zone: None,
        }
    }
}

impl Default for LapInformation {
    fn default() -> Self {
        Self::new()
    }
}
