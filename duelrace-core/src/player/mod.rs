pub mod lap_info;
pub mod player_inputs;

pub type PlayerID = usize;

// Races are always head-to-head
pub const PLAYER_AMOUNT: usize = 2;
