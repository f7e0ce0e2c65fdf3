use duelrace_core::player::{lap_info::LapNumber, PlayerID, PLAYER_AMOUNT};
use serde::{Deserialize, Serialize};

// What a finished race hands back to whoever started it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaceOutcome {
    pub winner: PlayerID,
    pub track: String,
    pub laps: [LapNumber; PLAYER_AMOUNT],
    // seconds from the end of the countdown to the winning lap
    pub race_time: f64,
}

// Win tally across several races. Lives with the caller, outside any single
// race, so restarting a race never touches it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    wins: [u32; PLAYER_AMOUNT],
    races: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &RaceOutcome) {
        if let Some(wins) = self.wins.get_mut(outcome.winner) {
            *wins += 1;
            self.races += 1;
        }
    }

    pub fn wins_of(&self, player: PlayerID) -> u32 {
        self.wins.get(player).copied().unwrap_or(0)
    }

    pub fn races(&self) -> u32 {
        self.races
    }

    // None while tied
    pub fn leader(&self) -> Option<PlayerID> {
        let best = *self.wins.iter().max()?;
        let mut leaders = (0..PLAYER_AMOUNT).filter(|&player| self.wins[player] == best);
        match (leaders.next(), leaders.next()) {
            (Some(player), None) => Some(player),
            _ => None,
        }
    }
}
