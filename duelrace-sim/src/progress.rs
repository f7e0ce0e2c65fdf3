use std::cmp::Ordering;

use duelrace_core::phase::RacePhase;
use duelrace_core::player::{
    lap_info::{CheckpointID, LapInformation, LapNumber},
    PlayerID,
};
use duelrace_core::GLOBAL_CONFIG;
use tracing::{debug, info};

use crate::checkpoints::{zone_at, Checkpoint};
use crate::physics::player_entity::PlayerEntity;

// Decides which zone entries count towards a lap. Swapping this out is how
// the race rules change (e.g. letting players skip checkpoints).
pub trait ProgressRule {
    fn credits_checkpoint(&self, lap_info: &LapInformation, zone: &Checkpoint) -> bool;
    fn completes_lap(&self, lap_info: &LapInformation, zone_count: usize) -> bool;
}

// Every intermediate checkpoint, in order, before the finish line counts.
// Out of order entries and early finish line crossings are ignored.
pub struct StrictSequence;

impl ProgressRule for StrictSequence {
    fn credits_checkpoint(&self, lap_info: &LapInformation, zone: &Checkpoint) -> bool {
        zone.id == lap_info.next_checkpoint
    }

    fn completes_lap(&self, lap_info: &LapInformation, zone_count: usize) -> bool {
        lap_info.checkpoints_passed >= zone_count.saturating_sub(1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Nothing,
    Checkpoint(CheckpointID),
    Lap(LapNumber),
    Won(LapNumber),
}

pub struct RaceProgressTracker {
    rule: Box<dyn ProgressRule>,
    winning_laps: LapNumber,
}

impl RaceProgressTracker {
    pub fn new(rule: Box<dyn ProgressRule>, winning_laps: LapNumber) -> Self {
        Self { rule, winning_laps }
    }

    pub fn winning_laps(&self) -> LapNumber {
        self.winning_laps
    }

    /* Look at where a player ended up this tick and credit whatever progress
     * that represents. Only entering a zone counts, so calling this again
     * without the player moving changes nothing */
    pub fn evaluate(
        &self,
        player: &mut PlayerEntity,
        zones: &[Checkpoint],
        phase: RacePhase,
    ) -> Progress {
        if !player.can_move || phase != RacePhase::Racing {
            return Progress::Nothing;
        }

        let zone = zone_at(zones, player.position);
        let zone_id = zone.map(|zone| zone.id);
        if zone_id == player.lap_info.occupied_zone {
            return Progress::Nothing;
        }
        player.lap_info.occupied_zone = zone_id;

        let zone = match zone {
            Some(zone) => zone,
            None => return Progress::Nothing,
        };

        let lap_info = &mut player.lap_info;
        if zone.is_finish_line {
            if !self.rule.completes_lap(lap_info, zones.len()) {
                return Progress::Nothing;
            }

            lap_info.checkpoints_passed = 0;
            lap_info.next_checkpoint = 0;
            lap_info.laps_completed = lap_info.laps_completed.saturating_add(1);
            let laps = lap_info.laps_completed;
            info!(player = player.id, laps, "lap completed");

            if laps >= self.winning_laps {
                player.is_winner = true;
                return Progress::Won(laps);
            }
            Progress::Lap(laps)
        } else {
            if !self.rule.credits_checkpoint(lap_info, zone) {
                return Progress::Nothing;
            }

            lap_info.next_checkpoint += 1;
            lap_info.checkpoints_passed += 1;
            // the finish line is never "next"; intermediates just cycle
            if lap_info.next_checkpoint >= zones.len() - 1 {
                lap_info.next_checkpoint = 0;
            }
            debug!(player = player.id, checkpoint = zone.id, "checkpoint passed");
            Progress::Checkpoint(zone.id)
        }
    }

    // Nobody drives after the race is decided, winner included
    pub fn finish_race(&self, players: &mut [PlayerEntity], winner: PlayerID) {
        for player in players.iter_mut() {
            player.freeze();
        }
        info!(winner, "race finished");
    }
}

impl Default for RaceProgressTracker {
    fn default() -> Self {
        Self::new(Box::new(StrictSequence), GLOBAL_CONFIG.winning_laps)
    }
}

// Ordering for the leaderboard: winner first, then most laps, then furthest
// into the current lap
pub fn compare_progress(a: &PlayerEntity, b: &PlayerEntity) -> Ordering {
    b.is_winner
        .cmp(&a.is_winner)
        .then(b.lap_info.laps_completed.cmp(&a.lap_info.laps_completed))
        .then(
            b.lap_info
                .checkpoints_passed
                .cmp(&a.lap_info.checkpoints_passed),
        )
}

pub fn standings(players: &[PlayerEntity]) -> Vec<PlayerID> {
    let mut order: Vec<&PlayerEntity> = players.iter().collect();
    order.sort_by(|a, b| compare_progress(a, b));
    order.into_iter().map(|player| player.id).collect()
}
