use duelrace_core::phase::RacePhase;
use duelrace_core::player::{
    lap_info::LapNumber,
    player_inputs::{InputEvent, PlayerInputs},
    PlayerID, PLAYER_AMOUNT,
};
use duelrace_core::snapshot::{RaceSnapshot, VehicleSnapshot};
use duelrace_core::sound_effect::SoundEffect;
use duelrace_core::GLOBAL_CONFIG;
use glam::DVec2;
use tracing::info;

use crate::error::RaceError;
use crate::physics::collisions::CollisionResolver;
use crate::physics::player_entity::PlayerEntity;
use crate::progress::{standings, Progress, RaceProgressTracker};
use crate::results::RaceOutcome;
use crate::track::{Map, TrackSelector};

use self::phase::*;

pub mod phase;

// One race between two players, from the countdown to the winning lap
pub struct RaceSession {
    phase: GamePhase,
    players: [PlayerEntity; PLAYER_AMOUNT],
    map: Map,

    tracker: RaceProgressTracker,
    ladder: CountdownLadder,
    viewport: DVec2,
    sound_effects: Vec<SoundEffect>,
}

fn get_starting_players(map: &Map) -> [PlayerEntity; PLAYER_AMOUNT] {
    let mut id = 0;
    map.spawns.map(|(spawn, heading)| {
        let mut player = PlayerEntity::new(id, spawn, heading);
        // cars shrink and grow with the track around them
        player.size *= map.transform.scale;
        id += 1;
        player
    })
}

impl RaceSession {
    pub fn new(selector: &TrackSelector, viewport: DVec2) -> Result<RaceSession, RaceError> {
        Self::with_tracker(selector, viewport, RaceProgressTracker::default())
    }

    pub fn with_tracker(
        selector: &TrackSelector,
        viewport: DVec2,
        tracker: RaceProgressTracker,
    ) -> Result<RaceSession, RaceError> {
        let map = Map::build(&selector.resolve(), viewport)?;
        info!(track = %map.name, "new race");

        Ok(RaceSession {
            phase: GamePhase::starting_countdown(GLOBAL_CONFIG.countdown_seconds),
            players: get_starting_players(&map),
            map,
            tracker,
            ladder: CountdownLadder::for_duration(GLOBAL_CONFIG.countdown_seconds),
            viewport,
            sound_effects: Vec::new(),
        })
    }

    // Throw the current race away and line up a new one. If the new track
    // is broken the current race is left untouched.
    pub fn restart(&mut self, selector: &TrackSelector) -> Result<(), RaceError> {
        let map = Map::build(&selector.resolve(), self.viewport)?;
        info!(track = %map.name, "race restarted");

        self.players = get_starting_players(&map);
        self.map = map;
        self.phase = GamePhase::starting_countdown(GLOBAL_CONFIG.countdown_seconds);
        self.sound_effects.clear();
        Ok(())
    }

    // Advance one tick using the track's own obstacles
    pub fn tick(&mut self, time_step: f64) {
        self.step(time_step, None);
    }

    // Advance one tick, letting an outside collaborator move the players and
    // keep them out of obstacles
    pub fn tick_with(&mut self, time_step: f64, resolver: &dyn CollisionResolver) {
        self.step(time_step, Some(resolver));
    }

    fn step(&mut self, time_step: f64, external: Option<&dyn CollisionResolver>) {
        // everyone drives with what they were holding when the tick began
        let inputs: Vec<PlayerInputs> = self
            .players
            .iter()
            .map(|player| player.player_inputs)
            .collect();

        self.phase
            .tick(&mut self.players, time_step, &mut self.sound_effects);
        if self.phase.kind() != RacePhase::Racing {
            return;
        }

        let resolver: &dyn CollisionResolver = match external {
            Some(resolver) => resolver,
            None => &self.map.obstacles,
        };

        for (player, inputs) in self.players.iter_mut().zip(inputs.iter()) {
            player.do_physics_step(inputs, time_step);
            if player.can_move {
                resolver.resolve(player);
            }
        }

        let mut winner = None;
        for player in self.players.iter_mut() {
            match self
                .tracker
                .evaluate(player, &self.map.checkpoints, RacePhase::Racing)
            {
                Progress::Lap(_) => self.sound_effects.push(SoundEffect::NextLap),
                Progress::Won(_) => {
                    winner = Some(player.id);
                    break;
                }
                Progress::Checkpoint(_) | Progress::Nothing => {}
            }
        }

        if let Some(winner) = winner {
            self.tracker.finish_race(&mut self.players, winner);
            self.phase.finish(winner);
            self.sound_effects.extend([
                SoundEffect::NextLap,
                SoundEffect::GameEnd,
                SoundEffect::EngineLoopStop,
            ]);
        }
    }

    pub fn apply_control_input(
        &mut self,
        player: PlayerID,
        inputs: PlayerInputs,
    ) -> Result<(), RaceError> {
        let counting_down = self.phase.kind() == RacePhase::Countdown;
        let player = self
            .players
            .get_mut(player)
            .ok_or(RaceError::UnknownPlayer(player))?;

        // keys pressed or released before the start are dropped
        if counting_down {
            return Ok(());
        }

        let releasing_reverse = player.player_inputs.reverse && !inputs.reverse;
        player.player_inputs = inputs;
        if releasing_reverse {
            player.release_reverse();
        }
        Ok(())
    }

    pub fn handle_input_event(
        &mut self,
        player: PlayerID,
        event: InputEvent,
    ) -> Result<(), RaceError> {
        let mut inputs = self
            .players
            .get(player)
            .ok_or(RaceError::UnknownPlayer(player))?
            .player_inputs;
        inputs.apply(event);
        self.apply_control_input(player, inputs)
    }

    pub fn current_phase(&self) -> RacePhase {
        self.phase.kind()
    }

    pub fn winner(&self) -> Option<PlayerID> {
        match &self.phase {
            GamePhase::Finished(state) => Some(state.winner),
            _ => None,
        }
    }

    pub fn laps_of(&self, player: PlayerID) -> Option<LapNumber> {
        self.players
            .get(player)
            .map(|player| player.lap_info.laps_completed)
    }

    pub fn countdown_label(&self) -> Option<&str> {
        self.phase.countdown_label(&self.ladder)
    }

    pub fn player(&self, player: PlayerID) -> Option<&PlayerEntity> {
        self.players.get(player)
    }

    pub fn players(&self) -> &[PlayerEntity] {
        &self.players
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn winning_laps(&self) -> LapNumber {
        self.tracker.winning_laps()
    }

    fn laps_by_player(&self) -> [LapNumber; PLAYER_AMOUNT] {
        let mut laps = [0; PLAYER_AMOUNT];
        for (laps, player) in laps.iter_mut().zip(self.players.iter()) {
            *laps = player.lap_info.laps_completed;
        }
        laps
    }

    pub fn standings(&self) -> Vec<PlayerID> {
        standings(&self.players)
    }

    pub fn outcome(&self) -> Option<RaceOutcome> {
        match &self.phase {
            GamePhase::Finished(state) => Some(RaceOutcome {
                winner: state.winner,
                track: self.map.name.clone(),
                laps: self.laps_by_player(),
                race_time: state.race_time,
            }),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> RaceSnapshot {
        RaceSnapshot {
            phase: self.current_phase(),
            countdown_label: self.countdown_label().map(String::from),
            vehicles: self
                .players
                .iter()
                .map(|player| VehicleSnapshot {
                    id: player.id,
                    position: player.position,
                    heading: player.heading,
                    laps_completed: player.lap_info.laps_completed,
                    can_move: player.can_move,
                    is_winner: player.is_winner,
                })
                .collect(),
            winning_laps: self.winning_laps(),
            winner: self.winner(),
        }
    }

    // Cues raised since the last call, oldest first
    pub fn drain_sound_effects(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sound_effects)
    }
}
