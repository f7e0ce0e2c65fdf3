use duelrace_core::phase::RacePhase;
use duelrace_core::player::PlayerID;
use duelrace_core::sound_effect::SoundEffect;
use duelrace_core::GLOBAL_CONFIG;
use tracing::info;

use crate::physics::player_entity::PlayerEntity;

// What the countdown overlay shows, as (threshold, label) pairs checked top
// down: the first threshold the remaining time is above wins
pub struct CountdownLadder {
    steps: Vec<(f64, String)>,
    final_label: String,
}

impl CountdownLadder {
    // One step per whole second: 3.0 gives "3" above 2s, "2" above 1s,
    // "1" above 0s and "GO" after that
    pub fn for_duration(seconds: f64) -> Self {
        let whole_seconds = seconds.ceil().max(0.0) as u32;
        let steps = (1..=whole_seconds)
            .rev()
            .map(|n| (f64::from(n - 1), n.to_string()))
            .collect();

        Self {
            steps,
            final_label: String::from("GO"),
        }
    }

    pub fn label(&self, remaining: f64) -> &str {
        self.steps
            .iter()
            .find(|(threshold, _)| remaining > *threshold)
            .map(|(_, label)| label.as_str())
            .unwrap_or(&self.final_label)
    }

    pub fn final_label(&self) -> &str {
        &self.final_label
    }
}

pub struct CountingDownState {
    pub remaining: f64,
}

pub struct RacingState {
    pub elapsed: f64,
    // the "GO" overlay lingers for a moment after the start; players can
    // already drive while it is up
    pub go_banner_remaining: f64,
}

pub struct FinishedState {
    pub winner: PlayerID,
    pub race_time: f64,
}

pub enum GamePhase {
    // Players see the track and each other, with a countdown until they get
    // control
    CountingDown(CountingDownState),
    Racing(RacingState),
    // Someone won; nothing moves anymore
    Finished(FinishedState),
}

impl GamePhase {
    pub fn starting_countdown(seconds: f64) -> GamePhase {
        GamePhase::CountingDown(CountingDownState { remaining: seconds })
    }

    pub fn kind(&self) -> RacePhase {
        match self {
            GamePhase::CountingDown(_) => RacePhase::Countdown,
            GamePhase::Racing(_) => RacePhase::Racing,
            GamePhase::Finished(_) => RacePhase::Finished,
        }
    }

    /* Run the clock for one tick. This is the only place players are handed
     * control at the start of a race */
    pub fn tick(
        &mut self,
        players: &mut [PlayerEntity],
        time_step: f64,
        sound_effects: &mut Vec<SoundEffect>,
    ) {
        match self {
            GamePhase::CountingDown(state) => {
                state.remaining -= time_step;
                if state.remaining > 0.0 {
                    return;
                }

                let first_start = players.iter().all(|player| !player.has_started);
                for player in players.iter_mut() {
                    player.launch();
                }
                if first_start {
                    sound_effects.push(SoundEffect::GameStart);
                    sound_effects.push(SoundEffect::EngineLoopStart);
                }

                *self = GamePhase::Racing(RacingState {
                    elapsed: 0.0,
                    go_banner_remaining: GLOBAL_CONFIG.go_banner_seconds,
                });
                info!("countdown over, race is on");
            }
            GamePhase::Racing(state) => {
                state.elapsed += time_step;
                state.go_banner_remaining = (state.go_banner_remaining - time_step).max(0.0);
            }
            GamePhase::Finished(_) => {}
        }
    }

    pub fn countdown_label<'a>(&self, ladder: &'a CountdownLadder) -> Option<&'a str> {
        match self {
            GamePhase::CountingDown(state) => Some(ladder.label(state.remaining)),
            GamePhase::Racing(state) if state.go_banner_remaining > 0.0 => {
                Some(ladder.final_label())
            }
            _ => None,
        }
    }

    pub fn finish(&mut self, winner: PlayerID) {
        let race_time = match self {
            GamePhase::Racing(state) => state.elapsed,
            _ => 0.0,
        };
        *self = GamePhase::Finished(FinishedState { winner, race_time });
    }
}
