use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use duelrace_core::GLOBAL_CONFIG;
use glam::DVec2;
use tracing::{debug, info, warn};

use crate::console::Command;
use crate::error::RaceError;
use crate::game::RaceSession;
use crate::results::Scoreboard;
use crate::track::TrackSelector;

// Headless race host: runs the fixed tick loop and takes its input from
// whatever feeds it commands
pub struct RaceServer {
    session: RaceSession,
    selector: TrackSelector,
    scoreboard: Scoreboard,
    commands: Receiver<Command>,
    outcome_recorded: bool,
}

// Reads commands off stdin on its own thread so the tick loop never blocks
// on input. Closing stdin ends the session.
pub fn spawn_stdin_reader() -> Receiver<Command> {
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("couldn't read from stdin: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if sender.send(command).is_err() {
                        return;
                    }
                }
                Err(e) => warn!("ignoring input: {}", e),
            }
        }
        let _ = sender.send(Command::Quit);
    });

    receiver
}

impl RaceServer {
    pub fn new(
        selector: TrackSelector,
        viewport: DVec2,
        commands: Receiver<Command>,
    ) -> Result<RaceServer, RaceError> {
        let session = RaceSession::new(&selector, viewport)?;
        Ok(RaceServer {
            session,
            selector,
            scoreboard: Scoreboard::new(),
            commands,
            outcome_recorded: false,
        })
    }

    // Runs until a quit command arrives
    pub fn start_loop(&mut self) -> anyhow::Result<()> {
        let tick_duration = Duration::from_millis(GLOBAL_CONFIG.tick_ms);
        let time_step = tick_duration.as_secs_f64();
        info!(
            tick_ms = GLOBAL_CONFIG.tick_ms,
            track = %self.session.map().name,
            "race server running"
        );

        loop {
            let start_time = Instant::now();

            if !self.process_commands()? {
                break;
            }
            self.session.tick(time_step);
            self.play_sound_effects();
            self.record_outcome();

            // wait until the tick time has elapsed
            match tick_duration.checked_sub(start_time.elapsed()) {
                Some(remaining) => thread::sleep(remaining),
                None => warn!("tick took longer than {:?}", tick_duration),
            }
        }

        info!(
            races = self.scoreboard.races(),
            red = self.scoreboard.wins_of(0),
            blue = self.scoreboard.wins_of(1),
            leader = ?self.scoreboard.leader(),
            "shutting down"
        );
        Ok(())
    }

    // handle every queued command in received order; false means quit
    fn process_commands(&mut self) -> anyhow::Result<bool> {
        loop {
            let command = match self.commands.try_recv() {
                Ok(command) => command,
                Err(TryRecvError::Empty) => return Ok(true),
                Err(TryRecvError::Disconnected) => return Ok(false),
            };

            match command {
                Command::Input(player, event) => {
                    self.session.handle_input_event(player, event)?;
                }
                Command::Restart => {
                    self.session
                        .restart(&self.selector)
                        .context("could not restart race")?;
                    self.outcome_recorded = false;
                }
                Command::Status => {
                    let snapshot = self
                        .session
                        .snapshot()
                        .to_json()
                        .context("could not serialize race snapshot")?;
                    println!("{}", snapshot);
                }
                Command::Quit => return Ok(false),
            }
        }
    }

    // nothing to play them on here, so they only get logged
    fn play_sound_effects(&mut self) {
        for effect in self.session.drain_sound_effects() {
            debug!(?effect, "sound cue");
        }
    }

    fn record_outcome(&mut self) {
        if self.outcome_recorded {
            return;
        }
        if let Some(outcome) = self.session.outcome() {
            self.scoreboard.record(&outcome);
            self.outcome_recorded = true;
            info!(
                winner = outcome.winner,
                track = %outcome.track,
                race_time = outcome.race_time,
                wins = self.scoreboard.wins_of(outcome.winner),
                "race won, send 'restart' for another"
            );
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn session(&self) -> &RaceSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::TrackId;
    use duelrace_core::phase::RacePhase;
    use duelrace_core::player::player_inputs::{ControlFlag, InputEvent};

    fn server_with(commands: Vec<Command>) -> RaceServer {
        let (sender, receiver) = mpsc::channel();
        for command in commands {
            sender.send(command).unwrap();
        }
        RaceServer::new(
            TrackSelector::Fixed(TrackId::Meadow),
            DVec2::new(1920.0, 1080.0),
            receiver,
        )
        .unwrap()
    }

    fn run_countdown(server: &mut RaceServer) {
        while server.session().current_phase() == RacePhase::Countdown {
            server.session.tick(1.0 / 60.0);
        }
    }

    #[test]
    fn test_commands_are_applied_until_quit() {
        let mut server = server_with(vec![
            Command::Input(0, InputEvent::Pressed(ControlFlag::TurnLeft)),
            Command::Quit,
            Command::Input(1, InputEvent::Pressed(ControlFlag::TurnRight)),
        ]);
        run_countdown(&mut server);

        assert!(!server.process_commands().unwrap());
        assert!(server.session().player(0).unwrap().player_inputs.turn_left);
        assert!(!server.session().player(1).unwrap().player_inputs.turn_right);
    }

    #[test]
    fn test_restart_command_lines_up_a_new_race() {
        let mut server = server_with(vec![Command::Restart]);
        for _ in 0..200 {
            server.session.tick(1.0 / 60.0);
        }
        assert_eq!(server.session().current_phase(), RacePhase::Racing);

        assert!(server.process_commands().unwrap());
        assert_eq!(server.session().current_phase(), RacePhase::Countdown);
        assert_eq!(server.scoreboard().races(), 0);
    }

    #[test]
    fn test_closed_channel_stops_the_loop() {
        let (sender, receiver) = mpsc::channel::<Command>();
        drop(sender);
        let mut server = RaceServer::new(
            TrackSelector::Fixed(TrackId::Quarry),
            DVec2::new(1920.0, 1080.0),
            receiver,
        )
        .unwrap();
        assert!(server.start_loop().is_ok());
    }
}
