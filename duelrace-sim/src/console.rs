use std::str::FromStr;

use duelrace_core::player::{
    player_inputs::{ControlFlag, InputEvent},
    PlayerID, PLAYER_AMOUNT,
};
use thiserror::Error;

// Line based stand-in for a keyboard: "red press left", "1 release reverse",
// "restart", "status", "quit"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Input(PlayerID, InputEvent),
    Restart,
    Status,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown player '{0}'")]
    UnknownPlayer(String),
    #[error("expected 'press' or 'release', got '{0}'")]
    UnknownAction(String),
    #[error("expected 'left', 'right' or 'reverse', got '{0}'")]
    UnknownControl(String),
    #[error("unrecognized command '{0}'")]
    Unrecognized(String),
}

fn parse_player(word: &str) -> Result<PlayerID, ParseCommandError> {
    let player = match word.to_ascii_lowercase().as_str() {
        "red" => 0,
        "blue" => 1,
        other => other
            .parse::<PlayerID>()
            .map_err(|_| ParseCommandError::UnknownPlayer(word.to_string()))?,
    };

    if player >= PLAYER_AMOUNT {
        return Err(ParseCommandError::UnknownPlayer(word.to_string()));
    }
    Ok(player)
}

fn parse_control(word: &str) -> Result<ControlFlag, ParseCommandError> {
    match word.to_ascii_lowercase().as_str() {
        "left" => Ok(ControlFlag::TurnLeft),
        "right" => Ok(ControlFlag::TurnRight),
        "reverse" | "back" => Ok(ControlFlag::Reverse),
        _ => Err(ParseCommandError::UnknownControl(word.to_string())),
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(ParseCommandError::Empty),
            [word] => match word.to_ascii_lowercase().as_str() {
                "restart" | "r" => Ok(Command::Restart),
                "status" => Ok(Command::Status),
                "quit" | "exit" => Ok(Command::Quit),
                _ => Err(ParseCommandError::Unrecognized(line.trim().to_string())),
            },
            [player, action, control] => {
                let player = parse_player(player)?;
                let control = parse_control(control)?;
                let event = match action.to_ascii_lowercase().as_str() {
                    "press" | "down" => InputEvent::Pressed(control),
                    "release" | "up" => InputEvent::Released(control),
                    _ => return Err(ParseCommandError::UnknownAction(action.to_string())),
                };
                Ok(Command::Input(player, event))
            }
            _ => Err(ParseCommandError::Unrecognized(line.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_lines() {
        assert_eq!(
            "red press left".parse(),
            Ok(Command::Input(0, InputEvent::Pressed(ControlFlag::TurnLeft)))
        );
        assert_eq!(
            " 1  UP reverse ".parse(),
            Ok(Command::Input(1, InputEvent::Released(ControlFlag::Reverse)))
        );
        assert_eq!("R".parse(), Ok(Command::Restart));
        assert_eq!("quit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "green press left".parse::<Command>(),
            Err(ParseCommandError::UnknownPlayer("green".to_string()))
        );
        assert_eq!(
            "2 press left".parse::<Command>(),
            Err(ParseCommandError::UnknownPlayer("2".to_string()))
        );
        assert_eq!(
            "blue hold left".parse::<Command>(),
            Err(ParseCommandError::UnknownAction("hold".to_string()))
        );
        assert_eq!(
            "blue press jump".parse::<Command>(),
            Err(ParseCommandError::UnknownControl("jump".to_string()))
        );
        assert!(matches!(
            "honk".parse::<Command>(),
            Err(ParseCommandError::Unrecognized(_))
        ));
    }
}
