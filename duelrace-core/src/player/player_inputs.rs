use serde::{Deserialize, Serialize};

// The three things a player can hold down; which physical key or button maps
// onto which flag is up to whoever delivers the events
#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum ControlFlag {
    TurnLeft,
    TurnRight,
    Reverse,
}

#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(ControlFlag),
    Released(ControlFlag),
}

#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum EngineStatus {
    Forward,
    Reversing,
}

#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum RotationStatus {
    TurningLeft,
    TurningRight,
    NotTurning,
}

// PlayerInputs is the set of controls a player is currently holding; the
// simulation copies it once at the start of every tick
#[derive(Copy, Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct PlayerInputs {
    pub turn_left: bool,
    pub turn_right: bool,
    pub reverse: bool,
}

impl PlayerInputs {
    pub fn apply(&mut self, event: InputEvent) {
        let (flag, held) = match event {
            InputEvent::Pressed(flag) => (flag, true),
            InputEvent::Released(flag) => (flag, false),
        };

        match flag {
            ControlFlag::TurnLeft => self.turn_left = held,
            ControlFlag::TurnRight => self.turn_right = held,
            ControlFlag::Reverse => self.reverse = held,
        }
    }

    // holding both directions cancels out, same as holding neither
    pub fn rotation_status(&self) -> RotationStatus {
        match (self.turn_left, self.turn_right) {
            (true, false) => RotationStatus::TurningLeft,
            (false, true) => RotationStatus::TurningRight,
            _ => RotationStatus::NotTurning,
        }
    }

    pub fn engine_status(&self) -> EngineStatus {
        if self.reverse {
            EngineStatus::Reversing
        } else {
            EngineStatus::Forward
        }
    }
}
