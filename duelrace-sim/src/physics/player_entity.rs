use duelrace_core::player::{
    lap_info::LapInformation,
    player_inputs::{EngineStatus, PlayerInputs, RotationStatus},
    PlayerID,
};
use duelrace_core::GLOBAL_CONFIG;
use glam::DVec2;

use crate::physics::bounding_box::BoundingBox;

pub struct PlayerEntity {
    pub id: PlayerID,

    pub position: DVec2,
    // degrees; 0 faces +y and positive values turn clockwise. never
    // normalized, sin/cos take care of any winding
    pub heading: f64,
    // degrees, always within +-max_steering_angle
    pub steering_angle: f64,
    // world units per tick
    pub velocity: DVec2,
    pub engine_status: EngineStatus,
    pub size: DVec2,

    pub player_inputs: PlayerInputs,
    pub lap_info: LapInformation,

    pub can_move: bool,
    pub has_started: bool,
    pub is_winner: bool,
}

// Unit vector pointing where a heading (in degrees) faces
pub fn heading_direction(heading: f64) -> DVec2 {
    let radians = heading.to_radians();
    DVec2::new(radians.sin(), radians.cos())
}

impl PlayerEntity {
    pub fn new(id: PlayerID, spawn: DVec2, heading: f64) -> PlayerEntity {
        PlayerEntity {
            id,
            position: spawn,
            heading,
            steering_angle: 0.0,
            velocity: DVec2::ZERO,
            engine_status: EngineStatus::Forward,
            size: DVec2::new(GLOBAL_CONFIG.car_width, GLOBAL_CONFIG.car_length),
            player_inputs: PlayerInputs::default(),
            lap_info: LapInformation::new(),
            can_move: false,
            has_started: false,
            is_winner: false,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::centered_on(self.position, self.size)
    }

    /* Given the controls held at the start of this tick, update steering,
     * heading and velocity. Position is left alone; moving the car is the
     * collision resolver's job */
    pub fn do_physics_step(&mut self, inputs: &PlayerInputs, time_step: f64) {
        if !self.can_move {
            self.velocity = DVec2::ZERO;
            return;
        }

        let max_steer = GLOBAL_CONFIG.max_steering_angle;
        self.steering_angle = match inputs.rotation_status() {
            RotationStatus::TurningLeft => -max_steer,
            RotationStatus::TurningRight => max_steer,
            RotationStatus::NotTurning => self.steering_angle * GLOBAL_CONFIG.steering_decay,
        }
        .clamp(-max_steer, max_steer);

        self.engine_status = inputs.engine_status();

        // turn rate scales with time, not with speed
        let heading_change =
            self.steering_angle.to_radians() * time_step * GLOBAL_CONFIG.steering_gain;
        self.heading += heading_change.to_degrees();

        self.velocity = self.velocity_along_heading();
    }

    // reversing keeps the car facing the same way and only flips the direction
    // of travel
    fn velocity_along_heading(&self) -> DVec2 {
        let facing = heading_direction(self.heading);
        match self.engine_status {
            EngineStatus::Forward => facing * GLOBAL_CONFIG.car_speed,
            EngineStatus::Reversing => facing * -GLOBAL_CONFIG.car_reverse_speed,
        }
    }

    // Hand control to the player and give the initial push off the line
    pub fn launch(&mut self) {
        self.can_move = true;
        self.has_started = true;
        self.engine_status = EngineStatus::Forward;
        self.velocity = self.velocity_along_heading();
    }

    // Letting go of reverse snaps straight back to full forward speed
    pub fn release_reverse(&mut self) {
        if !self.can_move {
            return;
        }
        self.engine_status = EngineStatus::Forward;
        self.velocity = self.velocity_along_heading();
    }

    pub fn freeze(&mut self) {
        self.can_move = false;
        self.velocity = DVec2::ZERO;
    }
}
