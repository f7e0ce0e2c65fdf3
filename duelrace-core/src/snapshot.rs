use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::phase::RacePhase;
use crate::player::lap_info::LapNumber;
use crate::player::PlayerID;

// VehicleSnapshot is everything the renderer needs to draw one car and its
// lap indicator
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub id: PlayerID,
    pub position: DVec2,
    pub heading: f64,
    pub laps_completed: LapNumber,
    pub can_move: bool,
    pub is_winner: bool,
}

// Read once per frame by the presentation layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaceSnapshot {
    pub phase: RacePhase,
    pub countdown_label: Option<String>,
    pub vehicles: Vec<VehicleSnapshot>,
    // laps needed to win, for the "lap n / m" indicator
    pub winning_laps: LapNumber,
    pub winner: Option<PlayerID>,
}

impl RaceSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_names_phase_and_label() {
        let snapshot = RaceSnapshot {
            phase: RacePhase::Countdown,
            countdown_label: Some("3".to_string()),
            vehicles: vec![VehicleSnapshot {
                id: 0,
                position: DVec2::new(1.0, 2.0),
                heading: 0.0,
                laps_completed: 0,
                can_move: false,
                is_winner: false,
            }],
            winning_laps: 3,
            winner: None,
        };

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"phase\":\"Countdown\""));
        assert!(json.contains("\"countdown_label\":\"3\""));
        assert!(json.contains("\"winning_laps\":3"));

        let back: RaceSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
