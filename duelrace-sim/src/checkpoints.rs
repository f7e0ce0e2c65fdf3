use duelrace_core::player::lap_info::CheckpointID;
use glam::DVec2;

use crate::physics::bounding_box::BoundingBox;

// One progress zone of a track. Ids follow the order they have to be driven
// through and the highest id is always the finish line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkpoint {
    pub id: CheckpointID,
    pub bounds: BoundingBox,
    pub is_finish_line: bool,
}

impl Checkpoint {
    pub fn new(id: CheckpointID, bounds: BoundingBox, is_finish_line: bool) -> Self {
        Self {
            id,
            bounds,
            is_finish_line,
        }
    }
}

pub fn zone_contains(zone: &Checkpoint, point: DVec2) -> bool {
    zone.bounds.contains_point(point)
}

// First zone, in id order, that the point is inside of
pub fn zone_at(zones: &[Checkpoint], point: DVec2) -> Option<&Checkpoint> {
    zones.iter().find(|zone| zone_contains(zone, point))
}
