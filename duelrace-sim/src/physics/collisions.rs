use glam::DVec2;

use super::bounding_box::BoundingBox;
use super::player_entity::PlayerEntity;

// Moves a player by its velocity for one tick and keeps it out of whatever
// static obstacles the track has. Called once per player per tick, after
// steering and before checkpoint evaluation.
pub trait CollisionResolver {
    fn resolve(&self, player: &mut PlayerEntity);
}

// Wide open track: nothing to bump into
pub struct NoObstacles;

impl CollisionResolver for NoObstacles {
    fn resolve(&self, player: &mut PlayerEntity) {
        player.position += player.velocity;
    }
}

// Fences, walls and any other solid tiles of a track
#[derive(Clone, Debug, Default)]
pub struct ObstacleLayer {
    pub obstacles: Vec<BoundingBox>,
}

impl ObstacleLayer {
    pub fn new(obstacles: Vec<BoundingBox>) -> Self {
        Self { obstacles }
    }

    fn is_blocked(&self, footprint: &BoundingBox) -> bool {
        self.obstacles
            .iter()
            .any(|obstacle| obstacle.is_colliding(footprint))
    }
}

impl CollisionResolver for ObstacleLayer {
    // Each axis is moved and checked on its own so that a car scraping along
    // a wall keeps sliding along it instead of sticking
    fn resolve(&self, player: &mut PlayerEntity) {
        let start = player.position;

        player.position.x += player.velocity.x;
        if self.is_blocked(&player.bounding_box()) {
            player.position.x = start.x;
            player.velocity.x = 0.0;
        }

        player.position.y += player.velocity.y;
        if self.is_blocked(&player.bounding_box()) {
            player.position.y = start.y;
            player.velocity.y = 0.0;
        }
    }
}

// Thin walls around the outside of a map so cars can't leave the screen
pub fn perimeter_walls(map_size: DVec2, thickness: f64) -> Vec<BoundingBox> {
    vec![
        BoundingBox::new(-thickness, map_size.x + thickness, -thickness, 0.0),
        BoundingBox::new(-thickness, map_size.x + thickness, map_size.y, map_size.y + thickness),
        BoundingBox::new(-thickness, 0.0, 0.0, map_size.y),
        BoundingBox::new(map_size.x, map_size.x + thickness, 0.0, map_size.y),
    ]
}
