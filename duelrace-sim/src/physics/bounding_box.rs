use glam::DVec2;
use serde::{Deserialize, Serialize};

// Axis-aligned rectangle in world space; edges count as inside
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> BoundingBox {
        BoundingBox {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn from_vecs(min: DVec2, max: DVec2) -> BoundingBox {
        BoundingBox {
            min_x: min.x,
            max_x: max.x,
            min_y: min.y,
            max_y: max.y,
        }
    }

    // track data describes rectangles by their lower-left corner and size
    pub fn from_corner(x: f64, y: f64, width: f64, height: f64) -> BoundingBox {
        BoundingBox::new(x, x + width, y, y + height)
    }

    pub fn centered_on(center: DVec2, size: DVec2) -> BoundingBox {
        let half = size / 2.0;
        BoundingBox::from_vecs(center - half, center + half)
    }

    pub fn contains_point(&self, point: DVec2) -> bool {
        self.min_x <= point.x
            && point.x <= self.max_x
            && self.min_y <= point.y
            && point.y <= self.max_y
    }

    pub fn is_colliding(&self, other: &BoundingBox) -> bool {
        // https://developer.mozilla.org/en-US/docs/Games/Techniques/2D_collision_detection
        (self.min_x <= other.max_x && self.max_x >= other.min_x)
            && (self.min_y <= other.max_y && self.max_y >= other.min_y)
    }

    // map a rectangle from unscaled map coordinates into world coordinates
    pub fn transformed(&self, scale: f64, offset: DVec2) -> BoundingBox {
        BoundingBox::new(
            self.min_x * scale + offset.x,
            self.max_x * scale + offset.x,
            self.min_y * scale + offset.y,
            self.max_y * scale + offset.y,
        )
    }
}
