use std::fmt;
use std::fs;
use std::str::FromStr;

use duelrace_core::player::PLAYER_AMOUNT;
use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checkpoints::Checkpoint;
use crate::error::RaceError;
use crate::physics::bounding_box::BoundingBox;
use crate::physics::collisions::{perimeter_walls, ObstacleLayer};

// Unscaled size of the built-in maps: 40 x 23 tiles of 32px
const BUILTIN_MAP_WIDTH: f64 = 1280.0;
const BUILTIN_MAP_HEIGHT: f64 = 736.0;
const WALL_THICKNESS: f64 = 32.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackId {
    Meadow,
    Quarry,
}

impl TrackId {
    pub const ALL: [TrackId; 2] = [TrackId::Meadow, TrackId::Quarry];

    pub fn name(&self) -> &'static str {
        match self {
            TrackId::Meadow => "meadow",
            TrackId::Quarry => "quarry",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> TrackId {
        TrackId::ALL[rng.gen_range(0..TrackId::ALL.len())]
    }

    pub fn layout(&self) -> TrackLayout {
        match self {
            TrackId::Meadow => TrackLayout {
                name: self.name().to_string(),
                map_width: BUILTIN_MAP_WIDTH,
                map_height: BUILTIN_MAP_HEIGHT,
                spawns: [SpawnPoint::new(290.0, 342.0), SpawnPoint::new(410.0, 342.0)],
                checkpoints: vec![
                    RawRect::new(744.0, 350.0, 356.0, 8.0),
                    RawRect::new(168.0, 362.0, 366.0, 8.0),
                ],
                obstacles: Vec::new(),
            },
            TrackId::Quarry => TrackLayout {
                name: self.name().to_string(),
                map_width: BUILTIN_MAP_WIDTH,
                map_height: BUILTIN_MAP_HEIGHT,
                spawns: [SpawnPoint::new(150.0, 342.0), SpawnPoint::new(240.0, 342.0)],
                checkpoints: vec![
                    RawRect::new(836.0, 76.0, 8.0, 157.0),
                    RawRect::new(588.0, 297.0, 208.0, 8.0),
                    RawRect::new(74.0, 362.0, 251.0, 8.0),
                ],
                obstacles: Vec::new(),
            },
        }
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrackId {
    type Err = RaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackId::ALL
            .into_iter()
            .find(|track| track.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RaceError::UnknownTrack(s.to_string()))
    }
}

// Which track the next race is run on
#[derive(Clone, Debug, PartialEq)]
pub enum TrackSelector {
    Random,
    Fixed(TrackId),
    Custom(TrackLayout),
}

impl TrackSelector {
    // "random", the name of a built-in track, or a path to a YAML layout
    pub fn from_setting(setting: &str) -> Result<TrackSelector, RaceError> {
        if setting.eq_ignore_ascii_case("random") {
            Ok(TrackSelector::Random)
        } else if setting.ends_with(".yaml") || setting.ends_with(".yml") {
            let yaml = fs::read_to_string(setting).map_err(|source| RaceError::TrackFile {
                path: setting.to_string(),
                source,
            })?;
            Ok(TrackSelector::Custom(TrackLayout::from_yaml_str(&yaml)?))
        } else {
            Ok(TrackSelector::Fixed(setting.parse()?))
        }
    }

    pub fn resolve(&self) -> TrackLayout {
        match self {
            TrackSelector::Random => TrackId::random(&mut rand::thread_rng()).layout(),
            TrackSelector::Fixed(track) => track.layout(),
            TrackSelector::Custom(layout) => layout.clone(),
        }
    }
}

// Rectangle as the map data stores it: lower-left corner plus size
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RawRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn to_bounds(self) -> BoundingBox {
        BoundingBox::from_corner(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub heading: f64,
}

impl SpawnPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, heading: 0.0 }
    }
}

// Track data in unscaled map coordinates, either built in or read from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackLayout {
    pub name: String,
    pub map_width: f64,
    pub map_height: f64,
    pub spawns: [SpawnPoint; PLAYER_AMOUNT],
    // in driving order; the last one is the finish line
    pub checkpoints: Vec<RawRect>,
    #[serde(default)]
    pub obstacles: Vec<RawRect>,
}

impl TrackLayout {
    pub fn from_yaml_str(yaml: &str) -> Result<TrackLayout, RaceError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

// Uniform scale plus centering offset that fits a map into the viewport
// without stretching it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapTransform {
    pub scale: f64,
    pub offset: DVec2,
}

impl MapTransform {
    pub fn fit(map_size: DVec2, viewport: DVec2) -> Result<MapTransform, RaceError> {
        check_dimensions("map", map_size)?;
        check_dimensions("viewport", viewport)?;

        let scale = (viewport.x / map_size.x).min(viewport.y / map_size.y);
        let offset = (viewport - map_size * scale) / 2.0;
        Ok(MapTransform { scale, offset })
    }

    pub fn apply(&self, point: DVec2) -> DVec2 {
        point * self.scale + self.offset
    }

    pub fn apply_to_bounds(&self, bounds: &BoundingBox) -> BoundingBox {
        bounds.transformed(self.scale, self.offset)
    }
}

fn check_dimensions(what: &'static str, size: DVec2) -> Result<(), RaceError> {
    // written so that NaN fails too
    if !(size.x > 0.0 && size.y > 0.0) {
        return Err(RaceError::InvalidDimensions {
            what,
            width: size.x,
            height: size.y,
        });
    }
    Ok(())
}

// A track laid out in world space, ready to race on
pub struct Map {
    pub name: String,
    pub checkpoints: Vec<Checkpoint>,
    pub spawns: [(DVec2, f64); PLAYER_AMOUNT],
    pub obstacles: ObstacleLayer,
    pub transform: MapTransform,
}

impl Map {
    pub fn build(layout: &TrackLayout, viewport: DVec2) -> Result<Map, RaceError> {
        let map_size = DVec2::new(layout.map_width, layout.map_height);
        let transform = MapTransform::fit(map_size, viewport)?;

        match layout.checkpoints.len() {
            0 => return Err(RaceError::NoCheckpoints),
            1 => return Err(RaceError::NoIntermediateCheckpoints(1)),
            _ => {}
        }

        let finish_id = layout.checkpoints.len() - 1;
        let mut checkpoints = Vec::with_capacity(layout.checkpoints.len());
        for (id, rect) in layout.checkpoints.iter().enumerate() {
            if !(rect.width > 0.0 && rect.height > 0.0) {
                return Err(RaceError::DegenerateCheckpoint {
                    id,
                    width: rect.width,
                    height: rect.height,
                });
            }
            let bounds = transform.apply_to_bounds(&rect.to_bounds());
            checkpoints.push(Checkpoint::new(id, bounds, id == finish_id));
        }

        let spawns = layout
            .spawns
            .map(|spawn| (transform.apply(DVec2::new(spawn.x, spawn.y)), spawn.heading));

        let obstacles = layout
            .obstacles
            .iter()
            .map(|rect| rect.to_bounds())
            .chain(perimeter_walls(map_size, WALL_THICKNESS))
            .map(|bounds| transform.apply_to_bounds(&bounds))
            .collect();

        debug!(
            track = %layout.name,
            scale = transform.scale,
            zones = checkpoints.len(),
            "built track"
        );

        Ok(Map {
            name: layout.name.clone(),
            checkpoints,
            spawns,
            obstacles: ObstacleLayer::new(obstacles),
            transform,
        })
    }
}
