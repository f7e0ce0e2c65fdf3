pub mod bounding_box;
pub mod collisions;
pub mod player_entity;

#[cfg(test)]
mod tests;
