//! Default value functions for serde deserialization.

pub fn grid_step() -> u32 {
    15
}

pub fn walkable_threshold() -> u8 {
    200
}

pub fn max_distance() -> f32 {
    50.0
}

pub fn poi_max_distance() -> f32 {
    120.0
}

pub fn max_iterations() -> usize {
    1_000_000
}

pub fn walking_speed_mps() -> f32 {
    1.4
}

pub fn graph_path() -> String {
    "navgraph.json".to_string()
}
