use std::sync::Arc;

use nalgebra::Vector2;
use skimmer::{FlightModel, GridHeightMap, HeightMap, SceneNode, UniformHeightMap};

/// Flat track at the given height.
pub fn flat_track(height: f64) -> Arc<dyn HeightMap> {
    Arc::new(UniformHeightMap::new(height))
}

/// 80x80 track centered on the origin, rising 0.1 world units per unit of
/// +Z and flat across X.
pub fn ramp_track() -> Arc<dyn HeightMap> {
    let (width, depth) = (80, 80);
    let mut heights = Vec::with_capacity(width * depth);
    for row in 0..depth {
        for _col in 0..width {
            heights.push(row as f64 * 0.1);
        }
    }
    Arc::new(
        GridHeightMap::from_heights(width, depth, 1.0, heights)
            .with_origin(Vector2::new(-40.0, -40.0)),
    )
}

/// A ready-to-drive model with an attached body, hovering over `map`.
pub fn player_model(map: Arc<dyn HeightMap>) -> FlightModel {
    let mut model = FlightModel::new();
    model.attach(SceneNode::new());
    model.set_height_map(map);
    model
}
