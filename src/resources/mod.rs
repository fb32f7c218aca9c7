pub mod heightmap;

pub use heightmap::{GridHeightMap, HeightMap, UniformHeightMap};
