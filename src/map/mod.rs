pub mod geometry;
mod projection;
mod renderer;

pub use projection::{Viewport, MAP_CENTER, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
pub use renderer::{Country, ImpactMap, MapLayers};
