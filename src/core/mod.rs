//! Core-Domänentypen: Geometrie, Pfade, Rasterabdeckung, Ausschnitt, Compositor.

pub mod compositor;
pub mod geometry;
/// Pfad-Konstruktion
///
/// Ein Pfad beginnt mit genau einem `MoveTo`, wird während der Geste
/// erweitert und höchstens einmal geschlossen.
pub mod path;
pub mod raster;
pub mod region;

pub use compositor::{overlay_opacity, plan_tiles, render, ReplicationVector, TilePlacement};
pub use geometry::{distance, lazy_match, IntRect, Point, RectF};
pub use path::{bounding_rect, PathCommand, PathShape};
pub use raster::{crop, resize_to_fit, CroppedRegion};
pub use region::{area, contains_point, rasterize_to_region, Region};
