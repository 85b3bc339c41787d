//! Core-Domänentypen: Kontrollpunkte, Catmull-Rom-Kurve, Transform-Handle, Kamera, Export.

pub mod camera;
pub mod curve;
pub mod export;
pub mod handle;
/// Kern des Editors
///
/// `SplinePointSet` hält die geordneten Kontrollpunkte und die daraus
/// abgetastete Outline und erzwingt Mindestanzahl und Handle-Konsistenz.
pub mod spline_point_set;

pub use camera::{ViewCamera, ViewPlane};
pub use curve::{CatmullRomCurve3, CurveSampler, CurveSettings, CurveType};
pub use export::{parse_json_points, ExportFormat};
pub use handle::TransformHandle;
pub use spline_point_set::{
    SpawnBounds, SplinePointSet, ARC_SEGMENTS, DEFAULT_POSITIONS, MIN_POINTS,
};
