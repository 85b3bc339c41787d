//! Spline-Path-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    CatmullRomCurve3, CurveSampler, CurveSettings, CurveType, ExportFormat, SpawnBounds,
    SplinePointSet, TransformHandle, ViewCamera, ViewPlane, ARC_SEGMENTS, DEFAULT_POSITIONS,
    MIN_POINTS,
};
pub use shared::{EditorOptions, RenderScene};
