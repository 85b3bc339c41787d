//! Orthografische Ansichtskamera mit Pan und Zoom für die 3D-Szene.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Ebene, auf die die Szene projiziert wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewPlane {
    /// Blick entlang -Z: rechts = +X, oben = +Y
    #[default]
    Front,
    /// Blick entlang -Y: rechts = +X, oben = -Z
    Top,
    /// Blick entlang -X: rechts = -Z, oben = +Y
    Side,
}

impl ViewPlane {
    /// Alle Ansichten in Anzeige-Reihenfolge.
    pub const ALL: [ViewPlane; 3] = [Self::Front, Self::Top, Self::Side];

    /// Anzeigename für UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Front => "Vorne (XY)",
            Self::Top => "Oben (XZ)",
            Self::Side => "Seite (ZY)",
        }
    }

    /// Welt-Achsen, die auf Bildschirm-rechts bzw. -oben abgebildet werden.
    pub fn axes(self) -> (Vec3, Vec3) {
        match self {
            Self::Front => (Vec3::X, Vec3::Y),
            Self::Top => (Vec3::X, Vec3::NEG_Z),
            Self::Side => (Vec3::NEG_Z, Vec3::Y),
        }
    }

    /// Projiziert einen Weltpunkt auf Ebenen-Koordinaten (rechts, oben).
    pub fn project(self, world: Vec3) -> Vec2 {
        let (right, up) = self.axes();
        Vec2::new(world.dot(right), world.dot(up))
    }

    /// Hebt ein Ebenen-Delta zurück in den Weltraum (Tiefenachse bleibt 0).
    pub fn unproject_delta(self, delta: Vec2) -> Vec3 {
        let (right, up) = self.axes();
        right * delta.x + up * delta.y
    }
}

/// Orthografische Kamera über einer [`ViewPlane`]
#[derive(Debug, Clone)]
pub struct ViewCamera {
    /// Betrachtete Ebene
    pub plane: ViewPlane,
    /// Bildmitte in Ebenen-Koordinaten
    pub center: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl ViewCamera {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f32 = 600.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 50.0;

    /// Erstellt eine Kamera, die auf den Arbeitsbereich der Standardpunkte blickt.
    pub fn new() -> Self {
        Self {
            plane: ViewPlane::Front,
            center: Vec2::new(0.0, 250.0),
            zoom: 1.0,
        }
    }

    /// Verschiebt die Kamera um ein Ebenen-Delta (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Ändert den Zoom-Level innerhalb `[min, max]`.
    pub fn zoom_by(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Welt-Einheiten pro Bildschirm-Pixel.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }

    /// Weltpunkt → Bildschirm-Pixel (Ursprung oben links, y nach unten).
    pub fn world_to_screen(&self, world: Vec3, screen_size: Vec2) -> Vec2 {
        let wpp = self.world_per_pixel(screen_size.y);
        let rel = (self.plane.project(world) - self.center) / wpp;
        screen_size * 0.5 + Vec2::new(rel.x, -rel.y)
    }

    /// Bildschirm-Delta in Pixeln → Welt-Delta innerhalb der Ansichtsebene.
    pub fn screen_delta_to_world(&self, delta_px: Vec2, viewport_height: f32) -> Vec3 {
        let wpp = self.world_per_pixel(viewport_height);
        self.plane
            .unproject_delta(Vec2::new(delta_px.x, -delta_px.y) * wpp)
    }

    /// Index des Punkts, der dem Cursor am nächsten liegt (innerhalb `radius_px`).
    pub fn pick(
        &self,
        points: &[Vec3],
        cursor_px: Vec2,
        screen_size: Vec2,
        radius_px: f32,
    ) -> Option<usize> {
        points
            .iter()
            .enumerate()
            .map(|(i, &p)| (i, self.world_to_screen(p, screen_size).distance(cursor_px)))
            .filter(|&(_, d)| d <= radius_px)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self::new()
    }
}
