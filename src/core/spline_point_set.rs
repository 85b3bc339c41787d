//! Geordnete Kontrollpunkte einer Catmull-Rom-Kurve samt abgeleiteter Outline.
//!
//! Jede Mutation (Hinzufügen, Entfernen, Laden, externe Verschiebung) endet mit
//! einer Neuberechnung der Outline, sodass die Outline immer zu den aktuellen
//! Kontrollpunkten passt.

use super::curve::{sample_into, CatmullRomCurve3, CurveSettings};
use super::export;
use super::handle::TransformHandle;
use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Mindestanzahl an Kontrollpunkten; darunter wird nicht entfernt.
pub const MIN_POINTS: usize = 4;

/// Standard-Auflösung der Outline (Anzahl Abtastpunkte).
pub const ARC_SEGMENTS: usize = 200;

/// Startpositionen eines neuen Editors.
pub const DEFAULT_POSITIONS: [Vec3; MIN_POINTS] = [
    Vec3::new(289.768_44, 452.514_8, 56.100_19),
    Vec3::new(-53.563, 171.497_12, -14.495_473),
    Vec3::new(-91.401_19, 176.430_7, -6.958_272),
    Vec3::new(-383.785_3, 491.136_54, 47.869_297),
];

/// Achsenparalleler Bereich, in dem neue Punkte zufällig platziert werden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnBounds {
    /// Untere Ecke (inklusive)
    pub min: Vec3,
    /// Obere Ecke (exklusive)
    pub max: Vec3,
}

impl Default for SpawnBounds {
    fn default() -> Self {
        Self {
            min: Vec3::new(-500.0, 0.0, -400.0),
            max: Vec3::new(500.0, 600.0, 400.0),
        }
    }
}

impl SpawnBounds {
    /// Prüft, ob alle Ecken und Spannweiten endlich sind.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && (self.max - self.min).is_finite()
    }

    /// Zieht eine zufällige Position innerhalb der Grenzen.
    ///
    /// Leere Achsen (min >= max) und Achsen mit nicht darstellbarer Spannweite liefern `min`.
    pub fn sample(&self, rng: &mut impl Rng) -> Vec3 {
        let mut axis = |lo: f32, hi: f32| {
            if lo < hi && (hi - lo).is_finite() {
                rng.gen_range(lo..hi)
            } else {
                lo
            }
        };
        Vec3::new(
            axis(self.min.x, self.max.x),
            axis(self.min.y, self.max.y),
            axis(self.min.z, self.max.z),
        )
    }
}

/// Kontrollpunkte + Outline-Polyline eines Splines.
#[derive(Debug, Clone)]
pub struct SplinePointSet {
    points: Vec<Vec3>,
    outline: Vec<Vec3>,
    resolution: usize,
    settings: CurveSettings,
    handle: TransformHandle,
    /// Wird bei jeder Outline-Neuberechnung um 1 erhöht
    outline_revision: u64,
}

impl SplinePointSet {
    /// Erstellt ein Set mit den Standardpositionen und Standard-Auflösung.
    pub fn new() -> Self {
        let mut set = Self {
            points: DEFAULT_POSITIONS.to_vec(),
            outline: Vec::with_capacity(ARC_SEGMENTS),
            resolution: ARC_SEGMENTS,
            settings: CurveSettings::default(),
            handle: TransformHandle::new(),
            outline_revision: 0,
        };
        set.regenerate_outline();
        set
    }

    /// Erstellt ein Set aus expliziten Startpositionen.
    ///
    /// Verlangt mindestens [`MIN_POINTS`] Positionen und eine Auflösung von mindestens 2.
    pub fn from_positions(
        positions: Vec<Vec3>,
        resolution: usize,
        settings: CurveSettings,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(
            positions.len() >= MIN_POINTS,
            "Spline braucht mindestens {} Kontrollpunkte, erhalten: {}",
            MIN_POINTS,
            positions.len()
        );
        anyhow::ensure!(
            resolution >= 2,
            "Outline-Auflösung muss mindestens 2 sein, erhalten: {}",
            resolution
        );

        let mut set = Self {
            points: positions,
            outline: Vec::with_capacity(resolution),
            resolution,
            settings,
            handle: TransformHandle::new(),
            outline_revision: 0,
        };
        set.regenerate_outline();
        Ok(set)
    }

    /// Anzahl der Kontrollpunkte.
    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Alle Kontrollpunkte in Kurvenreihenfolge.
    pub fn positions(&self) -> &[Vec3] {
        &self.points
    }

    /// Abgetastete Outline (immer `resolution()` Punkte).
    pub fn outline(&self) -> &[Vec3] {
        &self.outline
    }

    /// Anzahl der Outline-Abtastpunkte.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Aktuelle Kurven-Einstellungen.
    pub fn curve_settings(&self) -> CurveSettings {
        self.settings
    }

    /// Zähler der bisherigen Outline-Neuberechnungen.
    pub fn outline_revision(&self) -> u64 {
        self.outline_revision
    }

    /// Zustand des Transform-Handles.
    pub fn handle(&self) -> &TransformHandle {
        &self.handle
    }

    /// Index des Punkts, an den das Handle gebunden ist.
    pub fn attached(&self) -> Option<usize> {
        self.handle.attached()
    }

    /// Kurve über die aktuellen Kontrollpunkte.
    pub fn curve(&self) -> CatmullRomCurve3<'_> {
        CatmullRomCurve3::new(&self.points, self.settings)
    }

    /// Hängt einen Punkt an das Ende an und gibt seinen Index zurück.
    pub fn add_point(&mut self, position: Vec3) -> usize {
        self.points.push(position);
        self.regenerate_outline();
        log::debug!("Kontrollpunkt hinzugefügt: {:?} (jetzt {})", position, self.count());
        self.points.len() - 1
    }

    /// Hängt einen Punkt an zufälliger Position innerhalb `bounds` an.
    pub fn add_random_point(&mut self, rng: &mut impl Rng, bounds: &SpawnBounds) -> usize {
        let position = bounds.sample(rng);
        self.add_point(position)
    }

    /// Entfernt den letzten Punkt. Bei [`MIN_POINTS`] Punkten passiert nichts.
    ///
    /// Gibt `true` zurück, wenn ein Punkt entfernt wurde.
    pub fn remove_point(&mut self) -> bool {
        if self.pop_last().is_none() {
            return false;
        }
        self.regenerate_outline();
        log::debug!("Letzten Kontrollpunkt entfernt (jetzt {})", self.count());
        true
    }

    /// Ersetzt alle Kontrollpunkte durch `positions`.
    ///
    /// Die Anzahl wird durch Anhängen bzw. Entfernen am Ende angeglichen,
    /// anschließend werden die Positionen slotweise kopiert. Bei weniger als
    /// [`MIN_POINTS`] Positionen bleibt die Anzahl bei [`MIN_POINTS`] und nur
    /// die ersten Slots werden überschrieben. Die Outline wird genau einmal
    /// neu berechnet.
    pub fn load(&mut self, positions: &[Vec3]) {
        while self.points.len() < positions.len() {
            let next = positions[self.points.len()];
            self.points.push(next);
        }
        while self.points.len() > positions.len() {
            if self.pop_last().is_none() {
                break;
            }
        }

        for (slot, &position) in self.points.iter_mut().zip(positions) {
            *slot = position;
        }

        if positions.len() < MIN_POINTS {
            log::warn!(
                "{} Positionen geladen, Spline bleibt bei Mindestanzahl {}",
                positions.len(),
                MIN_POINTS
            );
        }

        self.regenerate_outline();
        log::debug!("{} Kontrollpunkte geladen", self.count());
    }

    /// Tastet die Kurve neu ab und schreibt die Outline.
    ///
    /// Slot `i` erhält den Kurvenpunkt bei `t = i / (resolution - 1)`.
    pub fn regenerate_outline(&mut self) {
        let curve = CatmullRomCurve3::new(&self.points, self.settings);
        sample_into(&curve, self.resolution, &mut self.outline);
        self.outline_revision += 1;
    }

    /// Setzt die Position eines Punkts und berechnet die Outline neu.
    ///
    /// Gibt `false` zurück, wenn `index` nicht existiert.
    pub fn set_point(&mut self, index: usize, position: Vec3) -> bool {
        let Some(slot) = self.points.get_mut(index) else {
            return false;
        };
        *slot = position;
        self.regenerate_outline();
        true
    }

    /// Direkter Schreibzugriff für externe Handles.
    ///
    /// Nach der Änderung muss [`Self::notify_point_changed`] aufgerufen werden.
    pub fn point_mut(&mut self, index: usize) -> Option<&mut Vec3> {
        self.points.get_mut(index)
    }

    /// Meldet eine externe Änderung an einem Kontrollpunkt.
    pub fn notify_point_changed(&mut self) {
        self.regenerate_outline();
    }

    /// Verschiebt den gebundenen Punkt um `delta`. Ohne Bindung passiert nichts.
    pub fn translate_attached(&mut self, delta: Vec3) -> bool {
        let Some(index) = self.handle.attached() else {
            return false;
        };
        let Some(point) = self.point_mut(index) else {
            return false;
        };
        *point += delta;
        self.notify_point_changed();
        true
    }

    /// Bindet das Handle an `index`.
    ///
    /// Gibt `true` zurück, wenn sich die Bindung geändert hat; ungültige Indizes werden ignoriert.
    pub fn attach_handle(&mut self, index: usize) -> bool {
        if index >= self.points.len() {
            log::warn!("Handle-Bindung an ungültigen Index {} ignoriert", index);
            return false;
        }
        self.handle.attach(index)
    }

    /// Löst die Handle-Bindung und gibt den vorherigen Index zurück.
    pub fn detach_handle(&mut self) -> Option<usize> {
        self.handle.detach()
    }

    /// Startet bzw. beendet einen Drag des gebundenen Handles.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.handle.set_dragging(dragging);
    }

    /// Ändert die Kurven-Parametrisierung und berechnet die Outline neu.
    pub fn set_curve_settings(&mut self, settings: CurveSettings) {
        if self.settings == settings {
            return;
        }
        self.settings = settings;
        self.regenerate_outline();
    }

    /// Kontrollpunkte als einfügbarer Rust-Quelltext.
    pub fn export_points(&self) -> String {
        export::format_rust_source(&self.points)
    }

    /// Entfernt den letzten Punkt ohne Neuberechnung.
    ///
    /// Respektiert die Mindestanzahl und löst eine Handle-Bindung an den
    /// entfernten Punkt, bevor er verworfen wird.
    fn pop_last(&mut self) -> Option<Vec3> {
        if self.points.len() <= MIN_POINTS {
            return None;
        }
        let last = self.points.len() - 1;
        if self.handle.is_attached_to(last) {
            self.handle.detach();
            log::debug!("Handle von entferntem Punkt {} gelöst", last);
        }
        self.points.pop()
    }
}

impl Default for SplinePointSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
