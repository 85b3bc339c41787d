//! Catmull-Rom-Kurve durch eine beliebige Anzahl von 3D-Kontrollpunkten.
//!
//! Der Parameter `t ∈ [0, 1]` wird über die gesamte Punktfolge verteilt:
//! bei einer offenen Kurve liegt `t = 0` auf dem ersten und `t = 1` auf dem
//! letzten Punkt, bei einer geschlossenen Kurve kehrt `t = 1` zum ersten Punkt zurück.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Abstände unterhalb dieser Schwelle gelten als entartet (zusammenfallende Punkte).
const DEGENERATE_SPACING: f32 = 1e-4;

/// Standard-Spannung der uniformen Variante (0.5 = klassischer Catmull-Rom).
pub const DEFAULT_TENSION: f32 = 0.5;

/// Parametrisierung der Catmull-Rom-Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveType {
    /// Uniforme Knoten, Tangenten über die Spannung skaliert
    #[default]
    Uniform,
    /// Knotenabstand = Wurzel der Sehnenlänge
    Centripetal,
    /// Knotenabstand = Sehnenlänge
    Chordal,
}

impl CurveType {
    /// Alle Varianten in Anzeige-Reihenfolge.
    pub const ALL: [CurveType; 3] = [Self::Uniform, Self::Centripetal, Self::Chordal];

    /// Anzeigename für UI und Log.
    pub fn label(self) -> &'static str {
        match self {
            Self::Uniform => "Uniform",
            Self::Centripetal => "Centripetal",
            Self::Chordal => "Chordal",
        }
    }

    /// Exponent auf den quadrierten Punktabstand (nur für nicht-uniforme Varianten).
    fn spacing_power(self) -> Option<f32> {
        match self {
            Self::Uniform => None,
            Self::Centripetal => Some(0.25),
            Self::Chordal => Some(0.5),
        }
    }
}

/// Einstellungen, mit denen eine Kurve ausgewertet wird.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSettings {
    /// Parametrisierung
    pub curve_type: CurveType,
    /// Spannung der uniformen Variante
    pub tension: f32,
    /// Geschlossene Kurve (letzter Punkt wird mit dem ersten verbunden)
    pub closed: bool,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            curve_type: CurveType::Uniform,
            tension: DEFAULT_TENSION,
            closed: false,
        }
    }
}

/// Wertet eine glatte Kurve an einem Parameter aus.
pub trait CurveSampler {
    /// Punkt auf der Kurve bei `t ∈ [0, 1]`.
    fn point_at(&self, t: f32) -> Vec3;
}

/// Kubisches Hermite-Polynom zwischen `x1` und `x2` mit Tangenten `t1`, `t2`.
fn hermite(x1: Vec3, x2: Vec3, t1: Vec3, t2: Vec3, w: f32) -> Vec3 {
    let c0 = x1;
    let c1 = t1;
    let c2 = -3.0 * x1 + 3.0 * x2 - 2.0 * t1 - t2;
    let c3 = 2.0 * x1 - 2.0 * x2 + t1 + t2;
    let w2 = w * w;
    c0 + c1 * w + c2 * w2 + c3 * w2 * w
}

/// Uniformes Catmull-Rom-Segment von p1 nach p2 (w ∈ [0, 1]).
///
/// Mit `tension = 0.5` identisch zur klassischen Formel
/// `0.5 * (2p1 + (-p0 + p2) w + (2p0 - 5p1 + 4p2 - p3) w² + (-p0 + 3p1 - 3p2 + p3) w³)`.
pub fn catmull_rom_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, tension: f32, w: f32) -> Vec3 {
    hermite(p1, p2, tension * (p2 - p0), tension * (p3 - p1), w)
}

/// Nicht-uniformes Catmull-Rom-Segment mit Knotenabständen `dt0`, `dt1`, `dt2`.
#[allow(clippy::too_many_arguments)]
pub fn nonuniform_catmull_rom_point(
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    dt0: f32,
    dt1: f32,
    dt2: f32,
    w: f32,
) -> Vec3 {
    let mut t1 = (p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1;
    let mut t2 = (p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2;
    // Tangenten auf [0, 1] des mittleren Segments normieren
    t1 *= dt1;
    t2 *= dt1;
    hermite(p1, p2, t1, t2, w)
}

/// Catmull-Rom-Kurve über eine geliehene Punktfolge.
#[derive(Debug, Clone, Copy)]
pub struct CatmullRomCurve3<'a> {
    points: &'a [Vec3],
    settings: CurveSettings,
}

impl<'a> CatmullRomCurve3<'a> {
    /// Erstellt eine Kurve durch `points`.
    pub fn new(points: &'a [Vec3], settings: CurveSettings) -> Self {
        Self { points, settings }
    }

    /// Die zugrunde liegenden Kontrollpunkte.
    pub fn points(&self) -> &'a [Vec3] {
        self.points
    }

    /// Segment-Index und lokaler Parameter für globales `t`.
    fn locate(&self, t: f32) -> (isize, f32) {
        let l = self.points.len();
        let span = if self.settings.closed { l } else { l - 1 };
        let p = span as f32 * t;
        let mut index = p.floor() as isize;
        let mut weight = p - index as f32;

        if self.settings.closed {
            index = index.rem_euclid(l as isize);
        } else if weight == 0.0 && index >= l as isize - 1 {
            index = l as isize - 2;
            weight = 1.0;
        }
        (index, weight)
    }

    /// Punkt mit Index `i`; geschlossene Kurven wickeln um.
    fn wrapped(&self, i: isize) -> Vec3 {
        let l = self.points.len() as isize;
        self.points[i.rem_euclid(l) as usize]
    }
}

impl CurveSampler for CatmullRomCurve3<'_> {
    fn point_at(&self, t: f32) -> Vec3 {
        let points = self.points;
        let l = points.len();
        match l {
            0 => return Vec3::ZERO,
            1 => return points[0],
            _ => {}
        }

        let (i, weight) = self.locate(t.clamp(0.0, 1.0));
        let closed = self.settings.closed;

        // Rand-Nachbarn offener Kurven werden gespiegelt
        let p0 = if closed || i > 0 {
            self.wrapped(i - 1)
        } else {
            2.0 * points[0] - points[1]
        };
        let p1 = self.wrapped(i);
        let p2 = self.wrapped(i + 1);
        let p3 = if closed || (i + 2) < l as isize {
            self.wrapped(i + 2)
        } else {
            2.0 * points[l - 1] - points[l - 2]
        };

        match self.settings.curve_type.spacing_power() {
            None => catmull_rom_point(p0, p1, p2, p3, self.settings.tension, weight),
            Some(pow) => {
                let mut dt0 = p0.distance_squared(p1).powf(pow);
                let mut dt1 = p1.distance_squared(p2).powf(pow);
                let mut dt2 = p2.distance_squared(p3).powf(pow);

                if dt1 < DEGENERATE_SPACING {
                    dt1 = 1.0;
                }
                if dt0 < DEGENERATE_SPACING {
                    dt0 = dt1;
                }
                if dt2 < DEGENERATE_SPACING {
                    dt2 = dt1;
                }
                nonuniform_catmull_rom_point(p0, p1, p2, p3, dt0, dt1, dt2, weight)
            }
        }
    }
}

/// Tastet `sampler` an `count` gleichverteilten Parametern ab und schreibt in `out`.
///
/// `out` wird auf `count` Einträge gebracht; Parameter ist `t = i / (count - 1)`.
pub fn sample_into(sampler: &impl CurveSampler, count: usize, out: &mut Vec<Vec3>) {
    out.clear();
    out.reserve(count);
    let denom = count.saturating_sub(1).max(1) as f32;
    for i in 0..count {
        let t = i as f32 / denom;
        out.push(sampler.point_at(t));
    }
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
