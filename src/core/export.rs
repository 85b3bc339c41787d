//! Textexport und -import von Kontrollpunkt-Listen.
//!
//! Der Rust-Export erzeugt einen `vec![Vec3::new(..), ..]`-Ausdruck, der direkt
//! als hartkodierte Startpunktliste in Quelltext eingefügt werden kann.
//! JSON dient zum Speichern und Wiederladen einer Sitzung.

use anyhow::Context;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ausgabeformat des Exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportFormat {
    /// `vec![Vec3::new(x, y, z), ...]`
    #[default]
    RustSource,
    /// `[[x, y, z], ...]`
    Json,
}

impl ExportFormat {
    /// Alle Formate in Anzeige-Reihenfolge.
    pub const ALL: [ExportFormat; 2] = [Self::RustSource, Self::Json];

    /// Anzeigename für UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::RustSource => "Rust",
            Self::Json => "JSON",
        }
    }

    /// Vorgeschlagene Dateiendung beim Speichern.
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::RustSource => "rs",
            Self::Json => "json",
        }
    }
}

/// Formatiert einen einzelnen Punkt als Konstruktor-Ausdruck.
///
/// `{:?}` hält den Dezimalpunkt auch bei ganzzahligen Werten (`5.0` statt `5`),
/// sodass der Ausdruck als `f32`-Literal kompiliert.
pub fn format_point(p: Vec3) -> String {
    format!("Vec3::new({:?}, {:?}, {:?})", p.x, p.y, p.z)
}

/// Formatiert alle Punkte als einfügbaren Rust-Ausdruck.
pub fn format_rust_source(points: &[Vec3]) -> String {
    let entries: Vec<String> = points.iter().map(|&p| format_point(p)).collect();
    format!("vec![{}]", entries.join(",\n\t"))
}

/// Formatiert alle Punkte als JSON-Array von `[x, y, z]`-Tripeln.
pub fn format_json(points: &[Vec3]) -> anyhow::Result<String> {
    let triples: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();
    serde_json::to_string_pretty(&triples).context("Punktliste konnte nicht serialisiert werden")
}

/// Formatiert `points` im gewünschten Format.
pub fn format_points(points: &[Vec3], format: ExportFormat) -> anyhow::Result<String> {
    match format {
        ExportFormat::RustSource => Ok(format_rust_source(points)),
        ExportFormat::Json => format_json(points),
    }
}

/// Liest eine JSON-Punktliste (`[[x, y, z], ...]`).
pub fn parse_json_points(text: &str) -> anyhow::Result<Vec<Vec3>> {
    let triples: Vec<[f32; 3]> =
        serde_json::from_str(text).context("Ungültige JSON-Punktliste")?;
    if let Some(i) = triples.iter().position(|t| t.iter().any(|v| !v.is_finite())) {
        anyhow::bail!("Punkt {} enthält keine endliche Koordinate", i);
    }
    Ok(triples.into_iter().map(Vec3::from_array).collect())
}
