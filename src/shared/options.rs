//! Zentrale Konfiguration für den Line-Collapse-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::collapse::{COLLAPSE_STEP_COUNT, COLLAPSE_TOTAL_DURATION_MS};
use crate::core::CollapseConfig;
use serde::{Deserialize, Serialize};

// ── Linien ──────────────────────────────────────────────────────────

/// Linienstärke in Pixeln.
pub const LINE_WIDTH: f32 = 2.0;
/// Linienfarbe (RGBA: Schwarz).
pub const LINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Schnittpunkt-Marker ────────────────────────────────────────────

/// Marker-Radius in Pixeln.
pub const MARKER_RADIUS: f32 = 6.0;
/// Füllfarbe der Schnittpunkt-Marker (RGBA: Rot).
pub const MARKER_FILL_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Umriss-Farbe der Schnittpunkt-Marker (RGBA: Schwarz).
pub const MARKER_OUTLINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Zeichenfläche ──────────────────────────────────────────────────

/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const CANVAS_BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Erkennung ──────────────────────────────────────────────────────

/// Toleranz (Pixel) für den Bounding-Box-Test der Schnittpunkt-Erkennung.
pub const INTERSECTION_TOLERANCE: f64 = 1e-6;
/// Größte zulässige Toleranz in Pixeln.
pub const INTERSECTION_TOLERANCE_MAX: f64 = 5.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `line_collapse_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Kollaps ─────────────────────────────────────────────────
    /// Gesamtdauer der Kollaps-Animation in Millisekunden
    pub collapse_duration_ms: u64,
    /// Anzahl der Animationsschritte (Tick-Periode = Dauer / Schritte)
    pub collapse_step_count: u32,

    // ── Erkennung ───────────────────────────────────────────────
    /// Toleranz für den Bounding-Box-Test in Pixeln
    #[serde(default = "default_intersection_tolerance")]
    pub intersection_tolerance: f64,

    // ── Linien ──────────────────────────────────────────────────
    /// Linienstärke in Pixeln
    pub line_width: f32,
    /// Linienfarbe
    pub line_color: [f32; 4],

    // ── Marker ──────────────────────────────────────────────────
    /// Radius der Schnittpunkt-Marker in Pixeln
    pub marker_radius: f32,
    /// Füllfarbe der Schnittpunkt-Marker
    pub marker_fill_color: [f32; 4],
    /// Umriss-Farbe der Schnittpunkt-Marker
    pub marker_outline_color: [f32; 4],

    // ── Zeichenfläche ───────────────────────────────────────────
    /// Hintergrundfarbe
    #[serde(default = "default_canvas_background_color")]
    pub canvas_background_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            collapse_duration_ms: COLLAPSE_TOTAL_DURATION_MS,
            collapse_step_count: COLLAPSE_STEP_COUNT,

            intersection_tolerance: INTERSECTION_TOLERANCE,

            line_width: LINE_WIDTH,
            line_color: LINE_COLOR,

            marker_radius: MARKER_RADIUS,
            marker_fill_color: MARKER_FILL_COLOR,
            marker_outline_color: MARKER_OUTLINE_COLOR,

            canvas_background_color: CANVAS_BACKGROUND_COLOR,
        }
    }
}

/// Serde-Default für `intersection_tolerance` (Abwärtskompatibilität).
fn default_intersection_tolerance() -> f64 {
    INTERSECTION_TOLERANCE
}

/// Serde-Default für `canvas_background_color` (Abwärtskompatibilität).
fn default_canvas_background_color() -> [f32; 4] {
    CANVAS_BACKGROUND_COLOR
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Begrenzt Werte, die aus Datei oder Command stammen, auf gültige Bereiche.
    ///
    /// Eine negative Toleranz würde die Bounding-Boxen verkleinern und
    /// Berührungen an Endpunkten verschlucken.
    pub fn sanitized(mut self) -> Self {
        let tolerance = self.intersection_tolerance;
        if !tolerance.is_finite() {
            log::warn!(
                "Ungültige Schnittpunkt-Toleranz {}, verwende {}",
                tolerance,
                INTERSECTION_TOLERANCE
            );
            self.intersection_tolerance = INTERSECTION_TOLERANCE;
        } else if !(0.0..=INTERSECTION_TOLERANCE_MAX).contains(&tolerance) {
            self.intersection_tolerance = tolerance.clamp(0.0, INTERSECTION_TOLERANCE_MAX);
            log::warn!(
                "Schnittpunkt-Toleranz {} auf {} begrenzt",
                tolerance,
                self.intersection_tolerance
            );
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("line_collapse_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("line_collapse_editor.toml")
    }

    /// Zeitparameter der Kollaps-Animation.
    pub fn collapse_config(&self) -> CollapseConfig {
        CollapseConfig::new(self.collapse_duration_ms, self.collapse_step_count)
    }
}
