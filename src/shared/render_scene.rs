//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{IntersectionPoint, Segment};
use std::sync::Arc;

/// Was die Szene gerade zeigt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneMode {
    /// Festgeschriebene Segmente, kein Segment in Arbeit
    #[default]
    Idle,
    /// Letztes Segment folgt dem Zeiger
    Drawing,
    /// Abgeleiteter Frame der Kollaps-Animation
    Collapsing,
}

/// Read-only Daten für einen Render-Aufruf.
///
/// Wird nach jeder sichtbaren Mutation neu gebaut; die Schnittpunkte sind
/// dabei von Grund auf neu berechnet.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Sichtbare Segmente (Arc für O(1)-Clone pro Frame)
    pub segments: Arc<[Segment]>,
    /// Schnittpunkte der sichtbaren Segmente
    pub intersections: Arc<[IntersectionPoint]>,
    pub mode: SceneMode,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
