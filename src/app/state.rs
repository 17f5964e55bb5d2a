//! Application State — zentrale Datenhaltung.

use super::scheduler::{FrameScheduler, TimerHandle};
use super::CommandLog;
use crate::core::{CollapseAnimator, SegmentStore};
use crate::shared::{EditorOptions, RenderScene, SceneMode};

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Ob der Optionen-Dialog sichtbar ist
    pub show_options_dialog: bool,
    /// Letzte Statusmeldung (z.B. Fehler beim Speichern der Optionen)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            show_options_dialog: false,
            status_message: None,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Segmente in Zeichenreihenfolge inkl. Segment in Arbeit
    pub segments: SegmentStore,
    /// Kollaps-Animation
    pub collapse: CollapseAnimator,
    /// Handle des laufenden Animations-Timers
    pub collapse_timer: Option<TimerHandle>,
    /// Periodischer Timer, vom Frame-Loop abgefragt
    pub scheduler: FrameScheduler,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// UI-Zustand
    pub ui: UiState,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
    /// Zuletzt gebaute Render-Szene
    pub render_scene: RenderScene,
    /// Sichtbarer Zustand hat sich seit dem letzten Szenen-Build geändert
    pub(crate) scene_dirty: bool,
    /// Signalisiert, dass die Anwendung beendet werden soll
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren AppState.
    pub fn new() -> Self {
        Self {
            segments: SegmentStore::new(),
            collapse: CollapseAnimator::new(),
            collapse_timer: None,
            scheduler: FrameScheduler::new(),
            options: EditorOptions::default(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            render_scene: RenderScene::default(),
            scene_dirty: false,
            should_exit: false,
        }
    }

    /// Fortschritt der laufenden Animation als `(schritt, letzter_schritt)`.
    ///
    /// Der letzte Schritt stammt aus der beim Start festgelegten
    /// Konfiguration, nicht aus den aktuellen Optionen.
    pub fn collapse_progress(&self) -> Option<(u32, u32)> {
        let step = self.collapse.step_index()?;
        let config = self.collapse.config()?;
        Some((step, config.final_step()))
    }

    /// Gibt zurück, ob die Kollaps-Animation läuft.
    pub fn is_collapsing(&self) -> bool {
        self.collapse.is_collapsing()
    }

    /// Gibt zurück, ob ein Kollaps gestartet werden kann.
    pub fn can_collapse(&self) -> bool {
        !self.is_collapsing() && !self.segments.committed().is_empty()
    }

    /// Aktueller Modus für Anzeige und Rendering.
    pub fn scene_mode(&self) -> SceneMode {
        if self.is_collapsing() {
            SceneMode::Collapsing
        } else if self.segments.is_drawing() {
            SceneMode::Drawing
        } else {
            SceneMode::Idle
        }
    }

    /// Markiert den sichtbaren Zustand als geändert.
    pub fn mark_scene_dirty(&mut self) {
        self.scene_dirty = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
