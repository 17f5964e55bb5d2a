use crate::core::Point;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neues Segment an `pos` beginnen
    BeginSegment { pos: Point },
    /// Endpunkt des Segments in Arbeit nachführen
    UpdateInProgressEnd { pos: Point },
    /// Segment in Arbeit mit Endpunkt `pos` festschreiben
    FinishSegment { pos: Point },
    /// Segment in Arbeit verwerfen
    CancelInProgressSegment,
    /// Kollaps-Animation starten
    StartCollapse,
    /// Einen Animationsschritt ausführen
    AdvanceCollapse,
    /// Anwendung beenden
    RequestExit,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen und speichern
    ResetOptions,
}
