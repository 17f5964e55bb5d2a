use crate::core::Point;
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärtaste auf der Zeichenfläche (Segment beginnen oder abschließen)
    PrimaryActivation { pos: Point },
    /// Sekundärtaste auf der Zeichenfläche (nur beim Zeichnen: Segment verwerfen)
    SecondaryActivation { pos: Point },
    /// Zeiger über der Zeichenfläche bewegt
    PointerMoved { pos: Point },
    /// Segment in Arbeit per Tastatur verwerfen (Escape)
    CancelDrawingRequested,
    /// "Linien kollabieren"-Button gedrückt
    CollapseRequested,
    /// Periodischer Timer der Kollaps-Animation ist abgelaufen
    CollapseTickElapsed,
    /// Anwendung beenden
    ExitRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
