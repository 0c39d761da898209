//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::Viewport;
use indexmap::IndexMap;

/// Eingaben von Karte, Browser und Layer-Liste ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Einmaliger Abgleich mit dem aktuellen Fragment nach dem Setup
    Startup,
    /// Karte meldet `load` (Stil vollständig geladen)
    MapLoaded,
    /// Karte meldet `moveend`
    MapMoved,
    /// Browser meldet `hashchange` (URL editiert, Zurück/Vor)
    HashChanged { hash: String },
    /// Checkbox/Radio-Button in der Layer-Liste geändert
    LayerToggled { id: String, visible: bool },
    /// Anwendung setzt einen Zusatz-Parameter (`None` entfernt ihn)
    ParameterChanged { key: String, value: Option<String> },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Sichtbarkeit auf die Karte anwenden und Hash neu schreiben
    ApplyVisibility,
    /// Einzelnen Layer schalten
    SetLayerVisibility { id: String, visible: bool },
    /// Layer-Anteil eines Hashes übernehmen
    ApplyLayerString { layers: String },
    /// Hash aus aktuellem Zustand neu schreiben
    UpdateHash,
    /// Zusatz-Parameter mit dekodiertem Hash abgleichen (vor jedem Sprung!)
    ReconcileParameters { additional: IndexMap<String, String> },
    /// Karte zum Viewport springen lassen
    JumpTo { viewport: Viewport },
    /// Zusatz-Parameter lokal setzen
    SetParameter { key: String, value: Option<String> },
}
