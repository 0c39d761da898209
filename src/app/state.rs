//! Application State: zentrale Datenhaltung.

use super::{CommandLog, LayerSwitcher, UrlHash};
use crate::shared::{HashLocation, MapSurface};

/// Gesamter Synchronisationszustand.
///
/// Schreibrechte: `switcher` besitzt die sichtbaren Layer, `url_hash` die
/// Zusatz-Parameter. Die Karte ist erst nach `attach_map` vorhanden.
pub struct AppState {
    /// Layer-Switcher (sichtbare Layer)
    pub switcher: LayerSwitcher,
    /// Hash-Synchronizer (Zusatz-Parameter + Handler)
    pub url_hash: UrlHash,
    /// Angehängte Karte
    pub map: Option<Box<dyn MapSurface>>,
    /// URL-Fragment des Hosts
    pub location: Box<dyn HashLocation>,
    /// Protokoll ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt den Zustand ohne Karte.
    pub fn new(switcher: LayerSwitcher, location: Box<dyn HashLocation>) -> Self {
        Self {
            switcher,
            url_hash: UrlHash::new(),
            map: None,
            location,
            command_log: CommandLog::new(),
        }
    }

    /// Gibt `true` zurück, wenn eine Karte angehängt ist und ihr Stil geladen ist.
    pub fn is_map_ready(&self) -> bool {
        self.map.as_ref().is_some_and(|map| map.is_style_loaded())
    }

    /// Aktueller Hash laut Zustand.
    ///
    /// Programmierfehler, wenn noch keine Karte angehängt ist.
    pub fn hash_string(&self) -> Result<String, super::SyncError> {
        self.url_hash
            .hash_string(self.map.as_deref(), &self.switcher.url_string())
    }
}
