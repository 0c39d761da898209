//! URL-Hash-Synchronizer: Zusatz-Parameter und Handler-Dispatch.
//!
//! Der Synchronizer ist der einzige Schreiber von `additional`. Handler feuern
//! nur für von außen beobachtete Änderungen (Hash-Wechsel), nie für eigene
//! Schreibvorgänge über `set_parameter`.

use crate::core::{MapOptions, Viewport};
use crate::hash::{decode_hash, encode_hash, HashComponents};
use crate::shared::MapSurface;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;
use thiserror::Error;

/// Callback für Wertwechsel eines Parameters (`None` = entfernt).
pub type ParameterHandler = Box<dyn FnMut(Option<&str>)>;

/// Fehler des Synchronizers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Hash-String angefordert, bevor eine Karte angehängt wurde.
    #[error("Hash-String angefordert, bevor eine Karte angehaengt wurde")]
    MapNotAttached,
}

/// Zustand des Synchronizers.
#[derive(Default)]
pub struct UrlHash {
    additional: IndexMap<String, String>,
    handlers: HashMap<String, ParameterHandler>,
}

impl std::fmt::Debug for UrlHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlHash")
            .field("additional", &self.additional)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl UrlHash {
    /// Erstellt einen Synchronizer ohne Parameter und Handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert den Handler für einen Parameter-Schlüssel.
    ///
    /// Ein erneuter Aufruf für denselben Schlüssel ersetzt den Handler.
    pub fn register_handler<F>(&mut self, key: impl Into<String>, handler: F)
    where
        F: FnMut(Option<&str>) + 'static,
    {
        let key = key.into();
        if self.handlers.insert(key.clone(), Box::new(handler)).is_some() {
            log::warn!("Handler für Parameter \"{}\" ersetzt", key);
        }
    }

    /// Letzter bekannter Wert eines Parameters.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.additional.get(key).map(String::as_str)
    }

    /// Alle bekannten Zusatz-Parameter.
    pub fn additional(&self) -> &IndexMap<String, String> {
        &self.additional
    }

    /// Lokaler Schreibzugriff auf einen Parameter (`None` entfernt ihn).
    ///
    /// Feuert keinen Handler. Gibt `true` zurück, wenn sich der Wert geändert hat
    /// und der Hash daher neu geschrieben werden muss.
    pub fn set_parameter(&mut self, key: &str, value: Option<&str>) -> bool {
        match value {
            Some(value) => {
                if self.parameter(key) == Some(value) {
                    return false;
                }
                self.additional.insert(key.to_string(), value.to_string());
                true
            }
            None => self.additional.shift_remove(key).is_some(),
        }
    }

    /// Gleicht die Parameter mit einem frisch dekodierten Hash ab.
    ///
    /// Entfernte Schlüssel werden gelöscht und ihr Handler mit `None` aufgerufen,
    /// neue oder geänderte Werte gespeichert und ihr Handler mit dem Wert aufgerufen.
    /// Schlüssel ohne Handler werden nur gespeichert. Gibt die Anzahl der
    /// erkannten Wertwechsel zurück.
    pub fn reconcile(&mut self, incoming: &IndexMap<String, String>) -> usize {
        let keys: IndexSet<String> = self
            .additional
            .keys()
            .chain(incoming.keys())
            .cloned()
            .collect();

        let mut transitions = 0;
        for key in keys {
            let previous = self.additional.get(&key).cloned();
            match (previous, incoming.get(&key)) {
                (Some(_), None) => {
                    self.additional.shift_remove(&key);
                    self.notify(&key, None);
                    transitions += 1;
                }
                (previous, Some(value)) if previous.as_ref() != Some(value) => {
                    self.additional.insert(key.clone(), value.clone());
                    self.notify(&key, Some(value.as_str()));
                    transitions += 1;
                }
                _ => {}
            }
        }
        transitions
    }

    fn notify(&mut self, key: &str, value: Option<&str>) {
        log::debug!("Parameter \"{}\" geändert: {:?}", key, value);
        match self.handlers.get_mut(key) {
            Some(handler) => handler(value),
            None => log::debug!("Kein Handler für Parameter \"{}\"", key),
        }
    }

    /// Aktueller Hash aus Karten-Viewport, Layer-String und Parametern.
    pub fn hash_string(
        &self,
        map: Option<&dyn MapSurface>,
        layers: &str,
    ) -> Result<String, SyncError> {
        let map = map.ok_or(SyncError::MapNotAttached)?;
        let components = HashComponents {
            additional: self.additional.clone(),
            ..HashComponents::from_viewport(map.viewport()).with_layers(layers)
        };
        Ok(encode_hash(&components))
    }

    /// Übernimmt Zentrum und Zoom aus dem Hash in die Start-Optionen der Karte.
    ///
    /// Die eingebaute Hash-Verwaltung der Karte wird immer deaktiviert.
    pub fn init_map_options(hash: &str, mut options: MapOptions) -> MapOptions {
        options.hash = false;
        if let Some(Viewport { center, zoom }) = decode_hash(hash).viewport() {
            options.center = center;
            options.zoom = zoom;
        }
        options
    }
}
