//! URL-Hash-Codec für Viewport, sichtbare Layer und Zusatz-Parameter.
//!
//! Grammatik des Fragments:
//! `#<zoom>/<lat>/<lng>[/<layer-ids>][/<key>=<value>]*`
//!
//! Reine Funktionen ohne geteilten Zustand. `decode_hash(&encode_hash(x)) == x`
//! gilt nur für bereits einmal gerundete Zahlenwerte.

pub mod decode;
pub mod encode;

#[cfg(test)]
mod tests;

pub use decode::decode_hash;
pub use encode::{coordinate_precision, encode_hash};

use crate::core::Viewport;
use glam::DVec2;
use indexmap::IndexMap;

/// Bestandteile eines URL-Hashes.
///
/// Wird bei jedem Kodieren/Dekodieren neu erzeugt, nie an Ort und Stelle verändert.
/// `additional` wird ordnungsunabhängig verglichen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HashComponents {
    /// Zoom-Stufe
    pub zoom: Option<f64>,
    /// Zentrum als (lng, lat)
    pub center: Option<DVec2>,
    /// Komma-getrennte Layer-IDs; `Some("")` bedeutet "Standard-Layer"
    pub layers: Option<String>,
    /// Zusatz-Parameter `key=value`
    pub additional: IndexMap<String, String>,
}

impl HashComponents {
    /// Komponenten für einen Viewport, ohne Layer und Parameter.
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self {
            zoom: Some(viewport.zoom),
            center: Some(viewport.center),
            ..Self::default()
        }
    }

    /// Viewport, sofern Zentrum und Zoom vorhanden sind.
    pub fn viewport(&self) -> Option<Viewport> {
        match (self.center, self.zoom) {
            (Some(center), Some(zoom)) => Some(Viewport { center, zoom }),
            _ => None,
        }
    }

    /// Setzt den Layer-String.
    pub fn with_layers(mut self, layers: impl Into<String>) -> Self {
        self.layers = Some(layers.into());
        self
    }

    /// Fügt einen Zusatz-Parameter hinzu.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional.insert(key.into(), value.into());
        self
    }
}
