//! Kartenstil-Dokument (nur die für den Switcher relevanten Teile).
//!
//! Unbekannte Felder bleiben über `flatten` erhalten, damit ein geladener
//! Stil unverändert an die Karte weitergereicht werden kann.

use super::visibility::Visibility;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ein Layer im Kartenstil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleLayer {
    /// Stil-Layer-ID (wird gegen die Präfixe der Switcher-Layer geprüft)
    pub id: String,
    /// Layout-Properties, falls vorhanden
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Map<String, Value>>,
    /// Alle übrigen Felder (type, source, paint, …)
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl StyleLayer {
    /// Erstellt einen Stil-Layer ohne Layout.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            layout: None,
            rest: Map::new(),
        }
    }

    /// Aktuelle Sichtbarkeit laut Layout (fehlend = sichtbar).
    pub fn visibility(&self) -> Visibility {
        self.layout
            .as_ref()
            .and_then(|layout| layout.get(Visibility::LAYOUT_PROPERTY))
            .and_then(Value::as_str)
            .and_then(Visibility::from_style_value)
            .unwrap_or(Visibility::Visible)
    }

    /// Schreibt `layout.visibility`; legt `layout` bei Bedarf an.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.layout.get_or_insert_with(Map::new).insert(
            Visibility::LAYOUT_PROPERTY.to_string(),
            Value::String(visibility.as_str().to_string()),
        );
    }
}

/// Kartenstil mit Layer-Liste.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleDocument {
    /// Layer in Zeichenreihenfolge
    #[serde(default)]
    pub layers: Vec<StyleLayer>,
    /// Alle übrigen Felder (version, sources, glyphs, …)
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl StyleDocument {
    /// Erstellt einen Stil aus einer Liste von Layer-IDs.
    pub fn from_layer_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            layers: ids.into_iter().map(StyleLayer::new).collect(),
            rest: Map::new(),
        }
    }

    /// Parsed einen Stil aus JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Kartenstil konnte nicht gelesen werden")
    }

    /// Serialisiert den Stil als JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Lädt einen Stil aus einer JSON-Datei.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Kartenstil nicht lesbar: {}", path.display()))?;
        let style = Self::from_json(&content)?;
        log::info!(
            "Kartenstil geladen aus: {} ({} Layer)",
            path.display(),
            style.layers.len()
        );
        Ok(style)
    }

    /// Sucht einen Layer per ID.
    pub fn layer(&self, id: &str) -> Option<&StyleLayer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Sucht einen Layer per ID (mutable).
    pub fn layer_mut(&mut self, id: &str) -> Option<&mut StyleLayer> {
        self.layers.iter_mut().find(|layer| layer.id == id)
    }

    /// IDs aller Layer in Zeichenreihenfolge.
    pub fn layer_ids(&self) -> Vec<String> {
        self.layers.iter().map(|layer| layer.id.clone()).collect()
    }
}
