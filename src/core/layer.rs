//! Layer-Baum: einzelne Layer und Layer-Gruppen des Switchers.

use serde::{Deserialize, Serialize};

/// Auswahlmodus einer Layer-Gruppe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Beliebig viele Layer gleichzeitig sichtbar (Checkboxen)
    #[default]
    Multiple,
    /// Höchstens ein Layer der Gruppe sichtbar (Radio-Buttons)
    Exclusive,
}

/// Ein schaltbarer Layer.
///
/// Die `id` landet im URL-Hash und sollte daher möglichst kurz sein.
/// Sie muss im gesamten Baum eindeutig sein.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Kurze, global eindeutige Kennung
    pub id: String,
    /// Anzeigename im Switcher
    pub title: String,
    /// Präfix, gegen das die Layer-IDs des Kartenstils geprüft werden
    pub prefix: String,
    /// Exklusiv-Gruppe (Radio-Semantik), falls gesetzt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Standardmäßig sichtbar
    #[serde(default)]
    pub enabled: bool,
}

impl Layer {
    /// Erstellt einen Layer, standardmäßig ausgeblendet.
    pub fn new(id: impl Into<String>, title: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prefix: prefix.into(),
            group_id: None,
            enabled: false,
        }
    }

    /// Setzt die Standard-Sichtbarkeit.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Ordnet den Layer einer Exklusiv-Gruppe zu.
    pub fn in_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Gibt `true` zurück, wenn `renderable_id` mit dem Präfix dieses Layers beginnt.
    pub fn matches(&self, renderable_id: &str) -> bool {
        renderable_id.starts_with(&self.prefix)
    }
}

/// Gruppe von Layern mit gemeinsamer Überschrift.
///
/// Eine Gruppe trägt selbst keinen Sichtbarkeitszustand, nur ihre Layer.
/// Mit `mode` und `group_id` lässt sich der Auswahlmodus der Kinder überschreiben.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerGroup {
    /// Überschrift der Gruppe
    pub title: String,
    /// Layer in Anzeigereihenfolge
    pub layers: Vec<Layer>,
    /// Überschreibt den Auswahlmodus aller Kinder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<SelectionMode>,
    /// Exklusiv-Gruppen-ID für die Kinder; ohne `mode` gilt sie als exklusiv
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl LayerGroup {
    /// Erstellt eine Gruppe ohne Moduswechsel.
    pub fn new(title: impl Into<String>, layers: Vec<Layer>) -> Self {
        Self {
            title: title.into(),
            layers,
            mode: None,
            group_id: None,
        }
    }

    /// Erstellt eine Radio-Gruppe: höchstens ein Kind sichtbar.
    pub fn exclusive(
        title: impl Into<String>,
        group_id: impl Into<String>,
        layers: Vec<Layer>,
    ) -> Self {
        Self {
            title: title.into(),
            layers,
            mode: Some(SelectionMode::Exclusive),
            group_id: Some(group_id.into()),
        }
    }

    /// Setzt den Auswahlmodus explizit.
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Setzt die Exklusiv-Gruppen-ID für alle Kinder.
    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }
}

/// Knoten im konfigurierten Layer-Baum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerNode {
    /// Einzelner Layer auf oberster Ebene
    Layer(Layer),
    /// Gruppe mit eigenen Layern
    Group(LayerGroup),
}

impl LayerNode {
    /// Anzeigename des Knotens.
    pub fn title(&self) -> &str {
        match self {
            LayerNode::Layer(layer) => &layer.title,
            LayerNode::Group(group) => &group.title,
        }
    }
}

impl From<Layer> for LayerNode {
    fn from(layer: Layer) -> Self {
        LayerNode::Layer(layer)
    }
}

impl From<LayerGroup> for LayerNode {
    fn from(group: LayerGroup) -> Self {
        LayerNode::Group(group)
    }
}
