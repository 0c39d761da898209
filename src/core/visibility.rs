//! Präfix-basierte Auflösung der Sichtbarkeit von Stil-Layern.

use super::registry::LayerRegistry;
use std::collections::BTreeSet;

/// Wert der Layout-Property `visibility` im Kartenstil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// `"visible"`
    Visible,
    /// `"none"`
    Hidden,
}

impl Visibility {
    /// Name der Layout-Property im Kartenstil.
    pub const LAYOUT_PROPERTY: &'static str = "visibility";

    /// Stil-Wert dieser Sichtbarkeit.
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "none",
        }
    }

    /// Liest einen Stil-Wert; unbekannte Werte ergeben `None`.
    pub fn from_style_value(value: &str) -> Option<Self> {
        match value {
            "visible" => Some(Visibility::Visible),
            "none" => Some(Visibility::Hidden),
            _ => None,
        }
    }
}

impl From<bool> for Visibility {
    fn from(visible: bool) -> Self {
        if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

/// Ermittelt die Sichtbarkeit eines Stil-Layers.
///
/// Alle registrierten Layer, deren Präfix `renderable_id` einleitet, werden in
/// Registry-Reihenfolge geprüft; der **letzte** Treffer entscheidet. Überlappende
/// Präfixe sind erlaubt und werden nicht validiert. `None`, wenn kein Präfix passt.
pub fn resolve_visibility(
    registry: &LayerRegistry,
    visible: &BTreeSet<String>,
    renderable_id: &str,
) -> Option<Visibility> {
    registry
        .iter()
        .filter(|layer| layer.matches(renderable_id))
        .last()
        .map(|layer| Visibility::from(visible.contains(&layer.id)))
}
