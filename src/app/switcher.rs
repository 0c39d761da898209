//! Layer-Switcher: sichtbare Layer verwalten und auf den Kartenstil anwenden.
//!
//! Der Switcher ist der einzige Schreiber der Menge sichtbarer Layer-IDs.
//! `visible` und die Default-Menge sind immer Teilmengen der Registry.

use super::layer_list::{self, LayerListItem};
use crate::core::{
    resolve_visibility, LayerConfigError, LayerNode, LayerRegistry, StyleDocument,
};
use crate::shared::{MapSurface, SwitcherOptions, DEFAULT_TITLE};
use std::collections::BTreeSet;

/// Zustand des Layer-Switchers.
#[derive(Debug, Clone)]
pub struct LayerSwitcher {
    title: String,
    tree: Vec<LayerNode>,
    registry: LayerRegistry,
    visible: BTreeSet<String>,
}

impl LayerSwitcher {
    /// Erstellt einen Switcher mit Standard-Titel.
    pub fn new(tree: Vec<LayerNode>) -> Result<Self, LayerConfigError> {
        Self::with_title(tree, DEFAULT_TITLE)
    }

    /// Erstellt einen Switcher mit eigener Überschrift.
    ///
    /// Schlägt bei doppelten Layer-IDs oder fehlenden Gruppen-IDs fehl.
    pub fn with_title(
        tree: Vec<LayerNode>,
        title: impl Into<String>,
    ) -> Result<Self, LayerConfigError> {
        let registry = LayerRegistry::build(&tree)?;
        let visible = registry.default_visible().clone();
        Ok(Self {
            title: title.into(),
            tree,
            registry,
            visible,
        })
    }

    /// Erstellt einen Switcher aus den geladenen Optionen.
    pub fn from_options(options: &SwitcherOptions) -> Result<Self, LayerConfigError> {
        Self::with_title(options.layers.clone(), options.title.clone())
    }

    /// Überschrift der Layer-Liste.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Konfigurierter Layer-Baum.
    pub fn tree(&self) -> &[LayerNode] {
        &self.tree
    }

    /// Registry aller Layer.
    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    /// Aktuell sichtbare Layer-IDs (sortiert).
    pub fn visible(&self) -> &BTreeSet<String> {
        &self.visible
    }

    /// Standardmäßig sichtbare Layer-IDs (sortiert).
    pub fn default_visible(&self) -> &BTreeSet<String> {
        self.registry.default_visible()
    }

    /// Prüft ob ein Layer sichtbar ist.
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    /// Schaltet einen Layer ein oder aus.
    ///
    /// Beim Einschalten eines Layers einer Exklusiv-Gruppe werden alle anderen
    /// Mitglieder der Gruppe im selben Schritt ausgeschaltet.
    /// Gibt `true` zurück, wenn sich die Menge geändert hat.
    pub fn set_visibility(&mut self, id: &str, visible: bool) -> bool {
        if !self.registry.contains(id) {
            log::warn!("Unbekannte Layer-ID \"{}\" ignoriert", id);
            return false;
        }

        if !visible {
            return self.visible.remove(id);
        }

        if self.visible.contains(id) {
            return false;
        }

        let peers: Vec<String> = self.registry.group_peers(id).map(str::to_string).collect();
        for peer in &peers {
            if self.visible.remove(peer) {
                log::debug!("Exklusiv-Gruppe: \"{}\" ersetzt \"{}\"", id, peer);
            }
        }
        self.visible.insert(id.to_string());
        true
    }

    /// Wendet die Sichtbarkeit auf alle Stil-Layer der Karte an.
    ///
    /// No-op ohne Karte. Gibt die Anzahl geschriebener Layer zurück.
    pub fn apply_visibility(&self, map: Option<&mut (dyn MapSurface + '_)>) -> usize {
        let Some(map) = map else {
            return 0;
        };

        let mut written = 0;
        for style_layer in map.style_layers() {
            if let Some(visibility) = resolve_visibility(&self.registry, &self.visible, &style_layer.id)
            {
                map.set_layer_visibility(&style_layer.id, visibility);
                written += 1;
            }
        }
        log::debug!("Sichtbarkeit auf {} Stil-Layer angewendet", written);
        written
    }

    /// Setzt die Sichtbarkeit direkt im Stil, bevor die Karte erzeugt wird.
    ///
    /// Verhindert kurz aufblitzende Layer, die gleich wieder ausgeblendet würden.
    pub fn set_initial_visibility(&self, style: &mut StyleDocument) {
        for style_layer in &mut style.layers {
            if let Some(visibility) = resolve_visibility(&self.registry, &self.visible, &style_layer.id)
            {
                style_layer.set_visibility(visibility);
            }
        }
    }

    /// Layer-Anteil des URL-Hashes.
    ///
    /// Leer, wenn die sichtbaren Layer den Standard-Layern entsprechen,
    /// sonst die sortierten IDs komma-getrennt.
    pub fn url_string(&self) -> String {
        if &self.visible == self.registry.default_visible() {
            return String::new();
        }
        self.visible.iter().cloned().collect::<Vec<_>>().join(",")
    }

    /// Übernimmt den Layer-Anteil eines URL-Hashes.
    ///
    /// Leerer Text stellt die Standard-Layer wieder her, sonst wird die Menge
    /// vollständig ersetzt. Unbekannte IDs werden verworfen.
    pub fn set_url_string(&mut self, text: &str) {
        if text.is_empty() {
            self.visible = self.registry.default_visible().clone();
            return;
        }

        self.visible = text
            .split(',')
            .filter(|id| {
                let known = self.registry.contains(id);
                if !known && !id.is_empty() {
                    log::debug!("Unbekannte Layer-ID \"{}\" im Hash verworfen", id);
                }
                known
            })
            .map(str::to_string)
            .collect();
    }

    /// View-Model der Layer-Liste (Baumstruktur mit Checkbox-Zustand).
    pub fn list_items(&self) -> Vec<LayerListItem> {
        layer_list::build(&self.tree, &self.registry, &self.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Layer, LayerGroup, Visibility};
    use crate::shared::HeadlessMap;
    use crate::core::Viewport;

    fn ids(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    fn demo_switcher() -> LayerSwitcher {
        LayerSwitcher::new(vec![
            Layer::new("b", "Borders", "boundary").enabled(true).into(),
            Layer::new("w", "Water", "water").into(),
        ])
        .expect("Baum ist gültig")
    }

    #[test]
    fn test_url_string_empty_for_defaults() {
        let switcher = demo_switcher();
        assert_eq!(switcher.url_string(), "");
        assert_eq!(switcher.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_url_string_lists_sorted_ids() {
        let mut switcher = demo_switcher();
        assert!(switcher.set_visibility("w", true));
        assert_eq!(switcher.url_string(), "b,w");
    }

    #[test]
    fn test_url_string_empty_set_differs_from_default() {
        let mut switcher = demo_switcher();
        assert!(switcher.set_visibility("b", false));
        assert!(switcher.visible().is_empty());
        // Leere Menge ≠ Default {b}, Join der leeren Menge ist ebenfalls ""
        assert_eq!(switcher.url_string(), "");
    }

    #[test]
    fn test_set_visibility_is_idempotent() {
        let mut switcher = demo_switcher();
        assert!(!switcher.set_visibility("b", true));
        assert!(!switcher.set_visibility("w", false));
        assert!(!switcher.set_visibility("unknown", true));
        assert_eq!(ids(switcher.visible()), vec!["b"]);
    }

    #[test]
    fn test_exclusive_group_switches_atomically() {
        let mut switcher = LayerSwitcher::new(vec![
            Layer::new("x", "X", "x_").enabled(true).in_group("g").into(),
            Layer::new("y", "Y", "y_").in_group("g").into(),
            Layer::new("z", "Z", "z_").enabled(true).into(),
        ])
        .expect("Baum ist gültig");

        assert!(switcher.set_visibility("y", true));
        assert!(switcher.is_visible("y"));
        assert!(!switcher.is_visible("x"));
        assert!(switcher.is_visible("z"));
    }

    #[test]
    fn test_set_url_string_replaces_and_filters() {
        let mut switcher = demo_switcher();
        switcher.set_url_string("w,nope,");
        assert_eq!(ids(switcher.visible()), vec!["w"]);

        switcher.set_url_string("");
        assert_eq!(switcher.visible(), switcher.default_visible());
    }

    #[test]
    fn test_apply_visibility_without_map_is_noop() {
        let switcher = demo_switcher();
        assert_eq!(switcher.apply_visibility(None), 0);
    }

    #[test]
    fn test_apply_visibility_writes_matching_layers() {
        let switcher = demo_switcher();
        let style = StyleDocument::from_layer_ids(["boundary_2", "water", "water_name", "road"]);
        let mut map = HeadlessMap::new(style, Viewport::default());

        let written = switcher.apply_visibility(Some(&mut map));
        assert_eq!(written, 3);
        assert_eq!(map.layer_visibility("boundary_2"), Some(Visibility::Visible));
        assert_eq!(map.layer_visibility("water"), Some(Visibility::Hidden));
        assert_eq!(map.layer_visibility("water_name"), Some(Visibility::Hidden));
        // kein Präfix passt → Layout unberührt
        let road = map.style.layer("road").expect("Layer vorhanden");
        assert!(road.layout.is_none());
    }

    #[test]
    fn test_initial_visibility_marks_style() {
        let switcher = LayerSwitcher::new(vec![LayerGroup::new(
            "Basis",
            vec![
                Layer::new("l", "Landuse", "landuse_").enabled(true),
                Layer::new("w", "Water", "water"),
            ],
        )
        .into()])
        .expect("Baum ist gültig");
        let mut style = StyleDocument::from_layer_ids(["landuse_park", "waterway", "poi"]);

        switcher.set_initial_visibility(&mut style);

        let visibility = |id: &str| style.layer(id).map(|l| l.visibility());
        assert_eq!(visibility("landuse_park"), Some(Visibility::Visible));
        assert_eq!(visibility("waterway"), Some(Visibility::Hidden));
        assert!(style.layer("poi").and_then(|l| l.layout.as_ref()).is_none());
    }
}
