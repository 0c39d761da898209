//! View-Model der Layer-Liste für das Frontend.
//!
//! Spiegelt den konfigurierten Baum; wird nach jeder Sichtbarkeitsänderung
//! neu aufgebaut statt inkrementell gepflegt.

use crate::core::{LayerNode, LayerRegistry};
use std::collections::BTreeSet;

/// Eintrag der Layer-Liste.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerListItem {
    /// Schaltbarer Layer (Checkbox, bzw. Radio-Button bei `group_id`)
    Layer {
        /// Layer-ID
        id: String,
        /// Anzeigename
        title: String,
        /// Aktuell sichtbar
        checked: bool,
        /// Aufgelöste Exklusiv-Gruppe
        group_id: Option<String>,
    },
    /// Gruppe mit Überschrift
    Group {
        /// Überschrift
        title: String,
        /// Kinder in Anzeigereihenfolge
        items: Vec<LayerListItem>,
    },
}

impl LayerListItem {
    /// Gibt `true` zurück, wenn der Eintrag als Radio-Button dargestellt wird.
    pub fn is_radio(&self) -> bool {
        matches!(self, LayerListItem::Layer { group_id: Some(_), .. })
    }
}

/// Baut die Liste aus Baum, Registry (für aufgelöste Gruppen) und sichtbaren IDs.
pub fn build(
    tree: &[LayerNode],
    registry: &LayerRegistry,
    visible: &BTreeSet<String>,
) -> Vec<LayerListItem> {
    tree.iter()
        .map(|node| match node {
            LayerNode::Layer(layer) => layer_item(&layer.id, registry, visible),
            LayerNode::Group(group) => LayerListItem::Group {
                title: group.title.clone(),
                items: group
                    .layers
                    .iter()
                    .map(|layer| layer_item(&layer.id, registry, visible))
                    .collect(),
            },
        })
        .collect()
}

fn layer_item(id: &str, registry: &LayerRegistry, visible: &BTreeSet<String>) -> LayerListItem {
    // Registry enthält jede Baum-ID, sonst wäre der Switcher nicht konstruierbar
    let resolved = registry.get(id);
    LayerListItem::Layer {
        id: id.to_string(),
        title: resolved.map(|l| l.title.clone()).unwrap_or_default(),
        checked: visible.contains(id),
        group_id: resolved.and_then(|l| l.group_id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LayerSwitcher;
    use crate::core::{Layer, LayerGroup};

    #[test]
    fn test_list_mirrors_tree() {
        let mut switcher = LayerSwitcher::new(vec![
            Layer::new("b", "Borders", "boundary").into(),
            LayerGroup::exclusive(
                "Basiskarten",
                "base",
                vec![
                    Layer::new("o", "OSM", "osm_").enabled(true),
                    Layer::new("s", "Satellit", "sat_"),
                ],
            )
            .into(),
        ])
        .expect("Baum ist gültig");

        switcher.set_visibility("s", true);
        let items = switcher.list_items();

        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            LayerListItem::Layer {
                id: "b".to_string(),
                title: "Borders".to_string(),
                checked: false,
                group_id: None,
            }
        );
        assert!(!items[0].is_radio());

        let LayerListItem::Group { title, items: children } = &items[1] else {
            panic!("Gruppe erwartet");
        };
        assert_eq!(title, "Basiskarten");
        assert!(children.iter().all(LayerListItem::is_radio));
        let checked: Vec<bool> = children
            .iter()
            .map(|item| matches!(item, LayerListItem::Layer { checked: true, .. }))
            .collect();
        assert_eq!(checked, vec![false, true]);
    }
}
