//! Layer-Registry: flacher, eindeutiger Index über den konfigurierten Baum.

use super::layer::{Layer, LayerGroup, LayerNode, SelectionMode};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use thiserror::Error;

/// Konfigurationsfehler beim Aufbau der Registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerConfigError {
    /// Zwei Layer teilen sich dieselbe ID.
    #[error("Doppelte Layer-ID \"{0}\". Layer-IDs muessen eindeutig sein.")]
    DuplicateIdentifier(String),
    /// Exklusiver Auswahlmodus ohne auflösbare Gruppen-ID.
    #[error("Exklusive Auswahl ohne Gruppen-ID: \"{0}\"")]
    MissingGroupIdentifier(String),
    /// Gruppe mit Mehrfachauswahl, die trotzdem eine Gruppen-ID vorgibt.
    #[error("Gruppe \"{0}\" setzt eine Gruppen-ID, erlaubt aber Mehrfachauswahl")]
    ConflictingGroupIdentifier(String),
}

/// Flacher Index aller Layer in Baum-Preorder.
///
/// Die gespeicherten Layer tragen bereits die *aufgelöste* Exklusiv-Gruppen-ID:
/// Gruppen-Overrides sind eingerechnet.
#[derive(Debug, Clone, Default)]
pub struct LayerRegistry {
    layers: IndexMap<String, Layer>,
    default_visible: BTreeSet<String>,
}

impl LayerRegistry {
    /// Baut den Index aus dem Layer-Baum.
    ///
    /// Schlägt fehl bei doppelten IDs (auch über Gruppengrenzen hinweg)
    /// oder bei exklusiven Gruppen/Layern ohne Gruppen-ID.
    pub fn build(tree: &[LayerNode]) -> Result<Self, LayerConfigError> {
        let mut layers: IndexMap<String, Layer> = IndexMap::new();

        for node in tree {
            match node {
                LayerNode::Layer(layer) => {
                    let resolved = resolve_layer(layer, None)?;
                    insert_unique(&mut layers, resolved)?;
                }
                LayerNode::Group(group) => {
                    let group_override = resolve_group_override(group)?;
                    for layer in &group.layers {
                        let resolved = resolve_layer(layer, group_override.as_ref())?;
                        insert_unique(&mut layers, resolved)?;
                    }
                }
            }
        }

        let default_visible = layers
            .values()
            .filter(|layer| layer.enabled)
            .map(|layer| layer.id.clone())
            .collect();

        log::debug!("Layer-Registry aufgebaut: {} Layer", layers.len());

        Ok(Self {
            layers,
            default_visible,
        })
    }

    /// Gibt den Layer mit der angegebenen ID zurück.
    pub fn get(&self, id: &str) -> Option<&Layer> {
        self.layers.get(id)
    }

    /// Prüft ob die ID registriert ist.
    pub fn contains(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }

    /// Alle Layer in Registry-Reihenfolge (Baum-Preorder).
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    /// IDs aller standardmäßig sichtbaren Layer (einmalig beim Aufbau ermittelt).
    pub fn default_visible(&self) -> &BTreeSet<String> {
        &self.default_visible
    }

    /// IDs aller anderen Layer derselben Exklusiv-Gruppe wie `id`.
    pub fn group_peers<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let group = self.get(id).and_then(|layer| layer.group_id.as_deref());
        self.layers
            .values()
            .filter(move |layer| group.is_some() && layer.group_id.as_deref() == group)
            .filter(move |layer| layer.id != id)
            .map(|layer| layer.id.as_str())
    }

    /// Anzahl registrierter Layer.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Gibt `true` zurück, wenn keine Layer registriert sind.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

enum GroupOverride {
    Exclusive(String),
    Multiple,
}

/// Override einer Gruppe für ihre Kinder.
///
/// Eine gesetzte Gruppen-ID ohne Modus bedeutet exklusive Auswahl.
fn resolve_group_override(group: &LayerGroup) -> Result<Option<GroupOverride>, LayerConfigError> {
    let group_id = non_empty(&group.group_id);
    match (group.mode, group_id) {
        (Some(SelectionMode::Exclusive) | None, Some(id)) => {
            Ok(Some(GroupOverride::Exclusive(id.to_string())))
        }
        (Some(SelectionMode::Exclusive), None) => Err(
            LayerConfigError::MissingGroupIdentifier(group.title.clone()),
        ),
        (Some(SelectionMode::Multiple), Some(_)) => Err(
            LayerConfigError::ConflictingGroupIdentifier(group.title.clone()),
        ),
        (Some(SelectionMode::Multiple), None) => Ok(Some(GroupOverride::Multiple)),
        (None, None) => Ok(None),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn resolve_layer(
    layer: &Layer,
    group_override: Option<&GroupOverride>,
) -> Result<Layer, LayerConfigError> {
    let group_id = match group_override {
        Some(GroupOverride::Exclusive(id)) => Some(id.clone()),
        Some(GroupOverride::Multiple) => None,
        None => match &layer.group_id {
            Some(id) if id.is_empty() => {
                return Err(LayerConfigError::MissingGroupIdentifier(layer.id.clone()))
            }
            other => other.clone(),
        },
    };
    Ok(Layer {
        group_id,
        ..layer.clone()
    })
}

fn insert_unique(
    layers: &mut IndexMap<String, Layer>,
    layer: Layer,
) -> Result<(), LayerConfigError> {
    if layers.contains_key(&layer.id) {
        return Err(LayerConfigError::DuplicateIdentifier(layer.id));
    }
    layers.insert(layer.id.clone(), layer);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Vec<LayerNode> {
        vec![
            Layer::new("b", "Borders", "boundary").into(),
            LayerGroup::new(
                "Basis",
                vec![
                    Layer::new("l", "Landuse", "landuse_").enabled(true),
                    Layer::new("w", "Water", "water").enabled(true),
                ],
            )
            .into(),
            Layer::new("r", "Roads", "road_").enabled(true).into(),
        ]
    }

    #[test]
    fn test_build_flattens_in_preorder() {
        let registry = LayerRegistry::build(&sample_tree()).expect("Baum ist gültig");
        let ids: Vec<&str> = registry.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "l", "w", "r"]);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_default_visible_snapshot() {
        let registry = LayerRegistry::build(&sample_tree()).expect("Baum ist gültig");
        let defaults: Vec<&str> = registry.default_visible().iter().map(String::as_str).collect();
        assert_eq!(defaults, vec!["l", "r", "w"]);
    }

    #[test]
    fn test_duplicate_id_across_groups_fails() {
        let mut tree = sample_tree();
        tree.push(LayerGroup::new("Extra", vec![Layer::new("w", "Wald", "wood")]).into());

        let err = LayerRegistry::build(&tree).expect_err("Doppelte ID muss scheitern");
        assert_eq!(err, LayerConfigError::DuplicateIdentifier("w".to_string()));
        assert!(err.to_string().contains("\"w\""));
    }

    #[test]
    fn test_empty_tree_is_valid() {
        let registry = LayerRegistry::build(&[]).expect("Leerer Baum ist gültig");
        assert!(registry.is_empty());
        assert!(registry.default_visible().is_empty());
    }

    #[test]
    fn test_exclusive_group_without_id_fails() {
        let group = LayerGroup::new("Basiskarten", vec![Layer::new("o", "OSM", "osm_")])
            .with_mode(SelectionMode::Exclusive);

        let err = LayerRegistry::build(&[group.into()]).expect_err("Gruppen-ID fehlt");
        assert_eq!(
            err,
            LayerConfigError::MissingGroupIdentifier("Basiskarten".to_string())
        );
    }

    #[test]
    fn test_layer_with_empty_group_id_fails() {
        let layer = Layer::new("x", "X", "x_").in_group("");
        let err = LayerRegistry::build(&[layer.into()]).expect_err("Gruppen-ID leer");
        assert_eq!(err, LayerConfigError::MissingGroupIdentifier("x".to_string()));
    }

    #[test]
    fn test_group_id_without_mode_makes_children_exclusive() {
        let group = LayerGroup::new(
            "Basiskarten",
            vec![Layer::new("a", "A", "a_"), Layer::new("b", "B", "b_").in_group("alt")],
        )
        .with_group_id("g");

        let registry = LayerRegistry::build(&[group.into()]).expect("Baum ist gültig");

        assert_eq!(registry.get("a").and_then(|l| l.group_id.as_deref()), Some("g"));
        assert_eq!(registry.get("b").and_then(|l| l.group_id.as_deref()), Some("g"));
        let peers: Vec<&str> = registry.group_peers("a").collect();
        assert_eq!(peers, vec!["b"]);
    }

    #[test]
    fn test_multiple_mode_with_group_id_fails() {
        let group = LayerGroup::new("Overlays", vec![Layer::new("h", "Hills", "hill")])
            .with_mode(SelectionMode::Multiple)
            .with_group_id("g");

        let err = LayerRegistry::build(&[group.into()]).expect_err("Widerspruch muss scheitern");
        assert_eq!(
            err,
            LayerConfigError::ConflictingGroupIdentifier("Overlays".to_string())
        );
    }

    #[test]
    fn test_group_override_resolves_children() {
        let tree = vec![
            LayerGroup::exclusive(
                "Basiskarten",
                "base",
                vec![Layer::new("o", "OSM", "osm_"), Layer::new("s", "Sat", "sat_")],
            )
            .into(),
            LayerGroup::new("Overlays", vec![Layer::new("h", "Hills", "hill").in_group("g")])
                .with_mode(SelectionMode::Multiple)
                .into(),
        ];
        let registry = LayerRegistry::build(&tree).expect("Baum ist gültig");

        assert_eq!(registry.get("o").and_then(|l| l.group_id.as_deref()), Some("base"));
        assert_eq!(registry.get("s").and_then(|l| l.group_id.as_deref()), Some("base"));
        assert!(registry.get("h").and_then(|l| l.group_id.as_deref()).is_none());

        let peers: Vec<&str> = registry.group_peers("o").collect();
        assert_eq!(peers, vec!["s"]);
        assert_eq!(registry.group_peers("h").count(), 0);
    }
}
