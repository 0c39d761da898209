//! In-Memory-Implementierungen von `MapSurface` und `HashLocation`.
//!
//! Für die Demo-Binary und Tests ohne echten Karten-Host.

use super::surface::{HashLocation, MapSurface};
use crate::core::{StyleDocument, StyleLayer, Viewport, Visibility};

/// Karte ohne Rendering: hält Stil und Viewport im Speicher.
#[derive(Debug, Clone)]
pub struct HeadlessMap {
    /// Aktueller Stil (Sichtbarkeiten werden hier geschrieben)
    pub style: StyleDocument,
    /// Aktueller Viewport
    pub viewport: Viewport,
    /// Stil geladen?
    pub style_loaded: bool,
    /// Anzahl der `jump_to`-Aufrufe
    pub jump_count: usize,
    /// Anzahl geschriebener Sichtbarkeiten
    pub visibility_writes: usize,
}

impl HeadlessMap {
    /// Erstellt eine Karte mit bereits geladenem Stil.
    pub fn new(style: StyleDocument, viewport: Viewport) -> Self {
        Self {
            style,
            viewport,
            style_loaded: true,
            jump_count: 0,
            visibility_writes: 0,
        }
    }

    /// Erstellt eine Karte, deren Stil noch lädt (`load` folgt später).
    pub fn loading(style: StyleDocument, viewport: Viewport) -> Self {
        Self {
            style_loaded: false,
            ..Self::new(style, viewport)
        }
    }

    /// Sichtbarkeit eines Stil-Layers (`None` für unbekannte IDs).
    pub fn layer_visibility(&self, layer_id: &str) -> Option<Visibility> {
        self.style.layer(layer_id).map(|layer| layer.visibility())
    }
}

impl MapSurface for HeadlessMap {
    fn style_layers(&self) -> Vec<StyleLayer> {
        self.style.layers.clone()
    }

    fn set_layer_visibility(&mut self, layer_id: &str, visibility: Visibility) {
        match self.style.layer_mut(layer_id) {
            Some(layer) => {
                layer.set_visibility(visibility);
                self.visibility_writes += 1;
            }
            None => log::warn!("Stil-Layer \"{}\" existiert nicht", layer_id),
        }
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn is_style_loaded(&self) -> bool {
        self.style_loaded
    }

    fn jump_to(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.jump_count += 1;
    }
}

/// URL-Fragment im Speicher, protokolliert jeden Schreibvorgang.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    hash: String,
    /// Alle per `replace_hash` geschriebenen Fragmente in Reihenfolge
    pub writes: Vec<String>,
    /// Simuliert einen Host, der das Schreiben verweigert
    pub read_only: bool,
}

impl MemoryLocation {
    /// Erstellt ein Fragment mit Startwert.
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            ..Self::default()
        }
    }

    /// Setzt das Fragment von außen (Nutzer editiert URL, Zurück-Navigation).
    pub fn navigate(&mut self, hash: impl Into<String>) {
        self.hash = hash.into();
    }
}

impl HashLocation for MemoryLocation {
    fn current_hash(&self) -> String {
        self.hash.clone()
    }

    fn replace_hash(&mut self, hash: &str) -> anyhow::Result<()> {
        if self.read_only {
            anyhow::bail!("Fragment ist schreibgeschützt");
        }
        self.hash = hash.to_string();
        self.writes.push(hash.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_map_writes_visibility() {
        let style = StyleDocument::from_layer_ids(["water", "road_minor"]);
        let mut map = HeadlessMap::new(style, Viewport::default());

        map.set_layer_visibility("water", Visibility::Hidden);
        map.set_layer_visibility("missing", Visibility::Hidden);

        assert_eq!(map.layer_visibility("water"), Some(Visibility::Hidden));
        assert_eq!(map.layer_visibility("road_minor"), Some(Visibility::Visible));
        assert_eq!(map.layer_visibility("missing"), None);
        assert_eq!(map.visibility_writes, 1);
    }

    #[test]
    fn test_memory_location_records_writes() {
        let mut location = MemoryLocation::new("#1/2/3");
        location.replace_hash("#4/5/6").expect("Schreiben erlaubt");
        assert_eq!(location.current_hash(), "#4/5/6");
        assert_eq!(location.writes, vec!["#4/5/6".to_string()]);

        location.read_only = true;
        assert!(location.replace_hash("#7/8/9").is_err());
        assert_eq!(location.current_hash(), "#4/5/6");
    }
}
