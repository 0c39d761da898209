//! Zentrale Konfiguration des Layer-Switchers.
//!
//! `SwitcherOptions` enthält Titel, Start-Viewport und den Layer-Baum.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Layer, LayerNode, Viewport};
use serde::{Deserialize, Serialize};

// ── Switcher ────────────────────────────────────────────────────────

/// Standard-Überschrift des Switchers.
pub const DEFAULT_TITLE: &str = "Layers";

// ── Karte ───────────────────────────────────────────────────────────

/// Start-Zentrum (lng, lat), wenn der Hash keines liefert.
pub const DEFAULT_CENTER: [f64; 2] = [0.0, 0.0];
/// Start-Zoom, wenn der Hash keinen liefert.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Dateiname der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "map_layer_switcher.toml";

/// Laufzeit-Optionen des Switchers.
/// Wird als `map_layer_switcher.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitcherOptions {
    /// Überschrift der Layer-Liste
    #[serde(default = "default_title")]
    pub title: String,
    /// Start-Zentrum (lng, lat)
    #[serde(default = "default_center")]
    pub center: [f64; 2],
    /// Start-Zoom
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    /// Konfigurierter Layer-Baum
    #[serde(default)]
    pub layers: Vec<LayerNode>,
}

impl Default for SwitcherOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            layers: default_layers(),
        }
    }
}

/// Serde-Default für `title`.
fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Serde-Default für `center`.
fn default_center() -> [f64; 2] {
    DEFAULT_CENTER
}

/// Serde-Default für `zoom`.
fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

/// Layer-Baum passend zu gängigen OpenMapTiles-Stilen.
fn default_layers() -> Vec<LayerNode> {
    vec![
        Layer::new("b", "Borders", "boundary").into(),
        Layer::new("l", "Landuse", "landuse_").enabled(true).into(),
        Layer::new("r", "Roads", "road_").enabled(true).into(),
        Layer::new("B", "Buildings", "building").enabled(true).into(),
        Layer::new("w", "Water", "water").enabled(true).into(),
    ]
}

impl SwitcherOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parsed Optionen aus einem TOML-String.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_layer_switcher"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Start-Viewport laut Optionen.
    pub fn default_viewport(&self) -> Viewport {
        Viewport::new(self.center[0], self.center[1], self.zoom)
    }
}
