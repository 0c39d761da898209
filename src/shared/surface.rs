//! Verträge zur Außenwelt: Karten-Oberfläche und Browser-Fragment.
//!
//! Die Implementierungen leben beim Host (Web-Binding, Native-Viewer, Tests).

use crate::core::{StyleLayer, Viewport, Visibility};

/// Fähigkeiten der Karten-Oberfläche, die der Switcher nutzt.
pub trait MapSurface {
    /// Layer des aktuell geladenen Stils (ID + Layout).
    fn style_layers(&self) -> Vec<StyleLayer>;

    /// Setzt die Layout-Property `visibility` eines Stil-Layers.
    fn set_layer_visibility(&mut self, layer_id: &str, visibility: Visibility);

    /// Aktueller Viewport (Zentrum + Zoom).
    fn viewport(&self) -> Viewport;

    /// Gibt `true` zurück, sobald der Stil vollständig geladen ist.
    fn is_style_loaded(&self) -> bool;

    /// Springt ohne Animation zum Viewport.
    ///
    /// Auf echten Karten löst das synchron ein move-end aus; der Synchronizer
    /// schreibt den Hash deshalb direkt nach jedem Sprung neu.
    fn jump_to(&mut self, viewport: Viewport);
}

/// Das URL-Fragment des Hosts.
pub trait HashLocation {
    /// Aktuelles Fragment inklusive `#` (oder leer).
    fn current_hash(&self) -> String;

    /// Ersetzt das Fragment ohne neuen History-Eintrag.
    fn replace_hash(&mut self, hash: &str) -> anyhow::Result<()>;
}
