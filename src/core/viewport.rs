//! Karten-Viewport (Zentrum + Zoom) und Start-Optionen der Karte.

use glam::DVec2;

/// Sichtbarer Kartenausschnitt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Zentrum als (lng, lat) in Grad
    pub center: DVec2,
    /// Zoom-Stufe
    pub zoom: f64,
}

impl Viewport {
    /// Erstellt einen Viewport aus Längengrad, Breitengrad und Zoom.
    pub fn new(lng: f64, lat: f64, zoom: f64) -> Self {
        Self {
            center: DVec2::new(lng, lat),
            zoom,
        }
    }

    /// Längengrad des Zentrums.
    pub fn lng(&self) -> f64 {
        self.center.x
    }

    /// Breitengrad des Zentrums.
    pub fn lat(&self) -> f64 {
        self.center.y
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Optionen für den Aufbau der Karte.
///
/// Entspricht dem Teil der Map-Konstruktor-Optionen, den der Hash beeinflusst.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    /// Start-Zentrum (lng, lat)
    pub center: DVec2,
    /// Start-Zoom
    pub zoom: f64,
    /// Eingebaute Hash-Verwaltung der Karte aktiv
    pub hash: bool,
}

impl MapOptions {
    /// Erstellt Optionen mit Standard-Viewport; eingebaute Hash-Verwaltung aus.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            center: viewport.center,
            zoom: viewport.zoom,
            hash: false,
        }
    }

    /// Viewport laut Optionen.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            center: self.center,
            zoom: self.zoom,
        }
    }
}
