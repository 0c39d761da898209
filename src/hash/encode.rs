//! Writer für URL-Hashes.

use super::HashComponents;
use std::f64::consts::{LN_10, LN_2};
use std::fmt::Write;

/// Kachelgröße in Pixeln, auf die sich die Koordinaten-Präzision bezieht.
const TILE_SIZE_PX: f64 = 512.0;
/// Maximal tolerierter Rundungsfehler in Pixeln.
const MAX_ERROR_PX: f64 = 0.5;

/// Anzahl Nachkommastellen für Koordinaten bei gegebenem Zoom.
///
/// Abgeleitet aus `512px * 2^z / 360 / 10^d < 0.5px`: die kodierte Auflösung
/// ist immer feiner als ein halber gerenderter Pixel.
pub fn coordinate_precision(zoom: f64) -> i32 {
    let digits = (zoom * LN_2 + (TILE_SIZE_PX / 360.0 / MAX_ERROR_PX).ln()) / LN_10;
    digits.ceil() as i32
}

/// Kodiert die Komponenten als URL-Hash.
///
/// Leerer String, wenn Zoom oder Zentrum fehlen.
pub fn encode_hash(components: &HashComponents) -> String {
    let (Some(zoom), Some(center)) = (components.zoom, components.center) else {
        return String::new();
    };

    let zoom = round_to(zoom, 2);
    let precision = coordinate_precision(zoom);
    let lng = round_to(center.x, precision);
    let lat = round_to(center.y, precision);

    let mut hash = format!("#{}/{}/{}", zoom, lat, lng);

    if let Some(layers) = components.layers.as_deref().filter(|l| !l.is_empty()) {
        hash.push('/');
        hash.push_str(layers);
    }

    for (key, value) in &components.additional {
        // write! auf String kann nicht fehlschlagen
        let _ = write!(hash, "/{}={}", key, value);
    }

    hash
}

/// Rundet auf `digits` Nachkommastellen (Halbwerte Richtung +∞).
///
/// `-0` wird zu `0` normalisiert, damit kein `-0` im Hash landet.
fn round_to(value: f64, digits: i32) -> f64 {
    let m = 10f64.powi(digits);
    (value * m + 0.5).floor() / m + 0.0
}
