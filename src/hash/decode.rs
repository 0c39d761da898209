//! Parser für URL-Hashes.

use super::HashComponents;
use glam::DVec2;
use regex::Regex;
use std::sync::LazyLock;

/// Segment der Form `key=value` (Schlüssel aus Wortzeichen, Rest beliebig).
static PARAMETER_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)=(.*)$").expect("Parameter-Pattern ist ein gültiges Regex")
});

/// Dekodiert einen URL-Hash (mit oder ohne führendes `#`).
///
/// Weniger als drei Segmente ergeben leere Komponenten. Ab dem vierten Segment
/// wird jedes `key=value`-Segment zum Zusatz-Parameter; jedes andere Segment
/// überschreibt den Layer-String, d.h. bei mehreren gewinnt das letzte.
/// Nicht-numerische Zoom-/Koordinatenwerte werden als fehlend behandelt.
pub fn decode_hash(hash: &str) -> HashComponents {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    let segments: Vec<&str> = fragment.split('/').collect();

    if segments.len() < 3 {
        return HashComponents::default();
    }

    let zoom = parse_number(segments[0]);
    let lat = parse_number(segments[1]);
    let lng = parse_number(segments[2]);
    let center = match (lng, lat) {
        (Some(lng), Some(lat)) => Some(DVec2::new(lng, lat)),
        _ => None,
    };

    let mut components = HashComponents {
        zoom,
        center,
        layers: Some(String::new()),
        ..HashComponents::default()
    };

    for segment in &segments[3..] {
        match PARAMETER_SEGMENT.captures(segment) {
            Some(caps) => {
                components
                    .additional
                    .insert(caps[1].to_string(), caps[2].to_string());
            }
            None => {
                if components.layers.as_deref().is_some_and(|l| !l.is_empty()) {
                    log::debug!("Mehrere Layer-Segmente im Hash, verwende \"{}\"", segment);
                }
                components.layers = Some(segment.to_string());
            }
        }
    }

    components
}

fn parse_number(segment: &str) -> Option<f64> {
    segment.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
