//! Handler für URL-Hash, Zusatz-Parameter und Viewport-Sprünge.

use crate::app::AppState;
use crate::core::Viewport;
use indexmap::IndexMap;

/// Schreibt den Hash aus dem aktuellen Zustand ins Fragment.
///
/// Ohne Karte gibt es keinen Viewport und damit nichts zu schreiben.
/// Verweigert der Host das Schreiben, wird nur gewarnt.
pub fn update_hash(state: &mut AppState) -> anyhow::Result<()> {
    if state.map.is_none() {
        return Ok(());
    }
    let hash = state.hash_string()?;
    if let Err(e) = state.location.replace_hash(&hash) {
        log::warn!("Hash konnte nicht geschrieben werden: {:#}", e);
    } else {
        log::debug!("Hash geschrieben: {}", hash);
    }
    Ok(())
}

/// Gleicht die Zusatz-Parameter mit einem dekodierten Hash ab.
pub fn reconcile_parameters(state: &mut AppState, additional: &IndexMap<String, String>) {
    let transitions = state.url_hash.reconcile(additional);
    if transitions > 0 {
        log::debug!("{} Parameter-Wechsel verarbeitet", transitions);
    }
}

/// Springt zum Viewport und schreibt den Hash wie ein synchrones move-end neu.
pub fn jump_to(state: &mut AppState, viewport: Viewport) -> anyhow::Result<()> {
    if !state.is_map_ready() {
        log::debug!("Sprung verworfen: Karte nicht bereit");
        return Ok(());
    }
    if let Some(map) = state.map.as_deref_mut() {
        map.jump_to(viewport);
    }
    update_hash(state)
}

/// Setzt einen Zusatz-Parameter lokal und schreibt den Hash bei Änderung neu.
///
/// Vor dem Anhängen der Karte wird der Wert nur gespeichert.
pub fn set_parameter(state: &mut AppState, key: &str, value: Option<&str>) -> anyhow::Result<()> {
    if !state.url_hash.set_parameter(key, value) {
        return Ok(());
    }
    update_hash(state)
}
