//! Handler für Layer-Sichtbarkeit.

use crate::app::AppState;

/// Schaltet einen Layer und synchronisiert Karte und Hash bei Änderung.
pub fn set_visibility(state: &mut AppState, id: &str, visible: bool) -> anyhow::Result<()> {
    if state.switcher.set_visibility(id, visible) {
        log::info!(
            "Layer \"{}\" {}",
            id,
            if visible { "eingeblendet" } else { "ausgeblendet" }
        );
        apply_visibility(state)?;
    }
    Ok(())
}

/// Wendet die Sichtbarkeit auf die Karte an und schreibt den Hash neu.
///
/// No-op, solange keine Karte angehängt ist.
pub fn apply_visibility(state: &mut AppState) -> anyhow::Result<()> {
    if state.map.is_none() {
        log::debug!("Sichtbarkeit nicht angewendet: keine Karte");
        return Ok(());
    }
    state.switcher.apply_visibility(state.map.as_deref_mut());
    super::hash::update_hash(state)
}

/// Übernimmt den Layer-Anteil eines Hashes.
///
/// Auf die Karte angewendet wird nur bei geladenem Stil; sonst übernimmt
/// das spätere `load` die neue Menge.
pub fn set_url_string(state: &mut AppState, layers: &str) -> anyhow::Result<()> {
    state.switcher.set_url_string(layers);
    if state.is_map_ready() {
        apply_visibility(state)?;
    } else {
        log::debug!("Layer-String gespeichert, Stil noch nicht geladen");
    }
    Ok(())
}
