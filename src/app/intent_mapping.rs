//! Mapping von Karten-/Browser-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::hash::decode_hash;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::Startup => hash_change_commands(&state.location.current_hash()),
        AppIntent::MapLoaded => vec![AppCommand::ApplyVisibility],
        AppIntent::MapMoved => vec![AppCommand::UpdateHash],
        AppIntent::HashChanged { hash } => hash_change_commands(&hash),
        AppIntent::LayerToggled { id, visible } => {
            vec![AppCommand::SetLayerVisibility { id, visible }]
        }
        AppIntent::ParameterChanged { key, value } => {
            vec![AppCommand::SetParameter { key, value }]
        }
    }
}

/// Reihenfolge ist Vertrag: Parameter abgleichen, dann springen, dann Layer.
///
/// Der Sprung schreibt den Hash synchron neu (move-end) und serialisiert dabei
/// die Parameter; vorher nicht abgeglichene Werte gingen sonst verloren.
fn hash_change_commands(hash: &str) -> Vec<AppCommand> {
    let components = decode_hash(hash);
    let viewport = components.viewport();

    let mut commands = vec![AppCommand::ReconcileParameters {
        additional: components.additional,
    }];
    if let Some(viewport) = viewport {
        commands.push(AppCommand::JumpTo { viewport });
    }
    if let Some(layers) = components.layers {
        commands.push(AppCommand::ApplyLayerString { layers });
    }
    commands
}
