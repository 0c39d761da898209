//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::MapSurface;

/// Orchestriert Karten-, Browser- und Listen-Events auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Layer ===
            AppCommand::ApplyVisibility => handlers::layers::apply_visibility(state)?,
            AppCommand::SetLayerVisibility { id, visible } => {
                handlers::layers::set_visibility(state, &id, visible)?
            }
            AppCommand::ApplyLayerString { layers } => {
                handlers::layers::set_url_string(state, &layers)?
            }

            // === Hash ===
            AppCommand::UpdateHash => handlers::hash::update_hash(state)?,
            AppCommand::ReconcileParameters { additional } => {
                handlers::hash::reconcile_parameters(state, &additional)
            }
            AppCommand::JumpTo { viewport } => handlers::hash::jump_to(state, viewport)?,
            AppCommand::SetParameter { key, value } => {
                handlers::hash::set_parameter(state, &key, value.as_deref())?
            }
        }

        Ok(())
    }

    /// Hängt eine Karte an.
    ///
    /// Ist ihr Stil bereits geladen, wird die Sichtbarkeit sofort angewendet
    /// und der Hash neu geschrieben; sonst folgt das über `AppIntent::MapLoaded`.
    ///
    /// `AppIntent::Startup` muss vorher verarbeitet werden. Danach ist das
    /// ursprüngliche Fragment überschrieben und Layer sowie Parameter daraus
    /// gingen verloren.
    pub fn attach_map(
        &mut self,
        state: &mut AppState,
        map: Box<dyn MapSurface>,
    ) -> anyhow::Result<()> {
        if state.map.is_some() {
            log::warn!("Karte ersetzt, vorherige wird abgehängt");
        }
        let loaded = map.is_style_loaded();
        state.map = Some(map);
        log::info!(
            "Karte angehängt ({} Layer, Stil {})",
            state.switcher.registry().len(),
            if loaded { "geladen" } else { "lädt" }
        );
        if loaded {
            self.handle_command(state, AppCommand::ApplyVisibility)?;
        }
        Ok(())
    }

    /// Hängt die Karte ab. Danach sind Sichtbarkeit und Hash-Schreiben No-ops.
    pub fn detach_map(&mut self, state: &mut AppState) -> Option<Box<dyn MapSurface>> {
        let map = state.map.take();
        if map.is_some() {
            log::info!("Karte abgehängt");
        }
        map
    }
}
