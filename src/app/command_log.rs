//! Begrenztes Command-Log zur Nachverfolgung der Synchronisation.
//!
//! Hält die letzten `CAPACITY` Commands als Ringpuffer; ältere Einträge
//! fallen einzeln heraus.

use super::AppCommand;
use std::collections::VecDeque;

/// Ausgeführte Commands in Ausführungsreihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    dropped: usize,
}

impl CommandLog {
    /// Maximale Anzahl gehaltener Einträge.
    pub const CAPACITY: usize = 256;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu; bei voller Kapazität fällt
    /// der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
            self.dropped += 1;
        }
        self.entries.push_back(command.clone());
    }

    /// Anzahl gehaltener Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands gehalten werden.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl wegen Kapazität verworfener Commands seit dem letzten `clear`.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Alle gehaltenen Commands, ältester zuerst.
    pub fn entries(&self) -> std::collections::vec_deque::Iter<'_, AppCommand> {
        self.entries.iter()
    }

    /// Die letzten `n` Commands, ältester zuerst.
    pub fn last_n(&self, n: usize) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    /// Letzter ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Leert das Log, z.B. nach abgeschlossenem Startup.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.dropped = 0;
    }
}
