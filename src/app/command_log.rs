//! Verlauf der ausgeführten Commands.
//!
//! Der Zustandsautomat hat außer dem Bild keine sichtbare Ausgabe; das Log
//! macht Übergänge wie `DismissHint` → `AddPoint` oder `CancelRender` →
//! `RequestExit` in Integrationstests prüfbar. Begrenzt, damit lange
//! Sitzungen keinen Speicher anhäufen.

use super::AppCommand;

/// Ausgeführte Commands in Reihenfolge, älteste zuerst.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Hängt einen Command an. Ist das Log voll, fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge, älteste zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }
}
