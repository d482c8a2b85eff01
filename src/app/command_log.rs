//! Protokoll der ausgeführten Commands (Diagnose, Tests, Host-Replay).

use super::AppCommand;
use std::collections::VecDeque;

/// Ausgeführter Command mit fortlaufender Nummer.
#[derive(Debug, Clone)]
pub struct LoggedCommand {
    pub seq: u64,
    pub command: AppCommand,
}

/// Ringpuffer der zuletzt ausgeführten Commands.
///
/// Die Sequenznummern laufen über Verdrängungen hinweg weiter, damit ein
/// Host mit [`CommandLog::since`] nur neue Einträge abholen kann.
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
    capacity: usize,
    next_seq: u64,
}

impl CommandLog {
    pub const DEFAULT_CAPACITY: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
            next_seq: 0,
        }
    }

    /// Hängt einen ausgeführten Command an; bei voller Kapazität fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) -> u64 {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push_back(LoggedCommand {
            seq,
            command: command.clone(),
        });
        seq
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Commands in Ausführungsreihenfolge (ältester zuerst).
    pub fn commands(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter().map(|e| &e.command)
    }

    /// Einträge mit Sequenznummer ≥ `seq`.
    pub fn since(&self, seq: u64) -> impl Iterator<Item = &LoggedCommand> {
        self.entries.iter().skip_while(move |e| e.seq < seq)
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back().map(|e| &e.command)
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}
