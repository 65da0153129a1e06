use std::collections::{HashMap, HashSet};

use crate::error::{Result, SlotError};

/// The "beats" relation: each key beats the symbol it maps to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationTable {
    beats: HashMap<String, String>,
}

impl CombinationTable {
    pub fn new(beats: HashMap<String, String>) -> Self {
        Self { beats }
    }

    /// Whether `a` beats `b`.
    pub fn beats(&self, a: &str, b: &str) -> bool {
        self.beats.get(a).is_some_and(|loser| loser == b)
    }

    /// The symbol `a` beats, if any.
    pub fn victim_of(&self, a: &str) -> Option<&str> {
        self.beats.get(a).map(String::as_str)
    }

    /// Rejects tables that make win counts inconsistent: a symbol beating
    /// itself, two symbols beating each other, or a three-symbol table that
    /// is not one closed cycle.
    pub fn validate(&self) -> Result<()> {
        let mut symbols = HashSet::new();
        for (winner, loser) in &self.beats {
            if winner == loser {
                return Err(SlotError::SelfBeat {
                    symbol: winner.clone(),
                });
            }
            if self.beats(loser, winner) {
                return Err(SlotError::MutualBeat {
                    a: winner.clone(),
                    b: loser.clone(),
                });
            }
            symbols.insert(winner.as_str());
            symbols.insert(loser.as_str());
        }

        if symbols.len() == 3 {
            let closed = symbols.iter().all(|s| {
                let once = self.victim_of(s);
                let twice = once.and_then(|x| self.victim_of(x));
                let thrice = twice.and_then(|x| self.victim_of(x));
                thrice == Some(*s)
            });
            if !closed {
                return Err(SlotError::NotACycle);
            }
        }
        Ok(())
    }
}
