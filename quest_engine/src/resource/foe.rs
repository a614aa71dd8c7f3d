//! Foe resource.
//!
//! A foe stands for `count` identical individuals fought one after another. Only the current
//! individual has hit points; when it dies the kill is counted and the next one steps in at
//! full health.
//!
//! The injury flag records a hit that did not kill. A blow that takes an individual from full
//! health straight to dead never sets it, so a one-shot kill is not reported as an injury.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    Symbol,
    health::{HealthState, LifeState},
    resource::QuestResource,
};

/// Result of a single blow against a foe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeOutcome {
    /// Zero damage, or every individual is already dead.
    Ignored,
    /// The current individual survived the blow.
    Wounded { hp_left: u32 },
    /// The current individual died.
    Slain { remaining: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Foe {
    symbol: Symbol,
    name: String,
    count: u32,
    killed: u32,
    health: HealthState,
    injured: bool,
}
impl Foe {
    pub fn new(symbol: Symbol, name: impl Into<String>, max_hp: u32, count: u32) -> Foe {
        Foe {
            symbol,
            name: name.into(),
            count,
            killed: 0,
            health: HealthState::new_at_max(max_hp),
            injured: false,
        }
    }

    /// True once an individual has taken damage without dying, until the foe recovers.
    pub fn injured_trigger(&self) -> bool {
        self.injured
    }

    /// Bring the current individual back to full health and clear the injury flag.
    ///
    /// Returns false if every individual is already dead.
    pub fn recover(&mut self) -> bool {
        if self.is_defeated() {
            debug!("foe '{}' is defeated and cannot recover", self.symbol);
            return false;
        }
        self.health.restore();
        self.injured = false;
        info!("foe '{}' recovered ({} hp)", self.symbol, self.health.current_hp());
        true
    }

    pub fn killed_count(&self) -> u32 {
        self.killed
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn remaining(&self) -> u32 {
        self.count.saturating_sub(self.killed)
    }

    pub fn is_defeated(&self) -> bool {
        self.killed >= self.count
    }

    pub fn current_hp(&self) -> u32 {
        self.health.current_hp()
    }

    pub fn max_hp(&self) -> u32 {
        self.health.max_hp()
    }

    /// Apply one blow to the current individual.
    pub fn strike(&mut self, amount: u32) -> StrikeOutcome {
        if amount == 0 || self.is_defeated() {
            debug!("foe '{}' ignores strike of {amount}", self.symbol);
            return StrikeOutcome::Ignored;
        }
        self.health.damage(amount);
        match self.health.life_state() {
            LifeState::Alive => {
                self.injured = true;
                info!(
                    "foe '{}' injured (-{amount} hp, {} left)",
                    self.symbol,
                    self.health.current_hp()
                );
                StrikeOutcome::Wounded {
                    hp_left: self.health.current_hp(),
                }
            },
            LifeState::Dead => {
                self.killed += 1;
                if !self.is_defeated() {
                    self.health.restore();
                }
                info!("foe '{}' slain ({} of {})", self.symbol, self.killed, self.count);
                StrikeOutcome::Slain {
                    remaining: self.remaining(),
                }
            },
        }
    }

    /// Kill the current individual outright.
    pub fn slay(&mut self) -> StrikeOutcome {
        self.strike(self.health.current_hp())
    }
}
impl QuestResource for Foe {
    fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }
}
