//! Health Module
//!
//! Hit point bookkeeping for living quest resources.
use serde::{Deserialize, Serialize};

/// Hit points of one living individual.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthState {
    max_hp: u32,
    current_hp: u32,
}
impl HealthState {
    /// Create a clean `HealthState` with specified maximum health
    pub fn new_at_max(max_hp: u32) -> HealthState {
        HealthState {
            max_hp,
            current_hp: max_hp,
        }
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Return whether this entity is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.current_hp > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Do damage to health. Saturates at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Back to full health, as when the next individual of a group steps in.
    pub fn restore(&mut self) {
        self.current_hp = self.max_hp;
    }
}

/// Possible life states for living entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    Alive,
    Dead,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_saturates_at_zero_and_kills() {
        let mut state = HealthState::new_at_max(4);
        state.damage(9);
        assert_eq!(state.current_hp(), 0);
        assert_eq!(state.life_state(), LifeState::Dead);

        state.restore();
        assert_eq!(state.current_hp(), 4);
        assert_eq!(state.life_state(), LifeState::Alive);
    }
}
