use crate::{DrawConfig, DrawError, Result, WinnerStore};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Admin-supplied winner value as it arrives on the wire: either a JSON
/// integer or a decimal-digit string. Anything else fails validation
/// before it touches the slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WinnerInput {
    Int(u64),
    Text(String),
}

impl WinnerInput {
    /// Builds an input from an arbitrary JSON value, so booleans, floats,
    /// arrays, and objects fail as `InvalidInput` rather than blowing up
    /// in body deserialization. `null` counts as absent.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Number(n) => n
                .as_u64()
                .map(WinnerInput::Int)
                .ok_or_else(|| DrawError::not_numeric(n.to_string())),
            serde_json::Value::String(s) => Ok(WinnerInput::Text(s.clone())),
            serde_json::Value::Null => Err(DrawError::MissingNumber),
            other => Err(DrawError::not_numeric(other.to_string())),
        }
    }

    pub fn parse(&self) -> Result<u32> {
        match self {
            WinnerInput::Int(n) => u32::try_from(*n)
                .map_err(|_| DrawError::not_numeric(format!("{} out of range", n))),
            WinnerInput::Text(s) => s
                .trim()
                .parse::<u32>()
                .map_err(|_| DrawError::not_numeric(s.clone())),
        }
    }
}

/// Result of an admin assignment. `accepted: false` is not an error;
/// it means a winner already existed and `number` echoes it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignOutcome {
    pub accepted: bool,
    pub number: u32,
}

/// One client-facing draw. `fixed` records whether the fixed winner was
/// handed out or the random fallback fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draw {
    pub number: u32,
    pub fixed: bool,
}

/// One-shot-consumption draw policy over the winner store: the fixed
/// winner is returned exactly once, every later draw is uniform in the
/// configured window.
#[derive(Debug)]
pub struct DrawService {
    store: Arc<WinnerStore>,
    config: DrawConfig,
}

impl DrawService {
    pub fn new(store: Arc<WinnerStore>, config: DrawConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &WinnerStore {
        &self.store
    }

    /// Validates and stores the admin-assigned winner. First write wins;
    /// a repeat assignment reports `accepted: false` with the winner
    /// that already won.
    pub fn assign_fixed_winner(&self, input: Option<&WinnerInput>) -> Result<AssignOutcome> {
        let input = input.ok_or(DrawError::MissingNumber)?;
        let number = input.parse()?;

        if self.store.set_if_absent(number) {
            return Ok(AssignOutcome {
                accepted: true,
                number,
            });
        }

        let existing = self
            .store
            .snapshot()
            .value
            .ok_or_else(|| DrawError::internal("winner slot emptied during assignment"))?;
        tracing::info!(
            "Rejected winner {} ({} already assigned)",
            number,
            existing
        );
        Ok(AssignOutcome {
            accepted: false,
            number: existing,
        })
    }

    /// Hands out the fixed winner on the first qualifying draw, then
    /// falls back to uniform randomness.
    pub fn draw_number(&self) -> Draw {
        if let Some(number) = self.store.consume() {
            tracing::info!("Fixed winner {} consumed", number);
            return Draw {
                number,
                fixed: true,
            };
        }

        let number = rand::thread_rng().gen_range(self.config.random_min..=self.config.random_max);
        tracing::debug!("Random draw: {}", number);
        Draw {
            number,
            fixed: false,
        }
    }

    /// Clears the slot; the next assignment behaves as at process start.
    pub fn reset(&self) {
        self.store.reset();
    }
}
