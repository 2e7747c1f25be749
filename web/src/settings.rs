use crate::utils::*;
use mnemo_core::{InputValidator, SlotCount, Timing};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub min_slots: SlotCount,
    pub max_slots: SlotCount,
    pub timing: Timing,
}

impl Settings {
    pub(crate) fn validator(&self) -> InputValidator {
        let (min, max) = (self.min_slots.max(1), self.max_slots.max(1));
        if min > max {
            log::warn!("min_slots {} is above max_slots {}, swapping", min, max);
            InputValidator::new(max, min)
        } else {
            InputValidator::new(min, max)
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_slots: InputValidator::DEFAULT_MIN,
            max_slots: InputValidator::DEFAULT_MAX,
            timing: Timing::default(),
        }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "mnemo:settings:v1";
}
