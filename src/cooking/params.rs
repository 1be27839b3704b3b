// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Process parameters of a cooking session.

use crate::error::{InvalidArgument, Result};
use serde::{Deserialize, Serialize};

/// How the berries were cooked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CookingParams {
    /// Cooking time in seconds. Shorter sessions concentrate flavor.
    pub duration: u8,
    /// Number of spills and burns, each costing one point per flavor.
    pub errors: u8,
    /// Flat bonus added to every present flavor.
    pub bonus: u8,
}

impl CookingParams {
    /// Reference duration: at 60 seconds flavors are not rescaled.
    pub const REFERENCE_DURATION: u8 = 60;

    pub fn new(duration: u8, errors: u8, bonus: u8) -> Self {
        Self {
            duration,
            errors,
            bonus,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.duration == 0 {
            return Err(InvalidArgument::ZeroDuration.into());
        }
        Ok(())
    }
}

impl Default for CookingParams {
    fn default() -> Self {
        Self::new(Self::REFERENCE_DURATION, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_session() {
        let params = CookingParams::default();
        assert_eq!(params.duration, 60);
        assert_eq!(params.errors, 0);
        assert_eq!(params.bonus, 0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = CookingParams::new(0, 0, 0).validate().unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
