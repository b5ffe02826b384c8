//! Session configuration.
//!
//! Budgets are held internally in slider units; `currency_scale` converts
//! them to euros only where they leave the core (labels and the payload).

use crate::error::{CoreError, CoreResult};

/// Bounds of the budget slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderConfig {
    pub domain_min: u32,
    pub domain_max: u32,
    /// Minimum distance kept between the two thumbs
    pub gap: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            domain_min: 0,
            domain_max: 1000,
            gap: 50,
        }
    }
}

impl SliderConfig {
    /// Check the slider can hold two thumbs `gap` apart.
    pub fn validate(&self) -> CoreResult<()> {
        if self.domain_max <= self.domain_min {
            return Err(CoreError::Config(format!(
                "slider domain is empty: [{}, {}]",
                self.domain_min, self.domain_max
            )));
        }
        if self.domain_max - self.domain_min < self.gap {
            return Err(CoreError::Config(format!(
                "slider gap {} does not fit in domain [{}, {}]",
                self.gap, self.domain_min, self.domain_max
            )));
        }
        Ok(())
    }
}

/// Settings shared by every traveler form in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub slider: SliderConfig,
    /// Euros per slider unit
    pub currency_scale: u32,
    /// Whether finalize also waits for a locked date range
    pub require_date_lock: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            slider: SliderConfig::default(),
            currency_scale: 1,
            require_date_lock: false,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> CoreResult<()> {
        self.slider.validate()?;
        if self.currency_scale == 0 {
            return Err(CoreError::Config("currency scale must be at least 1".into()));
        }
        Ok(())
    }

    /// Format slider units as a euro label
    pub fn euro_label(&self, units: u32) -> String {
        format!("{}€", units.saturating_mul(self.currency_scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_gap_wider_than_domain_rejected() {
        let slider = SliderConfig {
            domain_min: 0,
            domain_max: 40,
            gap: 50,
        };
        assert!(matches!(slider.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_empty_domain_rejected() {
        let slider = SliderConfig {
            domain_min: 100,
            domain_max: 100,
            gap: 0,
        };
        assert!(slider.validate().is_err());
    }

    #[test]
    fn test_zero_scale_rejected() {
        let config = SessionConfig {
            currency_scale: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_euro_label_applies_scale() {
        let config = SessionConfig {
            currency_scale: 5,
            ..Default::default()
        };
        assert_eq!(config.euro_label(1000), "5000€");
        assert_eq!(SessionConfig::default().euro_label(250), "250€");
    }
}
