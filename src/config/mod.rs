use crate::core::reservation::DEFAULT_CONFIRMATION_MESSAGE;
use crate::utils::error::{ReservationError, Result};
use crate::utils::validation::{
    validate_log_level, validate_non_empty_string, validate_positive_amount, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub reservation: ReservationSection,
    pub payment: PaymentSection,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationSection {
    pub confirmation_message: String,
}

impl Default for ReservationSection {
    fn default() -> Self {
        Self {
            confirmation_message: DEFAULT_CONFIRMATION_MESSAGE.to_string(),
        }
    }
}

/// Settings for [`crate::LimitPaymentGateway`]. No limit means every valid charge is approved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSection {
    pub limit: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl ServiceConfig {
    /// Loads and parses a TOML file. The result is not validated; see [`Validate`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_toml_str`], resolving `${VAR}` through `lookup` instead of the environment.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_vars(content, lookup)?;

        toml::from_str(&processed_content).map_err(|e| ReservationError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the looked-up value. Unknown variables stay as written.
    fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReservationError::ConfigParse {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn confirmation_message(&self) -> &str {
        &self.reservation.confirmation_message
    }

    pub fn payment_limit(&self) -> Option<f64> {
        self.payment.limit
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string(
            "reservation.confirmation_message",
            &self.reservation.confirmation_message,
        )?;

        if let Some(limit) = self.payment.limit {
            validate_positive_amount("payment.limit", limit)?;
        }

        validate_log_level("logging.level", &self.logging.level)?;

        Ok(())
    }
}
