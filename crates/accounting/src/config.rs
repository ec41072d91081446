//! Ledger configuration: variant defaults and the first account id.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const ENV_FIRST_ACCOUNT_ID: &str = "BANKBOOK_FIRST_ACCOUNT_ID";
pub const ENV_DEFAULT_OVERDRAFT_LIMIT: &str = "BANKBOOK_DEFAULT_OVERDRAFT_LIMIT";
pub const ENV_DEFAULT_SAVINGS_RATE: &str = "BANKBOOK_DEFAULT_SAVINGS_RATE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Id given to the first account this ledger opens.
    pub first_account_id: u64,
    /// Overdraft allowance for checking accounts opened without explicit terms.
    pub default_overdraft_limit: Decimal,
    /// Annual rate for savings accounts opened without explicit terms.
    pub default_savings_rate: Decimal,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            first_account_id: 1001,
            default_overdraft_limit: Decimal::new(500, 0),
            default_savings_rate: Decimal::new(2, 2),
        }
    }
}

impl LedgerConfig {
    /// Read overrides from the process environment.
    ///
    /// Missing variables keep their default; unparseable or negative values are
    /// ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let first_account_id = lookup(ENV_FIRST_ACCOUNT_ID)
            .and_then(|raw| parse_or_warn::<u64>(ENV_FIRST_ACCOUNT_ID, &raw))
            .unwrap_or(defaults.first_account_id);

        let default_overdraft_limit = lookup(ENV_DEFAULT_OVERDRAFT_LIMIT)
            .and_then(|raw| parse_non_negative(ENV_DEFAULT_OVERDRAFT_LIMIT, &raw))
            .unwrap_or(defaults.default_overdraft_limit);

        let default_savings_rate = lookup(ENV_DEFAULT_SAVINGS_RATE)
            .and_then(|raw| parse_non_negative(ENV_DEFAULT_SAVINGS_RATE, &raw))
            .unwrap_or(defaults.default_savings_rate);

        Self {
            first_account_id,
            default_overdraft_limit,
            default_savings_rate,
        }
    }
}

fn parse_or_warn<T>(key: &str, raw: &str) -> Option<T>
where
    T: core::str::FromStr,
    T::Err: core::fmt::Display,
{
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("{key}={raw:?} is not valid ({err}); using default");
            None
        }
    }
}

fn parse_non_negative(key: &str, raw: &str) -> Option<Decimal> {
    let value = parse_or_warn::<Decimal>(key, raw)?;
    if value < Decimal::ZERO {
        tracing::warn!("{key}={raw:?} must not be negative; using default");
        return None;
    }
    Some(value)
}
