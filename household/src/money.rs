//! Money - currency-tagged integer amounts
//!
//! Conversions go through USD using a fixed rate table. Results are rounded
//! to the nearest whole unit, ties away from zero.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::{HouseholdError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Gbp,
    Eur,
    Can,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Gbp, Currency::Eur, Currency::Can];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Can => "CAN",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = HouseholdError;

    fn from_str(code: &str) -> Result<Self> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| HouseholdError::InvalidCurrency(code.to_string()))
    }
}

/// Multiplier taking an amount in the keyed currency to USD
static TO_USD: Lazy<HashMap<Currency, f64>> = Lazy::new(|| {
    HashMap::from([
        (Currency::Usd, 1.0),
        (Currency::Gbp, 2.0),
        (Currency::Eur, 2.0 / 3.0),
        (Currency::Can, 0.8),
    ])
});

/// Multiplier taking a USD amount to the keyed currency
static FROM_USD: Lazy<HashMap<Currency, f64>> = Lazy::new(|| {
    HashMap::from([
        (Currency::Usd, 1.0),
        (Currency::Gbp, 0.5),
        (Currency::Eur, 1.5),
        (Currency::Can, 1.25),
    ])
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Create from a currency code such as `"USD"`.
    pub fn new(amount: i64, currency: &str) -> Result<Self> {
        Ok(Self::from_currency(amount, currency.parse()?))
    }

    pub fn from_currency(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Convert into the currency named by `code`.
    pub fn convert(&self, code: &str) -> Result<Money> {
        self.convert_to(code.parse()?)
    }

    pub fn convert_to(&self, target: Currency) -> Result<Money> {
        let (to, from) = match (TO_USD.get(&self.currency), FROM_USD.get(&target)) {
            (Some(to), Some(from)) => (*to, *from),
            _ => {
                return Err(HouseholdError::MissingConversionRate {
                    from: self.currency,
                    to: target,
                })
            }
        };

        let usd = self.amount as f64 * to;
        let converted = usd * from;
        Ok(Money::from_currency(converted.round() as i64, target))
    }

    /// Sum expressed in `other`'s currency. Saturates at the `i64` bounds.
    pub fn add(&self, other: &Money) -> Result<Money> {
        let converted = self.convert_to(other.currency)?;
        Ok(Money::from_currency(
            converted.amount.saturating_add(other.amount),
            other.currency,
        ))
    }

    /// Difference expressed in `self`'s currency. Saturates at the `i64` bounds.
    pub fn subtract(&self, other: &Money) -> Result<Money> {
        let converted = other.convert_to(self.currency)?;
        Ok(Money::from_currency(
            self.amount.saturating_sub(converted.amount),
            self.currency,
        ))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
