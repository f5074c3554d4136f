//! Error types for the household model

use thiserror::Error;

use crate::components::PersonId;
use crate::money::Currency;

#[derive(Error, Debug)]
pub enum HouseholdError {
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Missing conversion rate from {from} to {to}")]
    MissingConversionRate { from: Currency, to: Currency },

    /// A person who already has a spouse cannot found a second family
    #[error("Person {0} is already married; you can only be part of one family")]
    AlreadyMarried(PersonId),

    #[error("Entity lookup failed: {0}")]
    Component(#[from] hecs::ComponentError),

    #[error("Entity lookup failed: {0}")]
    NoSuchEntity(#[from] hecs::NoSuchEntity),
}

pub type Result<T> = std::result::Result<T, HouseholdError>;
