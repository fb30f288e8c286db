// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for the ledger core.

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("invalid email '{0}': a Gmail address is required")]
    InvalidEmail(String),

    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("invalid amount {0}: must be a positive number")]
    InvalidAmount(f64),

    #[error("invalid installment plan of {0} months: at most {max} are allowed", max = crate::models::MAX_INSTALLMENT_MONTHS)]
    InvalidInstallmentMonths(u32),

    #[error("installment schedule from {0} runs past the supported date range")]
    DateOutOfRange(chrono::NaiveDate),

    #[error("no user is signed in")]
    NotSignedIn,

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
