// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for fintrack

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Loading or writing a snapshot through the REST API failed. Retryable.
    #[error("Could not reach the ledger API: {0}")]
    DataFetch(String),

    /// A record carries a value the engine refuses to aggregate.
    #[error("Invalid record: {0}")]
    Validation(String),

    /// The goal update and the linked expense insert diverged.
    #[error(
        "Contribution to goal '{goal_id}' partially written: {cause}; rollback failed: {rollback}"
    )]
    PartialWrite {
        goal_id: String,
        cause: String,
        rollback: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether re-running the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::DataFetch(_) | Error::Http(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
