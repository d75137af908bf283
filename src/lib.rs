// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod contribution;
pub mod engine;
pub mod error;
pub mod format;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
