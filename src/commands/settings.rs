// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{Settings, config_path};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(settings: &Settings) -> Result<()> {
    let path = config_path()?;
    let exists = if path.exists() { "" } else { " (not created, defaults)" };
    println!("Config file: {}{}", path.display(), exists);
    let rows = vec![
        vec!["api_url".into(), settings.api_url.clone()],
        vec!["currency".into(), settings.currency.clone()],
        vec!["currency_symbol".into(), settings.currency_symbol.clone()],
        vec!["recent_limit".into(), settings.recent_limit.to_string()],
        vec!["timeout_secs".into(), settings.timeout_secs.to_string()],
        vec!["ngrok_skip_warning".into(), settings.ngrok_skip_warning.to_string()],
        vec![
            "contribution_payment_method".into(),
            settings.contribution_payment_method.clone(),
        ],
        vec!["contribution_prefix".into(), settings.contribution_prefix.clone()],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}
