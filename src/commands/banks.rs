// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::SUGGESTED_BANKS;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle() -> Result<()> {
    let data = SUGGESTED_BANKS
        .iter()
        .map(|b| vec![(*b).to_string()])
        .collect();
    println!("{}", pretty_table(&["Bank"], data));
    Ok(())
}
