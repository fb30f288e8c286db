// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::store::KeyValueStore;
use crate::utils::required;
use anyhow::{bail, Context, Result};

pub fn handle<S: KeyValueStore>(session: &Session<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(session, sub),
        _ => Ok(()),
    }
}

fn export_transactions<S: KeyValueStore>(
    session: &Session<S>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;
    let txs = session.transactions()?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Failed to create {}", out))?;
            wtr.write_record([
                "id",
                "date",
                "type",
                "category",
                "amount",
                "payment_method",
                "bank_name",
                "statement_date",
                "accounting_type",
                "description",
                "installment",
            ])?;
            for t in txs {
                let installment = t
                    .installment_info
                    .as_ref()
                    .map(|i| format!("{}/{}", i.current_month, i.total_months))
                    .unwrap_or_default();
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_string(),
                    t.r#type.to_string(),
                    t.category.clone(),
                    t.amount.to_string(),
                    t.payment_method.to_string(),
                    t.bank_name.clone(),
                    t.statement_date.map(|d| d.to_string()).unwrap_or_default(),
                    t.accounting_type.to_string(),
                    t.description.clone(),
                    installment,
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(txs)?)
                .with_context(|| format!("Failed to write {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    tracing::info!(format = %fmt, records = txs.len(), path = %out, "exported transactions");
    println!("Exported {} transaction(s) to {}", txs.len(), out);
    Ok(())
}
