// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    is_suggested_bank, AccountingType, PaymentMethod, Transaction, TransactionInput,
    TransactionType,
};
use crate::session::Session;
use crate::store::KeyValueStore;
use crate::utils::{
    fmt_money, maybe_print_json, parse_amount, parse_date, parse_month, pretty_table, required,
    today,
};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

pub fn handle<S: KeyValueStore>(session: &mut Session<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub)?,
        Some(("list", sub)) => list(session, sub)?,
        Some(("rm", sub)) => rm(session, sub)?,
        Some(("clear", sub)) => clear(session, sub, &mut io::stdin().lock())?,
        _ => {}
    }
    Ok(())
}

pub fn input_from_args(sub: &clap::ArgMatches) -> Result<TransactionInput> {
    let r#type = required(sub, "type")?
        .parse::<TransactionType>()
        .map_err(anyhow::Error::msg)?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let mut input = TransactionInput::new(r#type, date);
    input.category = required(sub, "category")?.to_string();
    input.amount = Some(parse_amount(required(sub, "amount")?)?);
    input.payment_method = required(sub, "method")?
        .parse::<PaymentMethod>()
        .map_err(anyhow::Error::msg)?;
    input.accounting_type = required(sub, "accounting")?
        .parse::<AccountingType>()
        .map_err(anyhow::Error::msg)?;
    input.bank_name = sub.get_one::<String>("bank").cloned().unwrap_or_default();
    input.description = sub
        .get_one::<String>("description")
        .cloned()
        .unwrap_or_default();
    input.statement_date = sub
        .get_one::<String>("statement-date")
        .map(|s| parse_date(s))
        .transpose()?;
    if let Some(months) = sub.get_one::<u32>("installment-months").copied() {
        input.is_installment = months > 1;
        input.installment_months = months.max(1);
    }
    Ok(input)
}

fn add<S: KeyValueStore>(session: &mut Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let input = input_from_args(sub)?;
    if input.is_installment && input.payment_method != PaymentMethod::Credit {
        tracing::warn!(
            method = %input.payment_method,
            "installments only apply to credit purchases; recording a single transaction"
        );
    }
    if input.payment_method == PaymentMethod::Credit
        && !input.bank_name.is_empty()
        && !is_suggested_bank(&input.bank_name)
    {
        tracing::warn!(bank = %input.bank_name, "bank is not in the suggested list");
    }

    let added = session.add(input)?;
    for tx in &added {
        println!(
            "Recorded #{} {} {} on {} ({})",
            tx.id,
            tx.r#type,
            fmt_money(tx.amount),
            tx.date,
            tx.category
        );
    }
    Ok(())
}

fn list<S: KeyValueStore>(session: &Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(session, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.r#type.to_string(),
                    t.category.clone(),
                    fmt_money(t.amount),
                    t.payment_method.to_string(),
                    t.bank_name.clone(),
                    t.accounting_type.to_string(),
                    installment_label(t),
                    t.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "ID",
                    "Date",
                    "Type",
                    "Category",
                    "Amount",
                    "Method",
                    "Bank",
                    "Accounting",
                    "Installment",
                    "Description"
                ],
                rows,
            )
        );
    }
    Ok(())
}

/// Position within the plan and the original purchase total, e.g. `2/3 of 1200.00`.
pub fn installment_label(t: &Transaction) -> String {
    t.installment_info
        .as_ref()
        .map(|i| {
            format!(
                "{}/{} of {}",
                i.current_month,
                i.total_months,
                fmt_money(i.original_amount)
            )
        })
        .unwrap_or_default()
}

/// Records selected by `--month` and `--limit`, in ledger order.
pub fn query_rows<S: KeyValueStore>(
    session: &Session<S>,
    sub: &clap::ArgMatches,
) -> Result<Vec<Transaction>> {
    let ledger = session.ledger()?;
    let mut data: Vec<Transaction> = match sub.get_one::<String>("month") {
        Some(month) => ledger
            .for_month(&parse_month(month)?)
            .into_iter()
            .cloned()
            .collect(),
        None => ledger.all().to_vec(),
    };
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}

fn rm<S: KeyValueStore>(session: &mut Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let raw = required(sub, "id")?;
    let id: i64 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid id '{}'", raw))?;
    match session.remove(id)? {
        Some(tx) => println!("Removed #{} ({} {})", tx.id, tx.category, fmt_money(tx.amount)),
        None => println!("No transaction with id {}", id),
    }
    Ok(())
}

/// Clears the ledger once the user confirms, either with `--yes` or by
/// answering `y` on `input`.
pub fn clear<S: KeyValueStore, R: BufRead>(
    session: &mut Session<S>,
    sub: &clap::ArgMatches,
    input: &mut R,
) -> Result<()> {
    let email = session
        .current_user()
        .map(|u| u.email.clone())
        .context("Not signed in")?;
    if !sub.get_flag("yes") {
        print!(
            "Clear all transactions for {}? This cannot be undone. [y/N] ",
            email
        );
        io::stdout().flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Aborted");
            return Ok(());
        }
    }
    let count = session.clear()?;
    println!("Cleared {} transaction(s) for {}", count, email);
    Ok(())
}
