// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{credit_by_bank, expenses_by_category, MonthlySummary, Summary};
use crate::session::Session;
use crate::store::KeyValueStore;
use crate::utils::{current_month, fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

pub fn handle<S: KeyValueStore>(session: &Session<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(session, sub)?,
        Some(("month", sub)) => month(session, sub)?,
        Some(("by-category", sub)) => by_category(session, sub)?,
        Some(("by-bank", sub)) => by_bank(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary<S: KeyValueStore>(session: &Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let s = Summary::compute(session.transactions()?);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    let rows = vec![
        ("Total income", s.total_income),
        ("Total expenses", s.total_expenses),
        ("Total savings", s.total_savings),
        ("Savings withdrawals", s.total_savings_withdrawals),
        ("Net savings", s.net_savings),
        ("Balance", s.balance),
        ("Cash expenses", s.cash_expenses),
        ("Debit expenses", s.debit_expenses),
        ("Credit expenses", s.credit_expenses),
        ("Debt payable", s.debt_payable),
        ("Total assets", s.total_assets),
        ("Total liabilities", s.total_liabilities),
        ("Total equity", s.total_equity),
    ]
    .into_iter()
    .map(|(label, v)| vec![label.to_string(), fmt_money(v)])
    .collect();
    println!("{}", pretty_table(&["Figure", "Amount"], rows));
    Ok(())
}

fn month<S: KeyValueStore>(session: &Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => current_month(),
    };
    let s = MonthlySummary::compute(session.transactions()?, &month);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    let rows = vec![vec![
        s.month.clone(),
        fmt_money(s.income),
        fmt_money(s.expenses),
        fmt_money(s.savings),
        fmt_money(s.savings_withdrawals),
        fmt_money(s.balance),
        s.transactions.to_string(),
    ]];
    println!(
        "{}",
        pretty_table(
            &["Month", "Income", "Expenses", "Savings", "Withdrawals", "Balance", "Count"],
            rows
        )
    );
    Ok(())
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RollupRow {
    pub name: String,
    pub amount: f64,
}

/// Largest amount first; ties keep name order.
pub fn ranked(map: BTreeMap<String, f64>) -> Vec<RollupRow> {
    let mut items: Vec<RollupRow> = map
        .into_iter()
        .map(|(name, amount)| RollupRow { name, amount })
        .collect();
    items.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    items
}

fn print_rollup(sub: &clap::ArgMatches, header: &str, items: Vec<RollupRow>) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
        return Ok(());
    }
    let rows = items
        .into_iter()
        .map(|r| vec![r.name, fmt_money(r.amount)])
        .collect();
    println!("{}", pretty_table(&[header, "Amount"], rows));
    Ok(())
}

fn by_category<S: KeyValueStore>(session: &Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let items = ranked(expenses_by_category(session.transactions()?));
    print_rollup(sub, "Category", items)
}

fn by_bank<S: KeyValueStore>(session: &Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let items = ranked(credit_by_bank(session.transactions()?));
    print_rollup(sub, "Bank", items)
}
