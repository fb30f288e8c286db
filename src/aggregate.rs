// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Summary figures derived from a transaction list.
//!
//! Every function recomputes from scratch and sums in list order starting
//! from zero, so results are reproducible for a given ledger snapshot.

use crate::ledger::for_month;
use crate::models::{AccountingType, PaymentMethod, Transaction, TransactionType};
use serde::Serialize;
use std::collections::BTreeMap;

fn total<'a, I>(items: I) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    items.into_iter().fold(0.0, |acc, t| acc + t.amount)
}

pub fn sum_by_type<'a, I>(items: I, r#type: TransactionType) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    total(items.into_iter().filter(|t| t.r#type == r#type))
}

pub fn total_income(txs: &[Transaction]) -> f64 {
    sum_by_type(txs, TransactionType::Income)
}

pub fn total_expenses(txs: &[Transaction]) -> f64 {
    sum_by_type(txs, TransactionType::Expense)
}

pub fn total_savings(txs: &[Transaction]) -> f64 {
    sum_by_type(txs, TransactionType::Savings)
}

pub fn total_savings_withdrawals(txs: &[Transaction]) -> f64 {
    sum_by_type(txs, TransactionType::SavingsWithdrawal)
}

pub fn net_savings(txs: &[Transaction]) -> f64 {
    total_savings(txs) - total_savings_withdrawals(txs)
}

pub fn balance_of(income: f64, expenses: f64, savings: f64, withdrawals: f64) -> f64 {
    income - expenses - savings + withdrawals
}

pub fn balance(txs: &[Transaction]) -> f64 {
    balance_of(
        total_income(txs),
        total_expenses(txs),
        total_savings(txs),
        total_savings_withdrawals(txs),
    )
}

pub fn expenses_by_method(txs: &[Transaction], method: PaymentMethod) -> f64 {
    total(
        txs.iter()
            .filter(|t| t.r#type == TransactionType::Expense && t.payment_method == method),
    )
}

/// Outstanding credit obligation.
///
/// An installment record counts its own amount once for every installment
/// from its position to the end of the schedule; other credit expenses count
/// their amount once.
pub fn debt_payable(txs: &[Transaction]) -> f64 {
    txs.iter()
        .filter(|t| t.is_credit_expense())
        .fold(0.0, |acc, t| match &t.installment_info {
            Some(info) => acc + t.amount * f64::from(info.remaining_months()),
            None => acc + t.amount,
        })
}

pub fn credit_by_bank(txs: &[Transaction]) -> BTreeMap<String, f64> {
    let mut out = BTreeMap::new();
    for t in txs
        .iter()
        .filter(|t| t.is_credit_expense() && !t.bank_name.is_empty())
    {
        *out.entry(t.bank_name.clone()).or_insert(0.0) += t.amount;
    }
    out
}

pub fn expenses_by_category(txs: &[Transaction]) -> BTreeMap<String, f64> {
    let mut out = BTreeMap::new();
    for t in txs.iter().filter(|t| t.r#type == TransactionType::Expense) {
        *out.entry(t.category.clone()).or_insert(0.0) += t.amount;
    }
    out
}

fn sum_by_accounting(txs: &[Transaction], kind: AccountingType) -> f64 {
    total(txs.iter().filter(|t| t.accounting_type == kind))
}

pub fn total_assets(txs: &[Transaction]) -> f64 {
    sum_by_accounting(txs, AccountingType::Asset)
}

pub fn total_liabilities(txs: &[Transaction]) -> f64 {
    sum_by_accounting(txs, AccountingType::Liability)
}

pub fn total_equity(txs: &[Transaction]) -> f64 {
    total_assets(txs) - total_liabilities(txs)
}

/// Lifetime figures for a ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub total_savings_withdrawals: f64,
    pub net_savings: f64,
    pub balance: f64,
    pub cash_expenses: f64,
    pub debit_expenses: f64,
    pub credit_expenses: f64,
    pub debt_payable: f64,
    pub credit_by_bank: BTreeMap<String, f64>,
    pub expenses_by_category: BTreeMap<String, f64>,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub total_equity: f64,
}

impl Summary {
    pub fn compute(txs: &[Transaction]) -> Self {
        let total_income = total_income(txs);
        let total_expenses = total_expenses(txs);
        let total_savings = total_savings(txs);
        let total_savings_withdrawals = total_savings_withdrawals(txs);
        let total_assets = total_assets(txs);
        let total_liabilities = total_liabilities(txs);
        Self {
            total_income,
            total_expenses,
            total_savings,
            total_savings_withdrawals,
            net_savings: total_savings - total_savings_withdrawals,
            balance: balance_of(
                total_income,
                total_expenses,
                total_savings,
                total_savings_withdrawals,
            ),
            cash_expenses: expenses_by_method(txs, PaymentMethod::Cash),
            debit_expenses: expenses_by_method(txs, PaymentMethod::Debit),
            credit_expenses: expenses_by_method(txs, PaymentMethod::Credit),
            debt_payable: debt_payable(txs),
            credit_by_bank: credit_by_bank(txs),
            expenses_by_category: expenses_by_category(txs),
            total_assets,
            total_liabilities,
            total_equity: total_assets - total_liabilities,
        }
    }
}

/// Cash-flow figures for the records whose date starts with `month`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub savings_withdrawals: f64,
    pub balance: f64,
    pub transactions: usize,
}

impl MonthlySummary {
    pub fn compute(txs: &[Transaction], month: &str) -> Self {
        let rows = for_month(txs, month);
        let income = sum_by_type(rows.iter().copied(), TransactionType::Income);
        let expenses = sum_by_type(rows.iter().copied(), TransactionType::Expense);
        let savings = sum_by_type(rows.iter().copied(), TransactionType::Savings);
        let savings_withdrawals =
            sum_by_type(rows.iter().copied(), TransactionType::SavingsWithdrawal);
        Self {
            month: month.to_string(),
            income,
            expenses,
            savings,
            savings_withdrawals,
            balance: balance_of(income, expenses, savings, savings_withdrawals),
            transactions: rows.len(),
        }
    }
}
