// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The ordered transaction list for one user.

use crate::error::{LedgerError, Result};
use crate::models::{InstallmentInfo, Transaction, TransactionInput, MAX_INSTALLMENT_MONTHS};
use crate::utils::add_months;
use chrono::Utc;

/// Transactions in insertion order, most recent submission first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Validates and records `input`, using the wall clock for ids.
    pub fn add(&mut self, input: TransactionInput) -> Result<&[Transaction]> {
        self.add_at(input, Utc::now().timestamp_millis())
    }

    /// Validates and records `input`, assigning ids from `base_id` upward.
    ///
    /// Returns the newly inserted block, which sits at the front of the ledger.
    pub fn add_at(&mut self, input: TransactionInput, base_id: i64) -> Result<&[Transaction]> {
        let amount = input
            .amount
            .ok_or(LedgerError::MissingRequiredField("amount"))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if input.category.is_empty() {
            return Err(LedgerError::MissingRequiredField("category"));
        }
        if input.expands_to_installments() && input.installment_months > MAX_INSTALLMENT_MONTHS {
            return Err(LedgerError::InvalidInstallmentMonths(input.installment_months));
        }

        let mut block = if input.expands_to_installments() {
            expand_installments(&input, amount, base_id)?
        } else {
            vec![record(&input, base_id, amount)]
        };
        let inserted = block.len();
        block.append(&mut self.transactions);
        self.transactions = block;
        Ok(&self.transactions[..inserted])
    }

    /// Removes the record with `id`. Missing ids are not an error.
    pub fn remove(&mut self, id: i64) -> Option<Transaction> {
        let pos = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(pos))
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Records whose `YYYY-MM-DD` date starts with `prefix`.
    pub fn for_month(&self, prefix: &str) -> Vec<&Transaction> {
        for_month(&self.transactions, prefix)
    }
}

pub fn for_month<'a>(transactions: &'a [Transaction], prefix: &str) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.format("%Y-%m-%d").to_string().starts_with(prefix))
        .collect()
}

fn record(input: &TransactionInput, id: i64, amount: f64) -> Transaction {
    Transaction {
        id,
        r#type: input.r#type,
        category: input.category.clone(),
        amount,
        payment_method: input.payment_method,
        bank_name: input.bank_name.clone(),
        statement_date: input.statement_date,
        date: input.date,
        accounting_type: input.accounting_type,
        description: input.description.clone(),
        installment_info: None,
    }
}

fn expand_installments(
    input: &TransactionInput,
    amount: f64,
    base_id: i64,
) -> Result<Vec<Transaction>> {
    let months = input.installment_months;
    let monthly = amount / f64::from(months);
    (0..months)
        .map(|i| {
            let date = add_months(input.date, i).ok_or(LedgerError::DateOutOfRange(input.date))?;
            let mut tx = record(input, base_id + i64::from(i), monthly);
            tx.date = date;
            tx.description = format!(
                "{} (Installment {}/{})",
                input.description,
                i + 1,
                months
            );
            tx.installment_info = Some(InstallmentInfo {
                is_installment: true,
                current_month: i + 1,
                total_months: months,
                original_amount: amount,
            });
            Ok(tx)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountingType, PaymentMethod, TransactionType};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn expense(category: &str, amount: f64, date: NaiveDate) -> TransactionInput {
        let mut input = TransactionInput::new(TransactionType::Expense, date);
        input.category = category.into();
        input.amount = Some(amount);
        input
    }

    #[test]
    fn plain_submission_adds_one_record() {
        let mut ledger = Ledger::new();
        let mut input = expense("Food", 300.0, d(2024, 5, 1));
        input.description = "Lunch".into();
        input.accounting_type = AccountingType::None;
        let added = ledger.add_at(input.clone(), 1000).unwrap();
        assert_eq!(added.len(), 1);
        let tx = &added[0];
        assert_eq!(tx.id, 1000);
        assert_eq!(tx.category, "Food");
        assert_eq!(tx.amount, 300.0);
        assert_eq!(tx.payment_method, PaymentMethod::Cash);
        assert_eq!(tx.description, "Lunch");
        assert_eq!(tx.date, d(2024, 5, 1));
        assert!(tx.installment_info.is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn newer_submissions_come_first() {
        let mut ledger = Ledger::new();
        ledger.add_at(expense("Food", 1.0, d(2024, 5, 1)), 1).unwrap();
        ledger.add_at(expense("Rent", 2.0, d(2024, 5, 2)), 2).unwrap();
        let ids: Vec<i64> = ledger.all().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn rejects_missing_amount_and_category() {
        let mut ledger = Ledger::new();
        let mut input = expense("Food", 1.0, d(2024, 5, 1));
        input.amount = None;
        assert!(matches!(
            ledger.add_at(input, 1),
            Err(LedgerError::MissingRequiredField("amount"))
        ));

        let input = expense("", 10.0, d(2024, 5, 1));
        assert!(matches!(
            ledger.add_at(input, 2),
            Err(LedgerError::MissingRequiredField("category"))
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn rejects_non_positive_amounts() {
        let mut ledger = Ledger::new();
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = ledger.add_at(expense("Food", bad, d(2024, 5, 1)), 1);
            assert!(matches!(err, Err(LedgerError::InvalidAmount(_))));
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn credit_installments_expand_monthly() {
        let mut ledger = Ledger::new();
        ledger.add_at(expense("Old", 5.0, d(2023, 12, 1)), 1).unwrap();

        let mut input = expense("Gadgets", 1200.0, d(2024, 1, 15));
        input.payment_method = PaymentMethod::Credit;
        input.bank_name = "BDO".into();
        input.is_installment = true;
        input.installment_months = 3;
        input.description = "Phone".into();

        let added = ledger.add_at(input, 500).unwrap();
        assert_eq!(added.len(), 3);

        let dates: Vec<NaiveDate> = added.iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![d(2024, 1, 15), d(2024, 2, 15), d(2024, 3, 15)]);
        for (i, tx) in added.iter().enumerate() {
            let info = tx.installment_info.as_ref().unwrap();
            assert_eq!(tx.id, 500 + i as i64);
            assert!(info.is_installment);
            assert_eq!(info.current_month, i as u32 + 1);
            assert_eq!(info.total_months, 3);
            assert_eq!(info.original_amount, 1200.0);
            assert!((tx.amount - 400.0).abs() < 1e-9);
            assert_eq!(tx.description, format!("Phone (Installment {}/3)", i + 1));
        }
        let sum: f64 = added.iter().map(|t| t.amount).sum();
        assert!((sum - 1200.0).abs() < 1e-9);

        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.all()[3].category, "Old");
    }

    #[test]
    fn uneven_split_is_not_rebalanced() {
        let mut ledger = Ledger::new();
        let mut input = expense("Laptop", 100.0, d(2024, 1, 31));
        input.payment_method = PaymentMethod::Credit;
        input.is_installment = true;
        input.installment_months = 3;
        let added = ledger.add_at(input, 1).unwrap();
        assert!(added.iter().all(|t| t.amount == 100.0 / 3.0));
        assert_eq!(added[1].date, d(2024, 3, 2));
        assert_eq!(added[0].description, " (Installment 1/3)");
    }

    #[test]
    fn installment_plans_are_capped() {
        let mut ledger = Ledger::new();
        let mut input = expense("Appliance", 3600.0, d(2024, 1, 10));
        input.payment_method = PaymentMethod::Credit;
        input.is_installment = true;
        input.installment_months = MAX_INSTALLMENT_MONTHS + 1;
        assert!(matches!(
            ledger.add_at(input.clone(), 1),
            Err(LedgerError::InvalidInstallmentMonths(37))
        ));
        assert!(ledger.is_empty());

        input.installment_months = MAX_INSTALLMENT_MONTHS;
        let added = ledger.add_at(input, 1).unwrap();
        assert_eq!(added.len(), 36);
        assert_eq!(added[35].date, d(2026, 12, 10));
        assert_eq!(added[35].installment_info.as_ref().unwrap().current_month, 36);
    }

    #[test]
    fn installment_flag_without_credit_stays_single() {
        let mut ledger = Ledger::new();
        let mut input = expense("Food", 90.0, d(2024, 1, 15));
        input.payment_method = PaymentMethod::Debit;
        input.is_installment = true;
        input.installment_months = 3;
        let added = ledger.add_at(input, 1).unwrap();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].amount, 90.0);
        assert!(added[0].installment_info.is_none());
    }

    #[test]
    fn remove_keeps_order_of_others() {
        let mut ledger = Ledger::new();
        for id in 1..=4 {
            ledger.add_at(expense("Food", 1.0, d(2024, 5, 1)), id).unwrap();
        }
        let removed = ledger.remove(3).unwrap();
        assert_eq!(removed.id, 3);
        let ids: Vec<i64> = ledger.all().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 2, 1]);
        assert!(ledger.remove(99).is_none());
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn for_month_is_a_prefix_filter() {
        let mut ledger = Ledger::new();
        ledger.add_at(expense("A", 1.0, d(2024, 3, 15)), 1).unwrap();
        ledger.add_at(expense("B", 1.0, d(2024, 3, 1)), 2).unwrap();
        ledger.add_at(expense("C", 1.0, d(2024, 4, 1)), 3).unwrap();
        let march: Vec<&str> = ledger
            .for_month("2024-03")
            .iter()
            .map(|t| t.category.as_str())
            .collect();
        assert_eq!(march, vec!["B", "A"]);
        assert_eq!(ledger.for_month("2024").len(), 3);
        assert!(ledger.for_month("2025-01").is_empty());
    }

    #[test]
    fn clear_empties_ledger() {
        let mut ledger = Ledger::new();
        ledger.add_at(expense("Food", 1.0, d(2024, 5, 1)), 1).unwrap();
        ledger.clear();
        assert!(ledger.all().is_empty());
    }
}
