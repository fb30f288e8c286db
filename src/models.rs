// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Substring an email must contain to be accepted at sign-in.
pub const GMAIL_SUFFIX: &str = "@gmail.com";

/// Longest installment plan a credit purchase can be split into.
pub const MAX_INSTALLMENT_MONTHS: u32 = 36;

/// Card issuers offered as suggestions when recording a credit purchase.
pub const SUGGESTED_BANKS: &[&str] = &[
    "UnionBank",
    "BDO (Banco de Oro)",
    "BPI (Bank of the Philippine Islands)",
    "RCBC (Rizal Commercial Banking Corporation)",
    "EastWest Bank",
    "Metrobank",
    "Security Bank",
    "PNB (Philippine National Bank)",
    "Landbank",
    "China Bank",
    "UCPB (United Coconut Planters Bank)",
    "Maybank",
    "HSBC Philippines",
    "Citibank Philippines",
];

/// Matches a suggested bank by full name or by the short name before " (".
pub fn is_suggested_bank(name: &str) -> bool {
    SUGGESTED_BANKS.iter().any(|bank| {
        *bank == name || bank.split(" (").next().is_some_and(|short| short == name)
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub login_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionType {
    Income,
    Expense,
    Savings,
    SavingsWithdrawal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Debit,
    Credit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountingType {
    #[default]
    None,
    Asset,
    Liability,
}

/// Attached to every record produced by splitting a credit purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentInfo {
    pub is_installment: bool,
    pub current_month: u32,
    pub total_months: u32,
    pub original_amount: f64,
}

impl InstallmentInfo {
    /// Installments still owed, counting the current one.
    pub fn remaining_months(&self) -> u32 {
        self.total_months
            .saturating_add(1)
            .saturating_sub(self.current_month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub r#type: TransactionType,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_date: Option<NaiveDate>,
    pub date: NaiveDate,
    #[serde(default)]
    pub accounting_type: AccountingType,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_info: Option<InstallmentInfo>,
}

impl Transaction {
    pub fn is_credit_expense(&self) -> bool {
        self.r#type == TransactionType::Expense && self.payment_method == PaymentMethod::Credit
    }
}

/// What the entry form collects before validation and expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    pub r#type: TransactionType,
    pub category: String,
    pub amount: Option<f64>,
    pub payment_method: PaymentMethod,
    pub bank_name: String,
    pub statement_date: Option<NaiveDate>,
    pub date: NaiveDate,
    pub accounting_type: AccountingType,
    pub description: String,
    pub is_installment: bool,
    pub installment_months: u32,
}

impl TransactionInput {
    /// A blank expense form dated `date`, mirroring the form's reset state.
    pub fn new(r#type: TransactionType, date: NaiveDate) -> Self {
        Self {
            r#type,
            category: String::new(),
            amount: None,
            payment_method: PaymentMethod::default(),
            bank_name: String::new(),
            statement_date: None,
            date,
            accounting_type: AccountingType::default(),
            description: String::new(),
            is_installment: false,
            installment_months: 1,
        }
    }

    /// True when this submission must be split into monthly records.
    pub fn expands_to_installments(&self) -> bool {
        self.payment_method == PaymentMethod::Credit
            && self.is_installment
            && self.installment_months > 1
    }
}

// Parsing and display use the same spellings as the persisted JSON.

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Savings => "savings",
            TransactionType::SavingsWithdrawal => "savings-withdrawal",
        }
    }
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Debit => "debit",
            PaymentMethod::Credit => "credit",
        }
    }
}

impl AccountingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountingType::None => "none",
            AccountingType::Asset => "asset",
            AccountingType::Liability => "liability",
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            "savings" => Ok(TransactionType::Savings),
            "savings-withdrawal" => Ok(TransactionType::SavingsWithdrawal),
            other => Err(format!(
                "Invalid type '{}', expected income|expense|savings|savings-withdrawal",
                other
            )),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "debit" => Ok(PaymentMethod::Debit),
            "credit" => Ok(PaymentMethod::Credit),
            other => Err(format!(
                "Invalid payment method '{}', expected cash|debit|credit",
                other
            )),
        }
    }
}

impl FromStr for AccountingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(AccountingType::None),
            "asset" => Ok(AccountingType::Asset),
            "liability" => Ok(AccountingType::Liability),
            other => Err(format!(
                "Invalid accounting type '{}', expected none|asset|liability",
                other
            )),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AccountingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
