// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ModelError::UnknownToken {
                field: "type",
                value: s.to_string(),
                expected: "income|expense",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::CreditCard => "credit_card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "credit_card" => Ok(PaymentMethod::CreditCard),
            _ => Err(ModelError::UnknownToken {
                field: "paymentMethod",
                value: s.to_string(),
                expected: "cash|credit_card",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Paid,
    Pending,
    Canceled,
}

impl TransactionStatus {
    /// Business display/sort order: settled first, dropped last.
    pub fn rank(&self) -> u8 {
        match self {
            TransactionStatus::Paid => 0,
            TransactionStatus::Pending => 1,
            TransactionStatus::Canceled => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Paid => "paid",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(TransactionStatus::Paid),
            "pending" => Ok(TransactionStatus::Pending),
            "canceled" => Ok(TransactionStatus::Canceled),
            _ => Err(ModelError::UnknownToken {
                field: "status",
                value: s.to_string(),
                expected: "paid|pending|canceled",
            }),
        }
    }
}

/// A single income or expense entry as served by the API.
///
/// `amount` is always non-negative; the direction is carried by `type`.
/// `card_id` must be present exactly when the payment method is
/// `credit_card`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub category: String,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub card_id: Option<String>,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn validate(&self) -> Result<(), ModelError> {
        check_entry(
            &self.id,
            &self.amount,
            self.payment_method,
            self.card_id.as_deref(),
        )
    }
}

/// Payload for creating or replacing a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub date: DateTime<Utc>,
    pub description: String,
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub category: String,
    pub payment_method: PaymentMethod,
    pub card_id: Option<String>,
    pub status: TransactionStatus,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), ModelError> {
        check_entry(
            &self.description,
            &self.amount,
            self.payment_method,
            self.card_id.as_deref(),
        )
    }
}

fn check_entry(
    label: &str,
    amount: &Decimal,
    payment_method: PaymentMethod,
    card_id: Option<&str>,
) -> Result<(), ModelError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ModelError::NegativeAmount {
            entry: label.to_string(),
        });
    }
    match (payment_method, card_id) {
        (PaymentMethod::CreditCard, None) => Err(ModelError::MissingCard {
            entry: label.to_string(),
        }),
        (PaymentMethod::Cash, Some(_)) => Err(ModelError::UnexpectedCard {
            entry: label.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Validate a fetched snapshot before it is handed to summary/query code.
pub fn validate_snapshot(transactions: &[Transaction]) -> Result<(), ModelError> {
    for t in transactions {
        t.validate()?;
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub bank: String,
    pub limit: Decimal,
    pub closing_day: u32,
    pub due_day: u32,
}

impl Card {
    pub fn validate(&self) -> Result<(), ModelError> {
        if !(1..=31).contains(&self.closing_day) {
            return Err(ModelError::DayOutOfRange {
                card: self.name.clone(),
                field: "closingDay",
            });
        }
        if !(1..=31).contains(&self.due_day) {
            return Err(ModelError::DayOutOfRange {
                card: self.name.clone(),
                field: "dueDay",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub name: String,
    pub bank: String,
    pub limit: Decimal,
    pub closing_day: u32,
    pub due_day: u32,
}

/// Blueprint for the monthly bill generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringTemplate {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecurringTemplate {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("'{entry}': amount must not be negative")]
    NegativeAmount { entry: String },
    #[error("'{entry}': credit card payment requires a card reference")]
    MissingCard { entry: String },
    #[error("'{entry}': card reference is only valid for credit card payments")]
    UnexpectedCard { entry: String },
    #[error("card '{card}': {field} must be between 1 and 31")]
    DayOutOfRange { card: String, field: &'static str },
    #[error("invalid {field} '{value}', expected {expected}")]
    UnknownToken {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}
