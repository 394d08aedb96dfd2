// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::{
    NewTransaction, PaymentMethod, RecurringTemplate, TransactionStatus, TransactionType,
};
use crate::utils::roll_month;

/// Day of month every generated bill lands on.
pub const GENERATION_DAY: u32 = 10;

/// Expand recurring templates into the pending entries a "generate monthly"
/// call creates for the given month.
///
/// Matches the deployed generator exactly: every entry is a pending cash
/// expense dated the 10th of the month, and the amount is 0.00 no matter
/// what the template stores — the user fills the real value in when the
/// bill arrives.
pub fn materialize(
    templates: &[RecurringTemplate],
    month: u32,
    year: i32,
) -> Vec<NewTransaction> {
    let (y, m) = roll_month(year, month as i32);
    let date = Utc
        .with_ymd_and_hms(y, m, GENERATION_DAY, 0, 0, 0)
        .single()
        .expect("every month has a 10th day");
    templates
        .iter()
        .map(|template| NewTransaction {
            date,
            description: template.description.clone(),
            amount: Decimal::ZERO,
            r#type: TransactionType::Expense,
            category: template.category.clone(),
            payment_method: PaymentMethod::Cash,
            card_id: None,
            status: TransactionStatus::Pending,
        })
        .collect()
}
