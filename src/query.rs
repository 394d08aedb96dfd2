// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use crate::models::{
    Category, ModelError, PaymentMethod, Transaction, TransactionStatus, TransactionType,
};
use crate::summary::CategoryTotal;

/// How many categories the "top categories" metric surfaces.
pub const TOP_CATEGORIES: usize = 5;

/// Optional, AND-combined predicates. An unset field matches everything.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub search: Option<String>,
    pub r#type: Option<TransactionType>,
    pub category: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub status: Option<TransactionStatus>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub amount_min: Option<Decimal>,
    pub amount_max: Option<Decimal>,
}

impl FilterSpec {
    pub fn matches(&self, t: &Transaction) -> bool {
        if let Some(needle) = &self.search {
            if !t
                .description
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(kind) = self.r#type {
            if t.r#type != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &t.category != category {
                return false;
            }
        }
        if let Some(method) = self.payment_method {
            if t.payment_method != method {
                return false;
            }
        }
        if let Some(status) = self.status {
            if t.status != status {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if t.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if t.date > to {
                return false;
            }
        }
        if let Some(min) = self.amount_min {
            if t.amount < min {
                return false;
            }
        }
        if let Some(max) = self.amount_max {
            if t.amount > max {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Date,
    Amount,
    Status,
    PaymentMethod,
    Description,
    Category,
}

impl FromStr for SortKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(SortKey::Date),
            "amount" => Ok(SortKey::Amount),
            "status" => Ok(SortKey::Status),
            "payment" | "payment_method" => Ok(SortKey::PaymentMethod),
            "description" => Ok(SortKey::Description),
            "category" => Ok(SortKey::Category),
            _ => Err(ModelError::UnknownToken {
                field: "sort",
                value: s.to_string(),
                expected: "date|amount|status|payment|description|category",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ModelError::UnknownToken {
                field: "dir",
                value: s.to_string(),
                expected: "asc|desc",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            direction: SortDirection::Desc,
        }
    }
}

/// 1-based page window over the filtered, sorted set.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: TransactionStatus,
    pub count: usize,
}

/// One page of results plus metrics over the whole filtered set.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub rows: Vec<Transaction>,
    pub total_count: usize,
    pub total_pages: usize,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_total: Decimal,
    pub counts_by_category: Vec<CategoryCount>,
    pub top_categories: Vec<String>,
    pub expense_by_category: Vec<CategoryTotal>,
    pub status_counts: Vec<StatusCount>,
}

/// Filter, sort, and page a transaction snapshot.
///
/// All metrics are computed over the filtered set before pagination, and
/// `expense_by_category` is left-joined against `categories` so every known
/// category appears even with a zero total. Pure and idempotent; reruns on
/// identical input return identical results.
pub fn run(
    transactions: &[Transaction],
    categories: &[Category],
    filters: &FilterSpec,
    sort: &SortSpec,
    page: &PageSpec,
) -> QueryResult {
    let mut filtered: Vec<&Transaction> =
        transactions.iter().filter(|t| filters.matches(t)).collect();

    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut counts_by_category: Vec<CategoryCount> = Vec::new();
    let mut status_tally = [0usize; 3];
    for t in &filtered {
        match t.r#type {
            TransactionType::Income => total_income += t.amount,
            TransactionType::Expense => total_expense += t.amount,
        }
        match counts_by_category
            .iter_mut()
            .find(|c| c.category == t.category)
        {
            Some(entry) => entry.count += 1,
            None => counts_by_category.push(CategoryCount {
                category: t.category.clone(),
                count: 1,
            }),
        }
        status_tally[t.status.rank() as usize] += 1;
    }

    // Stable sort keeps first-encountered order between equal counts.
    let mut top: Vec<&CategoryCount> = counts_by_category.iter().collect();
    top.sort_by(|a, b| b.count.cmp(&a.count));
    let top_categories: Vec<String> = top
        .into_iter()
        .take(TOP_CATEGORIES)
        .map(|c| c.category.clone())
        .collect();

    let expense_by_category: Vec<CategoryTotal> = categories
        .iter()
        .map(|c| CategoryTotal {
            category: c.name.clone(),
            total: filtered
                .iter()
                .filter(|t| t.r#type == TransactionType::Expense && t.category == c.name)
                .map(|t| t.amount)
                .sum(),
        })
        .collect();

    let status_counts: Vec<StatusCount> = [
        TransactionStatus::Paid,
        TransactionStatus::Pending,
        TransactionStatus::Canceled,
    ]
    .into_iter()
    .filter_map(|status| {
        let count = status_tally[status.rank() as usize];
        (count > 0).then_some(StatusCount { status, count })
    })
    .collect();

    filtered.sort_by(|a, b| {
        let ord = match sort.key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.cmp(&b.amount),
            SortKey::Status => a.status.rank().cmp(&b.status.rank()),
            SortKey::PaymentMethod => {
                natural_cmp(a.payment_method.as_str(), b.payment_method.as_str())
            }
            SortKey::Description => natural_cmp(&a.description, &b.description),
            SortKey::Category => natural_cmp(&a.category, &b.category),
        };
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    let total_count = filtered.len();
    let total_pages = if page.page_size == 0 {
        1
    } else {
        (total_count.div_ceil(page.page_size)).max(1)
    };
    let start = page.page.max(1).saturating_sub(1).saturating_mul(page.page_size);
    let rows: Vec<Transaction> = filtered
        .into_iter()
        .skip(start)
        .take(page.page_size)
        .cloned()
        .collect();

    QueryResult {
        rows,
        total_count,
        total_pages,
        total_income,
        total_expense,
        net_total: total_income - total_expense,
        counts_by_category,
        top_categories,
        expense_by_category,
        status_counts,
    }
}

/// Case-insensitive, numeric-aware string ordering: digit runs compare by
/// value, so "Item 2" sorts before "Item 10".
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let mut ia = a.chars().peekable();
    let mut ib = b.chars().peekable();
    loop {
        match (ia.peek().copied(), ib.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = digit_run(&mut ia);
                    let run_b = digit_run(&mut ib);
                    let va = run_a.trim_start_matches('0');
                    let vb = run_b.trim_start_matches('0');
                    let ord = va.len().cmp(&vb.len()).then_with(|| va.cmp(vb));
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    // Same value: fewer leading zeros first.
                    let ord = run_a.len().cmp(&run_b.len());
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = x.cmp(&y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    ia.next();
                    ib.next();
                }
            }
        }
    }
}

fn digit_run(it: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = it.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        it.next();
    }
    run
}
