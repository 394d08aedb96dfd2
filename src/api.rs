// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::blocking::RequestBuilder;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::Config;
use crate::models::{
    Card, Category, NewCard, NewCategory, NewRecurringTemplate, NewTransaction, RecurringTemplate,
    Transaction, TransactionType,
};
use crate::utils::http_client;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not decode server response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// True for responses that indicate the endpoint itself is missing,
    /// as opposed to a bad request against a supported one.
    pub fn is_unsupported_endpoint(&self) -> bool {
        matches!(self, ApiError::Status { status: 404 | 405, .. })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Blocking client for the BenyFinance REST API.
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            base_url: cfg.api_url.trim_end_matches('/').to_string(),
            token: cfg.token.clone(),
            http: http_client()?,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send, map non-2xx to a typed error, and hand back the raw body.
    fn body(&self, req: RequestBuilder) -> Result<String, ApiError> {
        let resp = req.send()?;
        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            let message = if text.trim().is_empty() {
                "Something went wrong".to_string()
            } else {
                text
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(text)
    }

    fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let text = self.body(req)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn fetch_or_default<T: DeserializeOwned + Default>(
        &self,
        req: RequestBuilder,
    ) -> Result<T, ApiError> {
        let text = self.body(req)?;
        if text.trim().is_empty() {
            return Ok(T::default());
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn no_content(&self, req: RequestBuilder) -> Result<(), ApiError> {
        self.body(req).map(|_| ())
    }

    // Auth

    pub fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.fetch(
            self.request(Method::POST, "/auth/login")
                .json(&json!({ "email": email, "password": password })),
        )
    }

    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.fetch(
            self.request(Method::POST, "/auth/register")
                .json(&json!({ "name": name, "email": email, "password": password })),
        )
    }

    // Transactions

    pub fn get_transactions(
        &self,
        month: Option<u32>,
        year: Option<i32>,
        kind: Option<TransactionType>,
    ) -> Result<Vec<Transaction>, ApiError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(m) = month {
            params.push(("month", m.to_string()));
        }
        if let Some(y) = year {
            params.push(("year", y.to_string()));
        }
        if let Some(k) = kind {
            params.push(("type", k.as_str().to_string()));
        }
        self.fetch(self.request(Method::GET, "/transactions").query(&params))
    }

    pub fn add_transaction(&self, tx: &NewTransaction) -> Result<Transaction, ApiError> {
        self.fetch(self.request(Method::POST, "/transactions").json(tx))
    }

    pub fn update_transaction(&self, id: &str, tx: &NewTransaction) -> Result<(), ApiError> {
        self.no_content(
            self.request(Method::PUT, &format!("/transactions/{}", id))
                .json(tx),
        )
    }

    pub fn delete_transaction(&self, id: &str) -> Result<(), ApiError> {
        self.no_content(self.request(Method::DELETE, &format!("/transactions/{}", id)))
    }

    pub fn generate_monthly(&self, month: u32, year: i32) -> Result<Vec<Transaction>, ApiError> {
        self.fetch_or_default(
            self.request(Method::POST, "/transactions/generate-monthly")
                .json(&json!({ "month": month, "year": year })),
        )
    }

    // Categories

    pub fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.fetch(self.request(Method::GET, "/categories"))
    }

    pub fn add_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.fetch(self.request(Method::POST, "/categories").json(category))
    }

    /// Best-effort: the backing endpoint is not confirmed on every server
    /// deployment; callers should treat 404/405 as "unsupported".
    pub fn update_category(&self, id: &str, category: &NewCategory) -> Result<(), ApiError> {
        self.no_content(
            self.request(Method::PUT, &format!("/categories/{}", id))
                .json(category),
        )
    }

    pub fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        self.no_content(self.request(Method::DELETE, &format!("/categories/{}", id)))
    }

    // Cards

    pub fn get_cards(&self) -> Result<Vec<Card>, ApiError> {
        self.fetch(self.request(Method::GET, "/cards"))
    }

    pub fn add_card(&self, card: &NewCard) -> Result<Card, ApiError> {
        self.fetch(self.request(Method::POST, "/cards").json(card))
    }

    pub fn delete_card(&self, id: &str) -> Result<(), ApiError> {
        self.no_content(self.request(Method::DELETE, &format!("/cards/{}", id)))
    }

    // Recurring templates

    pub fn get_recurring_templates(&self) -> Result<Vec<RecurringTemplate>, ApiError> {
        self.fetch(self.request(Method::GET, "/recurring-templates"))
    }

    pub fn add_recurring_template(
        &self,
        template: &NewRecurringTemplate,
    ) -> Result<RecurringTemplate, ApiError> {
        self.fetch(
            self.request(Method::POST, "/recurring-templates")
                .json(template),
        )
    }

    pub fn delete_recurring_template(&self, id: &str) -> Result<(), ApiError> {
        self.no_content(self.request(Method::DELETE, &format!("/recurring-templates/{}", id)))
    }
}
