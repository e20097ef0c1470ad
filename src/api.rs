// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Operation, User};

const UA: &str = concat!(
    "outlay/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/outlay)"
);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to construct HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request to {endpoint} failed")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("service rejected {endpoint}: {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("could not decode {endpoint} response")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Client for the remote persistence service. Every endpoint is a GET with
/// query parameters; every call returns success or failure as an explicit
/// `Result` variant.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()
            .map_err(ApiError::Client)?;
        Ok(ApiClient {
            http,
            base_url: base_url.into(),
        })
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), endpoint);
        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }
        resp.json::<T>()
            .map_err(|source| ApiError::Decode { endpoint, source })
    }

    pub fn user_by_login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.get_json(
            "/GetByLoginAndPassword",
            &[("login", email.to_string()), ("password", password.to_string())],
        )
    }

    pub fn login_exists(&self, email: &str) -> Result<bool, ApiError> {
        self.get_json("/FindLoginInDB", &[("login", email.to_string())])
    }

    pub fn register_user(
        &self,
        email: &str,
        password: &str,
        name: &str,
        surname: &str,
    ) -> Result<User, ApiError> {
        self.get_json(
            "/RegistrateUser",
            &[
                ("login", email.to_string()),
                ("password", password.to_string()),
                ("name", name.to_string()),
                ("surname", surname.to_string()),
            ],
        )
    }

    pub fn change_name(&self, id: i64, name: &str, surname: &str) -> Result<bool, ApiError> {
        self.get_json(
            "/ChangeNameSurname",
            &[
                ("id", id.to_string()),
                ("name", name.to_string()),
                ("surname", surname.to_string()),
            ],
        )
    }

    pub fn change_login(&self, id: i64, email: &str) -> Result<bool, ApiError> {
        self.get_json(
            "/ChangeLogin",
            &[("id", id.to_string()), ("login", email.to_string())],
        )
    }

    pub fn change_password(&self, id: i64, password: &str) -> Result<bool, ApiError> {
        self.get_json(
            "/ChangePassword",
            &[("id", id.to_string()), ("password", password.to_string())],
        )
    }

    /// The user's full operation history.
    pub fn operations(&self, user_id: i64) -> Result<Vec<Operation>, ApiError> {
        self.get_json("/GetOperations", &[("UserId", user_id.to_string())])
    }

    /// Persists an operation and returns the id the service assigned.
    pub fn add_operation(
        &self,
        amount: i64,
        category: &str,
        date: NaiveDate,
        user_id: i64,
    ) -> Result<i64, ApiError> {
        self.get_json(
            "/AddOperation",
            &[
                ("value", amount.to_string()),
                ("category", category.to_string()),
                ("date", date.format("%Y-%m-%d").to_string()),
                ("id", user_id.to_string()),
            ],
        )
    }

    pub fn delete_operation(&self, id: i64) -> Result<bool, ApiError> {
        self.get_json("/DeleteOperation", &[("id", id.to_string())])
    }
}
