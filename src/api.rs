// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Access to the ledger REST API (`/api/expenses`, `/api/incomes`, `/api/goals`).

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::models::{Expense, Goal, Income, NewExpense, NewGoal, NewIncome, Snapshot};
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Read and write access to the ledger. The engine never talks to this
/// directly; callers fetch a [`Snapshot`] and hand it over.
pub trait DataSource {
    fn list_expenses(&self) -> Result<Vec<Expense>>;
    fn list_incomes(&self) -> Result<Vec<Income>>;
    fn list_goals(&self) -> Result<Vec<Goal>>;

    fn create_expense(&self, expense: &NewExpense) -> Result<Expense>;
    fn create_income(&self, income: &NewIncome) -> Result<Income>;
    fn create_goal(&self, goal: &NewGoal) -> Result<Goal>;
    fn update_expense(&self, id: &str, expense: &NewExpense) -> Result<Expense>;
    fn update_income(&self, id: &str, income: &NewIncome) -> Result<Income>;
    fn update_goal(&self, id: &str, goal: &Goal) -> Result<Goal>;

    fn delete_expense(&self, id: &str) -> Result<()>;
    fn delete_income(&self, id: &str) -> Result<()>;
    fn delete_goal(&self, id: &str) -> Result<()>;
}

pub fn load_snapshot<D: DataSource + ?Sized>(source: &D) -> Result<Snapshot> {
    Ok(Snapshot {
        expenses: source.list_expenses()?,
        incomes: source.list_incomes()?,
        goals: source.list_goals()?,
    })
}

pub fn find_expense<D: DataSource + ?Sized>(source: &D, id: &str) -> Result<Expense> {
    source
        .list_expenses()?
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| Error::NotFound(format!("expense '{}'", id)))
}

pub fn find_income<D: DataSource + ?Sized>(source: &D, id: &str) -> Result<Income> {
    source
        .list_incomes()?
        .into_iter()
        .find(|i| i.id == id)
        .ok_or_else(|| Error::NotFound(format!("income '{}'", id)))
}

pub fn find_goal<D: DataSource + ?Sized>(source: &D, id: &str) -> Result<Goal> {
    source
        .list_goals()?
        .into_iter()
        .find(|g| g.id == id)
        .ok_or_else(|| Error::NotFound(format!("goal '{}'", id)))
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

pub struct ApiClient {
    base: String,
    http: Client,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Ok(ApiClient {
            base: settings.api_url.trim_end_matches('/').to_string(),
            http: crate::utils::http_client(settings)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base, path)
    }

    fn send<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "ledger request");
        let mut req = self.http.request(method.clone(), &url);
        if let Some(b) = body {
            req = req.json(b);
        }
        let resp = req
            .send()
            .map_err(|e| Error::DataFetch(format!("{} {}: {}", method, url, e)))?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let detail = resp
            .json::<ApiErrorBody>()
            .map(|b| b.error)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("error").to_string());
        tracing::warn!(%method, %url, %status, %detail, "ledger request failed");
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("{}: {}", path, detail)));
        }
        Err(Error::DataFetch(format!("{} {} returned {}: {}", method, url, status, detail)))
    }

    fn decode<T: DeserializeOwned>(resp: Response, path: &str) -> Result<T> {
        resp.json::<T>()
            .map_err(|e| Error::DataFetch(format!("unreadable response from {}: {}", path, e)))
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.send::<()>(Method::GET, path, None)?;
        Self::decode(resp, path)
    }

    fn write<B: Serialize, T: DeserializeOwned>(&self, method: Method, path: &str, body: &B) -> Result<T> {
        let resp = self.send(method, path, Some(body))?;
        Self::decode(resp, path)
    }

    fn remove(&self, path: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, path, None)?;
        Ok(())
    }
}

impl DataSource for ApiClient {
    fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.get("expenses")
    }

    fn list_incomes(&self) -> Result<Vec<Income>> {
        self.get("incomes")
    }

    fn list_goals(&self) -> Result<Vec<Goal>> {
        self.get("goals")
    }

    fn create_expense(&self, expense: &NewExpense) -> Result<Expense> {
        self.write(Method::POST, "expenses", expense)
    }

    fn create_income(&self, income: &NewIncome) -> Result<Income> {
        self.write(Method::POST, "incomes", income)
    }

    fn create_goal(&self, goal: &NewGoal) -> Result<Goal> {
        self.write(Method::POST, "goals", goal)
    }

    fn update_expense(&self, id: &str, expense: &NewExpense) -> Result<Expense> {
        self.write(Method::PUT, &format!("expenses/{}", id), expense)
    }

    fn update_income(&self, id: &str, income: &NewIncome) -> Result<Income> {
        self.write(Method::PUT, &format!("incomes/{}", id), income)
    }

    fn update_goal(&self, id: &str, goal: &Goal) -> Result<Goal> {
        self.write(Method::PUT, &format!("goals/{}", id), goal)
    }

    fn delete_expense(&self, id: &str) -> Result<()> {
        self.remove(&format!("expenses/{}", id))
    }

    fn delete_income(&self, id: &str) -> Result<()> {
        self.remove(&format!("incomes/{}", id))
    }

    fn delete_goal(&self, id: &str) -> Result<()> {
        self.remove(&format!("goals/{}", id))
    }
}
