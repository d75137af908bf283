// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use fintrack::api::DataSource;
use fintrack::models::{
    Expense, ExpenseCategory, Goal, Income, IncomeSource, NewExpense, NewGoal, NewIncome,
};
use fintrack::{Error, Result};
use rust_decimal::Decimal;
use std::cell::{Cell, RefCell};

/// 1e27, large but well inside `Decimal`'s range.
pub const HUGE: &str = "1000000000000000000000000000";

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

/// `YYYY-MM-DD` at noon UTC, or a full RFC 3339 timestamp.
pub fn at(s: &str) -> DateTime<Utc> {
    if s.len() == 10 {
        format!("{}T12:00:00Z", s).parse().unwrap()
    } else {
        s.parse().unwrap()
    }
}

pub fn expense(id: &str, amount: &str, category: ExpenseCategory, date: &str) -> Expense {
    Expense {
        id: id.into(),
        amount: dec(amount),
        currency: "USD".into(),
        description: format!("expense {}", id),
        category,
        date: at(date),
        payment_method: "Efectivo".into(),
    }
}

pub fn income(id: &str, amount: &str, source: IncomeSource, date: &str) -> Income {
    Income {
        id: id.into(),
        amount: dec(amount),
        currency: "USD".into(),
        description: format!("income {}", id),
        source,
        date: at(date),
        payment_method: "Transferencia".into(),
    }
}

pub fn goal(id: &str, name: &str, target: &str, current: &str) -> Goal {
    Goal {
        id: id.into(),
        name: name.into(),
        target_amount: dec(target),
        current_amount: dec(current),
        deadline: at("2026-12-31"),
        category: "Ahorro".into(),
    }
}

/// In-memory ledger with switchable failures for the write paths.
#[derive(Default)]
pub struct MemoryLedger {
    pub expenses: RefCell<Vec<Expense>>,
    pub incomes: RefCell<Vec<Income>>,
    pub goals: RefCell<Vec<Goal>>,
    next_id: Cell<u32>,
    pub offline: Cell<bool>,
    /// Every route answers 404, as with a wrong `api_url` path.
    pub missing_routes: Cell<bool>,
    pub fail_create_expense: Cell<bool>,
    /// Successful `update_goal` calls allowed before every later one fails.
    pub goal_updates_allowed: Cell<Option<usize>>,
    pub goal_updates: Cell<usize>,
}

impl MemoryLedger {
    pub fn new(expenses: Vec<Expense>, incomes: Vec<Income>, goals: Vec<Goal>) -> Self {
        MemoryLedger {
            expenses: RefCell::new(expenses),
            incomes: RefCell::new(incomes),
            goals: RefCell::new(goals),
            ..Default::default()
        }
    }

    fn fresh_id(&self) -> String {
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        format!("new-{}", n)
    }

    fn reachable(&self) -> Result<()> {
        if self.offline.get() {
            return Err(Error::DataFetch("connection refused".into()));
        }
        if self.missing_routes.get() {
            return Err(Error::NotFound("/api route".into()));
        }
        Ok(())
    }

    pub fn goal(&self, id: &str) -> Goal {
        self.goals
            .borrow()
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .unwrap()
    }
}

impl DataSource for MemoryLedger {
    fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.reachable()?;
        Ok(self.expenses.borrow().clone())
    }

    fn list_incomes(&self) -> Result<Vec<Income>> {
        self.reachable()?;
        Ok(self.incomes.borrow().clone())
    }

    fn list_goals(&self) -> Result<Vec<Goal>> {
        self.reachable()?;
        Ok(self.goals.borrow().clone())
    }

    fn create_expense(&self, expense: &NewExpense) -> Result<Expense> {
        self.reachable()?;
        if self.fail_create_expense.get() {
            return Err(Error::DataFetch("POST /api/expenses returned 500".into()));
        }
        let created = expense.clone().with_id(self.fresh_id());
        self.expenses.borrow_mut().insert(0, created.clone());
        Ok(created)
    }

    fn create_income(&self, income: &NewIncome) -> Result<Income> {
        self.reachable()?;
        let created = income.clone().with_id(self.fresh_id());
        self.incomes.borrow_mut().insert(0, created.clone());
        Ok(created)
    }

    fn create_goal(&self, goal: &NewGoal) -> Result<Goal> {
        self.reachable()?;
        let created = goal.clone().with_id(self.fresh_id());
        self.goals.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_expense(&self, id: &str, expense: &NewExpense) -> Result<Expense> {
        self.reachable()?;
        let mut v = self.expenses.borrow_mut();
        let slot = v
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("expenses/{}", id)))?;
        *slot = expense.clone().with_id(id);
        Ok(slot.clone())
    }

    fn update_income(&self, id: &str, income: &NewIncome) -> Result<Income> {
        self.reachable()?;
        let mut v = self.incomes.borrow_mut();
        let slot = v
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::NotFound(format!("incomes/{}", id)))?;
        *slot = income.clone().with_id(id);
        Ok(slot.clone())
    }

    fn update_goal(&self, id: &str, goal: &Goal) -> Result<Goal> {
        self.reachable()?;
        let calls = self.goal_updates.get();
        if let Some(allowed) = self.goal_updates_allowed.get() {
            if calls >= allowed {
                return Err(Error::DataFetch("PUT /api/goals timed out".into()));
            }
        }
        self.goal_updates.set(calls + 1);
        let mut goals = self.goals.borrow_mut();
        let slot = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| Error::NotFound(format!("goals/{}", id)))?;
        *slot = Goal {
            id: id.to_string(),
            ..goal.clone()
        };
        Ok(slot.clone())
    }

    fn delete_expense(&self, id: &str) -> Result<()> {
        self.reachable()?;
        let mut v = self.expenses.borrow_mut();
        let before = v.len();
        v.retain(|e| e.id != id);
        if v.len() == before {
            return Err(Error::NotFound(format!("expenses/{}", id)));
        }
        Ok(())
    }

    fn delete_income(&self, id: &str) -> Result<()> {
        self.reachable()?;
        let mut v = self.incomes.borrow_mut();
        let before = v.len();
        v.retain(|i| i.id != id);
        if v.len() == before {
            return Err(Error::NotFound(format!("incomes/{}", id)));
        }
        Ok(())
    }

    fn delete_goal(&self, id: &str) -> Result<()> {
        self.reachable()?;
        let mut v = self.goals.borrow_mut();
        let before = v.len();
        v.retain(|g| g.id != id);
        if v.len() == before {
            return Err(Error::NotFound(format!("goals/{}", id)));
        }
        Ok(())
    }
}
