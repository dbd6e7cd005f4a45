//! Finance page route: ledger summary cards plus the transaction table.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::domain::Transaction;
use crate::state::AppState;

#[derive(Serialize)]
pub struct LedgerSummary {
    pub revenue: f64,
    pub expenses: f64,
    pub net: f64,
}

#[derive(Serialize)]
pub struct FinanceResponse {
    pub summary: LedgerSummary,
    pub transactions: Vec<Transaction>,
}

/// `GET /api/finance` — summary totals and transactions, newest first.
pub async fn ledger(State(state): State<AppState>) -> Json<FinanceResponse> {
    let store = state.finance.read().await;
    let summary = summarize(&store.transactions);

    let mut transactions = store.transactions.clone();
    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    Json(FinanceResponse { summary, transactions })
}

pub(crate) fn summarize(transactions: &[Transaction]) -> LedgerSummary {
    let revenue: f64 = transactions.iter().map(|t| t.amount.max(0.0)).sum();
    let expenses: f64 = transactions.iter().map(|t| (-t.amount).max(0.0)).sum();
    LedgerSummary { revenue, expenses, net: revenue - expenses }
}

#[cfg(test)]
#[path = "finance_test.rs"]
mod tests;
