use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::auth::{AuthenticatedUser, check_role};
use crate::domain::activity_log::{LogAction, NewActivityLog};
use crate::domain::finance::{
    FinanceReport, IncomingTransaction, LedgerBreakdownRow, LedgerSummary, OutgoingTransaction,
};
use crate::forms::finance::{AddExpenseForm, AddIncomingForm};
use crate::repository::{
    ActivityLogWriter, DateRange, FinanceReader, FinanceWriter, IncomingListQuery,
    OutgoingListQuery,
};
use crate::services::{ServiceError, ServiceResult, record_activity};
use crate::{ROLE_ADMIN, domain::finance::ExpenseCategory};

/// Optional date window accepted by the ledger listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LedgerQuery {
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    /// Expense category filter; only meaningful for the outgoing ledger.
    pub category: Option<ExpenseCategory>,
}

impl LedgerQuery {
    fn range(&self) -> Option<DateRange> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }
}

/// Lists cash inflows, optionally restricted to a date window.
pub fn list_incoming<R>(repo: &R, query: LedgerQuery) -> ServiceResult<Vec<IncomingTransaction>>
where
    R: FinanceReader + ?Sized,
{
    let mut list_query = IncomingListQuery::new();
    if let Some(range) = query.range() {
        list_query = list_query.range(range);
    }

    repo.list_incoming(list_query).map_err(ServiceError::from)
}

/// Records a cash inflow.
pub fn add_incoming<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    form: AddIncomingForm,
    ip: Option<&str>,
) -> ServiceResult<IncomingTransaction>
where
    R: FinanceWriter + ActivityLogWriter + ?Sized,
{
    let tx = form
        .into_new_incoming()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let tx = repo.create_incoming(&tx)?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Create, "finance")
            .with_entity_id(tx.id)
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(tx)
}

/// Lists expenses. Admin only.
pub fn list_outgoing<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    query: LedgerQuery,
) -> ServiceResult<Vec<OutgoingTransaction>>
where
    R: FinanceReader + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let mut list_query = OutgoingListQuery::new();
    if let Some(range) = query.range() {
        list_query = list_query.range(range);
    }
    if let Some(category) = query.category {
        list_query = list_query.category(category);
    }

    repo.list_outgoing(list_query).map_err(ServiceError::from)
}

/// Records an expense. Admin only.
pub fn add_expense<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    form: AddExpenseForm,
    ip: Option<&str>,
) -> ServiceResult<OutgoingTransaction>
where
    R: FinanceWriter + ActivityLogWriter + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let tx = form
        .into_new_outgoing()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let tx = repo.create_outgoing(&tx)?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Create, "finance")
            .with_entity_id(tx.id)
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(tx)
}

/// Builds the finance report: per-source and per-category breakdowns plus
/// totals and net profit, over an optional date window. Admin only.
pub fn build_report<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    query: LedgerQuery,
) -> ServiceResult<FinanceReport>
where
    R: FinanceReader + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let range = query.range();

    let incoming_rows = repo.sum_incoming_by_source(range)?;
    let outgoing_rows = repo.sum_outgoing_by_category(range)?;
    let total_incoming = repo.total_incoming(range)?;
    let total_outgoing = repo.total_outgoing(range)?;

    Ok(FinanceReport {
        incoming: summarize(incoming_rows, total_incoming),
        outgoing: summarize(outgoing_rows, total_outgoing),
        net_profit_cents: total_incoming - total_outgoing,
    })
}

fn summarize(rows: Vec<(String, i64)>, total_cents: i64) -> LedgerSummary {
    LedgerSummary {
        breakdown: rows
            .into_iter()
            .map(|(group, total_cents)| LedgerBreakdownRow { group, total_cents })
            .collect(),
        total_cents,
    }
}
