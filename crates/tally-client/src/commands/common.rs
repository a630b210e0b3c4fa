use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::contracts::types::ScopeDescriptor;
use crate::setup::{SetupContext, ensure_initialized, ensure_initialized_at};
use crate::state::open_connection;
use crate::statistics::query::{fetch_transactions, scope_exists};
use crate::statistics::range::{DayBound, ReportingRange, format_instant, parse_bound_instant};
use crate::statistics::types::{LedgerTransaction, Scope};
use crate::{ClientError, ClientResult};

/// Shared inputs for every scoped statistics command: exactly one of
/// account/category, a raw date-range pair, and an optional ledger home
/// override for tests.
#[derive(Debug, Default)]
pub struct ScopeQueryOptions<'a> {
    pub account: Option<String>,
    pub category: Option<String>,
    pub from: String,
    pub to: String,
    pub home_override: Option<&'a Path>,
}

/// One fetched ledger snapshot plus everything resolved on the way to it.
/// Commands compute every reducer they need from this single read so a
/// composite call never mixes two ledger states.
pub(crate) struct ScopeSnapshot {
    pub scope: Scope,
    pub range: ReportingRange,
    pub transactions: Vec<LedgerTransaction>,
    pub connection: Connection,
    pub db_path: PathBuf,
}

pub(crate) fn load_scope_snapshot(
    options: &ScopeQueryOptions<'_>,
    command_hint: &str,
) -> ClientResult<ScopeSnapshot> {
    let scope = resolve_scope(
        options.account.as_deref(),
        options.category.as_deref(),
        command_hint,
    )?;
    let range = parse_range(&options.from, &options.to, command_hint)?;

    let setup = load_setup(options.home_override)?;
    let db_path = PathBuf::from(&setup.db_path);
    let connection = open_connection(&db_path)?;

    if !scope_exists(&connection, &db_path, &scope)? {
        return Err(ClientError::scope_not_found(scope.kind(), scope.id()));
    }

    let transactions = fetch_transactions(&connection, &db_path, &scope, &range)?;

    Ok(ScopeSnapshot {
        scope,
        range,
        transactions,
        connection,
        db_path,
    })
}

pub(crate) fn resolve_scope(
    account: Option<&str>,
    category: Option<&str>,
    command_hint: &str,
) -> ClientResult<Scope> {
    match (account, category) {
        (Some(account_id), None) if !account_id.is_empty() => {
            Ok(Scope::Account(account_id.to_string()))
        }
        (None, Some(category_id)) if !category_id.is_empty() => {
            Ok(Scope::Category(category_id.to_string()))
        }
        (Some(_), Some(_)) => Err(ClientError::invalid_argument_for_command(
            "Pass either --account or --category, not both.",
            Some(command_hint),
        )),
        _ => Err(ClientError::invalid_argument_for_command(
            "Pass exactly one of --account or --category.",
            Some(command_hint),
        )),
    }
}

pub(crate) fn parse_range(
    from: &str,
    to: &str,
    command_hint: &str,
) -> ClientResult<ReportingRange> {
    let start = parse_bound_instant(from, DayBound::Start)
        .ok_or_else(|| invalid_bound("--from", from, command_hint))?;
    let end = parse_bound_instant(to, DayBound::End)
        .ok_or_else(|| invalid_bound("--to", to, command_hint))?;
    Ok(ReportingRange::resolve(start, end))
}

pub(crate) fn scope_descriptor(scope: &Scope) -> ScopeDescriptor {
    ScopeDescriptor {
        kind: scope.kind().to_string(),
        id: scope.id().to_string(),
    }
}

pub(crate) fn range_strings(range: &ReportingRange) -> (String, String) {
    (format_instant(&range.from), format_instant(&range.to))
}

pub(crate) fn load_setup(home_override: Option<&Path>) -> ClientResult<SetupContext> {
    if let Some(home) = home_override {
        return ensure_initialized_at(home);
    }
    ensure_initialized()
}

fn invalid_bound(flag: &str, value: &str, command_hint: &str) -> ClientError {
    ClientError::invalid_argument_for_command(
        &format!("Invalid {flag} value `{value}`. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ."),
        Some(command_hint),
    )
}

#[cfg(test)]
mod tests {
    use super::{parse_range, resolve_scope};
    use crate::statistics::types::Scope;

    #[test]
    fn exactly_one_scope_flag_is_required() {
        let both = resolve_scope(Some("acct-1"), Some("groceries"), "stats heatmap");
        assert!(both.is_err());
        if let Err(error) = both {
            assert_eq!(error.code, "invalid_argument");
        }

        let neither = resolve_scope(None, None, "stats heatmap");
        assert!(neither.is_err());

        let account = resolve_scope(Some("acct-1"), None, "stats heatmap");
        assert_eq!(account.ok(), Some(Scope::Account("acct-1".to_string())));
    }

    #[test]
    fn bare_dates_resolve_to_an_inclusive_day_range() {
        let range = parse_range("2026-01-01", "2026-01-31", "stats heatmap");
        assert!(range.is_ok());
        if let Ok(range) = range {
            assert_eq!(range.day_count(), 31);
        }
    }

    #[test]
    fn malformed_bounds_are_invalid_arguments() {
        let range = parse_range("not-a-date", "2026-01-31", "stats heatmap");
        assert!(range.is_err());
        if let Err(error) = range {
            assert_eq!(error.code, "invalid_argument");
        }
    }
}
