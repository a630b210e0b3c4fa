mod support;

use tally_client::setup::ensure_initialized_at;
use support::statistics_testkit::{seed_account, seed_category, seed_expense, seeded_ledger, temp_home_in_tmp};

#[test]
fn first_run_creates_the_ledger_database() {
    let temp = temp_home_in_tmp("tally-setup-first");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let setup = ensure_initialized_at(&home);
        assert!(setup.is_ok(), "init failed: {setup:?}");
        if let Ok(context) = setup {
            assert!(home.join("ledger.db").exists());
            assert!(context.db_path.ends_with("ledger.db"));
            assert_eq!(context.schema_version, "v1");
            assert!(context.data_range.earliest.is_none());
            assert!(context.data_range.latest.is_none());
        }
    }
}

#[test]
fn reinitialization_is_idempotent() {
    let temp = temp_home_in_tmp("tally-setup-idempotent");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let first = ensure_initialized_at(&home);
        assert!(first.is_ok());

        let second = ensure_initialized_at(&home);
        assert!(second.is_ok(), "re-init failed: {second:?}");
        if let (Ok(a), Ok(b)) = (first, second) {
            assert_eq!(a.db_path, b.db_path);
            assert_eq!(a.schema_version, b.schema_version);
        }
    }
}

#[test]
fn data_range_tracks_the_earliest_and_latest_postings() {
    let temp = temp_home_in_tmp("tally-setup-range");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let connection = seeded_ledger(&home);
        seed_account(&connection, "acct-1", "Checking");
        seed_category(&connection, "groceries", "Groceries");
        seed_expense(&connection, "txn-1", "acct-1", "groceries", 100, "2025-06-15T12:00:00Z");
        seed_expense(&connection, "txn-2", "acct-1", "groceries", 100, "2026-02-01T08:30:00Z");

        let setup = ensure_initialized_at(&home);
        assert!(setup.is_ok());
        if let Ok(context) = setup {
            assert_eq!(
                context.data_range.earliest.as_deref(),
                Some("2025-06-15T12:00:00Z")
            );
            assert_eq!(
                context.data_range.latest.as_deref(),
                Some("2026-02-01T08:30:00Z")
            );
        }
    }
}
