use rusqlite::Connection;
use rusqlite_migration::{M, Migrations};

const BOOTSTRAP_SQL: &str = include_str!("migrations/0001_bootstrap.sql");

pub const REQUIRED_INDEX_NAMES: [&str; 5] = [
    "idx_transactions_account_posted_at",
    "idx_transactions_destination_posted_at",
    "idx_transactions_category_posted_at",
    "idx_budgets_account_period",
    "idx_budgets_category_period",
];

pub const REQUIRED_META_KEYS: [(&str, &str); 1] = [("schema_version", "v1")];

pub const EXPECTED_USER_VERSION: i64 = 1;

pub fn run_pending(conn: &mut Connection) -> rusqlite_migration::Result<()> {
    let migrations = Migrations::new(vec![M::up(BOOTSTRAP_SQL)]);
    migrations.to_latest(conn)
}

#[cfg(test)]
mod tests {
    use super::{BOOTSTRAP_SQL, REQUIRED_INDEX_NAMES};

    #[test]
    fn bootstrap_creates_every_required_index() {
        for index_name in REQUIRED_INDEX_NAMES {
            assert!(BOOTSTRAP_SQL.contains(index_name), "missing {index_name}");
        }
    }

    #[test]
    fn bootstrap_creates_ledger_tables() {
        for table in [
            "internal_meta",
            "accounts",
            "categories",
            "transactions",
            "budgets",
        ] {
            assert!(
                BOOTSTRAP_SQL.contains(&format!("CREATE TABLE {table}")),
                "missing table {table}"
            );
        }
    }
}
