use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Expense,
    Income,
    Transfer,
}

impl TransactionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
            Self::Transfer => "transfer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "expense" => Some(Self::Expense),
            "income" => Some(Self::Income),
            "transfer" => Some(Self::Transfer),
            _ => None,
        }
    }
}

/// One ledger row as the statistics reducers see it. Amounts are
/// base-currency minor units with positive magnitude; the kind carries
/// the sign semantics.
#[derive(Debug, Clone)]
pub struct LedgerTransaction {
    pub txn_id: String,
    pub account_id: String,
    pub destination_account_id: Option<String>,
    pub category_id: String,
    pub amount: i64,
    pub kind: TransactionKind,
    pub posted_at: DateTime<Utc>,
}

impl LedgerTransaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// The single account or category a statistics call is computed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Account(String),
    Category(String),
}

impl Scope {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Account(_) => "account",
            Self::Category(_) => "category",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Account(id) | Self::Category(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Active,
    Inactive,
}

impl BudgetStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BudgetRecord {
    pub budget_id: String,
    pub name: String,
    pub account_id: Option<String>,
    pub category_id: Option<String>,
    pub amount_limit: i64,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub status: BudgetStatus,
}
