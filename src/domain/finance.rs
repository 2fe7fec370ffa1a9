use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Origin of a cash inflow.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IncomeSource {
    CustomerPayment,
    ShopSale,
    MonthlyBilling,
}

impl IncomeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CustomerPayment => "customer_payment",
            Self::ShopSale => "shop_sale",
            Self::MonthlyBilling => "monthly_billing",
        }
    }
}

impl From<&str> for IncomeSource {
    fn from(value: &str) -> Self {
        match value {
            "shop_sale" => Self::ShopSale,
            "monthly_billing" => Self::MonthlyBilling,
            _ => Self::CustomerPayment,
        }
    }
}

/// How an incoming payment was made.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Online,
    Other,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::Cash
    }
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Online => "online",
            Self::Other => "other",
        }
    }
}

impl From<&str> for PaymentMethod {
    fn from(value: &str) -> Self {
        match value {
            "card" => Self::Card,
            "online" => Self::Online,
            "other" => Self::Other,
            _ => Self::Cash,
        }
    }
}

/// Expense category for outgoing transactions.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Electricity,
    Chemicals,
    Maintenance,
    Water,
    Fuel,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electricity => "electricity",
            Self::Chemicals => "chemicals",
            Self::Maintenance => "maintenance",
            Self::Water => "water",
            Self::Fuel => "fuel",
            Self::Other => "other",
        }
    }
}

impl From<&str> for ExpenseCategory {
    fn from(value: &str) -> Self {
        match value {
            "electricity" => Self::Electricity,
            "chemicals" => Self::Chemicals,
            "maintenance" => Self::Maintenance,
            "water" => Self::Water,
            "fuel" => Self::Fuel,
            _ => Self::Other,
        }
    }
}

/// Ledger row for a cash inflow. Amounts are integer cents.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IncomingTransaction {
    pub id: i32,
    pub source: IncomeSource,
    pub amount_cents: i64,
    /// Paying customer, when the inflow is a customer payment.
    pub customer_id: Option<i32>,
    /// Shopkeeper who collected the cash, for shop sales.
    pub shopkeeper_id: Option<i32>,
    pub description: Option<String>,
    pub payment_method: PaymentMethod,
    pub occurred_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Payload required to record a cash inflow.
#[derive(Debug, Clone)]
pub struct NewIncomingTransaction {
    pub source: IncomeSource,
    pub amount_cents: i64,
    pub customer_id: Option<i32>,
    pub shopkeeper_id: Option<i32>,
    pub description: Option<String>,
    pub payment_method: PaymentMethod,
    pub occurred_at: NaiveDateTime,
}

impl NewIncomingTransaction {
    pub fn new(source: IncomeSource, amount_cents: i64) -> Self {
        Self {
            source,
            amount_cents,
            customer_id: None,
            shopkeeper_id: None,
            description: None,
            payment_method: PaymentMethod::default(),
            occurred_at: chrono::Utc::now().naive_utc(),
        }
    }

    pub fn with_customer_id(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn with_shopkeeper_id(mut self, shopkeeper_id: i32) -> Self {
        self.shopkeeper_id = Some(shopkeeper_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    pub fn with_occurred_at(mut self, occurred_at: NaiveDateTime) -> Self {
        self.occurred_at = occurred_at;
        self
    }
}

/// Ledger row for a cash outflow. Amounts are integer cents.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutgoingTransaction {
    pub id: i32,
    pub category: ExpenseCategory,
    pub amount_cents: i64,
    pub description: String,
    /// Optional receipt reference or file path.
    pub receipt: Option<String>,
    pub occurred_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Payload required to record an expense.
#[derive(Debug, Clone)]
pub struct NewOutgoingTransaction {
    pub category: ExpenseCategory,
    pub amount_cents: i64,
    pub description: String,
    pub receipt: Option<String>,
    pub occurred_at: NaiveDateTime,
}

impl NewOutgoingTransaction {
    pub fn new(category: ExpenseCategory, amount_cents: i64, description: impl Into<String>) -> Self {
        Self {
            category,
            amount_cents,
            description: description.into(),
            receipt: None,
            occurred_at: chrono::Utc::now().naive_utc(),
        }
    }

    pub fn with_receipt(mut self, receipt: impl Into<String>) -> Self {
        self.receipt = Some(receipt.into());
        self
    }

    pub fn with_occurred_at(mut self, occurred_at: NaiveDateTime) -> Self {
        self.occurred_at = occurred_at;
        self
    }
}

/// Aggregated totals for the finance report endpoint.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FinanceReport {
    pub incoming: LedgerSummary,
    pub outgoing: LedgerSummary,
    pub net_profit_cents: i64,
}

/// One side of the ledger: per-group breakdown plus grand total.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LedgerSummary {
    pub breakdown: Vec<LedgerBreakdownRow>,
    pub total_cents: i64,
}

/// Sum of amounts for one source or category.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LedgerBreakdownRow {
    pub group: String,
    pub total_cents: i64,
}
