//! Pure aggregation over transaction slices. Nothing in this module mutates
//! its input or touches storage; callers pass the slice they care about
//! (usually a filtered view) and get values back.

pub mod filter;
pub mod goals;
pub mod monthly;
pub mod summary;

pub use filter::LedgerFilter;
pub use goals::{budget_status, goal_progress, spend_ratio, BudgetStatus};
pub use monthly::{
    average_daily_spending, balance_delta, days_in_month, month_over_month_delta, monthly_activity,
    monthly_changes, previous_month_key, recent_month_keys, recent_transactions, trend_by_month,
    MonthTotals, MonthlyActivity, MonthlyChanges,
};
pub use summary::{net_by_label, running_balance_by_date, summarize, BalancePoint, Summary};
