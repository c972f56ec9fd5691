use super::summary::Summary;

/// How the spending ratio reads against the fixed dashboard thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    OnTrack,
    CloseToLimit,
    OverBudget,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "On Track",
            BudgetStatus::CloseToLimit => "Close to Limit",
            BudgetStatus::OverBudget => "Over Budget",
        }
    }
}

/// Expenses as a percentage of income. A month with no income divides by 1
/// instead, so a spend-only month reads as `expenses * 100` percent rather
/// than blowing up.
pub fn spend_ratio(summary: &Summary) -> f64 {
    let income = if summary.income == 0.0 {
        1.0
    } else {
        summary.income
    };
    summary.expenses / income * 100.0
}

/// Thresholds: above 80 percent is over budget, above 60 is close.
pub fn budget_status(ratio: f64) -> BudgetStatus {
    if ratio > 80.0 {
        BudgetStatus::OverBudget
    } else if ratio > 60.0 {
        BudgetStatus::CloseToLimit
    } else {
        BudgetStatus::OnTrack
    }
}

/// Percent of the savings goal covered by the current balance. Without a
/// positive goal there is nothing to measure, so the progress is 0. The
/// result is uncapped and goes negative with a negative balance.
pub fn goal_progress(balance: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        balance / goal * 100.0
    } else {
        0.0
    }
}
