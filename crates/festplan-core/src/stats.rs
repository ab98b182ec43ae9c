use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Event;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_events: usize,
    pub active_budget: f64,
    pub total_spent: f64,
    /// Open tasks across events that have not happened yet.
    pub upcoming_deadlines: usize,
    /// Average sustainability score, 0-100.
    pub eco_score: u8,
}

pub fn dashboard_stats(events: &[Event], today: NaiveDate) -> DashboardStats {
    let active_budget = events.iter().map(|e| e.budget).sum();
    let total_spent = events.iter().map(|e| e.spent).sum();
    let upcoming_deadlines = events
        .iter()
        .filter(|e| e.date >= today)
        .flat_map(|e| &e.tasks)
        .filter(|t| !t.completed)
        .count();
    let eco_score = if events.is_empty() {
        0
    } else {
        let total: u32 = events.iter().map(|e| u32::from(e.sustainability_score)).sum();
        (total / events.len() as u32) as u8
    };
    DashboardStats {
        total_events: events.len(),
        active_budget,
        total_spent,
        upcoming_deadlines,
        eco_score,
    }
}
