//! Goal allocation simulator
//!
//! Splits a monthly surplus across open goals and projects when each goal
//! would be reached at the simulated rate versus its own stored contribution.
//!
//! Split policy:
//! - no priority goals: equal split over all open goals
//! - only priority goals: equal split over all open goals
//! - mixed: priority goals share 70%, the rest share 30%

use std::collections::HashSet;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::Goal;

/// Share of the surplus reserved for priority goals when both kinds exist
pub const PRIORITY_SHARE: f64 = 0.7;

/// Month count reported for a goal that receives nothing
pub const PAUSED_MONTHS: u32 = 999;

/// Simulated outcome for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub goal_id: String,
    pub name: String,
    pub is_priority: bool,
    pub is_completed: bool,
    /// Monthly amount this goal receives from the surplus
    pub simulated_monthly: f64,
    /// Months to finish at the goal's own stored contribution
    pub current_months: u32,
    /// Months to finish at the simulated rate ([`PAUSED_MONTHS`] if nothing is allocated)
    pub months_to_complete: u32,
    /// First day of the month the goal is projected to complete
    pub completion_date: NaiveDate,
    pub is_accelerated: bool,
    /// Months gained over the current pace
    pub time_saved: u32,
}

/// Per-goal monthly amounts for each group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurplusSplit {
    pub per_priority: f64,
    pub per_normal: f64,
}

/// Divide `net_surplus` between `priority` and `normal` open goals
pub fn split_surplus(priority: usize, normal: usize, net_surplus: f64) -> SurplusSplit {
    let total = priority + normal;
    if net_surplus <= 0.0 || total == 0 {
        return SurplusSplit {
            per_priority: 0.0,
            per_normal: 0.0,
        };
    }

    if priority == 0 || normal == 0 {
        let equal = net_surplus / total as f64;
        return SurplusSplit {
            per_priority: equal,
            per_normal: equal,
        };
    }

    SurplusSplit {
        per_priority: net_surplus * PRIORITY_SHARE / priority as f64,
        per_normal: net_surplus * (1.0 - PRIORITY_SHARE) / normal as f64,
    }
}

/// Simulate surplus allocation across `goals`.
///
/// Completed goals are returned with zeroed figures and take no share.
/// Results are in the same order as `goals`.
pub fn simulate_allocation(
    goals: &[Goal],
    net_surplus: f64,
    priority_ids: &HashSet<String>,
    today: NaiveDate,
) -> Vec<AllocationResult> {
    let is_priority = |goal: &Goal| priority_ids.contains(&goal.id);

    let open: Vec<&Goal> = goals.iter().filter(|g| !g.checked).collect();
    let priority = open
        .iter()
        .filter(|g| priority_ids.contains(&g.id))
        .count();
    let normal = open.len() - priority;
    let split = split_surplus(priority, normal, net_surplus);

    tracing::debug!(
        net_surplus,
        priority,
        normal,
        per_priority = split.per_priority,
        per_normal = split.per_normal,
        "Surplus split"
    );

    let this_month = month_start(today);

    goals
        .iter()
        .map(|goal| {
            let priority = is_priority(goal);

            if goal.checked {
                return AllocationResult {
                    goal_id: goal.id.clone(),
                    name: goal.name.clone(),
                    is_priority: priority,
                    is_completed: true,
                    simulated_monthly: 0.0,
                    current_months: 0,
                    months_to_complete: 0,
                    completion_date: this_month,
                    is_accelerated: false,
                    time_saved: 0,
                };
            }

            let simulated_monthly = if priority {
                split.per_priority
            } else {
                split.per_normal
            };

            let remaining = goal.remaining();
            let current_months = months_needed(remaining, goal.monthly_contribution.max(1.0));
            let months_to_complete = if simulated_monthly > 0.0 {
                months_needed(remaining, simulated_monthly)
            } else {
                PAUSED_MONTHS
            };
            let time_saved = current_months.saturating_sub(months_to_complete);

            AllocationResult {
                goal_id: goal.id.clone(),
                name: goal.name.clone(),
                is_priority: priority,
                is_completed: false,
                simulated_monthly,
                current_months,
                months_to_complete,
                completion_date: add_months(this_month, months_to_complete),
                is_accelerated: time_saved > 0,
                time_saved,
            }
        })
        .collect()
}

fn months_needed(remaining: f64, monthly: f64) -> u32 {
    let months = (remaining / monthly).ceil();
    if months >= u32::MAX as f64 {
        u32::MAX
    } else {
        months as u32
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{completed_goal, goal};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn ids(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn by_id<'a>(results: &'a [AllocationResult], id: &str) -> &'a AllocationResult {
        results.iter().find(|r| r.goal_id == id).unwrap()
    }

    #[test]
    fn test_mixed_split_is_70_30() {
        let goals = vec![goal("car", 5000.0, 0.0, 100.0), goal("trip", 3000.0, 0.0, 100.0)];

        let results = simulate_allocation(&goals, 1000.0, &ids(&["car"]), today());

        assert!((by_id(&results, "car").simulated_monthly - 700.0).abs() < 1e-9);
        assert!((by_id(&results, "trip").simulated_monthly - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_split_conserves_surplus() {
        let goals = vec![
            goal("a", 5000.0, 0.0, 100.0),
            goal("b", 3000.0, 0.0, 100.0),
            goal("c", 2000.0, 0.0, 100.0),
            goal("d", 800.0, 0.0, 100.0),
            goal("e", 900.0, 0.0, 100.0),
        ];

        let results = simulate_allocation(&goals, 1234.56, &ids(&["a", "d"]), today());
        let allocated: f64 = results.iter().map(|r| r.simulated_monthly).sum();

        assert!((allocated - 1234.56).abs() < 1e-6);
    }

    #[test]
    fn test_no_priority_splits_equally() {
        let goals = vec![
            goal("a", 1000.0, 0.0, 50.0),
            goal("b", 1000.0, 0.0, 50.0),
            goal("c", 1000.0, 0.0, 50.0),
            goal("d", 1000.0, 0.0, 50.0),
        ];

        let results = simulate_allocation(&goals, 800.0, &HashSet::new(), today());
        assert!(results.iter().all(|r| r.simulated_monthly == 200.0));
    }

    #[test]
    fn test_all_priority_splits_equally() {
        let goals = vec![goal("a", 1000.0, 0.0, 50.0), goal("b", 1000.0, 0.0, 50.0)];

        let results = simulate_allocation(&goals, 600.0, &ids(&["a", "b"]), today());
        assert!(results.iter().all(|r| r.simulated_monthly == 300.0));
        assert!(results.iter().all(|r| r.is_priority));
    }

    #[test]
    fn test_non_positive_surplus_pauses_goals() {
        let goals = vec![goal("a", 1000.0, 200.0, 100.0)];

        for surplus in [0.0, -250.0] {
            let results = simulate_allocation(&goals, surplus, &HashSet::new(), today());
            let r = &results[0];
            assert_eq!(r.simulated_monthly, 0.0);
            assert_eq!(r.months_to_complete, PAUSED_MONTHS);
            assert_eq!(r.current_months, 8);
            assert_eq!(r.time_saved, 0);
            assert!(!r.is_accelerated);
        }
    }

    #[test]
    fn test_completed_goals_are_excluded() {
        let goals = vec![
            completed_goal("done", 500.0),
            goal("open", 1000.0, 0.0, 100.0),
        ];

        let results = simulate_allocation(&goals, 400.0, &ids(&["done"]), today());
        let done = by_id(&results, "done");
        let open = by_id(&results, "open");

        assert!(done.is_completed);
        assert_eq!(done.simulated_monthly, 0.0);
        assert_eq!(done.months_to_complete, 0);
        assert_eq!(done.completion_date, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        // The completed priority goal takes no share, so the open goal gets everything
        assert_eq!(open.simulated_monthly, 400.0);
    }

    #[test]
    fn test_months_and_completion_date() {
        let goals = vec![goal("fund", 1000.0, 250.0, 50.0)];

        let results = simulate_allocation(&goals, 200.0, &HashSet::new(), today());
        let r = &results[0];

        // 750 remaining: 15 months at 50/month, 4 months at 200/month
        assert_eq!(r.current_months, 15);
        assert_eq!(r.months_to_complete, 4);
        assert_eq!(r.time_saved, 11);
        assert!(r.is_accelerated);
        assert_eq!(r.completion_date, NaiveDate::from_ymd_opt(2027, 2, 1).unwrap());
    }

    #[test]
    fn test_zero_monthly_contribution_uses_floor_of_one() {
        let goals = vec![goal("slow", 120.0, 0.0, 0.0)];

        let results = simulate_allocation(&goals, 60.0, &HashSet::new(), today());
        assert_eq!(results[0].current_months, 120);
        assert_eq!(results[0].months_to_complete, 2);
    }

    #[test]
    fn test_overfunded_goal_has_nothing_remaining() {
        let goals = vec![goal("over", 500.0, 650.0, 25.0)];

        let results = simulate_allocation(&goals, 100.0, &HashSet::new(), today());
        assert_eq!(results[0].current_months, 0);
        assert_eq!(results[0].months_to_complete, 0);
        assert_eq!(results[0].completion_date, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
    }

    #[test]
    fn test_slower_simulation_saves_no_time() {
        let goals = vec![goal("a", 1200.0, 0.0, 300.0), goal("b", 1200.0, 0.0, 300.0)];

        let results = simulate_allocation(&goals, 200.0, &HashSet::new(), today());
        let r = &results[0];

        assert_eq!(r.current_months, 4);
        assert_eq!(r.months_to_complete, 12);
        assert_eq!(r.time_saved, 0);
        assert!(!r.is_accelerated);
    }

    #[test]
    fn test_split_surplus_without_goals() {
        let split = split_surplus(0, 0, 500.0);
        assert_eq!(split.per_priority, 0.0);
        assert_eq!(split.per_normal, 0.0);
    }

    #[test]
    fn test_preserves_input_order() {
        let goals = vec![goal("z", 100.0, 0.0, 10.0), goal("a", 100.0, 0.0, 10.0)];

        let results = simulate_allocation(&goals, 50.0, &HashSet::new(), today());
        let order: Vec<&str> = results.iter().map(|r| r.goal_id.as_str()).collect();
        assert_eq!(order, vec!["z", "a"]);
    }
}
