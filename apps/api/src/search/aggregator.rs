//! Aggregator — company/location breakdowns and salary rankings over a result set.
//!
//! All rankings are stable: equal values keep the order in which their group
//! key first appeared in the input.

use std::collections::HashMap;

use crate::models::job::JobRecord;
use crate::models::stats::{GroupCount, GroupSalary, SearchStats};

/// Default size of the salary rankings.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Company,
    Location,
}

impl GroupBy {
    fn key(self, job: &JobRecord) -> Option<&str> {
        match self {
            GroupBy::Company => job.company.as_deref(),
            GroupBy::Location => job.location.as_deref(),
        }
    }
}

pub fn aggregate_by_company(rows: &[JobRecord]) -> Vec<GroupCount> {
    count_by(rows, GroupBy::Company)
}

pub fn aggregate_by_location(rows: &[JobRecord]) -> Vec<GroupCount> {
    count_by(rows, GroupBy::Location)
}

/// Listing counts per group, highest first. Rows without a key are skipped.
pub fn count_by(rows: &[JobRecord], group_by: GroupBy) -> Vec<GroupCount> {
    let mut groups: Vec<GroupCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for key in rows.iter().filter_map(|row| group_by.key(row)) {
        match index.get(key).copied() {
            Some(i) => groups[i].count += 1,
            None => {
                index.insert(key, groups.len());
                groups.push(GroupCount {
                    group_key: key.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, which keeps first-seen order among ties
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

/// Mean salary midpoint per group, highest first, truncated to `top_n`.
///
/// Rows without a midpoint are ignored, so a group whose rows all lack salary
/// data does not appear at all.
pub fn average_salary_by_group(
    rows: &[JobRecord],
    group_by: GroupBy,
    top_n: usize,
) -> Vec<GroupSalary> {
    // (key, sum, n) in first-seen order
    let mut sums: Vec<(&str, f64, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        let (Some(key), Some(midpoint)) = (group_by.key(row), row.salary_midpoint()) else {
            continue;
        };
        match index.get(key).copied() {
            Some(i) => {
                sums[i].1 += midpoint;
                sums[i].2 += 1;
            }
            None => {
                index.insert(key, sums.len());
                sums.push((key, midpoint, 1));
            }
        }
    }

    let mut averages: Vec<GroupSalary> = sums
        .into_iter()
        .map(|(key, sum, n)| GroupSalary {
            group_key: key.to_string(),
            average_salary: sum / n as f64,
        })
        .collect();

    averages.sort_by(|a, b| b.average_salary.total_cmp(&a.average_salary));
    averages.truncate(top_n);
    averages
}

/// Every breakdown the dashboard charts.
pub fn summarize(rows: &[JobRecord], top_n: usize) -> SearchStats {
    SearchStats {
        by_company: aggregate_by_company(rows),
        by_location: aggregate_by_location(rows),
        avg_salary_by_company: average_salary_by_group(rows, GroupBy::Company, top_n),
        avg_salary_by_location: average_salary_by_group(rows, GroupBy::Location, top_n),
    }
}
