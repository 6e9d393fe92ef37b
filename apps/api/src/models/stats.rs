use serde::{Deserialize, Serialize};

/// Number of listings sharing one company or location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupCount {
    pub group_key: String,
    pub count: usize,
}

/// Mean salary midpoint across the listings of one company or location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSalary {
    pub group_key: String,
    pub average_salary: f64,
}

/// Chart-ready breakdowns of one result set. Recomputed on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    pub by_company: Vec<GroupCount>,
    pub by_location: Vec<GroupCount>,
    pub avg_salary_by_company: Vec<GroupSalary>,
    pub avg_salary_by_location: Vec<GroupSalary>,
}
