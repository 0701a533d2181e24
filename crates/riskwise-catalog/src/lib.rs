// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Static product catalog plus the pure filter/sort engine that the UI layers
//! run over it. All data lives in memory; there is no backing store.

use std::cmp::Ordering;

use riskwise_app::{CategoryFilter, Company, CompanyId, ComparisonRow, Policy, PolicyId, SortMode};

mod data;

#[derive(Debug, Clone)]
pub struct Catalog {
    companies: Vec<Company>,
    policies: Vec<Policy>,
    comparisons: Vec<ComparisonRow>,
}

impl Catalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        data::builtin()
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn comparisons(&self) -> &[ComparisonRow] {
        &self.comparisons
    }

    pub fn find_company(&self, id: &CompanyId) -> Option<&Company> {
        self.companies.iter().find(|company| company.id == *id)
    }

    /// Policies for one company, in catalog order.
    pub fn policies_for(&self, company_id: &CompanyId) -> Vec<&Policy> {
        self.policies
            .iter()
            .filter(|policy| policy.company_id == *company_id)
            .collect()
    }

    pub fn find_policy(&self, company_id: &CompanyId, policy_id: PolicyId) -> Option<&Policy> {
        self.policies
            .iter()
            .find(|policy| policy.company_id == *company_id && policy.id == policy_id)
    }
}

/// Applies the category predicate and the free-text search to the company
/// grid. The search is a case-insensitive substring match, checked against
/// the company name and the joined feature list as two separate haystacks;
/// catalog order is preserved.
pub fn filter_companies<'a>(
    companies: &'a [Company],
    category: CategoryFilter,
    search: &str,
) -> Vec<&'a Company> {
    let needle = search.to_lowercase();
    companies
        .iter()
        .filter(|company| category.matches(company.category))
        .filter(|company| {
            if needle.is_empty() {
                return true;
            }
            company.name.to_lowercase().contains(&needle)
                || company.features.join(" ").to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sorts a copy of the comparison rows. `Recommended` keeps the authored
/// order. Rows whose sort key fails to parse always sink to the end,
/// regardless of direction, so malformed data never floats to the top.
pub fn sort_comparisons(rows: &[ComparisonRow], mode: SortMode) -> Vec<ComparisonRow> {
    let mut sorted = rows.to_vec();
    match mode {
        SortMode::Recommended => {}
        SortMode::PriceAscending => {
            sorted.sort_by(|a, b| compare_keys(price_key(a), price_key(b), false));
        }
        SortMode::PriceDescending => {
            sorted.sort_by(|a, b| compare_keys(price_key(a), price_key(b), true));
        }
        SortMode::ClaimRatioDescending => {
            sorted.sort_by(|a, b| match (claim_key(a), claim_key(b)) {
                (Some(a), Some(b)) => b.total_cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
    }
    sorted
}

fn compare_keys(a: Option<u64>, b: Option<u64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            if descending {
                b.cmp(&a)
            } else {
                a.cmp(&b)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Numeric key behind a formatted price such as "₹12,750/yr". Strips
/// everything except ASCII digits before parsing.
pub fn price_key(row: &ComparisonRow) -> Option<u64> {
    let digits: String = row
        .price_fmt
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Numeric key behind a claim ratio such as "98.5%".
pub fn claim_key(row: &ComparisonRow) -> Option<f64> {
    row.claim_ratio.trim().trim_end_matches('%').parse().ok()
}
