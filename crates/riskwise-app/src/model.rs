// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Health,
    Life,
    General,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Health, Self::Life, Self::General];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Life => "Life",
            Self::General => "General",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Health" => Some(Self::Health),
            "Life" => Some(Self::Life),
            "General" => Some(Self::General),
            _ => None,
        }
    }
}

/// Company-grid category predicate. `Any` passes everything; `Only` requires an
/// exact category match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    Any,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Any => Self::Only(Category::Health),
            Self::Only(Category::Health) => Self::Only(Category::Life),
            Self::Only(Category::Life) => Self::Only(Category::General),
            Self::Only(Category::General) => Self::Any,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "All Categories",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() || value == "any" {
            return Some(Self::Any);
        }
        Category::parse(value).map(Self::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    Recommended,
    PriceAscending,
    PriceDescending,
    ClaimRatioDescending,
}

impl SortMode {
    pub const ALL: [Self; 4] = [
        Self::Recommended,
        Self::PriceAscending,
        Self::PriceDescending,
        Self::ClaimRatioDescending,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::PriceAscending => "price-asc",
            Self::PriceDescending => "price-desc",
            Self::ClaimRatioDescending => "claim-desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "recommended" => Some(Self::Recommended),
            "price-asc" => Some(Self::PriceAscending),
            "price-desc" => Some(Self::PriceDescending),
            "claim-desc" => Some(Self::ClaimRatioDescending),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::PriceAscending => "Price: Low to High",
            Self::PriceDescending => "Price: High to Low",
            Self::ClaimRatioDescending => "Claim Ratio: High to Low",
        }
    }

    pub fn next(self) -> Self {
        let current = Self::ALL
            .iter()
            .position(|mode| *mode == self)
            .unwrap_or(0);
        Self::ALL[(current + 1) % Self::ALL.len()]
    }
}

/// How an advisor handoff is initiated for a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CtaKind {
    WhatsApp,
    Phone,
}

impl CtaKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Phone => "Phone",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "WhatsApp" => Some(Self::WhatsApp),
            "Phone" => Some(Self::Phone),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub category: Category,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDetails {
    pub sum_insured: String,
    pub features: Vec<String>,
    pub exclusions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: PolicyId,
    pub company_id: CompanyId,
    pub name: String,
    pub type_label: String,
    pub final_price: i64,
    pub referral_bonus: String,
    pub cta: CtaKind,
    pub details: PolicyDetails,
}

/// Hand-authored comparison-table row. Kept independent of the Policy records
/// for fidelity with the source data; catalog tests assert the two stay
/// consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub name: String,
    pub type_label: String,
    pub sum_insured: String,
    pub claim_ratio: String,
    pub price_fmt: String,
    pub company_id: CompanyId,
    pub policy_id: PolicyId,
}

/// Indian-format rupee rendering: the last three digits group alone, every
/// group above that is two digits (12750 -> "₹12,750", 1650000 -> "₹16,50,000").
/// Zero renders as the placeholder dash, matching the source site.
pub fn format_inr(amount: i64) -> String {
    if amount == 0 {
        return "—".to_owned();
    }

    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    if digits.len() > 3 {
        let head = &digits[..digits.len() - 3];
        let mut pending = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            pending.push(&rest[rest.len() - 2..]);
            rest = &rest[..rest.len() - 2];
        }
        grouped.push_str(rest);
        for part in pending.iter().rev() {
            grouped.push(',');
            grouped.push_str(part);
        }
        grouped.push(',');
    }
    grouped.push_str(&digits[digits.len().saturating_sub(3)..]);

    if amount < 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryFilter, CtaKind, SortMode, format_inr};

    #[test]
    fn category_parse_is_case_sensitive() {
        assert_eq!(Category::parse("Health"), Some(Category::Health));
        assert_eq!(Category::parse("health"), None);
    }

    #[test]
    fn category_filter_cycle_visits_all_and_wraps() {
        let mut filter = CategoryFilter::Any;
        let mut seen = Vec::new();
        for _ in 0..4 {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(
            seen,
            vec![
                CategoryFilter::Only(Category::Health),
                CategoryFilter::Only(Category::Life),
                CategoryFilter::Only(Category::General),
                CategoryFilter::Any,
            ],
        );
    }

    #[test]
    fn category_filter_parse_accepts_empty_and_any() {
        assert_eq!(CategoryFilter::parse(""), Some(CategoryFilter::Any));
        assert_eq!(CategoryFilter::parse("any"), Some(CategoryFilter::Any));
        assert_eq!(
            CategoryFilter::parse("Life"),
            Some(CategoryFilter::Only(Category::Life)),
        );
        assert_eq!(CategoryFilter::parse("Car"), None);
    }

    #[test]
    fn sort_mode_round_trips_through_storage_keys() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(SortMode::parse("price"), None);
    }

    #[test]
    fn sort_mode_cycle_wraps() {
        assert_eq!(
            SortMode::ClaimRatioDescending.next(),
            SortMode::Recommended,
        );
        assert_eq!(SortMode::Recommended.next(), SortMode::PriceAscending);
    }

    #[test]
    fn cta_kind_round_trips() {
        assert_eq!(CtaKind::parse("WhatsApp"), Some(CtaKind::WhatsApp));
        assert_eq!(CtaKind::parse("Phone"), Some(CtaKind::Phone));
        assert_eq!(CtaKind::parse("Email"), None);
    }

    #[test]
    fn format_inr_uses_indian_grouping() {
        assert_eq!(format_inr(750), "₹750");
        assert_eq!(format_inr(12_750), "₹12,750");
        assert_eq!(format_inr(100_000), "₹1,00,000");
        assert_eq!(format_inr(1_650_000), "₹16,50,000");
        assert_eq!(format_inr(10_000_000), "₹1,00,00,000");
    }

    #[test]
    fn format_inr_zero_renders_placeholder() {
        assert_eq!(format_inr(0), "—");
    }
}
