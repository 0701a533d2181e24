// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use riskwise_app::{
    Category, Company, CompanyId, ComparisonRow, CtaKind, Policy, PolicyDetails, PolicyId,
};

use crate::Catalog;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// Builds the shipped catalog. Data is illustrative, not live quotes.
pub(crate) fn builtin() -> Catalog {
    let companies = vec![
        Company {
            id: CompanyId::new("star"),
            name: "Star Health Insurance".to_owned(),
            category: Category::Health,
            features: strings(&[
                "9000+ Cashless Hospitals",
                "No Co-Pay on Select Plans",
                "Specialist Health Focus",
            ]),
        },
        Company {
            id: CompanyId::new("icici"),
            name: "ICICI Prudential Life".to_owned(),
            category: Category::Life,
            features: strings(&[
                "High Claim Settlement (98.5%)",
                "Customizable Payouts",
                "Term Life Experts",
            ]),
        },
        Company {
            id: CompanyId::new("hdfc"),
            name: "HDFC ERGO".to_owned(),
            category: Category::General,
            features: strings(&[
                "Secure Benefit (2X Coverage)",
                "Digital Claim Process",
                "General & Health",
            ]),
        },
        Company {
            id: CompanyId::new("max"),
            name: "Max Life Insurance".to_owned(),
            category: Category::Life,
            features: strings(&[
                "Guaranteed Return Options (ROP)",
                "Accident & Disability Riders",
                "High Tenure Term Plans",
            ]),
        },
    ];

    let policies = vec![
        Policy {
            id: PolicyId::new(101),
            company_id: CompanyId::new("star"),
            name: "Family Health Optima".to_owned(),
            type_label: "Family Floater".to_owned(),
            final_price: 12_750,
            referral_bonus: "₹1,000 Amazon Voucher".to_owned(),
            cta: CtaKind::WhatsApp,
            details: PolicyDetails {
                sum_insured: "₹5 Lakhs".to_owned(),
                features: strings(&[
                    "Automatic Restoration of SI",
                    "Maternity Cover (Optional)",
                ]),
                exclusions: strings(&["First 30 days non-accident claims"]),
            },
        },
        Policy {
            id: PolicyId::new(201),
            company_id: CompanyId::new("icici"),
            name: "iProtect Smart".to_owned(),
            type_label: "Term Life".to_owned(),
            final_price: 16_200,
            referral_bonus: "None".to_owned(),
            cta: CtaKind::Phone,
            details: PolicyDetails {
                sum_insured: "₹1 Cr".to_owned(),
                features: strings(&["Term cover", "Optional Critical Illness"]),
                exclusions: Vec::new(),
            },
        },
        Policy {
            id: PolicyId::new(301),
            company_id: CompanyId::new("hdfc"),
            name: "Optima Secure".to_owned(),
            type_label: "Health".to_owned(),
            final_price: 18_700,
            referral_bonus: "None".to_owned(),
            cta: CtaKind::WhatsApp,
            details: PolicyDetails {
                sum_insured: "₹10 Lakhs".to_owned(),
                features: strings(&["2X Coverage", "Digital Claims"]),
                exclusions: Vec::new(),
            },
        },
        Policy {
            id: PolicyId::new(401),
            company_id: CompanyId::new("max"),
            name: "Smart Secure".to_owned(),
            type_label: "Term Life".to_owned(),
            final_price: 24_000,
            referral_bonus: "None".to_owned(),
            cta: CtaKind::Phone,
            details: PolicyDetails {
                sum_insured: "₹2 Cr".to_owned(),
                features: strings(&["ROP Option", "Accident Add-on"]),
                exclusions: Vec::new(),
            },
        },
    ];

    let comparisons = vec![
        ComparisonRow {
            name: "Star Family Health Optima".to_owned(),
            type_label: "Health".to_owned(),
            sum_insured: "₹5 L".to_owned(),
            claim_ratio: "95%".to_owned(),
            price_fmt: "₹12,750/yr".to_owned(),
            company_id: CompanyId::new("star"),
            policy_id: PolicyId::new(101),
        },
        ComparisonRow {
            name: "HDFC Ergo Optima Secure".to_owned(),
            type_label: "Health".to_owned(),
            sum_insured: "₹10 L".to_owned(),
            claim_ratio: "98%".to_owned(),
            price_fmt: "₹18,700/yr".to_owned(),
            company_id: CompanyId::new("hdfc"),
            policy_id: PolicyId::new(301),
        },
        ComparisonRow {
            name: "ICICI Pru iProtect Smart".to_owned(),
            type_label: "Term Life".to_owned(),
            sum_insured: "₹1 Cr".to_owned(),
            claim_ratio: "98.5%".to_owned(),
            price_fmt: "₹16,200/yr".to_owned(),
            company_id: CompanyId::new("icici"),
            policy_id: PolicyId::new(201),
        },
        ComparisonRow {
            name: "Max Life Smart Secure".to_owned(),
            type_label: "Term Life".to_owned(),
            sum_insured: "₹2 Cr".to_owned(),
            claim_ratio: "99.2%".to_owned(),
            price_fmt: "₹24,000/yr".to_owned(),
            company_id: CompanyId::new("max"),
            policy_id: PolicyId::new(401),
        },
    ];

    Catalog {
        companies,
        policies,
        comparisons,
    }
}
