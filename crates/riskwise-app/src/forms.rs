// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use std::collections::BTreeMap;

/// Result of a single lead submission attempt, surfaced verbatim to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sent { message: String },
    Failed { message: String },
    Demo { message: String },
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Sent { message } | Self::Failed { message } | Self::Demo { message } => message,
        }
    }

    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadFormInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub plan: String,
    pub note: String,
}

impl LeadFormInput {
    /// Required-field gate. Runs in the form layer; the relay adapter trusts
    /// the fields it is handed.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("full name is required -- enter a name and retry");
        }
        if self.phone.trim().is_empty() {
            bail!("mobile number is required -- enter a phone number and retry");
        }
        Ok(())
    }

    /// Flattens the form into the relay field map. Keys follow the mail
    /// template; optional fields are omitted when blank.
    pub fn to_fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        fields.insert("user_name".to_owned(), self.name.trim().to_owned());
        fields.insert("user_phone".to_owned(), self.phone.trim().to_owned());
        if !self.email.trim().is_empty() {
            fields.insert("user_email".to_owned(), self.email.trim().to_owned());
        }
        if !self.plan.trim().is_empty() {
            fields.insert("plan".to_owned(), self.plan.trim().to_owned());
        }
        if !self.note.trim().is_empty() {
            fields.insert("message".to_owned(), self.note.trim().to_owned());
        }
        fields
    }
}
