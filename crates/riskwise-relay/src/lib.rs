// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Lead submission adapter for the EmailJS-compatible relay. One attempt per
//! submission; every path resolves to an [`Outcome`] the UI can show verbatim.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use riskwise_app::Outcome;
use serde::Serialize;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.emailjs.com";

const SEND_PATH: &str = "/api/v1.0/email/send";

pub const SENT_MESSAGE: &str = "Thanks -- your request was sent.";
pub const FAILED_MESSAGE: &str = "Failed to send. Try again or call us.";
pub const DEMO_MESSAGE: &str =
    "Demo mode: no relay configured. Add your relay keys to the config to send for real.";

/// The three relay identifiers. All of them are required for live sends;
/// anything less runs in demo mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    service_id: String,
    template_id: String,
}

impl Credentials {
    /// Builds credentials from the three optional config values. Returns
    /// `None` when any of them is absent or blank.
    pub fn from_parts(
        public_key: Option<&str>,
        service_id: Option<&str>,
        template_id: Option<&str>,
    ) -> Option<Self> {
        let public_key = public_key?.trim();
        let service_id = service_id?.trim();
        let template_id = template_id?.trim();
        if public_key.is_empty() || service_id.is_empty() || template_id.is_empty() {
            return None;
        }
        Some(Self {
            public_key: public_key.to_owned(),
            service_id: service_id.to_owned(),
            template_id: template_id.to_owned(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    credentials: Option<Credentials>,
    http: HttpClient,
}

impl Client {
    pub fn new(
        base_url: &str,
        credentials: Option<Credentials>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("relay.base_url must not be empty");
        }
        Url::parse(&base_url).with_context(|| format!("invalid relay.base_url {base_url:?}"))?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            credentials,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Submits one lead. Exactly one network attempt is made; failures are
    /// reported through [`Outcome::Failed`], never retried here.
    pub fn submit(&self, fields: &BTreeMap<String, String>, source: &str) -> Outcome {
        let mut params = fields.clone();
        params.insert("source".to_owned(), source.to_owned());

        let Some(credentials) = &self.credentials else {
            // Demo mode keeps the payload visible for local inspection.
            debug!("demo lead (not sent): {params:?}");
            return Outcome::Demo {
                message: DEMO_MESSAGE.to_owned(),
            };
        };

        let request = SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: &params,
        };

        let response = self
            .http
            .post(format!("{}{SEND_PATH}", self.base_url))
            .json(&request)
            .send();

        match response {
            Ok(response) if response.status().is_success() => Outcome::Sent {
                message: SENT_MESSAGE.to_owned(),
            },
            Ok(response) => {
                let status = response.status();
                let body = response.text().unwrap_or_default();
                warn!("relay rejected lead: {}", describe_rejection(status, &body));
                Outcome::Failed {
                    message: FAILED_MESSAGE.to_owned(),
                }
            }
            Err(error) => {
                warn!("cannot reach relay at {}: {error}", self.base_url);
                Outcome::Failed {
                    message: FAILED_MESSAGE.to_owned(),
                }
            }
        }
    }
}

/// Diagnostic line for the log. The relay answers plain text on errors, so
/// short non-JSON bodies are quoted as-is.
fn describe_rejection(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() && body.len() < 200 && !body.contains('{') {
        return format!("status {} ({body})", status.as_u16());
    }
    format!("status {}", status.as_u16())
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<String, String>,
}
