// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use riskwise_app::Outcome;
use riskwise_relay::Client;
use riskwise_tui::{InternalEvent, LeadEvent, LeadGateway};
use std::collections::BTreeMap;
use std::sync::mpsc::Sender;
use std::thread;

/// Relay-backed gateway for the TUI. Submissions run on a worker thread so
/// the event loop keeps drawing while the network call is in flight.
pub struct RelayGateway {
    client: Client,
}

impl RelayGateway {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }
}

impl LeadGateway for RelayGateway {
    fn submit_lead(&mut self, fields: &BTreeMap<String, String>, source: &str) -> Outcome {
        self.client.submit(fields, source)
    }

    fn spawn_lead_submission(
        &mut self,
        request_id: u64,
        fields: BTreeMap<String, String>,
        source: &str,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let client = self.client.clone();
        let source = source.to_owned();
        thread::spawn(move || {
            let outcome = client.submit(&fields, &source);
            let _ = tx.send(InternalEvent::Lead(LeadEvent {
                request_id,
                outcome,
            }));
        });
        Ok(())
    }
}
