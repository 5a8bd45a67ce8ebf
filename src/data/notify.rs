use std::io::Write;

use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use tracing::info;

use crate::{
    error::WeatherError,
    report::{Message, render_json},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Webhook(String),
    Stdout,
}

impl Destination {
    /// An empty webhook URL means printing instead of posting.
    #[must_use]
    pub fn from_webhook(url: &str) -> Self {
        if url.trim().is_empty() {
            Self::Stdout
        } else {
            Self::Webhook(url.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notifier {
    client: Client,
    destination: Destination,
}

impl Notifier {
    pub fn new(destination: Destination) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(WeatherError::Client)?;
        Ok(Self {
            client,
            destination,
        })
    }

    /// Delivers the report, printing to stdout when there is no webhook.
    pub async fn send(&self, message: &Message) -> Result<(), WeatherError> {
        self.send_to(message, &mut std::io::stdout()).await
    }

    /// Like [`Notifier::send`], with `out` receiving the printed report.
    pub async fn send_to(
        &self,
        message: &Message,
        out: &mut impl Write,
    ) -> Result<(), WeatherError> {
        let body = render_json(message)?;

        let Destination::Webhook(url) = &self.destination else {
            writeln!(out, "{body}")
                .and_then(|()| out.flush())
                .map_err(WeatherError::Output)?;
            return Ok(());
        };

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(WeatherError::Notify)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(WeatherError::NotifyStatus(status));
        }

        info!(entries = message.attachments.len(), "report posted to webhook");
        Ok(())
    }
}
