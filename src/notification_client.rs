use anyhow::Context;
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};

use crate::domain::OwnerNotification;
use crate::error_handling::error_chain_fmt;

/// Calls the remote `notifyOwner` procedure.
#[derive(Debug)]
pub struct NotificationClient {
    http_client: Client,
    notify_url: Url,
    authorization_token: Secret<String>,
}

#[derive(thiserror::Error)]
pub enum NotifyError {
    #[error("The notification endpoint did not answer in time.")]
    Timeout(#[source] reqwest::Error),
    #[error("Failed to reach the notification endpoint.")]
    Transport(#[source] reqwest::Error),
    #[error("The notification endpoint rejected the request with status {0}.")]
    Rejected(StatusCode),
}

impl std::fmt::Debug for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            NotifyError::Timeout(e)
        } else {
            NotifyError::Transport(e)
        }
    }
}

impl NotificationClient {
    pub fn new(
        base_url: &str,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, anyhow::Error> {
        let notify_url = Url::parse(base_url)
            .and_then(|mut url| {
                // without a trailing slash `join` would replace the last path segment
                if !url.path().ends_with('/') {
                    let path = format!("{}/", url.path());
                    url.set_path(&path);
                }
                url.join("notify-owner")
            })
            .with_context(|| format!("{} is not a valid notification base url", base_url))?;
        // the timeout lives on the transport; callers never cancel a delivery themselves
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the notification http client")?;

        Ok(Self {
            http_client,
            notify_url,
            authorization_token,
        })
    }

    #[tracing::instrument(
        name = "Notify the site owner",
        skip(self, notification),
        fields(notification_title = %notification.title)
    )]
    pub async fn notify_owner(&self, notification: &OwnerNotification) -> Result<(), NotifyError> {
        let response = self
            .http_client
            .post(self.notify_url.clone())
            .bearer_auth(self.authorization_token.expose_secret())
            .json(notification)
            .send()
            .await?;
        // `send` only fails on transport problems; status codes are on us
        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected(status));
        }
        Ok(())
    }
}
