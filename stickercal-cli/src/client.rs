//! HTTP client for communicating with stickercal-server

use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use stickercal_core::{Event, NewEvent};

/// HTTP client for stickercal-server
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

// Response types matching server API

#[derive(Deserialize)]
struct EventsResponse {
    events: Vec<Event>,
}

#[derive(Deserialize)]
struct EventResponse {
    event: Event,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
    details: Option<String>,
}

impl Client {
    /// `base_url` includes the route prefix, e.g. `http://127.0.0.1:4096/api`.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid server URL '{base_url}'"))?;

        if base_url.cannot_be_a_base() {
            anyhow::bail!("Invalid server URL '{base_url}'");
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        })
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        let request = self.http.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET /events
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let resp = self
            .request(Method::GET, &["events"])
            .send()
            .await
            .context("Failed to connect to server")?;

        let body: EventsResponse = decode(resp).await?;
        Ok(body.events)
    }

    /// POST /events
    pub async fn create_event(&self, new: &NewEvent) -> Result<Event> {
        let resp = self
            .request(Method::POST, &["events"])
            .json(new)
            .send()
            .await
            .context("Failed to connect to server")?;

        let body: EventResponse = decode(resp).await?;
        Ok(body.event)
    }

    /// PUT /events/:id
    pub async fn update_event(&self, id: &str, new: &NewEvent) -> Result<Event> {
        let resp = self
            .request(Method::PUT, &["events", id])
            .json(new)
            .send()
            .await
            .context("Failed to connect to server")?;

        let body: EventResponse = decode(resp).await?;
        Ok(body.event)
    }

    /// DELETE /events/:id
    pub async fn delete_event(&self, id: &str) -> Result<()> {
        let resp = self
            .request(Method::DELETE, &["events", id])
            .send()
            .await
            .context("Failed to connect to server")?;

        let _: serde_json::Value = decode(resp).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();

    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(ErrorResponse {
                error,
                details: Some(details),
            }) => anyhow::bail!("{error}: {details}"),
            Ok(ErrorResponse { error, .. }) => anyhow::bail!("{error}"),
            Err(_) => anyhow::bail!("Server returned {status}: {text}"),
        }
    }

    Ok(resp.json().await?)
}
