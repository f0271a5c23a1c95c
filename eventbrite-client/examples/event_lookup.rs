// Look up an event and its attendees with the built-in catalog.
//
// Usage:
//   EVENTBRITE_APP_KEY=... EVENTBRITE_USER_KEY=... EVENTBRITE_EVENT_ID=123 \
//     cargo run --example event_lookup

use anyhow::{Context, Result};
use eventbrite_client::{CallArgs, Client, ClientConfig};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let app_key = std::env::var("EVENTBRITE_APP_KEY").context("EVENTBRITE_APP_KEY not set")?;
    let event_id: i64 = std::env::var("EVENTBRITE_EVENT_ID")
        .context("EVENTBRITE_EVENT_ID not set")?
        .parse()
        .context("EVENTBRITE_EVENT_ID is not a number")?;

    let mut config = ClientConfig::new(app_key);
    config.user_key = std::env::var("EVENTBRITE_USER_KEY").ok();
    let client = Client::new(config)?;

    let events = client
        .namespace("events")
        .context("catalog has no events namespace")?;

    let event = events
        .invoke(Some("event_get"), CallArgs::new().arg("id", event_id))?
        .into_payload()
        .context("no payload")?;
    info!("event: {}", serde_json::to_string_pretty(&event)?);

    let attendees = events
        .invoke(
            Some("event_list_attendees"),
            CallArgs::new().arg("id", event_id),
        )?
        .into_payload()
        .context("no payload")?;
    info!("attendees: {}", serde_json::to_string_pretty(&attendees)?);

    Ok(())
}
