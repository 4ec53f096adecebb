use reqwest::Client;
use reqwest::redirect::Policy;
use std::time::Duration;

use crate::core::constants::network;
use crate::core::error::Result;

/// Build the HTTP client shared by every worker of a scan.
///
/// Redirects are never followed: a 3xx comes back to the caller with its own
/// status and headers. Up to `max_idle_per_host` connections stay pooled for
/// reuse, so the pool never limits a scan running that many workers.
pub fn build_client(max_idle_per_host: usize, timeout: Option<Duration>) -> Result<Client> {
    let mut client_builder = Client::builder()
        .redirect(Policy::none())
        .pool_max_idle_per_host(max_idle_per_host)
        .pool_idle_timeout(Duration::from_secs(
            network::IDLE_CONNECTION_TIMEOUT_SECONDS,
        ));

    if let Some(timeout) = timeout {
        client_builder = client_builder.timeout(timeout);
    }

    Ok(client_builder.build()?)
}
