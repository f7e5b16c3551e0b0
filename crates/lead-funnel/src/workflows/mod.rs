pub mod intake;
pub mod mortgage;
pub mod property;

/// Outbound HTTP client shared by the workflow gateways.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .unwrap_or_default()
}
