use gloo_net::http::Request;
use listing_core::config::SiteConfig;
use listing_core::inquiry::LeadPayload;
use listing_core::listing::Listing;

/// Fetch the full feed. The body is read as text first so a non-JSON
/// response surfaces on the same error path as a network failure.
pub async fn fetch_listings(config: &SiteConfig) -> Result<Vec<Listing>, String> {
    let resp = Request::get(&config.listings_url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let text = resp.text().await.map_err(|e| e.to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

/// Fire-and-forget lead submission. Any resolved response counts as
/// success; the endpoint's status and payload are not inspected.
pub async fn submit_lead(config: &SiteConfig, payload: &LeadPayload) -> Result<(), String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;
    Request::post(&config.leads_url)
        .body(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}
