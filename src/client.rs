use serde_json::{Value, json};

// Thin wrapper for programmatic callers: post one text payload to the
// gateway, get the parsed JSON back, or None on any failure. Errors are
// logged here; there is no retry.
pub async fn generate_interview(
    client: &reqwest::Client,
    gateway_url: &str,
    text: &str,
) -> Option<Value> {
    let result = client
        .post(gateway_url)
        .json(&json!({ "text": text }))
        .send()
        .await;

    match result {
        Ok(res) if res.status().is_success() => match res.json().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!(error = %e, "failed to parse gateway response");
                None
            }
        },
        Ok(res) => {
            tracing::error!(status = %res.status(), "gateway returned an error");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "gateway request failed");
            None
        }
    }
}
