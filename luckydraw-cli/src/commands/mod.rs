use anyhow::{bail, Context};
use serde_json::{json, Value};

/// POST /set-winner with the admin-chosen number.
pub async fn handle_set(client: &reqwest::Client, base_url: &str, number: u32) -> anyhow::Result<()> {
    tracing::debug!("POST {}/set-winner with {}", base_url, number);
    let response = client
        .post(format!("{}/set-winner", base_url))
        .json(&json!({ "number": number }))
        .send()
        .await
        .context("set-winner request failed")?;

    let status = response.status();
    let body: Value = response.json().await.context("invalid response body")?;

    if !status.is_success() {
        bail!(
            "set-winner rejected ({}): {}",
            status,
            body["message"].as_str().unwrap_or("unknown error")
        );
    }

    if body["success"] == json!(true) {
        println!("Fixed winner set to {}", body["number"]);
    } else {
        println!("Winner already assigned: {}", body["number"]);
    }
    Ok(())
}

/// GET /get-winner: performs one draw.
pub async fn handle_get(client: &reqwest::Client, base_url: &str) -> anyhow::Result<()> {
    let response = client
        .get(format!("{}/get-winner", base_url))
        .send()
        .await
        .context("get-winner request failed")?;

    let status = response.status();
    if !status.is_success() {
        bail!("get-winner failed ({})", status);
    }

    let body: Value = response.json().await.context("invalid response body")?;
    println!("Draw result: {}", body["number"]);
    Ok(())
}

/// POST /reset-winner: clears the slot back to its initial state.
pub async fn handle_reset(client: &reqwest::Client, base_url: &str) -> anyhow::Result<()> {
    let response = client
        .post(format!("{}/reset-winner", base_url))
        .send()
        .await
        .context("reset-winner request failed")?;

    let status = response.status();
    if !status.is_success() {
        bail!("reset-winner failed ({})", status);
    }

    println!("Winner slot reset");
    Ok(())
}
