use anyhow::{anyhow, Result};
use reqwest::Url;

/// Accepts absolute http(s) URLs only.
pub fn validate_base_url(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{} must not be empty", name));
    }
    let url = Url::parse(value).map_err(|err| anyhow!("invalid {}: {}", name, err))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(anyhow!("{} must use http or https", name));
    }
    if url.cannot_be_a_base() {
        return Err(anyhow!("{} cannot be used as a base url", name));
    }
    Ok(())
}
