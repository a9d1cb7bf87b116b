use crate::core::error::{ConvertError, ConvertResult};
use url::Url;

/// Downloads the raw bytes of a photo.
///
/// Performs exactly one GET against `url`. A non-success status becomes
/// [`ConvertError::FetchFailed`] carrying that status; the body is not read
/// in that case. Retrying is left to the caller.
///
/// # Arguments
///
/// * `client` - Shared HTTP client (the same one the bot uses)
/// * `url` - Fully resolved download URL
///
/// # Example
///
/// ```no_run
/// use pdfcore::download::fetch_image;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = reqwest::Client::new();
/// let url = url::Url::parse("https://example.com/photo.jpg")?;
/// let bytes = fetch_image(&client, &url).await?;
/// println!("{} bytes", bytes.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_image(client: &reqwest::Client, url: &Url) -> ConvertResult<Vec<u8>> {
    let resp = client.get(url.clone()).send().await?;

    let status = resp.status();
    if !status.is_success() {
        log::warn!("Photo download returned {} for {}", status, redact(url));
        return Err(ConvertError::FetchFailed { status });
    }

    let bytes = resp.bytes().await?;
    log::debug!("Downloaded {} bytes from {}", bytes.len(), redact(url));

    Ok(bytes.to_vec())
}

/// File URLs embed the bot token (`/file/bot<token>/...`); strip the path
/// before logging.
fn redact(url: &Url) -> String {
    match url.host_str() {
        Some(host) => format!("{}://{}/…", url.scheme(), host),
        None => "<url>".to_string(),
    }
}
