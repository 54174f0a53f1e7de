//! Streaming a response body to disk.

use std::path::Path;

use futures::StreamExt;
use reqwest::Response;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};

/// Write the whole response body to `output_path`, replacing any existing file.
///
/// Returns the number of bytes written.
pub async fn save_response(response: Response, output_path: &Path) -> Result<u64> {
    let mut file = File::create(output_path).await?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;

    Ok(written)
}
