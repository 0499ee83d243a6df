use reqwest::blocking::Client;
use tracing::{debug, instrument};
use url::Url;

use super::request::ExtractionRequest;
use crate::error::{ExtractError, Result};

/// Blocking client with no client-side request timeout; the run waits for the
/// server or for the OS to give up on the socket.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(None)
        .build()
        .map_err(|e| ExtractError::config(format!("building HTTP client: {}", e)))
}

/// POST the export request and return the body as lines.
///
/// One request, no retry. Any connection failure or non-2xx status is a
/// transport error; a body that is not UTF-8 is a decode error. REDCap error
/// messages that come back with a 2xx status are passed through as lines.
#[instrument(level = "info", skip(client, request), fields(url = %url, fields = %request.fields()))]
pub fn fetch_lines(client: &Client, url: &Url, request: &ExtractionRequest) -> Result<Vec<String>> {
    let transport = |source: reqwest::Error| ExtractError::Transport {
        url: url.to_string(),
        source,
    };

    let body = client
        .post(url.clone())
        .form(request)
        .send()
        .map_err(transport)?
        .error_for_status()
        .map_err(transport)?
        .bytes()
        .map_err(transport)?;
    debug!(bytes = body.len(), "response received");

    let text = String::from_utf8(body.to_vec())?;
    let lines = split_lines(&text);
    debug!(lines = lines.len(), "response split");
    Ok(lines)
}

/// Split on `\n`, dropping a trailing `\r` from each line. A final newline
/// leaves an empty last element.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
