use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when reading from Google Sheets
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Read-only Google Sheets values client
///
/// Fetches a named range of questionnaire rows through the Sheets v4 REST
/// API. Obtaining and refreshing the OAuth access token is the caller's
/// responsibility; the client only attaches it as a bearer header.
pub struct SheetsClient {
    base_url: String,
    access_token: String,
    client: Client,
}

impl SheetsClient {
    pub fn new(base_url: String, access_token: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            access_token,
            client,
        }
    }

    /// Fetch all rows of a spreadsheet range
    ///
    /// Returns the rows in sheet order, each as a vector of cell strings.
    /// Trailing empty cells are omitted by the API, so rows are ragged.
    /// A range with no values yields an empty vector.
    pub async fn fetch_rows(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Vec<Vec<String>>, SheetsError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url.trim_end_matches('/'),
            spreadsheet_id,
            urlencoding::encode(range),
        );

        tracing::debug!("Fetching rows from: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SheetsError::Api(format!(
                "Failed to fetch range '{}': {}",
                range,
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let Some(values) = json.get("values") else {
            tracing::warn!("Range '{}' returned no values", range);
            return Ok(Vec::new());
        };

        let values = values
            .as_array()
            .ok_or_else(|| SheetsError::InvalidResponse("'values' is not an array".into()))?;

        let rows = values
            .iter()
            .map(|row| {
                row.as_array()
                    .map(|cells| {
                        cells
                            .iter()
                            .map(|cell| cell.as_str().unwrap_or_default().to_string())
                            .collect()
                    })
                    .ok_or_else(|| SheetsError::InvalidResponse("row is not an array".into()))
            })
            .collect::<Result<Vec<Vec<String>>, _>>()?;

        tracing::debug!("Fetched {} rows from range '{}'", rows.len(), range);

        Ok(rows)
    }
}
