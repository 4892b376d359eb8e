use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::SheetConfig;
use crate::quiz::RawTable;

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

pub fn values_url(sheet: &SheetConfig) -> String {
    format!(
        "{}/{}/values/{}",
        sheet.api_url.trim_end_matches('/'),
        sheet.sheet_id,
        sheet.range
    )
}

fn parse_values(body: &str) -> Result<RawTable> {
    let value_range: ValueRange =
        serde_json::from_str(body).context("unexpected spreadsheet response")?;
    if value_range.values.is_empty() {
        return Err(anyhow!("spreadsheet returned no rows"));
    }
    Ok(RawTable::from_records(value_range.values)?)
}

/// Fetches the question table from the spreadsheet values API.
pub fn fetch(sheet: &SheetConfig, access_token: &str) -> Result<RawTable> {
    let url = values_url(sheet);
    debug!("Requesting {}", url);

    let response = Client::new()
        .get(&url)
        .bearer_auth(access_token)
        .send()
        .with_context(|| format!("could not reach {}", url))?;

    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        return Err(anyhow!("spreadsheet request failed with {}: {}", status, body));
    }

    let table = parse_values(&body)?;
    info!(
        "Fetched {} rows from spreadsheet {}",
        table.rows.len() + 1,
        sheet.sheet_id
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> SheetConfig {
        SheetConfig {
            api_url: "https://example.com/v4/spreadsheets/".to_owned(),
            sheet_id: "sheet-1".to_owned(),
            range: "A:Z".to_owned(),
            access_token: None,
        }
    }

    #[test]
    fn builds_values_url() {
        assert_eq!(
            values_url(&sheet()),
            "https://example.com/v4/spreadsheets/sheet-1/values/A:Z"
        );
    }

    #[test]
    fn parses_ragged_values() {
        let body = r#"{
            "range": "Sheet1!A1:Z3",
            "majorDimension": "ROWS",
            "values": [
                ["Question", "Option A", "Option B", "Option C", "Option D", "Answer"],
                ["Unit of force?", "Newton", "Joule", "Watt", "Pascal", "A"],
                ["Blank row"]
            ]
        }"#;
        let table = parse_values(body).unwrap();
        assert_eq!(table.header.len(), 6);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Blank row".to_owned()]);
    }

    #[test]
    fn rejects_empty_sheet() {
        assert!(parse_values(r#"{"range": "Sheet1!A1:Z1000"}"#).is_err());
        assert!(parse_values("not json").is_err());
    }
}
