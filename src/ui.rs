// Presentation layer: renders operation results as text or JSON and owns
// the progress spinner shown while a remote call is in flight.
//
// Rendering functions return strings rather than printing so the exact
// output can be asserted in tests.

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

use crate::api::CertificateSummary;

/// Spinner shown while a remote call runs. indicatif draws to stderr, so
/// stdout stays clean for results; the bar hides itself off-terminal.
pub fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Render the metadata assigned to a freshly uploaded certificate.
pub fn render_upload(cert: &CertificateSummary, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(cert)?);
    }
    Ok(format!(
        "Certificate uploaded successfully!\nCertificate Name: {}\nCertificate ID: {}\nARN: {}",
        cert.name, cert.id, cert.arn
    ))
}

/// Render a certificate listing. An empty account is reported as a normal
/// outcome, not an error.
pub fn render_list(certs: &[CertificateSummary], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(certs)?);
    }
    if certs.is_empty() {
        return Ok("No certificates found".to_string());
    }
    let entries: Vec<String> = certs
        .iter()
        .map(|cert| {
            let expiration = cert
                .expiration
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| "unknown".to_string());
            format!(
                "  - Name: {}\n    ID: {}\n    ARN: {}\n    Expiration: {}",
                cert.name, cert.id, cert.arn, expiration
            )
        })
        .collect();
    Ok(format!("Server Certificates:\n{}", entries.join("\n\n")))
}

/// Render a delete confirmation.
pub fn render_delete(name: &str, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&json!({
            "name": name,
            "deleted": true,
        }))?);
    }
    Ok(format!("Certificate '{}' deleted successfully!", name))
}
