use std::fmt;
use std::io::Read;

use anyhow::Context;
use broker_core::{ApiResponse, Notifier, Severity};
use serde::de::DeserializeOwned;

pub mod auth;
pub mod completions;
pub mod config;
pub mod init;
pub mod profile;
pub mod resource;
pub mod sms;

/// Failure that was already shown to the user as a toast
#[derive(Debug)]
pub struct AlreadyReported;

impl fmt::Display for AlreadyReported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("operation failed")
    }
}

impl std::error::Error for AlreadyReported {}

/// Payload of a successful envelope; a failed one is toasted and ends the command
pub(crate) fn settle<T>(
    response: ApiResponse<T>,
    fallback: &str,
    notifier: &dyn Notifier,
) -> anyhow::Result<T> {
    response.into_result(fallback).map_err(|failure| {
        notifier.show_toast(&failure.message, Severity::Error);
        anyhow::Error::new(AlreadyReported)
    })
}

/// Reads a JSON request body from a file, `-` meaning stdin
pub(crate) fn read_payload<T: DeserializeOwned>(file: &str) -> anyhow::Result<T> {
    let contents = if file == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read payload from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read payload file {}", file))?
    };

    serde_json::from_str(&contents).with_context(|| format!("Invalid payload in {}", file))
}
