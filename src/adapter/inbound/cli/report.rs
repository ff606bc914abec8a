//! JSON documents for fetch outcomes.
//!
//! Every fetching command prints `{command, success: true, data}` on success
//! and `{command, success: false, error}` on failure.

use serde::Serialize;
use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{Error, FetchError, Result};

/// Print the success document for `command`.
pub fn success<T: Serialize>(command: &str, data: &T) -> Result<()> {
    let data = serde_json::to_value(data)?;
    output::json_output(json!({
        "command": command,
        "success": true,
        "data": data,
    }));
    Ok(())
}

/// Print the failure document in JSON mode and hand the error back.
pub fn failure(command: &str, err: FetchError) -> Error {
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "success": false,
            "error": err.to_string(),
        }));
    }
    err.into()
}
