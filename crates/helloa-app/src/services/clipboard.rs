//! Clipboard writes through the browser.

use dioxus::prelude::*;
use helloa_core::{Error, Result};

/// Copy text to the system clipboard.
pub async fn copy_text(text: &str) -> Result<()> {
    let literal = serde_json::to_string(text)?;
    document::eval(&format!(
        "await navigator.clipboard.writeText({literal}); return true;"
    ))
    .join::<bool>()
    .await
    .map(|_| ())
    .map_err(|e| Error::Clipboard(format!("{e:?}")))
}
