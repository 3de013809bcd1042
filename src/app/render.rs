use crate::app::session::ViewState;
use crate::core::Poem;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;

pub const NOTHING_TO_DISPLAY: &str =
    "No poems to display. Try searching for an author or poem title.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unsupported output format '{}' (expected text or json)", other)),
        }
    }
}

pub fn render_text(poems: &[Poem]) -> String {
    if poems.is_empty() {
        return NOTHING_TO_DISPLAY.to_string();
    }

    let mut out = String::new();
    let total = poems.len();
    for (i, poem) in poems.iter().enumerate() {
        let _ = writeln!(out, "{}", poem.title);
        let _ = writeln!(out, "by {}", poem.author);
        let _ = writeln!(out, "Lines: {}", poem.linecount);
        let _ = writeln!(out);
        for line in &poem.lines {
            // Keep blank stanza breaks visible.
            if line.is_empty() {
                let _ = writeln!(out, "\u{00A0}");
            } else {
                let _ = writeln!(out, "{}", line);
            }
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Poem {} of {}", i + 1, total);
        let _ = writeln!(out, "{}", "-".repeat(40));
    }

    let _ = write!(out, "{}", summary(total));
    out
}

pub fn render_json(poems: &[Poem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(poems)?)
}

pub fn summary(count: usize) -> String {
    format!("Found {} poem{}", count, if count == 1 { "" } else { "s" })
}

/// Renders whatever the session is showing. Errors and hints come back as
/// plain messages regardless of format.
pub fn render_state(state: &ViewState, format: OutputFormat) -> Result<String> {
    match state {
        ViewState::Success(poems) => match format {
            OutputFormat::Text => Ok(render_text(poems)),
            OutputFormat::Json => render_json(poems),
        },
        ViewState::Empty { hint } => match format {
            OutputFormat::Text => Ok(hint.clone()),
            OutputFormat::Json => render_json(&[]),
        },
        ViewState::Error { message, .. } => Ok(format!("⚠️ {}", message)),
        ViewState::Searching => Ok("Searching...".to_string()),
        ViewState::Idle => Ok(NOTHING_TO_DISPLAY.to_string()),
    }
}
