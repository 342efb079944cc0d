//! Line command - transform one line of text

use checkstamp::adapters::TomlSettingsStore;
use checkstamp::core::services::{classify, transform};
use checkstamp::output::{LineResult, OutputMode};

use super::{clock_for, load_settings};

/// Transform a single line and print the outcome
pub fn line(
    text: &str,
    at: Option<&str>,
    store: &TomlSettingsStore,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let settings = load_settings(store)?;
    let clock = clock_for(at)?;
    let outcome = transform(text, &settings, clock.now());

    LineResult {
        input: text.to_string(),
        state: classify(text),
        action: outcome.action,
        result: outcome.result,
    }
    .render(mode);

    Ok(())
}
