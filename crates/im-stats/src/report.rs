//! Sample parsing and report rendering
//!
//! Turns free-form text into a sample and a [`Summary`] into text or JSON
//! according to a [`StatsConfig`].

use serde_json::{Map, Value};

use crate::config::{OutputFormat, StatsConfig};
use crate::error::{Result, StatsError};
use crate::summary::Summary;

/// Parse a sample from text.
///
/// Values may be separated by any mix of whitespace and commas. Empty input
/// yields an empty sample. `nan` and infinities are rejected.
pub fn parse_sample(input: &str) -> Result<Vec<f64>> {
    let values = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| StatsError::Parse(token.to_string()))
        })
        .collect::<Result<Vec<f64>>>()?;

    tracing::debug!("Parsed sample of {} values", values.len());
    Ok(values)
}

/// Render a summary as configured.
pub fn render(summary: &Summary, config: &StatsConfig) -> Result<String> {
    config.validate()?;

    match config.format {
        OutputFormat::Text => Ok(render_text(summary, config)),
        OutputFormat::Json => render_json(summary, config),
    }
}

fn render_text(summary: &Summary, config: &StatsConfig) -> String {
    let mut lines = vec![format!("count: {}", summary.count)];
    for measure in &config.measures {
        let value = match summary.get(*measure) {
            Some(v) => format!("{:.*}", config.precision, v),
            None => "undefined".to_string(),
        };
        lines.push(format!("{measure}: {value}"));
    }
    lines.join("\n")
}

fn render_json(summary: &Summary, config: &StatsConfig) -> Result<String> {
    let mut object = Map::new();
    object.insert("count".to_string(), Value::from(summary.count));
    for measure in &config.measures {
        let value = summary.get(*measure).map_or(Value::Null, Value::from);
        object.insert(measure.name().to_string(), value);
    }

    serde_json::to_string_pretty(&Value::Object(object))
        .map_err(|e| StatsError::Config(e.to_string()))
}
