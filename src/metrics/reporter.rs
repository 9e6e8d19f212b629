//! Metrics reporter - output formatting and export
//!
//! Supports multiple output formats:
//! - Console (one `key value` line per metric)
//! - JSON (object keyed by metric name)
//! - CSV (`key,value` rows)

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Output format for a collected pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
    Csv,
}

/// Renders the recorded pairs of one collection pass.
pub struct MetricsReporter {
    format: OutputFormat,
}

impl MetricsReporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report a pass to stdout
    pub fn report(&self, entries: &[(String, String)]) {
        match self.format {
            OutputFormat::Console => {
                for (key, value) in entries {
                    println!("{key} {value}");
                }
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&Self::to_json(entries))
                        .expect("metric map serializes")
                );
            }
            OutputFormat::Csv => {
                for (key, value) in entries {
                    println!("{key},{value}");
                }
            }
        }
    }

    /// Write a pass to a file in the configured format
    pub fn write_file(&self, path: &Path, entries: &[(String, String)]) -> io::Result<()> {
        let mut file = File::create(path)?;
        match self.format {
            OutputFormat::Console => {
                for (key, value) in entries {
                    writeln!(file, "{key} {value}")?;
                }
            }
            OutputFormat::Json => {
                writeln!(
                    file,
                    "{}",
                    serde_json::to_string_pretty(&Self::to_json(entries))
                        .expect("metric map serializes")
                )?;
            }
            OutputFormat::Csv => {
                writeln!(file, "key,value")?;
                for (key, value) in entries {
                    writeln!(file, "{key},{value}")?;
                }
            }
        }
        Ok(())
    }

    fn to_json(entries: &[(String, String)]) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (key, value) in entries {
            // Values passed the numeric filter; fall back to string on the
            // off chance the literal exceeds JSON number range
            let json_value = value
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(serde_json::Value::Number)
                .unwrap_or_else(|| serde_json::Value::String(value.clone()));
            map.insert(key.clone(), json_value);
        }
        serde_json::Value::Object(map)
    }
}
