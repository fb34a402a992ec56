pub mod config;
pub mod derive;
pub mod series;

use std::io::Read;
use weightlog_core::Measurement;

/// Read a JSON array of measurements from a file, or stdin when `path` is "-".
pub fn read_measurements(path: &str) -> Result<Vec<Measurement>, Box<dyn std::error::Error>> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?
    };
    let records: Vec<Measurement> = serde_json::from_str(&content)?;
    tracing::debug!(count = records.len(), source = path, "read measurements");
    Ok(records)
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
