use anyhow::{Context, Result};
use std::path::Path;

use crate::OutputFormat;

pub(crate) fn run(input: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let table = roomlog_core::extract_file(input)?;
    let rendered = match format {
        OutputFormat::Json => table.to_json_pretty()?,
        OutputFormat::Rust => table.to_rust_source(),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {} rooms to {}", table.len(), path.display());
        },
        None => match format {
            OutputFormat::Json => println!("{rendered}"),
            // Rendered source already ends with a newline.
            OutputFormat::Rust => print!("{rendered}"),
        },
    }
    Ok(())
}
