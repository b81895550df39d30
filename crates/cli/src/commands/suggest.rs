use anyhow::{Context, Result};
use roomlog_core::IssueDictionary;
use std::path::Path;

pub(crate) fn run(query: &str, limit: Option<usize>, issues: Option<&Path>) -> Result<()> {
    let dictionary = match issues.map(Path::to_path_buf).or_else(roomlog_core::issues_file) {
        Some(path) => IssueDictionary::from_file(&path)
            .with_context(|| format!("Failed to load issue dictionary {}", path.display()))?,
        None => IssueDictionary::builtin(),
    };
    let limit = limit.unwrap_or_else(roomlog_core::suggestion_limit);

    for suggestion in dictionary.suggest(query, limit) {
        println!("{suggestion}");
    }
    Ok(())
}
