use anyhow::Context as _;

/// Add context to record loading errors
pub fn load_context(collection: &str) -> String {
    format!("Failed to load {} records", collection)
}

/// Add context to parse errors
pub fn parse_context(source: &str) -> String {
    format!("Failed to parse {}", source)
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, source: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(source))
}
