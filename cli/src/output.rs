#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}
