use clap::Parser;
use std::path::PathBuf;

use crate::config::OutputFormat;

/// Preview how a schema form field wrapper renders
#[derive(Parser, Debug, Clone)]
#[command(name = "schemaform", version, about, long_about = None)]
pub struct Cli {
    /// Field descriptor document (JSON or YAML)
    pub field: PathBuf,

    /// Path to the configuration file
    #[arg(short, long, env = "SCHEMAFORM_CONFIG", default_value = "schemaform.toml")]
    pub config: PathBuf,

    /// Editor schema holding content.SDKOverrides
    #[arg(short, long)]
    pub editor_schema: Option<PathBuf>,

    /// Directory of additional override files
    #[arg(long)]
    pub overrides_dir: Option<PathBuf>,

    /// Identifier of the form's root field
    #[arg(long)]
    pub root_id: Option<String>,

    /// Dialog identifier appended to field keys
    #[arg(long)]
    pub dialog_id: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// HTML placed inside the field's children container
    #[arg(long, default_value = "")]
    pub children: String,

    /// Re-render whenever the field, editor schema or overrides change
    #[arg(short, long)]
    pub watch: bool,
}
