use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod loader;
pub mod validator;
pub mod watcher;

pub use loader::LoadError;

use crate::cli::Cli;
use crate::domain::context::FormContext;
use crate::domain::overrides::OverrideMap;

pub const DEFAULT_CONFIG_FILE: &str = "schemaform.toml";
pub const DEFAULT_ROOT_ID: &str = "root";

/// How the CLI prints a rendered field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Editor schema document holding `content.SDKOverrides`
    #[serde(default)]
    pub editor_schema: Option<PathBuf>,
    /// Directory of extra override files, applied after the editor schema
    #[serde(default)]
    pub overrides_dir: Option<PathBuf>,
    #[serde(default = "default_root_id")]
    pub root_id: String,
    #[serde(default)]
    pub dialog_id: Option<String>,
    #[serde(default)]
    pub output: OutputFormat,
}

/// Values set through `SCHEMAFORM_*` environment variables
#[derive(Debug, Clone, Default, Deserialize)]
struct SettingsPatch {
    #[serde(default)]
    editor_schema: Option<PathBuf>,
    #[serde(default)]
    overrides_dir: Option<PathBuf>,
    #[serde(default)]
    root_id: Option<String>,
    #[serde(default)]
    dialog_id: Option<String>,
    #[serde(default)]
    output: Option<OutputFormat>,
}

fn default_root_id() -> String {
    DEFAULT_ROOT_ID.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor_schema: None,
            overrides_dir: None,
            root_id: default_root_id(),
            dialog_id: None,
            output: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Settings from `schemaform.toml` in the working directory and the environment
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Settings from the CLI's config file, with CLI overrides applied
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::build(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let settings = Self::build(path)?;
        settings.validate()?;
        Ok(settings)
    }

    fn build(path: &Path) -> Result<Self, anyhow::Error> {
        Self::build_with_env(path, Environment::with_prefix("SCHEMAFORM"))
    }

    fn build_with_env(path: &Path, env: Environment) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .set_default("root_id", DEFAULT_ROOT_ID)?
            .set_default("output", "html")?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        // Relative paths in the file are relative to the file itself
        let base = path.parent().unwrap_or(Path::new("."));
        settings.editor_schema = settings.editor_schema.map(|p| resolve_relative(base, p));
        settings.overrides_dir = settings.overrides_dir.map(|p| resolve_relative(base, p));

        // Env paths stay relative to the working directory
        let patch: SettingsPatch = Config::builder().add_source(env).build()?.try_deserialize()?;
        settings.merge(patch);

        Ok(settings)
    }

    fn merge(&mut self, patch: SettingsPatch) {
        if patch.editor_schema.is_some() {
            self.editor_schema = patch.editor_schema;
        }
        if patch.overrides_dir.is_some() {
            self.overrides_dir = patch.overrides_dir;
        }
        if let Some(root_id) = patch.root_id {
            self.root_id = root_id;
        }
        if patch.dialog_id.is_some() {
            self.dialog_id = patch.dialog_id;
        }
        if let Some(output) = patch.output {
            self.output = output;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(path) = &cli.editor_schema {
            self.editor_schema = Some(path.clone());
        }
        if let Some(dir) = &cli.overrides_dir {
            self.overrides_dir = Some(dir.clone());
        }
        if let Some(root_id) = &cli.root_id {
            self.root_id = root_id.clone();
        }
        if let Some(dialog_id) = &cli.dialog_id {
            self.dialog_id = Some(dialog_id.clone());
        }
        if let Some(output) = cli.output {
            self.output = output;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    /// Overrides from the editor schema, then from the overrides directory
    pub fn load_overrides(&self) -> Result<OverrideMap, LoadError> {
        let mut overrides = match &self.editor_schema {
            Some(path) => OverrideMap::from_editor_schema(&loader::load_editor_schema(path)?),
            None => OverrideMap::new(),
        };

        if let Some(dir) = &self.overrides_dir {
            let loaded = loader::load_overrides_from_dir(dir, &mut overrides)?;
            tracing::info!("Loaded {} overrides from {}", loaded, dir.display());
        }

        Ok(overrides)
    }

    /// Form context for every field rendered with these settings
    pub fn form_context(&self) -> Result<FormContext, LoadError> {
        let mut ctx = FormContext::new(self.root_id.clone()).with_overrides(self.load_overrides()?);
        if let Some(dialog_id) = &self.dialog_id {
            ctx = ctx.with_dialog_id(dialog_id.clone());
        }
        Ok(ctx)
    }

    /// Files whose changes should trigger a re-render
    pub fn watched_paths(&self) -> Vec<PathBuf> {
        self.editor_schema
            .iter()
            .chain(self.overrides_dir.iter())
            .cloned()
            .collect()
    }
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
