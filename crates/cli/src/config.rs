//! `swagger-ts.toml` configuration.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use swagger_ts_core::{CompilerOptions, DEFAULT_MAX_DEPTH, FailurePolicy, UnknownType};

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILENAME: &str = "swagger-ts.toml";

const DEFAULT_OUTPUT_DIR: &str = "src/api";
const DEFAULT_OUTPUT_FILE: &str = "types.ts";

/// Settings read from the config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// OpenAPI document (`.json`, `.yaml` or `.yml`).
    pub input: Option<PathBuf>,
    /// Directory receiving the generated files.
    pub output_dir: Option<PathBuf>,
    /// Name of the generated types file.
    pub output_file: Option<String>,
    /// Directory of template assets copied next to the types file.
    pub templates_dir: Option<PathBuf>,
    /// Keyword for schemas without a usable shape.
    pub unknown_type: UnknownType,
    /// What to do when a definition fails to render.
    pub failure_policy: FailurePolicy,
    /// Maximum nesting of inline schemas.
    pub max_depth: Option<usize>,
    /// Prepend the generated-file header.
    pub banner: Option<bool>,
}

impl Config {
    /// Parse a config file. Relative paths inside it are resolved against its directory.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|err| format!("Failed to parse {}: {err}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(config.resolve_paths(base))
    }

    /// Load `swagger-ts.toml` from `dir` if it exists, else return defaults.
    pub fn discover(dir: &Path) -> Result<Self, String> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file found, using defaults.");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        self.input = self.input.map(resolve);
        self.output_dir = self.output_dir.map(resolve);
        self.templates_dir = self.templates_dir.map(resolve);
        self
    }

    /// Compiler options derived from this config.
    pub fn compiler_options(&self) -> CompilerOptions {
        CompilerOptions {
            unknown_type: self.unknown_type,
            failure_policy: self.failure_policy,
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
        }
    }

    /// Output directory, defaulting to `src/api`.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Output file name, defaulting to `types.ts`.
    pub fn output_file(&self) -> &str {
        self.output_file.as_deref().unwrap_or(DEFAULT_OUTPUT_FILE)
    }

    /// Whether to prepend the header. On by default.
    pub fn banner(&self) -> bool {
        self.banner.unwrap_or(true)
    }
}
