//! `swagger-ts generate`: compile an OpenAPI document into `types.ts`.

use clap::Args;
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::path::{Path, PathBuf};
use swagger_ts_core::{
    CompilerOptions, DocumentFormat, FailurePolicy, OpenApiDocument, collect_definitions,
    try_compile,
};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::templates::{GENERATED_BANNER, Templates};

/// Arguments of `swagger-ts generate`.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Config file (defaults to ./swagger-ts.toml when present)
    #[arg(long, value_name = "CONFIG_PATH")]
    pub config: Option<PathBuf>,
    /// OpenAPI document (.json, .yaml or .yml)
    #[arg(long, short, value_name = "DOCUMENT")]
    pub input: Option<PathBuf>,
    /// Directory receiving the generated files
    #[arg(long = "output-dir", short, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
    /// Do not write anything; fail if the generated files are out of date
    #[arg(long)]
    pub check: bool,
}

/// A file the command wants to write.
#[derive(Debug, Clone)]
pub struct FileChange {
    /// Destination path.
    pub path: PathBuf,
    /// Path shown to the user.
    pub rel_path: String,
    /// New content to write
    pub new_content: String,
    /// Existing content (None if file doesn't exist)
    pub existing_content: Option<String>,
}

impl FileChange {
    fn new(output_dir: &Path, file_name: &str, new_content: String) -> Self {
        let path = output_dir.join(file_name);
        let existing_content = fs::read_to_string(&path).ok();
        Self {
            rel_path: path.display().to_string(),
            path,
            new_content,
            existing_content,
        }
    }

    /// The file is missing or its content differs.
    pub fn is_stale(&self) -> bool {
        self.existing_content.as_deref() != Some(self.new_content.as_str())
    }

    /// Generate a unified diff for this file change
    pub fn generate_diff(&self) -> Option<String> {
        let existing = self.existing_content.as_ref()?;
        if existing == &self.new_content {
            return None;
        }

        let diff = TextDiff::from_lines(existing, &self.new_content);
        let mut output = String::new();

        output.push_str(&format!("\x1b[1m--- {} (current)\x1b[0m\n", self.rel_path));
        output.push_str(&format!("\x1b[1m+++ {} (new)\x1b[0m\n", self.rel_path));

        for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
            if idx > 0 {
                output.push_str("...\n");
            }
            for op in group {
                for change in diff.iter_changes(op) {
                    let (sign, color) = match change.tag() {
                        ChangeTag::Delete => ("-", "\x1b[31m"),
                        ChangeTag::Insert => ("+", "\x1b[32m"),
                        ChangeTag::Equal => (" ", ""),
                    };
                    output.push_str(color);
                    output.push_str(sign);
                    output.push_str(change.value());
                    if change.missing_newline() {
                        output.push('\n');
                    }
                    if !color.is_empty() {
                        output.push_str("\x1b[0m");
                    }
                }
            }
        }

        Some(output)
    }
}

/// Parse a document and compile its definitions, optionally with the header.
///
/// Fails when the batch cannot be compiled, so a previous output is never
/// replaced by an empty one.
pub fn render_types(
    document_text: &str,
    format: DocumentFormat,
    options: &CompilerOptions,
    banner: bool,
) -> Result<String, String> {
    let document = OpenApiDocument::parse(document_text, format).map_err(|err| err.to_string())?;
    let definitions = collect_definitions(&document);

    let types = try_compile(&definitions, options).map_err(|err| {
        error!(
            error = %err,
            definitions = definitions.len(),
            "Type generation failed; leaving existing files untouched."
        );
        format!("{err} (set failure_policy = \"isolate\" to keep the other definitions)")
    })?;

    if banner {
        Ok(format!("{GENERATED_BANNER}{types}"))
    } else {
        Ok(types)
    }
}

/// Resolve config + flags and compute every file the command would write.
pub fn plan(args: &GenerateArgs) -> Result<Vec<FileChange>, String> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => {
            let cwd = std::env::current_dir()
                .map_err(|err| format!("Failed to determine current directory: {err}"))?;
            Config::discover(&cwd)?
        }
    };
    if let Some(input) = &args.input {
        config.input = Some(input.clone());
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = Some(output_dir.clone());
    }

    let input = config
        .input
        .clone()
        .ok_or_else(|| {
            "No input document given; pass --input or set `input` in swagger-ts.toml".to_string()
        })?;
    let format = input
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| format!("Cannot tell the format of {}", input.display()))
        .and_then(|ext| DocumentFormat::from_extension(ext).map_err(|err| err.to_string()))?;

    // Templates are read up front so a broken template dir fails before anything is written
    let templates = match &config.templates_dir {
        Some(dir) => Templates::load(dir)?,
        None => Templates::default(),
    };

    let document_text = fs::read_to_string(&input)
        .map_err(|err| format!("Failed to read {}: {err}", input.display()))?;
    debug!(
        input = %input.display(),
        len = document_text.len(),
        "Read OpenAPI document."
    );

    let options = config.compiler_options();
    debug!(
        unknown_type = options.unknown_type.keyword(),
        max_depth = options.max_depth,
        "Compiler options."
    );
    if options.failure_policy == FailurePolicy::Isolate {
        debug!("Failing definitions will be replaced with fallback types.");
    }
    let types = render_types(&document_text, format, &options, config.banner())?;

    let output_dir = config.output_dir();
    let mut changes = vec![FileChange::new(&output_dir, config.output_file(), types)];
    for asset in templates.assets() {
        changes.push(FileChange::new(
            &output_dir,
            &asset.file_name,
            asset.contents.clone(),
        ));
    }
    Ok(changes)
}

fn write_changes(changes: &[FileChange]) -> Result<(), String> {
    for change in changes {
        if !change.is_stale() {
            debug!(path = %change.rel_path, "Unchanged.");
            continue;
        }
        if let Some(parent) = change.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| format!("Failed to create {}: {err}", parent.display()))?;
        }
        fs::write(&change.path, &change.new_content)
            .map_err(|err| format!("Failed to write {}: {err}", change.rel_path))?;
        info!(path = %change.rel_path, bytes = change.new_content.len(), "Wrote file.");
    }
    Ok(())
}

/// Report stale files. Returns true when everything is up to date.
fn check_changes(changes: &[FileChange]) -> bool {
    let mut clean = true;
    for change in changes.iter().filter(|c| c.is_stale()) {
        clean = false;
        match change.generate_diff() {
            Some(diff) => print!("{diff}"),
            None => println!("{} is missing", change.rel_path),
        }
    }
    clean
}

/// Run the command and return the process exit code.
pub fn run(args: GenerateArgs) -> i32 {
    let changes = match plan(&args) {
        Ok(changes) => changes,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    if args.check {
        if check_changes(&changes) {
            println!("up to date");
            0
        } else {
            1
        }
    } else {
        match write_changes(&changes) {
            Ok(()) => {
                println!("generated");
                0
            }
            Err(err) => {
                eprintln!("{err}");
                1
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_types_with_banner() {
        let code = render_types(
            r#"{ "components": { "schemas": { "Id": { "type": "array", "items": { "type": "string" } } } } }"#,
            DocumentFormat::Json,
            &CompilerOptions::default(),
            true,
        )
        .unwrap();

        assert!(code.starts_with(GENERATED_BANNER));
        assert!(code.ends_with("export type Id = string[];\n"));
    }

    #[test]
    fn test_render_types_yaml() {
        let code = render_types(
            "components:\n  schemas:\n    Color:\n      enum: [red, green]\n",
            DocumentFormat::Yaml,
            &CompilerOptions::default(),
            false,
        )
        .unwrap();

        assert_eq!(
            code,
            "export enum Color {\n  red = \"red\",\n  green = \"green\",\n}\n"
        );
    }

    #[test]
    fn test_render_types_invalid_document() {
        let err = render_types("{", DocumentFormat::Json, &CompilerOptions::default(), false)
            .unwrap_err();
        assert!(err.contains("Failed to parse OpenAPI document"), "{err}");
    }

    #[test]
    fn test_render_types_failed_batch_is_an_error() {
        let err = render_types(
            r#"{ "components": { "schemas": { "Bad": { "enum": ["a", "b"], "x-enumNames": ["A"] }, "Ok": { "type": "string" } } } }"#,
            DocumentFormat::Json,
            &CompilerOptions::default(),
            true,
        )
        .unwrap_err();
        assert!(err.contains("Failed to generate type 'Bad'"), "{err}");
    }

    #[test]
    fn test_render_types_empty_document() {
        let code = render_types("{}", DocumentFormat::Json, &CompilerOptions::default(), false)
            .unwrap();
        assert_eq!(code, "");
    }

    #[test]
    fn test_diff_output() {
        let change = FileChange {
            path: PathBuf::from("types.ts"),
            rel_path: "types.ts".into(),
            new_content: "a\nc\n".into(),
            existing_content: Some("a\nb\n".into()),
        };
        assert!(change.is_stale());
        let diff = change.generate_diff().unwrap();
        assert!(diff.contains("-b\n"));
        assert!(diff.contains("+c\n"));
    }

    #[test]
    fn test_unchanged_file_has_no_diff() {
        let change = FileChange {
            path: PathBuf::from("types.ts"),
            rel_path: "types.ts".into(),
            new_content: "same\n".into(),
            existing_content: Some("same\n".into()),
        };
        assert!(!change.is_stale());
        assert!(change.generate_diff().is_none());
    }
}
