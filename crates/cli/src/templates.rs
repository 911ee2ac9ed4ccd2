//! Static template assets.
//!
//! Templates hold hand-written client boilerplate (request wrapper, config).
//! They are loaded once, before generation starts, and copied verbatim into
//! the output directory. Nothing in them is generated.

use std::fs;
use std::path::Path;

/// Header prepended to the generated types file.
pub const GENERATED_BANNER: &str = "/**\n * AUTO-GENERATED by swagger-ts. Do not edit this file directly;\n * change the OpenAPI document and regenerate instead.\n */\n\n";

/// Extensions recognised as template sources. `.tsf` files are written out as `.ts`.
const TEMPLATE_EXTENSIONS: [&str; 2] = ["tsf", "ts"];

/// One template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAsset {
    /// File name in the output directory.
    pub file_name: String,
    /// Verbatim contents.
    pub contents: String,
}

/// Template assets loaded from a directory.
#[derive(Debug, Clone, Default)]
pub struct Templates {
    assets: Vec<TemplateAsset>,
}

impl Templates {
    /// Read every `.tsf` / `.ts` file directly inside `dir`, sorted by name.
    pub fn load(dir: &Path) -> Result<Self, String> {
        let entries = fs::read_dir(dir)
            .map_err(|err| format!("Failed to read templates dir {}: {err}", dir.display()))?;

        let mut assets = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|err| format!("Failed to read templates dir entry: {err}"))?
                .path();
            if !path.is_file() {
                continue;
            }
            let (Some(stem), Some(ext)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.extension().and_then(|e| e.to_str()),
            ) else {
                continue;
            };
            if !TEMPLATE_EXTENSIONS.contains(&ext) {
                continue;
            }

            let contents = fs::read_to_string(&path)
                .map_err(|err| format!("Failed to read template {}: {err}", path.display()))?;
            assets.push(TemplateAsset {
                file_name: format!("{stem}.ts"),
                contents,
            });
        }

        assets.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        if let Some(pair) = assets.windows(2).find(|w| w[0].file_name == w[1].file_name) {
            return Err(format!(
                "Template {} exists both as .ts and .tsf in {}",
                pair[0].file_name,
                dir.display()
            ));
        }

        tracing::debug!(dir = %dir.display(), count = assets.len(), "Loaded templates.");
        Ok(Self { assets })
    }

    /// Loaded assets, sorted by file name.
    pub fn assets(&self) -> &[TemplateAsset] {
        &self.assets
    }
}
