//! Conversion options from a layout file and command-line overrides.

use anyhow::{Context, Result};
use cctdb_core::{CategorySheets, ConvertOptions, SheetRef};
use std::path::Path;

use crate::cli::Args;

/// Build [`ConvertOptions`] from `--layout` and the sheet and duplicate flags.
///
/// Flags override the matching layout file fields; anything left unset keeps
/// the default positional layout and rejects duplicate steps.
pub fn load_options(args: &Args) -> Result<ConvertOptions> {
    let mut options = match &args.layout {
        Some(path) => read_layout_file(path)?,
        None => ConvertOptions::default(),
    };

    if let Some(name) = &args.overview_sheet {
        options.layout.overview = SheetRef::Name(name.clone());
    }

    if !args.category_sheets.is_empty() {
        options.layout.categories = CategorySheets::Listed(
            args.category_sheets
                .iter()
                .map(|name| SheetRef::Name(name.clone()))
                .collect(),
        );
    }

    if let Some(policy) = args.on_duplicate {
        options.on_duplicate = policy.into();
    }

    Ok(options)
}

/// Parse a layout file: the overview sheet, category sheets and duplicate policy.
fn read_layout_file(path: &Path) -> Result<ConvertOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    parse_layout(&content).with_context(|| format!("Invalid layout file: {}", path.display()))
}

fn parse_layout(content: &str) -> Result<ConvertOptions> {
    #[derive(serde::Deserialize, Default)]
    #[serde(default, rename_all = "camelCase", deny_unknown_fields)]
    struct LayoutFile {
        overview: Option<SheetRef>,
        categories: Option<CategorySheets>,
        on_duplicate: Option<cctdb_core::DuplicateStepPolicy>,
    }

    let file: LayoutFile = serde_json::from_str(content)?;
    let mut options = ConvertOptions::default();
    if let Some(overview) = file.overview {
        options.layout.overview = overview;
    }
    if let Some(categories) = file.categories {
        options.layout.categories = categories;
    }
    if let Some(policy) = file.on_duplicate {
        options.on_duplicate = policy;
    }
    Ok(options)
}
