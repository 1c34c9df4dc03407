use anyhow::{Context, Result};
use lingotag_config::Config;
use lingotag_engine::{AllTags, Catalog, KnownTags, ParseError, TagSet, parse};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

/// A template that failed to parse.
struct Lint {
    namespace: String,
    key: String,
    error: ParseError,
}

fn main() {
    // Determine catalog path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let catalog_dir = if args.len() == 2 {
        // CLI argument provided - use it
        PathBuf::from(&args[1])
    } else if args.len() == 1 {
        // No CLI argument - fall back to the config file
        match &config {
            Some(config) => config.catalog_dir.clone(),
            None => {
                eprintln!("Error: No catalog path provided and no config file found");
                eprintln!("Usage: {} <catalog-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [catalog-folder-path]", args[0]);
        process::exit(1);
    };

    let known_tags = config.map(|c| c.known_tags).unwrap_or_default();
    match run(&catalog_dir, known_tags) {
        Ok(0) => {}
        Ok(defects) => {
            eprintln!("{defects} template(s) failed validation");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Lints every template under `catalog_dir`, printing one line per defect.
/// Returns the number of defective templates.
fn run(catalog_dir: &Path, known_tags: Vec<String>) -> Result<usize> {
    let catalog = Catalog::load_from_dir(catalog_dir).with_context(|| {
        format!("catalog path '{}' could not be loaded", catalog_dir.display())
    })?;
    if catalog.is_empty() {
        eprintln!(
            "Warning: no catalog files found in '{}'",
            catalog_dir.display()
        );
    }

    let checked = catalog.entries().count();
    let lints = if known_tags.is_empty() {
        // No tag inventory configured: check structure only
        lint_catalog(&catalog, &AllTags)
    } else {
        let tags: TagSet = known_tags.into_iter().collect();
        lint_catalog(&catalog, &tags)
    };

    for lint in &lints {
        eprintln!("{}.{}: {}", lint.namespace, lint.key, lint.error);
    }
    println!(
        "{checked} template{} checked, {} with errors",
        if checked == 1 { "" } else { "s" },
        lints.len()
    );
    Ok(lints.len())
}

/// Parses every template in the catalog, collecting one lint per defect.
fn lint_catalog(catalog: &Catalog, tags: &impl KnownTags) -> Vec<Lint> {
    let mut lints = Vec::new();
    for (namespace, key, template) in catalog.entries() {
        if let Err(error) = parse(template, tags) {
            lints.push(Lint {
                namespace: namespace.to_string(),
                key: key.to_string(),
                error,
            });
        }
    }
    lints
}
