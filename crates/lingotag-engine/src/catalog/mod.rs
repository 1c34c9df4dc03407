use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid catalog directory: {0}")]
    InvalidCatalogDir(String),
}

/// Translation resources grouped by namespace.
///
/// Templates are raw, uninterpolated strings; tag markup inside them is
/// parsed only at render time. Namespaces and keys iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    namespaces: BTreeMap<String, BTreeMap<String, String>>,
}

/// A value in a namespace file: either a template string or a nested table
/// whose keys flatten into dot-separated resource keys.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entry {
    Template(String),
    Section(BTreeMap<String, Entry>),
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single resource under `namespace` / `key`.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Looks up the raw template for a key, or `None` if the resource is
    /// missing.
    pub fn resource(&self, namespace: &str, key: &str) -> Option<&str> {
        self.namespaces
            .get(namespace)?
            .get(key)
            .map(String::as_str)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Every `(namespace, key, template)` triple, in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.namespaces.iter().flat_map(|(ns, keys)| {
            keys.iter()
                .map(move |(key, template)| (ns.as_str(), key.as_str(), template.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Loads every `*.toml` file in `dir` as a namespace. The file stem
    /// becomes the namespace name; nested tables flatten into dot-separated
    /// keys.
    pub fn load_from_dir(dir: &Path) -> Result<Self, CatalogError> {
        if !dir.is_dir() {
            return Err(CatalogError::InvalidCatalogDir(
                dir.to_string_lossy().into_owned(),
            ));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file()
                && let Some(ext) = path.extension()
                && ext == "toml"
            {
                files.push(path);
            }
        }
        files.sort();

        let mut catalog = Self::new();
        for path in files {
            catalog.load_namespace_file(&path)?;
        }
        Ok(catalog)
    }

    /// Loads a single namespace file into the catalog.
    pub fn load_namespace_file(&mut self, path: &Path) -> Result<(), CatalogError> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }
        let namespace = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "default".to_string());

        let content = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let entries: BTreeMap<String, Entry> =
            toml::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        for (key, entry) in entries {
            self.flatten_entry(&namespace, key, entry);
        }
        Ok(())
    }

    fn flatten_entry(&mut self, namespace: &str, key: String, entry: Entry) {
        match entry {
            Entry::Template(template) => self.insert(namespace, key, template),
            Entry::Section(section) => {
                for (child_key, child) in section {
                    self.flatten_entry(namespace, format!("{key}.{child_key}"), child);
                }
            }
        }
    }
}

/// Replaces `{{name}}` placeholders in a template with values from `vars`.
/// Placeholders with no matching variable are left verbatim.
pub fn interpolate(template: &str, vars: &HashMap<String, String>) -> String {
    static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z]\w*)\s*\}\}").expect("Invalid placeholder regex")
    });

    re.replace_all(template, |caps: &regex::Captures<'_>| {
        match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        }
    })
    .into_owned()
}
