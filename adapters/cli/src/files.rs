//! On-disk documents read and written by the command-line adapter.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use boulder_caves_catalog::StructuredCaveSet;
use boulder_caves_core::ColorTable;
use serde::{Deserialize, Serialize};

/// Schema version understood for both configuration and caveset documents.
pub(crate) const SUPPORTED_VERSION: u32 = 1;

/// User configuration loaded from a TOML file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Config {
    /// Color table used to resolve palette indices.
    pub(crate) color_table: Option<ColorTable>,
    /// Caveset document loaded when none is given on the command line.
    pub(crate) caveset: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDocument {
    version: u32,
    #[serde(default)]
    color_table: Option<ColorTable>,
    #[serde(default)]
    caveset: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration stored at `path`.
    ///
    /// A relative caveset path is resolved against the directory holding
    /// the configuration file.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        parse_config(&contents, base)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

fn parse_config(contents: &str, base_path: &Path) -> Result<Config> {
    let document: ConfigDocument =
        toml::from_str(contents).context("failed to parse config toml contents")?;
    check_version("config", document.version)?;
    Ok(Config {
        color_table: document.color_table,
        caveset: document.caveset.map(|path| base_path.join(path)),
    })
}

#[derive(Debug, Serialize, Deserialize)]
struct CavesetDocument {
    version: u32,
    caveset: StructuredCaveSet,
}

/// Reads a structured caveset document.
pub(crate) fn load_caveset(path: &Path) -> Result<StructuredCaveSet> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read caveset file {}", path.display()))?;
    parse_caveset(&contents).with_context(|| format!("invalid caveset file {}", path.display()))
}

/// Writes a structured caveset document, replacing any existing file.
pub(crate) fn save_caveset(path: &Path, caveset: StructuredCaveSet) -> Result<()> {
    let contents = render_caveset(caveset)?;
    fs::write(path, contents)
        .with_context(|| format!("failed to write caveset file {}", path.display()))
}

fn parse_caveset(contents: &str) -> Result<StructuredCaveSet> {
    let document: CavesetDocument =
        toml::from_str(contents).context("failed to parse caveset toml contents")?;
    check_version("caveset", document.version)?;
    Ok(document.caveset)
}

fn render_caveset(caveset: StructuredCaveSet) -> Result<String> {
    let document = CavesetDocument {
        version: SUPPORTED_VERSION,
        caveset,
    };
    toml::to_string(&document).context("failed to serialize caveset document")
}

fn check_version(kind: &str, version: u32) -> Result<()> {
    if version != SUPPORTED_VERSION {
        bail!("unsupported {kind} version {version}; expected {SUPPORTED_VERSION}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use boulder_caves_catalog::StructuredCave;

    use super::*;

    #[test]
    fn config_resolves_caveset_relative_to_base_directory() {
        let config = parse_config(
            r#"
                version = 1
                color_table = "contrast"
                caveset = "sets/classic.toml"
            "#,
            Path::new("/home/player/.config"),
        )
        .expect("valid config");

        assert_eq!(config.color_table, Some(ColorTable::Contrast));
        assert_eq!(
            config.caveset,
            Some(PathBuf::from("/home/player/.config/sets/classic.toml"))
        );
    }

    #[test]
    fn config_fields_are_optional() {
        let config = parse_config("version = 1", Path::new("")).expect("valid config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn config_rejects_unknown_versions_and_keys() {
        let error = parse_config("version = 2", Path::new("")).expect_err("unsupported");
        assert!(error.to_string().contains("unsupported config version 2"));

        assert!(parse_config("version = 1\nzoom = 3", Path::new("")).is_err());
        assert!(parse_config("version = 1\ncolor_table = \"sepia\"", Path::new("")).is_err());
    }

    #[test]
    fn caveset_document_round_trips() {
        let caveset = StructuredCaveSet {
            name: "Pocket".into(),
            author: "Someone".into(),
            caves: vec![StructuredCave {
                name: "Closet".into(),
                width: 3,
                height: 3,
                map: vec!["WWW".into(), "WPW".into(), "WWW".into()],
                ..StructuredCave::default()
            }],
            ..StructuredCaveSet::default()
        };

        let rendered = render_caveset(caveset.clone()).expect("serializes");
        assert!(rendered.starts_with("version = 1"));
        assert_eq!(parse_caveset(&rendered).expect("parses"), caveset);
    }

    #[test]
    fn caveset_document_requires_supported_version() {
        let error = parse_caveset("version = 7\n[caveset]\nname = \"x\"").expect_err("rejected");
        assert!(error.to_string().contains("unsupported caveset version 7"));
    }
}
