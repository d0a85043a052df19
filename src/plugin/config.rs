use std::path::Path;

use anyhow::Context as _;

use crate::codec::format::FormatOptions;
use crate::foundation::error::{Matrix3dError, Matrix3dResult};

/// Vendor prefix the host resolved for the target engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorPrefix {
    /// Unprefixed properties only.
    #[default]
    None,
    /// `-webkit-`
    Webkit,
    /// `-moz-`
    Moz,
    /// `-ms-`
    Ms,
    /// `-o-`
    O,
}

impl VendorPrefix {
    /// CSS form of the prefix, e.g. `-webkit-`; empty for [`VendorPrefix::None`].
    pub fn css(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Webkit => "-webkit-",
            Self::Moz => "-moz-",
            Self::Ms => "-ms-",
            Self::O => "-o-",
        }
    }

    /// Prefixed property name, e.g. `-moz-transform`.
    pub fn property(self, prop: &str) -> String {
        format!("{}{prop}", self.css())
    }

    /// Property names a style write must cover: the bare name, then the prefixed one if any.
    pub fn property_names(self, prop: &str) -> Vec<String> {
        let mut names = vec![prop.to_string()];
        if self != Self::None {
            names.push(self.property(prop));
        }
        names
    }

    /// Whether this engine historically needed explicit units on `matrix3d` translations.
    pub fn requires_translation_units(self) -> bool {
        matches!(self, Self::Moz)
    }

    /// Parse a prefix given as `webkit`, `-webkit-`, `WebKit`, ... (empty means none).
    pub fn parse(s: &str) -> Matrix3dResult<Self> {
        let s = s.trim().trim_matches('-').to_ascii_lowercase();
        match s.as_str() {
            "" | "none" => Ok(Self::None),
            "webkit" => Ok(Self::Webkit),
            "moz" => Ok(Self::Moz),
            "ms" => Ok(Self::Ms),
            "o" => Ok(Self::O),
            other => Err(Matrix3dError::config(format!(
                "unknown vendor prefix '{other}'"
            ))),
        }
    }
}

/// Plugin configuration, resolved once by the host application.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Prefix used for computed-style reads and the second style write.
    pub vendor_prefix: VendorPrefix,
    /// Serialization options for the written `matrix3d(...)` value.
    pub format: FormatOptions,
}

impl PluginConfig {
    /// Defaults for an engine with the given prefix, enabling unit suffixing where it was needed.
    pub fn for_prefix(prefix: VendorPrefix) -> Self {
        Self {
            vendor_prefix: prefix,
            format: FormatOptions {
                requires_units: prefix.requires_translation_units(),
                ..FormatOptions::default()
            },
        }
    }

    /// Validate option values.
    pub fn validate(&self) -> Matrix3dResult<()> {
        self.format.validate()
    }

    /// Deserialize and validate a JSON config.
    pub fn from_json_str(s: &str) -> Matrix3dResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| Matrix3dError::serde(format!("invalid plugin config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a JSON config from disk.
    pub fn from_path(path: &Path) -> Matrix3dResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plugin/config.rs"]
mod tests;
