//! Module transformation rules
//!
//! A [`Rule`] pairs a file-pattern matcher with the ordered list of handlers
//! applied to matching files. Rules are atomic to the merge engine: they are
//! appended to `module.rules`, never merged with each other.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One entry of `module.rules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Regular expression matched against the resource path.
    pub test: String,

    /// Only resources under this directory match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<PathBuf>,

    /// Resources matching this expression never match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Expression the importing module must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// Handlers in application order.
    #[serde(rename = "use", default, skip_serializing_if = "Vec::is_empty")]
    pub handlers: Vec<String>,

    /// Built-in asset module type, e.g. `asset`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<RuleParser>,
}

/// Parser options attached to an asset rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleParser {
    pub data_url_condition: DataUrlCondition,
}

/// Inline assets below `max_size` bytes as data URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataUrlCondition {
    pub max_size: u64,
}

impl Rule {
    /// Create a rule matching `test` with no handlers.
    pub fn new(test: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            include: None,
            exclude: None,
            issuer: None,
            handlers: Vec::new(),
            asset_type: None,
            parser: None,
        }
    }

    pub fn include(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include = Some(dir.into());
        self
    }

    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }

    pub fn issuer(mut self, pattern: impl Into<String>) -> Self {
        self.issuer = Some(pattern.into());
        self
    }

    /// Append handlers; they run in the order given.
    pub fn handlers<I, S>(mut self, handlers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.handlers.extend(handlers.into_iter().map(Into::into));
        self
    }

    pub fn asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = Some(asset_type.into());
        self
    }

    /// Inline matching assets smaller than `max_size` bytes.
    pub fn inline_below(mut self, max_size: u64) -> Self {
        self.parser = Some(RuleParser {
            data_url_condition: DataUrlCondition { max_size },
        });
        self
    }

    /// Whether this rule applies to `resource` imported from `issuer`.
    ///
    /// A rule with an issuer condition never applies when the importer is
    /// unknown.
    pub fn applies_to(&self, resource: &Path, issuer: Option<&Path>) -> Result<bool> {
        let resource_str = resource.to_string_lossy();

        if !compile(&self.test)?.is_match(&resource_str) {
            return Ok(false);
        }
        if let Some(include) = &self.include {
            if !resource.starts_with(include) {
                return Ok(false);
            }
        }
        if let Some(exclude) = &self.exclude {
            if compile(exclude)?.is_match(&resource_str) {
                return Ok(false);
            }
        }
        if let Some(issuer_pattern) = &self.issuer {
            let Some(issuer) = issuer else {
                return Ok(false);
            };
            if !compile(issuer_pattern)?.is_match(&issuer.to_string_lossy()) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Check every pattern in the rule compiles.
    pub fn validate(&self) -> Result<()> {
        compile(&self.test)?;
        for pattern in [&self.exclude, &self.issuer].into_iter().flatten() {
            compile(pattern)?;
        }
        Ok(())
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_must_match() {
        let rule = Rule::new(r"\.css$");
        assert!(rule.applies_to(Path::new("/app/src/site.css"), None).unwrap());
        assert!(!rule.applies_to(Path::new("/app/src/site.scss.map"), None).unwrap());
    }

    #[test]
    fn include_restricts_to_directory() {
        let rule = Rule::new(r"\.tsx?$").include("/app/src");
        assert!(rule.applies_to(Path::new("/app/src/index.tsx"), None).unwrap());
        assert!(!rule.applies_to(Path::new("/app/scripts/build.ts"), None).unwrap());
    }

    #[test]
    fn exclude_wins_over_test() {
        let rule = Rule::new(r"\.tsx?$").exclude("node_modules");
        assert!(
            !rule
                .applies_to(Path::new("/app/node_modules/lib/index.ts"), None)
                .unwrap()
        );
    }

    #[test]
    fn issuer_requires_known_importer() {
        let rule = Rule::new(r"\.svg$").issuer(r"\.tsx?$");
        let icon = Path::new("/app/src/icon.svg");

        assert!(rule.applies_to(icon, Some(Path::new("/app/src/App.tsx"))).unwrap());
        assert!(!rule.applies_to(icon, Some(Path::new("/app/src/site.css"))).unwrap());
        assert!(!rule.applies_to(icon, None).unwrap());
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let rule = Rule::new(r"\.(css$");
        let err = rule.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == r"\.(css$"));
    }

    #[test]
    fn serializes_with_bundler_field_names() {
        let rule = Rule::new(r"\.png$")
            .asset_type("asset")
            .inline_below(1024)
            .handlers(["a-loader"]);
        let value = serde_json::to_value(&rule).unwrap();

        assert_eq!(value["type"], "asset");
        assert_eq!(value["use"], serde_json::json!(["a-loader"]));
        assert_eq!(value["parser"]["dataUrlCondition"]["maxSize"], 1024);
        assert!(value.get("include").is_none());
    }
}
