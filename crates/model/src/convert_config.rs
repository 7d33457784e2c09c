use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunables of the annotation translator.
///
/// Every field has a default, an empty config file is a valid config.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConvertConfig {
    /// Payload shape of the `proxy-rewrite` plugin.
    pub rewrite: RewriteStyle,
    /// Generic plugin annotation schemes, evaluated in order.
    ///
    /// The first one is the authoritative scheme.
    pub generic_plugins: Vec<GenericPluginScheme>,
    /// What to do with plugins sharing a name within one route entry.
    pub duplicate_plugins: DuplicatePolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            rewrite: RewriteStyle::default(),
            generic_plugins: vec![GenericPluginScheme::toggle(), GenericPluginScheme::inline()],
            duplicate_plugins: DuplicatePolicy::default(),
        }
    }
}

/// How `nginx.ingress.kubernetes.io/rewrite-target` is expressed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RewriteStyle {
    /// `{"regex_uri": [pattern, target]}`
    RegexUri { pattern: String },
    /// `{"uri": target}`
    Uri,
}

impl Default for RewriteStyle {
    fn default() -> Self {
        RewriteStyle::RegexUri {
            pattern: constants::DEFAULT_REWRITE_REGEX.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenericPluginScheme {
    /// `<prefix><name>: "true"` enables the plugin, the optional `<config_prefix><name>` carries its JSON config.
    Toggle { prefix: String, config_prefix: String },
    /// `<prefix><name>: <raw>` enables the plugin with config `{"value": <raw>}`.
    Inline { prefix: String },
}

impl GenericPluginScheme {
    pub fn toggle() -> Self {
        GenericPluginScheme::Toggle {
            prefix: constants::ANNOTATION_PLUGIN_PREFIX.to_string(),
            config_prefix: constants::ANNOTATION_PLUGIN_CONFIG_PREFIX.to_string(),
        }
    }
    pub fn inline() -> Self {
        GenericPluginScheme::Inline {
            prefix: constants::ANNOTATION_INLINE_PLUGIN_PREFIX.to_string(),
        }
    }
    pub fn prefix(&self) -> &str {
        match self {
            GenericPluginScheme::Toggle { prefix, .. } => prefix,
            GenericPluginScheme::Inline { prefix } => prefix,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep every plugin, in emission order.
    #[default]
    Append,
    /// Keep the first plugin of each name.
    FirstWins,
    /// Keep the last plugin of each name, at the position it was emitted.
    LastWins,
}
