use std::collections::{BTreeMap, HashSet};

use ingress_converter_model::{
    constants::{self, *},
    ApisixPlugin, ConvertConfig, DuplicatePolicy, GenericPluginScheme, PluginConfigMap, RewriteStyle,
};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Translate ingress annotations into an ordered APISIX plugin list.
///
/// Rules are applied in a fixed order: rewrite, ssl redirect, cors, rate limit, then every
/// generic plugin scheme of `config` in turn. Rules are independent, several may fire for one map.
/// Generic plugin keys are visited in sorted order, so the output is deterministic.
///
/// Never fails: a malformed value falls back to a default and translation goes on.
pub fn translate_annotations(annotations: &BTreeMap<String, String>, config: &ConvertConfig) -> Vec<ApisixPlugin> {
    let mut plugins = Vec::new();
    plugins.extend(rewrite_plugin(annotations, &config.rewrite));
    plugins.extend(ssl_redirect_plugin(annotations));
    plugins.extend(cors_plugin(annotations));
    plugins.extend(limit_req_plugin(annotations));
    for scheme in &config.generic_plugins {
        generic_plugins(annotations, scheme, &mut plugins);
    }
    dedup_plugins(plugins, config.duplicate_plugins)
}

fn is_true(annotations: &BTreeMap<String, String>, key: &str) -> bool {
    annotations.get(key).is_some_and(|value| value == ANNOTATION_VALUE_TRUE)
}

fn rewrite_plugin(annotations: &BTreeMap<String, String>, style: &RewriteStyle) -> Option<ApisixPlugin> {
    let target = annotations.get(ANNOTATION_REWRITE_TARGET)?;
    let config = match style {
        RewriteStyle::RegexUri { pattern } => json!({ "regex_uri": [pattern, target] }),
        RewriteStyle::Uri => json!({ "uri": target }),
    };
    Some(ApisixPlugin::from_value(PLUGIN_PROXY_REWRITE, config))
}

fn ssl_redirect_plugin(annotations: &BTreeMap<String, String>) -> Option<ApisixPlugin> {
    (is_true(annotations, ANNOTATION_SSL_REDIRECT) || is_true(annotations, ANNOTATION_FORCE_SSL_REDIRECT))
        .then(|| ApisixPlugin::from_value(PLUGIN_REDIRECT, json!({ "http_to_https": true })))
}

fn cors_plugin(annotations: &BTreeMap<String, String>) -> Option<ApisixPlugin> {
    if !is_true(annotations, ANNOTATION_ENABLE_CORS) {
        return None;
    }
    let text = |key: &str, default: &str| -> Value { annotations.get(key).map_or(default, String::as_str).into() };
    let max_age = match annotations.get(ANNOTATION_CORS_MAX_AGE) {
        Some(raw) => raw.trim().parse::<i64>().unwrap_or_else(|e| {
            warn!("invalid {ANNOTATION_CORS_MAX_AGE} value {raw:?}: {e}, use default {CORS_DEFAULT_MAX_AGE}");
            CORS_DEFAULT_MAX_AGE
        }),
        None => CORS_DEFAULT_MAX_AGE,
    };
    let mut config = PluginConfigMap::new();
    config.insert("allow_origins".to_string(), text(ANNOTATION_CORS_ALLOW_ORIGIN, CORS_DEFAULT_ALLOW_ORIGINS));
    config.insert("allow_methods".to_string(), text(ANNOTATION_CORS_ALLOW_METHODS, CORS_DEFAULT_ALLOW_METHODS));
    config.insert("allow_headers".to_string(), text(ANNOTATION_CORS_ALLOW_HEADERS, CORS_DEFAULT_ALLOW_HEADERS));
    config.insert("expose_headers".to_string(), text(ANNOTATION_CORS_EXPOSE_HEADERS, CORS_DEFAULT_EXPOSE_HEADERS));
    config.insert("max_age".to_string(), max_age.into());
    config.insert("allow_credentials".to_string(), CORS_DEFAULT_ALLOW_CREDENTIALS.into());
    Some(ApisixPlugin::new(PLUGIN_CORS, config))
}

fn limit_req_plugin(annotations: &BTreeMap<String, String>) -> Option<ApisixPlugin> {
    // the rate is carried as opaque text, APISIX validates it
    let rate = annotations.get(ANNOTATION_LIMIT_RPS)?;
    Some(ApisixPlugin::from_value(
        PLUGIN_LIMIT_REQ,
        json!({
            "rate": rate,
            "burst": LIMIT_REQ_DEFAULT_BURST,
            "rejected_code": LIMIT_REQ_REJECTED_CODE,
        }),
    ))
}

fn generic_plugins(annotations: &BTreeMap<String, String>, scheme: &GenericPluginScheme, plugins: &mut Vec<ApisixPlugin>) {
    match scheme {
        GenericPluginScheme::Toggle { prefix, config_prefix } => {
            for (key, value) in annotations {
                if !config_prefix.is_empty() && key.starts_with(config_prefix.as_str()) {
                    continue;
                }
                let Some(name) = key.strip_prefix(prefix.as_str()).filter(|name| !name.is_empty()) else {
                    continue;
                };
                if value != ANNOTATION_VALUE_TRUE {
                    debug!("plugin {name} not enabled by {key}={value:?}");
                    continue;
                }
                let config = match annotations.get(&format!("{config_prefix}{name}")) {
                    Some(raw) => serde_json::from_str::<PluginConfigMap>(raw).unwrap_or_else(|e| {
                        debug!("config of plugin {name} is not a json object ({e}), keep it as raw value");
                        ApisixPlugin::raw_value_config(raw.as_str())
                    }),
                    None => PluginConfigMap::new(),
                };
                plugins.push(ApisixPlugin::new(name, config));
            }
        }
        GenericPluginScheme::Inline { prefix } => {
            for (key, value) in annotations {
                let Some(name) = key.strip_prefix(prefix.as_str()).filter(|name| !name.is_empty()) else {
                    continue;
                };
                plugins.push(ApisixPlugin::new(name, ApisixPlugin::raw_value_config(value.as_str())));
            }
        }
    }
}

fn dedup_plugins(plugins: Vec<ApisixPlugin>, policy: DuplicatePolicy) -> Vec<ApisixPlugin> {
    match policy {
        DuplicatePolicy::Append => plugins,
        DuplicatePolicy::FirstWins => {
            let mut seen = HashSet::new();
            plugins.into_iter().filter(|plugin| seen.insert(plugin.name.clone())).collect()
        }
        DuplicatePolicy::LastWins => {
            let mut seen = HashSet::new();
            let mut kept = plugins.into_iter().rev().filter(|plugin| seen.insert(plugin.name.clone())).collect::<Vec<_>>();
            kept.reverse();
            kept
        }
    }
}

/// Whether `key` is an annotation the translator acts on.
pub fn is_recognized(key: &str, config: &ConvertConfig) -> bool {
    const WELL_KNOWN: [&str; 10] = [
        constants::ANNOTATION_REWRITE_TARGET,
        constants::ANNOTATION_SSL_REDIRECT,
        constants::ANNOTATION_FORCE_SSL_REDIRECT,
        constants::ANNOTATION_ENABLE_CORS,
        constants::ANNOTATION_CORS_ALLOW_METHODS,
        constants::ANNOTATION_CORS_ALLOW_ORIGIN,
        constants::ANNOTATION_CORS_ALLOW_HEADERS,
        constants::ANNOTATION_CORS_EXPOSE_HEADERS,
        constants::ANNOTATION_CORS_MAX_AGE,
        constants::ANNOTATION_LIMIT_RPS,
    ];
    WELL_KNOWN.contains(&key) || config.generic_plugins.iter().any(|scheme| key.starts_with(scheme.prefix()))
}
