use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants;

/// Plugin configuration, a JSON object.
pub type PluginConfigMap = Map<String, Value>;

/// One item of `spec.http[].plugins`.
///
/// Reference: [ApisixRoute plugins](https://apisix.apache.org/docs/ingress-controller/references/apisix_route_v2/)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ApisixPlugin {
    /// Plugin name as registered in APISIX, e.g. `proxy-rewrite`.
    pub name: String,
    pub enable: bool,
    pub config: PluginConfigMap,
}

impl ApisixPlugin {
    /// Create an enabled plugin.
    pub fn new(name: impl Into<String>, config: PluginConfigMap) -> Self {
        Self {
            name: name.into(),
            enable: true,
            config,
        }
    }

    /// Create an enabled plugin from a `serde_json::json!` object.
    ///
    /// Anything but an object is wrapped as `{"value": ..}`.
    pub fn from_value(name: impl Into<String>, config: Value) -> Self {
        match config {
            Value::Object(map) => Self::new(name, map),
            other => Self::new(name, Self::raw_value_config(other)),
        }
    }

    /// The fallback configuration shape `{"value": raw}`.
    pub fn raw_value_config(raw: impl Into<Value>) -> PluginConfigMap {
        let mut map = PluginConfigMap::new();
        map.insert(constants::PLUGIN_RAW_VALUE_KEY.to_string(), raw.into());
        map
    }
}
