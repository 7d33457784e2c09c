use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ApisixPlugin;

/// ApisixRoute routes HTTP traffic to kubernetes services through APISIX.
///
/// Reference: [ApisixRoute/v2](https://apisix.apache.org/docs/ingress-controller/references/apisix_route_v2/)
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(kind = "ApisixRoute", group = "apisix.apache.org", version = "v2", namespaced, derive = "PartialEq")]
pub struct ApisixRouteSpec {
    /// Copied from the source Ingress `spec.ingressClassName`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress_class_name: Option<String>,
    /// HTTP route entries, one for each host and path of the source.
    pub http: Vec<ApisixHttpRoute>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixHttpRoute {
    /// `{ingress name}-{backend service name}`, may repeat within one route.
    pub name: String,
    pub r#match: ApisixRouteMatch,
    pub backends: Vec<ApisixBackend>,
    /// Ordered plugin list.
    ///
    /// # Notice!
    /// names are not unique, see [`crate::DuplicatePolicy`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<ApisixPlugin>,
}

/// Match conditions, all of them are ANDed together.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixRouteMatch {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,
    pub paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub method: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixBackend {
    pub service_name: String,
    pub service_port: ServicePort,
    /// Unset unless traffic is split between several backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl ApisixBackend {
    pub fn new(service_name: impl Into<String>, service_port: impl Into<ServicePort>) -> Self {
        Self {
            service_name: service_name.into(),
            service_port: service_port.into(),
            weight: None,
        }
    }
}

/// A service port, referenced either by number or by name.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ServicePort {
    Number(i32),
    Name(String),
}

impl From<i32> for ServicePort {
    fn from(value: i32) -> Self {
        ServicePort::Number(value)
    }
}

impl From<String> for ServicePort {
    fn from(value: String) -> Self {
        ServicePort::Name(value)
    }
}

impl std::fmt::Display for ServicePort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServicePort::Number(number) => write!(f, "{number}"),
            ServicePort::Name(name) => write!(f, "{name}"),
        }
    }
}
