use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// ApisixTls binds a certificate secret to a set of hosts.
///
/// Reference: [ApisixTls/v2](https://apisix.apache.org/docs/ingress-controller/references/apisix_tls_v2/)
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(kind = "ApisixTls", group = "apisix.apache.org", version = "v2", namespaced, derive = "PartialEq")]
pub struct ApisixTlsSpec {
    pub hosts: Vec<String>,
    pub secret: ApisixSecret,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixSecret {
    pub name: String,
    pub namespace: String,
}
