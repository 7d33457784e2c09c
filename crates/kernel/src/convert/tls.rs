use ingress_converter_model::{constants::DEFAULT_NAMESPACE, ApisixSecret, ApisixTls, ApisixTlsSpec, Ingress};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::ResourceExt;
use tracing::debug;

/// Build one [`ApisixTls`] for each `spec.tls` entry of the ingress that names a secret.
///
/// The resources are named `{ingress}-{secret}` and live in the ingress namespace.
pub fn build_tls(ingress: &Ingress) -> Vec<ApisixTls> {
    let name = ingress.name_any();
    let namespace = ingress.namespace();
    ingress
        .spec
        .iter()
        .flat_map(|spec| spec.tls.iter().flatten())
        .filter_map(|tls| {
            let Some(secret_name) = tls.secret_name.as_ref().filter(|secret| !secret.is_empty()) else {
                debug!("[{name}] tls entry for {:?} has no secret, skipped", tls.hosts);
                return None;
            };
            Some(ApisixTls {
                metadata: ObjectMeta {
                    name: Some(format!("{name}-{secret_name}")),
                    namespace: namespace.clone(),
                    ..Default::default()
                },
                spec: ApisixTlsSpec {
                    hosts: tls.hosts.clone().unwrap_or_default(),
                    secret: ApisixSecret {
                        name: secret_name.clone(),
                        namespace: namespace.clone().unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
                    },
                },
            })
        })
        .collect()
}
