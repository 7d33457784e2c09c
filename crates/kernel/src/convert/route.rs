use ingress_converter_model::{
    constants::{ANNOTATION_INGRESS_CLASS, DEFAULT_PATH},
    ApisixBackend, ApisixHttpRoute, ApisixRoute, ApisixRouteMatch, ApisixRouteSpec, ConvertConfig, Ingress, ServicePort,
};
use k8s_openapi::{api::networking::v1::IngressServiceBackend, apimachinery::pkg::apis::meta::v1::ObjectMeta};
use kube::ResourceExt;
use tracing::{debug, warn};

use super::{
    annotation::{is_recognized, translate_annotations},
    path::normalize_path,
};
use crate::ConvertError;

/// Build an [`ApisixRoute`] out of an Ingress.
///
/// One http entry is produced for each path of each rule, named `{ingress}-{service}`.
/// Annotations are resource scoped, every entry carries the same plugin list.
///
/// # Errors
/// [`ConvertError::NoRules`] when the ingress declares no rule, [`ConvertError::NoRoutablePaths`]
/// when no path of any rule is backed by a service.
pub fn build_route(ingress: &Ingress, config: &ConvertConfig) -> Result<ApisixRoute, ConvertError> {
    let name = ingress.name_any();
    let Some(rules) = ingress.spec.as_ref().and_then(|spec| spec.rules.as_ref()).filter(|rules| !rules.is_empty()) else {
        return Err(ConvertError::NoRules { name });
    };
    let annotations = ingress.annotations();
    for key in annotations.keys().filter(|key| !is_recognized(key, config)) {
        debug!("[{name}] annotation {key} has no apisix counterpart, ignored");
    }

    let mut http = Vec::new();
    for rule in rules {
        let Some(rule_http) = rule.http.as_ref() else {
            debug!("[{name}] rule for host {:?} has no http paths", rule.host);
            continue;
        };
        for path in &rule_http.paths {
            let Some(service) = path.backend.service.as_ref() else {
                warn!("[{name}] path {:?} is not backed by a service, skipped", path.path);
                continue;
            };
            let source_path = path.path.as_deref().unwrap_or(DEFAULT_PATH);
            http.push(ApisixHttpRoute {
                name: format!("{name}-{}", service.name),
                r#match: ApisixRouteMatch {
                    hosts: rule.host.iter().filter(|host| !host.is_empty()).cloned().collect(),
                    paths: vec![normalize_path(source_path)],
                    method: Vec::new(),
                },
                backends: vec![ApisixBackend::new(service.name.clone(), service_port(&name, service))],
                plugins: translate_annotations(annotations, config),
            });
        }
    }
    if http.is_empty() {
        return Err(ConvertError::NoRoutablePaths { name });
    }
    debug!("[{name}] converted into {} http routes", http.len());

    let ingress_class_name = ingress.spec.as_ref().and_then(|spec| spec.ingress_class_name.clone()).or_else(|| annotations.get(ANNOTATION_INGRESS_CLASS).cloned());
    Ok(ApisixRoute {
        metadata: ObjectMeta {
            name: ingress.metadata.name.clone(),
            namespace: ingress.metadata.namespace.clone(),
            ..Default::default()
        },
        spec: ApisixRouteSpec { ingress_class_name, http },
    })
}

fn service_port(ingress_name: &str, service: &IngressServiceBackend) -> ServicePort {
    let port = service.port.as_ref();
    if let Some(number) = port.and_then(|port| port.number) {
        return ServicePort::Number(number);
    }
    if let Some(port_name) = port.and_then(|port| port.name.clone()).filter(|port_name| !port_name.is_empty()) {
        return ServicePort::Name(port_name);
    }
    warn!("[{ingress_name}] service {} has no port, fallback to 0", service.name);
    ServicePort::Number(0)
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use super::*;
    use ingress_converter_model::{constants::ANNOTATION_ENABLE_CORS, ApisixPlugin};
    use k8s_openapi::api::{
        core::v1::TypedLocalObjectReference,
        networking::v1::{HTTPIngressPath, HTTPIngressRuleValue, IngressBackend, IngressRule, IngressSpec, ServiceBackendPort},
    };
    use serde_json::json;

    fn service_path(path: &str, service: &str, port: i32) -> HTTPIngressPath {
        HTTPIngressPath {
            path: Some(path.to_string()),
            path_type: "ImplementationSpecific".to_string(),
            backend: IngressBackend {
                service: Some(IngressServiceBackend {
                    name: service.to_string(),
                    port: Some(ServiceBackendPort {
                        number: Some(port),
                        name: None,
                    }),
                }),
                resource: None,
            },
        }
    }

    fn rule(host: &str, paths: Vec<HTTPIngressPath>) -> IngressRule {
        IngressRule {
            host: Some(host.to_string()),
            http: Some(HTTPIngressRuleValue { paths }),
        }
    }

    fn ingress(rules: Vec<IngressRule>, annotations: &[(&str, &str)]) -> Ingress {
        Ingress {
            metadata: ObjectMeta {
                name: Some("web".to_string()),
                namespace: Some("default".to_string()),
                annotations: Some(annotations.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<BTreeMap<_, _>>()),
                ..Default::default()
            },
            spec: Some(IngressSpec {
                rules: Some(rules),
                ..Default::default()
            }),
            status: None,
        }
    }

    #[test]
    fn test_one_rule_two_paths() {
        let ingress = ingress(
            vec![rule("a.com", vec![service_path("/a", "svc-a", 80), service_path("/b", "svc-b", 8080)])],
            &[],
        );
        let route = build_route(&ingress, &ConvertConfig::default()).expect("should convert");
        assert_eq!(route.spec.http.len(), 2);
        for entry in &route.spec.http {
            assert_eq!(entry.backends.len(), 1);
            assert_eq!(entry.r#match.hosts, vec!["a.com".to_string()]);
            assert_eq!(entry.r#match.paths.len(), 1);
            assert!(entry.plugins.is_empty());
        }
        assert_eq!(route.spec.http[0].name, "web-svc-a");
        assert_eq!(route.spec.http[1].backends[0], ApisixBackend::new("svc-b", 8080));
    }

    #[test]
    fn test_no_rules() {
        let empty = ingress(vec![], &[]);
        assert_eq!(
            build_route(&empty, &ConvertConfig::default()),
            Err(ConvertError::NoRules { name: "web".to_string() })
        );

        let mut no_spec = empty.clone();
        no_spec.spec = None;
        assert!(matches!(build_route(&no_spec, &ConvertConfig::default()), Err(ConvertError::NoRules { .. })));
    }

    #[test]
    fn test_round_trip_scenario() {
        let ingress = ingress(vec![rule("a.com", vec![service_path("/app(/|$)(.*)", "svc1", 80)])], &[(ANNOTATION_ENABLE_CORS, "true")]);
        let route = build_route(&ingress, &ConvertConfig::default()).expect("should convert");
        assert_eq!(route.metadata.name.as_deref(), Some("web"));
        assert_eq!(route.metadata.namespace.as_deref(), Some("default"));
        assert_eq!(route.spec.http.len(), 1);
        let entry = &route.spec.http[0];
        assert_eq!(entry.name, "web-svc1");
        assert_eq!(
            entry.r#match,
            ApisixRouteMatch {
                hosts: vec!["a.com".to_string()],
                paths: vec!["/app/*".to_string()],
                method: vec![],
            }
        );
        assert_eq!(entry.backends, vec![ApisixBackend::new("svc1", 80)]);
        let cors = entry.plugins.iter().filter(|p| p.name == "cors").collect::<Vec<&ApisixPlugin>>();
        assert_eq!(cors.len(), 1);
        assert_eq!(cors[0].config.get("allow_origins"), Some(&json!("*")));
    }

    #[test]
    fn test_plugins_repeat_per_entry() {
        let ingress = ingress(
            vec![
                rule("a.com", vec![service_path("/", "svc1", 80)]),
                rule("b.com", vec![service_path("/", "svc1", 80)]),
            ],
            &[("nginx.ingress.kubernetes.io/limit-rps", "5")],
        );
        let route = build_route(&ingress, &ConvertConfig::default()).expect("should convert");
        assert_eq!(route.spec.http.len(), 2);
        // names collide across hosts, nothing is deduplicated
        assert_eq!(route.spec.http[0].name, route.spec.http[1].name);
        assert_eq!(route.spec.http[0].plugins, route.spec.http[1].plugins);
        assert_eq!(route.spec.http[1].r#match.hosts, vec!["b.com".to_string()]);
    }

    #[test]
    fn test_edge_backends() {
        let mut named_port = service_path("/named", "svc1", 0);
        if let Some(service) = named_port.backend.service.as_mut() {
            service.port = Some(ServiceBackendPort {
                name: Some("http".to_string()),
                number: None,
            });
        }
        let mut resource = service_path("/static", "unused", 0);
        resource.backend = IngressBackend {
            service: None,
            resource: Some(TypedLocalObjectReference {
                api_group: Some("k8s.example.com".to_string()),
                kind: "StorageBucket".to_string(),
                name: "static-assets".to_string(),
            }),
        };
        let mut no_path = service_path("/", "svc2", 80);
        no_path.path = None;
        let hostless = IngressRule {
            host: None,
            http: Some(HTTPIngressRuleValue {
                paths: vec![named_port, resource, no_path],
            }),
        };
        let route = build_route(&ingress(vec![hostless], &[]), &ConvertConfig::default()).expect("should convert");
        assert_eq!(route.spec.http.len(), 2);
        assert_eq!(route.spec.http[0].backends[0].service_port, ServicePort::Name("http".to_string()));
        assert!(route.spec.http[0].r#match.hosts.is_empty());
        assert_eq!(route.spec.http[1].r#match.paths, vec!["/".to_string()]);
    }

    #[test]
    fn test_no_routable_paths() {
        let no_http = IngressRule {
            host: Some("a.com".to_string()),
            http: None,
        };
        assert_eq!(
            build_route(&ingress(vec![no_http], &[]), &ConvertConfig::default()),
            Err(ConvertError::NoRoutablePaths { name: "web".to_string() })
        );
    }

    #[test]
    fn test_ingress_class_name() {
        let mut with_spec = ingress(vec![rule("a.com", vec![service_path("/", "svc1", 80)])], &[(ANNOTATION_INGRESS_CLASS, "legacy")]);
        let route = build_route(&with_spec, &ConvertConfig::default()).expect("should convert");
        assert_eq!(route.spec.ingress_class_name.as_deref(), Some("legacy"));

        if let Some(spec) = with_spec.spec.as_mut() {
            spec.ingress_class_name = Some("apisix".to_string());
        }
        let route = build_route(&with_spec, &ConvertConfig::default()).expect("should convert");
        assert_eq!(route.spec.ingress_class_name.as_deref(), Some("apisix"));
    }
}
