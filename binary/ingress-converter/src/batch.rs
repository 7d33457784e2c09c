use std::{ops::AddAssign, path::Path};

use futures_util::future::join_all;
use ingress_converter_config::{
    service::{
        fs::{
            model::{decode_document, Decoded},
            resource_stem, tls_resource_stem,
        },
        Create, Retrieve,
    },
    BoxResult, ConvertConfig, Ingress,
};
use ingress_converter_kernel::{build_route, build_tls};
use kube::ResourceExt;
use tracing::{debug, info, warn};

/// Outcome counters of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl AddAssign for Summary {
    fn add_assign(&mut self, rhs: Self) {
        self.converted += rhs.converted;
        self.skipped += rhs.skipped;
        self.failed += rhs.failed;
    }
}

/// Convert every manifest the service yields.
///
/// Files are processed concurrently, documents of a file in order. A failing document or file
/// is logged and counted, the others go on.
pub async fn run<S>(service: &S, config: &ConvertConfig, with_tls: bool) -> BoxResult<Summary>
where
    S: Retrieve + Create,
{
    let paths = service.retrieve_manifest_paths().await?;
    info!("found {} manifest files", paths.len());
    let mut summary = Summary::default();
    for file_summary in join_all(paths.iter().map(|path| convert_file(service, path, config, with_tls))).await {
        summary += file_summary;
    }
    info!("converted: {}, skipped: {}, failed: {}", summary.converted, summary.skipped, summary.failed);
    Ok(summary)
}

async fn convert_file<S>(service: &S, path: &Path, config: &ConvertConfig, with_tls: bool) -> Summary
where
    S: Retrieve + Create,
{
    let mut summary = Summary::default();
    let documents = match service.retrieve_documents(path).await {
        Ok(documents) => documents,
        Err(e) => {
            warn!("fail to read {path:?}: {e}");
            summary.failed += 1;
            return summary;
        }
    };
    for (index, document) in documents.iter().enumerate() {
        match decode_document(document) {
            Ok(Decoded::Ingress(ingress)) => summary += convert_ingress(service, &ingress, config, with_tls).await,
            Ok(Decoded::Other(meta)) => {
                debug!("{path:?}#{index}: {} {} is not an ingress, skipped", meta.api_version, meta.kind);
                summary.skipped += 1;
            }
            Err(e) => {
                warn!("{path:?}#{index}: fail to decode document: {e}");
                summary.failed += 1;
            }
        }
    }
    summary
}

async fn convert_ingress<S>(service: &S, ingress: &Ingress, config: &ConvertConfig, with_tls: bool) -> Summary
where
    S: Create,
{
    let mut summary = Summary::default();
    let namespace = ingress.namespace();
    let name = ingress.name_any();
    let route = match build_route(ingress, config) {
        Ok(route) => route,
        Err(e) => {
            warn!("fail to convert ingress: {e}");
            summary.failed += 1;
            return summary;
        }
    };
    match service.create_resource(&resource_stem(namespace.as_deref(), &name), &route).await {
        Ok(saved) => {
            info!("ingress {name} converted into {saved:?}");
            summary.converted += 1;
        }
        Err(e) => {
            warn!("fail to save route of ingress {name}: {e}");
            summary.failed += 1;
        }
    }
    if with_tls {
        for tls in build_tls(ingress) {
            let stem = tls_resource_stem(namespace.as_deref(), &tls.name_any());
            match service.create_resource(&stem, &tls).await {
                Ok(saved) => {
                    info!("tls of ingress {name} converted into {saved:?}");
                    summary.converted += 1;
                }
                Err(e) => {
                    warn!("fail to save tls {stem}: {e}");
                    summary.failed += 1;
                }
            }
        }
    }
    summary
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::*;
    use ingress_converter_config::service::fs::model::split_documents;
    use serde_json::json;

    /// In memory manifests, resources are kept as json in write order.
    #[derive(Debug, Default)]
    struct Memory {
        files: std::collections::BTreeMap<PathBuf, String>,
        created: std::sync::Mutex<Vec<(String, serde_json::Value)>>,
    }

    impl Retrieve for Memory {
        async fn retrieve_manifest_paths(&self) -> BoxResult<Vec<PathBuf>> {
            Ok(self.files.keys().cloned().collect())
        }

        async fn retrieve_documents(&self, path: &Path) -> BoxResult<Vec<String>> {
            let content = self.files.get(path).ok_or_else(|| format!("{path:?} not found"))?;
            Ok(split_documents(content))
        }
    }

    impl Create for Memory {
        async fn create_resource<T: serde::Serialize + Sync>(&self, stem: &str, resource: &T) -> BoxResult<PathBuf> {
            let value = serde_json::to_value(resource)?;
            self.created.lock().map_err(|e| e.to_string())?.push((stem.to_string(), value));
            Ok(PathBuf::from(format!("{stem}.json")))
        }
    }

    const GOOD: &str = r#"
apiVersion: networking.k8s.io/v1
kind: Ingress
metadata:
  name: web
  namespace: shop
  annotations:
    nginx.ingress.kubernetes.io/enable-cors: "true"
spec:
  tls:
    - hosts: ["a.com"]
      secretName: a-cert
  rules:
    - host: a.com
      http:
        paths:
          - path: /app(/|$)(.*)
            pathType: ImplementationSpecific
            backend:
              service:
                name: svc1
                port:
                  number: 80
---
apiVersion: v1
kind: Service
metadata:
  name: svc1
---
apiVersion: networking.k8s.io/v1
kind: Ingress
metadata:
  name: empty
spec: {}
"#;

    fn memory() -> Memory {
        let mut memory = Memory::default();
        memory.files.insert(PathBuf::from("good.yaml"), GOOD.to_string());
        memory.files.insert(PathBuf::from("broken.yaml"), "apiVersion: [unclosed".to_string());
        memory
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_the_batch() {
        let memory = memory();
        let summary = run(&memory, &ConvertConfig::default(), false).await.expect("batch should finish");
        assert_eq!(
            summary,
            Summary {
                converted: 1,
                skipped: 1,
                failed: 2,
            }
        );
        let created = memory.created.lock().expect("lock");
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].0, "shop-web");
        assert_eq!(created[0].1["spec"]["http"][0]["match"]["paths"], json!(["/app/*"]));
    }

    #[tokio::test]
    async fn test_with_tls() {
        let memory = memory();
        let summary = run(&memory, &ConvertConfig::default(), true).await.expect("batch should finish");
        assert_eq!(summary.converted, 2);
        let created = memory.created.lock().expect("lock");
        let stems = created.iter().map(|(stem, _)| stem.as_str()).collect::<Vec<_>>();
        assert_eq!(stems, vec!["shop-web", "tls/shop-web-a-cert"]);
        assert_eq!(created[1].1["kind"], json!("ApisixTls"));
        assert_eq!(created[1].1["spec"]["secret"], json!({ "name": "a-cert", "namespace": "shop" }));
    }

    #[tokio::test]
    async fn test_failed_ingress_emits_no_tls() {
        let mut memory = Memory::default();
        memory.files.insert(
            PathBuf::from("rule-less.yaml"),
            r#"
apiVersion: networking.k8s.io/v1
kind: Ingress
metadata:
  name: web
  namespace: ns
spec:
  tls:
    - hosts: ["a.com"]
      secretName: cert
"#
            .to_string(),
        );
        let summary = run(&memory, &ConvertConfig::default(), true).await.expect("batch should finish");
        assert_eq!(
            summary,
            Summary {
                converted: 0,
                skipped: 0,
                failed: 1,
            }
        );
        assert!(memory.created.lock().expect("lock").is_empty());
    }
}
