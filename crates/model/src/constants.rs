//! Annotation keys, plugin names and defaults.
//!
//! Every key the translator recognizes is declared here and nowhere else.

pub const INGRESS_API_VERSION: &str = "networking.k8s.io/v1";
pub const INGRESS_KIND: &str = "Ingress";
pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_PATH: &str = "/";

// nginx-ingress
pub const ANNOTATION_REWRITE_TARGET: &str = "nginx.ingress.kubernetes.io/rewrite-target";
pub const ANNOTATION_SSL_REDIRECT: &str = "nginx.ingress.kubernetes.io/ssl-redirect";
pub const ANNOTATION_FORCE_SSL_REDIRECT: &str = "nginx.ingress.kubernetes.io/force-ssl-redirect";
pub const ANNOTATION_ENABLE_CORS: &str = "nginx.ingress.kubernetes.io/enable-cors";
pub const ANNOTATION_CORS_ALLOW_METHODS: &str = "nginx.ingress.kubernetes.io/cors-allow-methods";
pub const ANNOTATION_CORS_ALLOW_ORIGIN: &str = "nginx.ingress.kubernetes.io/cors-allow-origin";
pub const ANNOTATION_CORS_ALLOW_HEADERS: &str = "nginx.ingress.kubernetes.io/cors-allow-headers";
pub const ANNOTATION_CORS_EXPOSE_HEADERS: &str = "nginx.ingress.kubernetes.io/cors-expose-headers";
pub const ANNOTATION_CORS_MAX_AGE: &str = "nginx.ingress.kubernetes.io/cors-max-age";
pub const ANNOTATION_LIMIT_RPS: &str = "nginx.ingress.kubernetes.io/limit-rps";
/// Legacy ingress class selector, superseded by `spec.ingressClassName`.
pub const ANNOTATION_INGRESS_CLASS: &str = "kubernetes.io/ingress.class";

// apisix generic plugin schemes
pub const ANNOTATION_PLUGIN_PREFIX: &str = "k8s.apisix.apache.org/plugin-";
pub const ANNOTATION_PLUGIN_CONFIG_PREFIX: &str = "k8s.apisix.apache.org/plugin-config-";
pub const ANNOTATION_INLINE_PLUGIN_PREFIX: &str = "plugins.apisix.apache.org/";

pub const ANNOTATION_VALUE_TRUE: &str = "true";

// plugin names
pub const PLUGIN_PROXY_REWRITE: &str = "proxy-rewrite";
pub const PLUGIN_REDIRECT: &str = "redirect";
pub const PLUGIN_CORS: &str = "cors";
pub const PLUGIN_LIMIT_REQ: &str = "limit-req";

pub const PLUGIN_RAW_VALUE_KEY: &str = "value";

pub const DEFAULT_REWRITE_REGEX: &str = "/api/(.*)";

pub const CORS_DEFAULT_ALLOW_ORIGINS: &str = "*";
pub const CORS_DEFAULT_ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";
pub const CORS_DEFAULT_ALLOW_HEADERS: &str = "*";
pub const CORS_DEFAULT_EXPOSE_HEADERS: &str = "*";
pub const CORS_DEFAULT_MAX_AGE: i64 = 5;
pub const CORS_DEFAULT_ALLOW_CREDENTIALS: bool = true;

pub const LIMIT_REQ_DEFAULT_BURST: i64 = 0;
pub const LIMIT_REQ_REJECTED_CODE: u16 = 503;
