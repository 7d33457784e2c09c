const WILDCARD_SUFFIX: &str = "/*";
const NGINX_SEGMENT_CAPTURE: &str = "(/|$)";
const NGINX_REST_CAPTURE: &str = "(.*)";

/// Convert an ingress path into an APISIX path.
///
/// Only the nginx capture idiom `/prefix(/|$)(.*)` is recognized and turned into `/prefix/*`.
/// Any other regex syntax passes through untouched and will most likely not match on APISIX.
pub fn normalize_path(path: &str) -> String {
    if path.ends_with(WILDCARD_SUFFIX) {
        return path.to_string();
    }
    if path.contains(NGINX_SEGMENT_CAPTURE) {
        let mut stripped = path.replace(NGINX_SEGMENT_CAPTURE, "").replace(NGINX_REST_CAPTURE, "");
        stripped.push_str(WILDCARD_SUFFIX);
        return stripped;
    }
    path.to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/foo/*"), "/foo/*");
        assert_eq!(normalize_path("/foo(/|$)(.*)"), "/foo/*");
        assert_eq!(normalize_path("/exact"), "/exact");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn test_only_known_fragments_are_stripped() {
        // the rest capture alone is not a marker
        assert_eq!(normalize_path("/foo/(.*)"), "/foo/(.*)");
        assert_eq!(normalize_path("/a(/|$)b(/|$)(.*)"), "/ab/*");
        assert_eq!(normalize_path("/v([0-9]+)(/|$)(.*)"), "/v([0-9]+)/*");
        assert_eq!(normalize_path("^/api(/|$)"), "^/api/*");
    }
}
