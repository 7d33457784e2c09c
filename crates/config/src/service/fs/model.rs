use kube::core::TypeMeta;

use crate::{
    constants::{INGRESS_API_VERSION, INGRESS_KIND},
    BoxResult, Ingress,
};

/// A decoded YAML document.
#[derive(Debug, Clone)]
pub enum Decoded {
    Ingress(Box<Ingress>),
    /// Any other kubernetes object, including ingresses of an unsupported api version.
    Other(TypeMeta),
}

/// Split a multi document YAML text on its `---` separator lines.
///
/// Blank and comment-only documents are dropped.
pub fn split_documents(content: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current = String::new();
    for line in content.lines() {
        let separator = line.trim_end() == "---" || line.starts_with("--- ");
        if separator {
            push_document(&mut documents, std::mem::take(&mut current));
            if let Some(rest) = line.strip_prefix("--- ") {
                current.push_str(rest);
                current.push('\n');
            }
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }
    push_document(&mut documents, current);
    documents
}

fn push_document(documents: &mut Vec<String>, document: String) {
    let has_content = document.lines().map(str::trim).any(|line| !line.is_empty() && !line.starts_with('#'));
    if has_content {
        documents.push(document);
    }
}

/// Decode one YAML document.
///
/// # Errors
/// When the document is not valid YAML or does not carry `apiVersion` and `kind`.
pub fn decode_document(document: &str) -> BoxResult<Decoded> {
    let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(document)?;
    let type_meta: TypeMeta = serde_yaml_ng::from_value(value.clone())?;
    if type_meta.kind == INGRESS_KIND && type_meta.api_version == INGRESS_API_VERSION {
        let ingress: Ingress = serde_yaml_ng::from_value(value)?;
        Ok(Decoded::Ingress(Box::new(ingress)))
    } else {
        Ok(Decoded::Other(type_meta))
    }
}
