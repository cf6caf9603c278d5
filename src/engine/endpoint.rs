//! Endpoint template resolution
//!
//! Validates required filter keys and substitutes `{token}` placeholders in
//! an endpoint template with percent-encoded filter values. The template scan
//! is the authoritative source of truth: a token that appears in the template
//! needs a value even if the descriptor's required list under-declares it.

use crate::core::error::{VendoError, VendoResult};
use crate::core::query::QueryMap;
use crate::engine::descriptor::EntityDescriptor;

/// A fully resolved endpoint: the path plus the residual query parameters
///
/// Keys consumed as path placeholders are removed from the residual query
/// map; a value already baked into the path is not repeated as a query
/// parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEndpoint {
    /// Resolved path, guaranteed to contain no literal `{token}`
    pub path: String,

    /// Remaining query-string parameters
    pub query: QueryMap,
}

/// Resolve a descriptor's endpoint template against a query map
///
/// Every required filter key and every `{token}` in the template must be
/// present with a non-blank value; all missing keys are reported together in
/// a single [`VendoError::MissingRequiredFilter`].
pub fn resolve(descriptor: &EntityDescriptor, query: &QueryMap) -> VendoResult<ResolvedEndpoint> {
    let tokens = scan_tokens(&descriptor.endpoint).map_err(|message| VendoError::Config {
        message: format!("entity '{}': {}", descriptor.entity, message),
    })?;

    let mut missing: Vec<String> = Vec::new();
    for key in &descriptor.required_filters {
        if !query.has_non_blank(key) {
            missing.push(key.clone());
        }
    }
    for token in &tokens {
        if !query.has_non_blank(token)
            && !missing.iter().any(|k| k.eq_ignore_ascii_case(token))
        {
            missing.push(token.clone());
        }
    }
    if !missing.is_empty() {
        return Err(VendoError::MissingRequiredFilter {
            entity: descriptor.entity.clone(),
            missing,
        });
    }

    let mut path = descriptor.endpoint.clone();
    let mut residual = query.clone();
    for token in &tokens {
        // Safe to unwrap-by-construction: validated non-blank above
        let value = residual.remove(token).unwrap_or_default();
        let encoded = urlencoding::encode(value.trim()).into_owned();
        path = path.replace(&format!("{{{}}}", token), &encoded);
    }

    Ok(ResolvedEndpoint {
        path,
        query: residual,
    })
}

/// Collect placeholder token names from a template, in order of appearance
fn scan_tokens(template: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            return Err(format!("unbalanced '{{' in endpoint template '{}'", template));
        };
        let token = &after[..close];
        if token.is_empty() {
            return Err(format!("empty placeholder in endpoint template '{}'", template));
        }
        if !tokens.iter().any(|t: &String| t == token) {
            tokens.push(token.to_string());
        }
        rest = &after[close + 1..];
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::descriptor::EntityDescriptor;

    fn variations_descriptor() -> EntityDescriptor {
        EntityDescriptor::new("productVariations", "products/{productId}/variations")
            .root("variations")
            .require("productId")
    }

    #[test]
    fn test_resolve_plain_endpoint() {
        let descriptor = EntityDescriptor::new("products", "products");
        let resolved = resolve(&descriptor, &QueryMap::new()).unwrap();
        assert_eq!(resolved.path, "products");
        assert!(resolved.query.is_empty());
    }

    #[test]
    fn test_resolve_substitutes_placeholder() {
        let mut query = QueryMap::new();
        query.insert("productId", "42");
        let resolved = resolve(&variations_descriptor(), &query).unwrap();
        assert_eq!(resolved.path, "products/42/variations");
        assert!(!resolved.path.contains('{'));
    }

    #[test]
    fn test_resolve_missing_required_filter() {
        let err = resolve(&variations_descriptor(), &QueryMap::new()).unwrap_err();
        match err {
            VendoError::MissingRequiredFilter { entity, missing } => {
                assert_eq!(entity, "productVariations");
                assert_eq!(missing, vec!["productId"]);
            }
            other => panic!("expected MissingRequiredFilter, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_reports_all_missing_keys_at_once() {
        let descriptor = EntityDescriptor::new("lineItems", "stores/{storeId}/orders/{orderId}/items")
            .require("storeId")
            .require("orderId");
        let err = resolve(&descriptor, &QueryMap::new()).unwrap_err();
        match err {
            VendoError::MissingRequiredFilter { missing, .. } => {
                assert_eq!(missing, vec!["storeId", "orderId"]);
            }
            other => panic!("expected MissingRequiredFilter, got {:?}", other),
        }
    }

    #[test]
    fn test_undeclared_template_token_is_still_required() {
        // Template references {orderId} but the descriptor never declares it
        let descriptor = EntityDescriptor::new("orderNotes", "orders/{orderId}/notes");
        let err = resolve(&descriptor, &QueryMap::new()).unwrap_err();
        match err {
            VendoError::MissingRequiredFilter { missing, .. } => {
                assert_eq!(missing, vec!["orderId"]);
            }
            other => panic!("expected MissingRequiredFilter, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut query = QueryMap::new();
        query.insert("productId", "   ");
        let err = resolve(&variations_descriptor(), &query).unwrap_err();
        assert!(matches!(err, VendoError::MissingRequiredFilter { .. }));
    }

    #[test]
    fn test_consumed_key_removed_from_residual_query() {
        let mut query = QueryMap::new();
        query.insert("productId", "42");
        query.insert("status", "active");
        let resolved = resolve(&variations_descriptor(), &query).unwrap();
        assert_eq!(resolved.query.get("productId"), None);
        assert_eq!(resolved.query.get("status"), Some("active"));
    }

    #[test]
    fn test_placeholder_value_is_percent_encoded() {
        let descriptor = EntityDescriptor::new("files", "folders/{folderName}/files");
        let mut query = QueryMap::new();
        query.insert("folderName", "a b/c");
        let resolved = resolve(&descriptor, &query).unwrap();
        assert_eq!(resolved.path, "folders/a%20b%2Fc/files");
    }

    #[test]
    fn test_repeated_token_substituted_everywhere() {
        let descriptor = EntityDescriptor::new("compare", "items/{id}/compare/{id}");
        let mut query = QueryMap::new();
        query.insert("id", "7");
        let resolved = resolve(&descriptor, &query).unwrap();
        assert_eq!(resolved.path, "items/7/compare/7");
    }

    #[test]
    fn test_unbalanced_brace_is_config_error() {
        let descriptor = EntityDescriptor::new("bad", "items/{id");
        let err = resolve(&descriptor, &QueryMap::new()).unwrap_err();
        assert!(matches!(err, VendoError::Config { .. }));
    }

    #[test]
    fn test_scan_tokens_order_and_dedup() {
        let tokens = scan_tokens("a/{x}/b/{y}/c/{x}").unwrap();
        assert_eq!(tokens, vec!["x", "y"]);
    }
}
