//! Built-in vendor profiles
//!
//! A vendor profile is nothing but data: a descriptor table plus a paging
//! convention. These two cover the common shapes — a commerce API with
//! server-side page/per_page paging and nested sub-resources, and a CRM API
//! with enveloped payloads and no native paging.

use crate::engine::descriptor::{EntityDescriptor, EntityMap};
use crate::engine::paging::PagingStrategy;

/// A descriptor table with its paging convention
#[derive(Debug, Clone)]
pub struct VendorProfile {
    pub entities: EntityMap,
    pub paging: PagingStrategy,
}

/// Commerce-style vendor: products, orders, customers and nested variations
pub fn commerce() -> VendorProfile {
    VendorProfile {
        entities: EntityMap::new()
            .with(EntityDescriptor::new("products", "products"))
            .with(EntityDescriptor::new("orders", "orders"))
            .with(EntityDescriptor::new("customers", "customers"))
            .with(
                EntityDescriptor::new("productVariations", "products/{productId}/variations")
                    .root("variations")
                    .require("productId"),
            )
            .with(
                EntityDescriptor::new("orderNotes", "orders/{orderId}/notes")
                    .require("orderId"),
            ),
        paging: PagingStrategy::page_per_page(),
    }
}

/// CRM-style vendor: enveloped payloads, no server-side paging
pub fn crm() -> VendorProfile {
    VendorProfile {
        entities: EntityMap::new()
            .with(EntityDescriptor::new("contacts", "contacts").root("data.contacts"))
            .with(EntityDescriptor::new("companies", "companies").root("data.companies"))
            .with(EntityDescriptor::new("deals", "deals").root("data.deals"))
            .with(
                EntityDescriptor::new("contactActivities", "contacts/{contactId}/activities")
                    .root("data.activities")
                    .require("contactId"),
            ),
        paging: PagingStrategy::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commerce_profile_lookup() {
        let profile = commerce();
        assert!(profile.entities.lookup("productVariations").is_ok());
        assert!(profile.paging.is_server_side());
    }

    #[test]
    fn test_crm_profile_is_client_sliced() {
        let profile = crm();
        assert_eq!(profile.paging, PagingStrategy::None);
        assert_eq!(
            profile.entities.lookup("contacts").unwrap().root_path,
            "data.contacts"
        );
    }

    #[test]
    fn test_profiles_declare_required_filters() {
        let profile = commerce();
        let descriptor = profile.entities.lookup("ordernotes").unwrap();
        assert_eq!(descriptor.required_filters, vec!["orderId"]);
    }
}
