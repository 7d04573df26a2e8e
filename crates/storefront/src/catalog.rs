//! Catalog loading with a bundled fallback.
//!
//! The storefront is never left without a menu: when the remote catalog is
//! unreachable or malformed, the fixed bundled list below is rendered
//! instead. The substitution is silent for the shopper and logged for the
//! operator.

use bowleria_core::Money;

use crate::api::{ApiClient, Product};

/// Where a loaded catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fetched from the shop API.
    Remote,
    /// The bundled fallback list.
    Fallback,
}

/// Fetch the catalog, substituting the bundled fallback on any failure.
pub async fn load_catalog(client: &ApiClient) -> (Vec<Product>, CatalogSource) {
    match client.fetch_catalog().await {
        Ok(products) => {
            tracing::info!(count = products.len(), "catalog loaded from API");
            (products, CatalogSource::Remote)
        }
        Err(e) => {
            tracing::warn!(error = %e, "catalog fetch failed, using bundled fallback");
            (fallback_catalog(), CatalogSource::Fallback)
        }
    }
}

/// The fixed product list bundled for offline operation.
///
/// Static content only; never cached from, or merged with, remote results.
#[must_use]
pub fn fallback_catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            slug: "coco".to_string(),
            name: "Coco Tropical".to_string(),
            description: "Base cremosa de coco, plátano y piña; granola y coco tostado."
                .to_string(),
            price: Money::from(95),
            image_url: "img/bowls/coco.jpeg".to_string(),
            tags: vec![
                "sin azúcar".to_string(),
                "vegano".to_string(),
                "alto en fibra".to_string(),
            ],
            badge: "Coco".to_string(),
        },
        Product {
            id: 2,
            slug: "frutos-rojos".to_string(),
            name: "Berry Boost".to_string(),
            description: "Fresas, frambuesas y arándanos sobre base de frutos rojos.".to_string(),
            price: Money::from(99),
            image_url: "img/bowls/frutos-rojos.jpeg".to_string(),
            tags: vec![
                "antioxidante".to_string(),
                "natural".to_string(),
                "sin gluten".to_string(),
            ],
            badge: "Frutos rojos".to_string(),
        },
        Product {
            id: 3,
            slug: "chocolate-fit".to_string(),
            name: "Choco Power".to_string(),
            description: "Cacao puro, plátano y proteína; almendras y mantequilla de maní."
                .to_string(),
            price: Money::from(105),
            image_url: "img/bowls/chocolate-fit.jpeg".to_string(),
            tags: vec!["alto en proteína".to_string(), "energía".to_string()],
            badge: "Chocolate fit".to_string(),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_the_three_fixed_bowls() {
        let bowls = fallback_catalog();

        assert_eq!(bowls.len(), 3);
        assert_eq!(
            bowls.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(bowls[0].name, "Coco Tropical");
        assert_eq!(bowls[0].price, Money::from(95));
        assert_eq!(bowls[1].name, "Berry Boost");
        assert_eq!(bowls[1].price, Money::from(99));
        assert_eq!(bowls[2].name, "Choco Power");
        assert_eq!(bowls[2].price, Money::from(105));
    }

    #[test]
    fn fallback_slugs_key_the_cart() {
        let keys: Vec<_> = fallback_catalog()
            .iter()
            .map(|b| b.key().to_string())
            .collect();
        assert_eq!(keys, vec!["coco", "frutos-rojos", "chocolate-fit"]);
    }
}
