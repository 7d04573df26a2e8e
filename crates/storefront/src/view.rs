//! Terminal views for the cart and catalog.
//!
//! Rendering is pure: the same store state always produces the same text,
//! and nothing here mutates the store. The caller re-renders after each
//! mutation; there is no subscription mechanism.

use std::fmt::Write as _;

use crate::api::Product;
use crate::cart::CartStore;

/// Message shown when the cart has no lines.
const EMPTY_CART: &str = "Your cart is empty.";

/// Render the cart contents and totals.
///
/// Totals are recomputed from the store on every render.
#[must_use]
pub fn render_cart(store: &CartStore) -> String {
    if store.is_empty() {
        return format!("{EMPTY_CART}\n");
    }

    let mut out = String::from("Your cart:\n");
    for line in store.lines() {
        let _ = writeln!(
            out,
            "  {} - {} each x {} = {}  [{}]",
            line.name,
            line.price,
            line.quantity,
            line.price.times(line.quantity),
            line.key
        );
    }

    let totals = store.totals();
    let _ = writeln!(
        out,
        "Items: {}  Subtotal: {}",
        totals.total_quantity, totals.subtotal
    );
    out
}

/// Render the product list as a sequence of cards.
#[must_use]
pub fn render_catalog(products: &[Product]) -> String {
    let mut out = String::from("On the menu today:\n");
    for product in products {
        let badge = if product.badge.is_empty() {
            &product.name
        } else {
            &product.badge
        };
        let _ = writeln!(out, "\n[{badge}] {} - {}", product.name, product.price);
        if !product.description.is_empty() {
            let _ = writeln!(out, "  {}", product.description);
        }
        if !product.tags.is_empty() {
            let _ = writeln!(out, "  tags: {}", product.tags.join(", "));
        }
        let _ = writeln!(out, "  add with: add {}", product.key());
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::fallback_catalog;

    fn store_with_coco() -> (tempfile::TempDir, CartStore) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CartStore::load(dir.path().join("cart.json"));
        let catalog = fallback_catalog();
        store.add(&catalog[0]);
        store.add(&catalog[0]);
        (dir, store)
    }

    #[test]
    fn empty_cart_renders_the_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::load(dir.path().join("cart.json"));

        assert_eq!(render_cart(&store), "Your cart is empty.\n");
    }

    #[test]
    fn cart_render_shows_lines_and_totals() {
        let (_dir, store) = store_with_coco();
        let rendered = render_cart(&store);

        assert!(rendered.contains("Coco Tropical - $95 each x 2 = $190"));
        assert!(rendered.contains("[coco]"));
        assert!(rendered.contains("Items: 2  Subtotal: $190"));
    }

    #[test]
    fn cart_render_is_idempotent() {
        let (_dir, store) = store_with_coco();

        assert_eq!(render_cart(&store), render_cart(&store));
    }

    #[test]
    fn catalog_render_shows_cards_with_add_hints() {
        let rendered = render_catalog(&fallback_catalog());

        assert!(rendered.contains("[Coco] Coco Tropical - $95"));
        assert!(rendered.contains("tags: sin azúcar, vegano, alto en fibra"));
        assert!(rendered.contains("add with: add frutos-rojos"));
        assert!(rendered.contains("[Chocolate fit] Choco Power - $105"));
    }

    #[test]
    fn catalog_render_falls_back_to_name_as_badge() {
        let mut catalog = fallback_catalog();
        catalog[0].badge = String::new();

        let rendered = render_catalog(&catalog);

        assert!(rendered.contains("[Coco Tropical] Coco Tropical - $95"));
    }
}
