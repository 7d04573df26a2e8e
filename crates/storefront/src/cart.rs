//! Persistent cart store.
//!
//! The authoritative cart lives in memory as a mapping from product key to
//! line and is mirrored to a JSON storage slot after every mutation. Reads
//! never fail the caller: an absent or corrupt slot is treated as an empty
//! cart, and a failed write is logged for the operator and retried implicitly
//! on the next mutation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use bowleria_core::{Money, ProductKey};

use crate::api::Product;

/// One product's accumulated quantity and captured price/display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub key: ProductKey,
    pub name: String,
    pub price: Money,
    pub image_url: String,
    pub quantity: u32,
}

/// Totals computed over all cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub total_quantity: u32,
    pub subtotal: Money,
}

/// The cart mapping plus the storage slot it mirrors to.
///
/// Invariant: no line is kept at quantity 0; reaching 0 removes it.
#[derive(Debug)]
pub struct CartStore {
    lines: BTreeMap<ProductKey, CartLine>,
    path: PathBuf,
}

impl CartStore {
    /// Load the cart from the storage slot.
    ///
    /// An absent or unparsable slot yields an empty cart. Corruption is
    /// logged for the operator but indistinguishable from "no cart" to the
    /// caller.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lines = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "cart slot is corrupt, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "cart slot is unreadable, starting empty"
                );
                BTreeMap::new()
            }
        };

        Self { lines, path }
    }

    /// Add one unit of a product, creating its line at the product's current
    /// name/price/image if absent.
    pub fn add(&mut self, product: &Product) {
        let line = self.lines.entry(product.key()).or_insert_with(|| CartLine {
            key: product.key(),
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            quantity: 0,
        });
        line.quantity += 1;
        self.persist();
    }

    /// Increase a line's quantity by one. No-op for an absent key.
    pub fn increment(&mut self, key: &ProductKey) {
        if let Some(line) = self.lines.get_mut(key) {
            line.quantity += 1;
            self.persist();
        }
    }

    /// Decrease a line's quantity by one, removing the line when it reaches
    /// zero. No-op for an absent key.
    pub fn decrement(&mut self, key: &ProductKey) {
        let Some(line) = self.lines.get_mut(key) else {
            return;
        };
        line.quantity = line.quantity.saturating_sub(1);
        if line.quantity == 0 {
            self.lines.remove(key);
        }
        self.persist();
    }

    /// Delete a line unconditionally.
    pub fn remove(&mut self, key: &ProductKey) {
        self.lines.remove(key);
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Totals over all lines. Pure; no side effects.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total_quantity: self.lines.values().map(|line| line.quantity).sum(),
            subtotal: self
                .lines
                .values()
                .map(|line| line.price.times(line.quantity))
                .sum(),
        }
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines in stable key order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Mirror the full mapping to the storage slot.
    fn persist(&self) {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "could not create cart slot directory"
            );
            return;
        }

        match serde_json::to_string(&self.lines) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.path, raw) {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "could not write cart slot"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not serialize cart");
            }
        }
    }
}
