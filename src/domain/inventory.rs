use tracing::info;

use super::Product;

/// Ordered collection of products for one session.
///
/// Insertion order is preserved and drives both listing order and which
/// product wins a lookup when names collide. Names are not required to be
/// unique.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        info!(product = %product.name(), "Product '{}' added to inventory", product.name());
        self.products.push(product);
    }

    /// First product whose name equals `name`, ignoring case and surrounding
    /// whitespace on both sides.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        let needle = normalize(name);
        self.products.iter().find(|p| p.matches_name(&needle))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Product> {
        let needle = normalize(name);
        self.products.iter_mut().find(|p| p.matches_name(&needle))
    }

    pub fn total_value(&self) -> f64 {
        self.products
            .iter()
            .fold(0.0, |total, p| total + p.total_value())
    }

    pub fn list(&self) -> Listing<'_> {
        Listing {
            products: &self.products,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Borrowed view over an inventory for display.
///
/// Every call to [`Listing::iter`] (or `into_iter`) starts a fresh traversal
/// yielding `(1-based index, description)` pairs. Callers check
/// [`Listing::is_empty`] to report an empty inventory instead of printing a
/// blank listing.
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    products: &'a [Product],
}

impl<'a> Listing<'a> {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(self) -> impl Iterator<Item = (usize, String)> + 'a {
        self.products
            .iter()
            .enumerate()
            .map(|(i, p)| (i + 1, p.describe()))
    }
}

impl<'a> IntoIterator for Listing<'a> {
    type Item = (usize, String);
    type IntoIter = Box<dyn Iterator<Item = (usize, String)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
