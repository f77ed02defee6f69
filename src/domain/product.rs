use std::fmt;

use tracing::info;

use crate::error::ValidationError;

/// A named inventory line item with a unit price and on-hand quantity.
///
/// Fields are private so the invariants established by [`Product::new`]
/// (non-empty trimmed name, non-negative finite price, non-negative quantity)
/// can only be changed through the validating setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: f64,
    quantity: i64,
}

impl Product {
    /// Creates a validated product.
    ///
    /// # Errors
    /// Checks run in order name, price, quantity and the first failure wins:
    /// - [`ValidationError::EmptyName`] if `name` is empty after trimming
    /// - [`ValidationError::NegativePrice`] / [`ValidationError::NonFinitePrice`]
    /// - [`ValidationError::NegativeQuantity`]
    pub fn new(name: impl AsRef<str>, price: f64, quantity: i64) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let price = check_price(price)?;
        check_quantity(quantity)?;

        Ok(Self {
            name: name.to_string(),
            price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Overwrites the unit price. The product is untouched on error.
    pub fn set_price(&mut self, price: f64) -> Result<(), ValidationError> {
        self.price = check_price(price)?;
        info!(product = %self.name, price = self.price, "Price of '{}' updated to ${:.2}", self.name, self.price);
        Ok(())
    }

    /// Overwrites the on-hand quantity. The product is untouched on error.
    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), ValidationError> {
        check_quantity(quantity)?;
        self.quantity = quantity;
        info!(product = %self.name, quantity = self.quantity, "Quantity of '{}' updated to {}", self.name, self.quantity);
        Ok(())
    }

    pub fn total_value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// One-line, human-readable summary. Not meant to be parsed.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// `normalized` must already be trimmed and lowercased.
    pub(crate) fn matches_name(&self, normalized: &str) -> bool {
        self.name.to_lowercase() == normalized
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {} | Price: ${:.2} | Quantity: {} | Value: ${:.2}",
            self.name,
            self.price,
            self.quantity,
            self.total_value()
        )
    }
}

/// Returns the price to store. `-0.0` passes the sign check and is stored as
/// `0.0` so it never renders as `$-0.00`.
fn check_price(price: f64) -> Result<f64, ValidationError> {
    if !price.is_finite() {
        return Err(ValidationError::NonFinitePrice);
    }
    if price < 0.0 {
        return Err(ValidationError::NegativePrice(price));
    }
    Ok(price + 0.0)
}

fn check_quantity(quantity: i64) -> Result<(), ValidationError> {
    if quantity < 0 {
        return Err(ValidationError::NegativeQuantity(quantity));
    }
    Ok(())
}
