use thiserror::Error;
use crate::domain::Product;
use crate::error::ValidationError;

/// A raw line could not be turned into the value a prompt asked for.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("'{input}' is not a valid {field}")]
    InvalidNumber { field: &'static str, input: String },
}

/// Why an add attempt has to be re-prompted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    List,
    Total,
    UpdatePrice,
    UpdateQuantity,
    Exit,
}

impl MenuChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Search),
            "3" => Some(Self::List),
            "4" => Some(Self::Total),
            "5" => Some(Self::UpdatePrice),
            "6" => Some(Self::UpdateQuantity),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub fn parse_price(raw: &str) -> Result<f64, InputError> {
    raw.trim().parse().map_err(|_| InputError::InvalidNumber {
        field: "price",
        input: raw.trim().to_string(),
    })
}

pub fn parse_quantity(raw: &str) -> Result<i64, InputError> {
    raw.trim().parse().map_err(|_| InputError::InvalidNumber {
        field: "quantity",
        input: raw.trim().to_string(),
    })
}

/// Parses the three add-product answers and validates them into a product.
pub fn build_product(name: &str, price: &str, quantity: &str) -> Result<Product, AddError> {
    let price = parse_price(price)?;
    let quantity = parse_quantity(quantity)?;
    Ok(Product::new(name, price, quantity)?)
}
