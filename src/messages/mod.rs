use tokio::sync::oneshot;
use crate::domain::Product;
use crate::error::InventoryError;

/// Generic type aliases for service communication
pub type ServiceResult<T> = std::result::Result<T, InventoryError>;
pub type ServiceResponse<T> = oneshot::Sender<ServiceResult<T>>;

/// One row of a listing: 1-based position and the product description.
pub type ListEntry = (usize, String);

/// Snapshot of the inventory listing. An empty inventory is its own variant
/// so callers report it explicitly rather than printing a blank listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductListing {
    Empty,
    Rows(Vec<ListEntry>),
}

impl ProductListing {
    pub fn rows(&self) -> &[ListEntry] {
        match self {
            ProductListing::Empty => &[],
            ProductListing::Rows(rows) => rows,
        }
    }
}

/// Typed messages for the inventory service. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum InventoryRequest {
    AddProduct {
        product: Product,
        respond_to: ServiceResponse<()>,
    },
    FindProduct {
        name: String,
        respond_to: ServiceResponse<Option<Product>>,
    },
    ListProducts {
        respond_to: ServiceResponse<ProductListing>,
    },
    TotalValue {
        respond_to: ServiceResponse<f64>,
    },
    UpdatePrice {
        name: String,
        price: f64,
        respond_to: ServiceResponse<Product>,
    },
    UpdateQuantity {
        name: String,
        quantity: i64,
        respond_to: ServiceResponse<Product>,
    },
    Shutdown,
}
