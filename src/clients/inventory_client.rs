use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::domain::Product;
use crate::error::InventoryError;
use crate::messages::{InventoryRequest, ProductListing};

/// Cloneable handle to the [`crate::inventory_actor::InventoryService`].
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), InventoryError> {
        debug!("Sending shutdown request");
        self.sender
            .send(InventoryRequest::Shutdown)
            .await
            .map_err(|_| InventoryError::ActorCommunicationError("Service closed".to_string()))
    }
}

client_method!(InventoryClient => fn add_product(product: Product) -> () as InventoryRequest::AddProduct, Error = InventoryError);
client_method!(InventoryClient => fn find_product(name: String) -> Option<Product> as InventoryRequest::FindProduct, Error = InventoryError);
client_method!(InventoryClient => fn list_products() -> ProductListing as InventoryRequest::ListProducts, Error = InventoryError);
client_method!(InventoryClient => fn total_value() -> f64 as InventoryRequest::TotalValue, Error = InventoryError);
client_method!(InventoryClient => fn update_price(name: String, price: f64) -> Product as InventoryRequest::UpdatePrice, Error = InventoryError);
client_method!(InventoryClient => fn update_quantity(name: String, quantity: i64) -> Product as InventoryRequest::UpdateQuantity, Error = InventoryError);
