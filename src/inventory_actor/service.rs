use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use crate::clients::InventoryClient;
use crate::domain::{Inventory, Product};
use crate::error::InventoryError;
use crate::messages::{InventoryRequest, ProductListing, ServiceResponse};

/// Sole owner of the session's [`Inventory`].
///
/// Requests arrive over a bounded channel and are handled one at a time, so
/// the inventory needs no locking. The loop ends on [`InventoryRequest::Shutdown`]
/// or when every client has been dropped.
pub struct InventoryService {
    receiver: mpsc::Receiver<InventoryRequest>,
    inventory: Inventory,
}

impl InventoryService {
    pub fn new(buffer_size: usize) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            inventory: Inventory::new(),
        };
        let client = InventoryClient::new(sender);
        (service, client)
    }

    #[instrument(name = "inventory_service", skip(self))]
    pub async fn run(mut self) {
        info!("InventoryService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::AddProduct { product, respond_to } => {
                    self.handle_add_product(product, respond_to);
                }
                InventoryRequest::FindProduct { name, respond_to } => {
                    self.handle_find_product(name, respond_to);
                }
                InventoryRequest::ListProducts { respond_to } => {
                    self.handle_list_products(respond_to);
                }
                InventoryRequest::TotalValue { respond_to } => {
                    self.handle_total_value(respond_to);
                }
                InventoryRequest::UpdatePrice { name, price, respond_to } => {
                    self.handle_update_price(name, price, respond_to);
                }
                InventoryRequest::UpdateQuantity { name, quantity, respond_to } => {
                    self.handle_update_quantity(name, quantity, respond_to);
                }
                InventoryRequest::Shutdown => {
                    info!("InventoryService shutting down");
                    break;
                }
            }
        }

        info!(products = self.inventory.len(), "InventoryService stopped");
    }

    #[instrument(fields(product = %product.name()), skip(self, product, respond_to))]
    fn handle_add_product(&mut self, product: Product, respond_to: ServiceResponse<()>) {
        debug!("Processing add_product request");
        self.inventory.add(product);
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_find_product(&self, name: String, respond_to: ServiceResponse<Option<Product>>) {
        debug!("Processing find_product request");

        let product = self.inventory.find_by_name(&name).cloned();
        match &product {
            Some(product) => debug!(price = product.price(), quantity = product.quantity(), "Product found"),
            None => debug!("Product not found"),
        }

        let _ = respond_to.send(Ok(product));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_products(&self, respond_to: ServiceResponse<ProductListing>) {
        debug!("Processing list_products request");
        let listing = self.inventory.list();
        let snapshot = if listing.is_empty() {
            ProductListing::Empty
        } else {
            ProductListing::Rows(listing.iter().collect())
        };
        let _ = respond_to.send(Ok(snapshot));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_total_value(&self, respond_to: ServiceResponse<f64>) {
        debug!("Processing total_value request");
        let total = self.inventory.total_value();
        debug!(total, "Inventory valued");
        let _ = respond_to.send(Ok(total));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_update_price(&mut self, name: String, price: f64, respond_to: ServiceResponse<Product>) {
        debug!("Processing update_price request");
        let result = self.update(&name, |product| product.set_price(price));
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_update_quantity(&mut self, name: String, quantity: i64, respond_to: ServiceResponse<Product>) {
        debug!("Processing update_quantity request");
        let result = self.update(&name, |product| product.set_quantity(quantity));
        let _ = respond_to.send(result);
    }

    fn update<F>(&mut self, name: &str, apply: F) -> Result<Product, InventoryError>
    where
        F: FnOnce(&mut Product) -> Result<(), crate::error::ValidationError>,
    {
        let Some(product) = self.inventory.find_by_name_mut(name) else {
            warn!("Product not found");
            return Err(InventoryError::NotFound(name.trim().to_string()));
        };

        if let Err(e) = apply(product) {
            warn!(error = %e, "Update rejected");
            return Err(e.into());
        }
        Ok(product.clone())
    }
}
