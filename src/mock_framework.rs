//! # Mock Framework
//!
//! Utilities for testing code that talks to the inventory service without
//! running the real service.
//!
//! Use [`create_mock_client`] to get a client and the receiver its requests
//! land on, then the `expect_*` helpers to assert on each request and answer
//! it (or drop the responder to simulate a failing service).

use tokio::sync::mpsc;
use crate::clients::InventoryClient;
use crate::domain::Product;
use crate::messages::{InventoryRequest, ServiceResponse};

pub fn create_mock_client(buffer_size: usize) -> (InventoryClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InventoryClient::new(sender), receiver)
}

/// Helper to verify that the next message is an AddProduct request
pub async fn expect_add(receiver: &mut mpsc::Receiver<InventoryRequest>) -> Option<(Product, ServiceResponse<()>)> {
    match receiver.recv().await {
        Some(InventoryRequest::AddProduct { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindProduct request
pub async fn expect_find(receiver: &mut mpsc::Receiver<InventoryRequest>) -> Option<(String, ServiceResponse<Option<Product>>)> {
    match receiver.recv().await {
        Some(InventoryRequest::FindProduct { name, respond_to }) => Some((name, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a TotalValue request
pub async fn expect_total(receiver: &mut mpsc::Receiver<InventoryRequest>) -> Option<ServiceResponse<f64>> {
    match receiver.recv().await {
        Some(InventoryRequest::TotalValue { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            let product = Product::new("Widget", 1.0, 1).unwrap();
            client.add_product(product).await
        });

        let (product, responder) = expect_add(&mut receiver).await.expect("Expected AddProduct request");
        assert_eq!(product.name(), "Widget");
        responder.send(Ok(())).unwrap();

        assert_eq!(add_task.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn dropped_responder_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.total_value().await });

        let responder = expect_total(&mut receiver).await.expect("Expected TotalValue request");
        drop(responder);

        assert_eq!(
            task.await.unwrap(),
            Err(InventoryError::ActorCommunicationError("Service dropped".to_string()))
        );
    }
}
