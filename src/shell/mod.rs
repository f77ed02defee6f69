//! Interactive menu loop over any async line reader and writer.
//!
//! The shell is the input-validation boundary: it parses raw lines into typed
//! values, calls the inventory client, and re-prompts when a value is
//! rejected. End of input behaves like choosing exit.

pub mod input;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info, instrument};
use crate::clients::InventoryClient;
use crate::domain::Product;
use crate::error::InventoryError;
use crate::messages::ProductListing;

pub use input::*;

const WIDE_RULE: &str = "============================================================";
const RULE: &str = "========================================";

pub const EMPTY_INVENTORY: &str = "The inventory is empty.";

/// Failures that end the session.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

pub struct Shell<R, W> {
    client: InventoryClient,
    lines: Lines<R>,
    out: W,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: InventoryClient, reader: R, out: W) -> Self {
        Self {
            client,
            lines: reader.lines(),
            out,
        }
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// Bad input and rejected values are reported and re-prompted. Only
    /// console I/O failures and a lost inventory service end the session with
    /// an error.
    #[instrument(name = "shell", skip(self))]
    pub async fn run(&mut self) -> Result<(), ShellError> {
        info!("Session started");

        loop {
            self.show_menu().await?;
            let Some(raw) = self.prompt("Select an option (1-7): ").await? else {
                debug!("Input closed");
                break;
            };

            let Some(choice) = MenuChoice::parse(&raw) else {
                self.say("\nInvalid option. Please choose 1-7.\n").await?;
                continue;
            };

            debug!(?choice, "Menu choice");
            let keep_going = match choice {
                MenuChoice::Add => self.add_product().await?,
                MenuChoice::Search => self.search_product().await?,
                MenuChoice::List => self.list_products().await.map(|_| true)?,
                MenuChoice::Total => self.total_value().await.map(|_| true)?,
                MenuChoice::UpdatePrice => self.update_price().await?,
                MenuChoice::UpdateQuantity => self.update_quantity().await?,
                MenuChoice::Exit => false,
            };
            if !keep_going {
                break;
            }
        }

        self.say("\nThanks for using the inventory system. Goodbye.\n").await?;
        info!("Session ended");
        Ok(())
    }

    async fn show_menu(&mut self) -> Result<(), ShellError> {
        let menu = format!(
            "\n{RULE}\n      INVENTORY SYSTEM\n{RULE}\n\
             1. Add product\n\
             2. Search product\n\
             3. List products\n\
             4. Calculate total inventory value\n\
             5. Update product price\n\
             6. Update product quantity\n\
             7. Exit\n\
             {RULE}\n"
        );
        self.say(&menu).await
    }

    /// Returns `Ok(false)` when input ended mid-prompt.
    async fn add_product(&mut self) -> Result<bool, ShellError> {
        self.say("\n--- Add Product ---\n").await?;
        let Some(product) = self.read_product().await? else {
            return Ok(false);
        };

        let name = product.name().to_string();
        self.client.add_product(product).await?;
        self.say(&format!("Product '{name}' added to the inventory.\n")).await?;
        Ok(true)
    }

    async fn read_product(&mut self) -> Result<Option<Product>, ShellError> {
        loop {
            let Some(name) = self.prompt("Enter the product name: ").await? else {
                return Ok(None);
            };
            let Some(price) = self.prompt("Enter the price: ").await? else {
                return Ok(None);
            };
            let Some(quantity) = self.prompt("Enter the quantity: ").await? else {
                return Ok(None);
            };

            match build_product(&name, &price, &quantity) {
                Ok(product) => return Ok(Some(product)),
                Err(e) => {
                    debug!(error = %e, "Rejected product input");
                    self.say(&format!("Error: {e}\nPlease try again.\n\n")).await?;
                }
            }
        }
    }

    async fn search_product(&mut self) -> Result<bool, ShellError> {
        self.say("\n--- Search Product ---\n").await?;
        let Some(name) = self.prompt("Enter the name of the product to search for: ").await? else {
            return Ok(false);
        };
        let name = name.trim().to_string();

        let text = match self.client.find_product(name.clone()).await? {
            Some(product) => format!("\nProduct found:\n{product}\n"),
            None => format!("No product named '{name}' was found.\n"),
        };
        self.say(&text).await?;
        Ok(true)
    }

    async fn list_products(&mut self) -> Result<(), ShellError> {
        self.say("\n--- List Products ---\n").await?;
        let listing = self.client.list_products().await?;
        let text = render_listing(&listing);
        self.say(&text).await
    }

    async fn total_value(&mut self) -> Result<(), ShellError> {
        self.say("\n--- Total Inventory Value ---\n").await?;
        let total = self.client.total_value().await?;
        self.say(&format!("\nTotal inventory value: ${total:.2}\n")).await
    }

    async fn update_price(&mut self) -> Result<bool, ShellError> {
        self.say("\n--- Update Price ---\n").await?;
        let Some(name) = self.prompt("Enter the product name: ").await? else {
            return Ok(false);
        };
        loop {
            let Some(raw) = self.prompt("Enter the new price: ").await? else {
                return Ok(false);
            };
            match parse_price(&raw) {
                Ok(price) => {
                    let result = self.client.update_price(name.clone(), price).await;
                    return self.report_update(result).await;
                }
                Err(e) => self.say(&format!("Error: {e}\nPlease try again.\n")).await?,
            }
        }
    }

    async fn update_quantity(&mut self) -> Result<bool, ShellError> {
        self.say("\n--- Update Quantity ---\n").await?;
        let Some(name) = self.prompt("Enter the product name: ").await? else {
            return Ok(false);
        };
        loop {
            let Some(raw) = self.prompt("Enter the new quantity: ").await? else {
                return Ok(false);
            };
            match parse_quantity(&raw) {
                Ok(quantity) => {
                    let result = self.client.update_quantity(name.clone(), quantity).await;
                    return self.report_update(result).await;
                }
                Err(e) => self.say(&format!("Error: {e}\nPlease try again.\n")).await?,
            }
        }
    }

    /// Prints the outcome of an update. Only communication failures propagate.
    async fn report_update(&mut self, result: Result<Product, InventoryError>) -> Result<bool, ShellError> {
        let text = match result {
            Ok(product) => format!("Updated:\n{product}\n"),
            Err(InventoryError::NotFound(name)) => format!("No product named '{name}' was found.\n"),
            Err(InventoryError::Validation(e)) => format!("Error: {e}\n"),
            Err(e) => return Err(e.into()),
        };
        self.say(&text).await?;
        Ok(true)
    }

    async fn prompt(&mut self, text: &str) -> Result<Option<String>, ShellError> {
        self.say(text).await?;
        Ok(self.lines.next_line().await?)
    }

    async fn say(&mut self, text: &str) -> Result<(), ShellError> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}

/// Banner-framed numbered listing, or the empty-inventory notice.
pub fn render_listing(listing: &ProductListing) -> String {
    let rows = match listing {
        ProductListing::Empty => return format!("\n{EMPTY_INVENTORY}\n"),
        ProductListing::Rows(rows) => rows,
    };

    let mut text = format!("\n{WIDE_RULE}\nPRODUCT LISTING\n{WIDE_RULE}\n");
    for (index, description) in rows {
        text.push_str(&format!("{index}. {description}\n"));
    }
    text.push_str(WIDE_RULE);
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory_actor::InventoryService;

    async fn run_script(script: &'static str) -> (String, InventoryClient) {
        let (service, client) = InventoryService::new(8);
        tokio::spawn(service.run());

        let mut out = Vec::new();
        let mut shell = Shell::new(client.clone(), script.as_bytes(), &mut out);
        shell.run().await.unwrap();
        drop(shell);

        (String::from_utf8(out).unwrap(), client)
    }

    #[test]
    fn render_empty_listing() {
        assert_eq!(render_listing(&ProductListing::Empty), "\nThe inventory is empty.\n");
    }

    #[test]
    fn render_numbered_listing() {
        let listing = ProductListing::Rows(vec![(1, "first".to_string()), (2, "second".to_string())]);
        let text = render_listing(&listing);
        assert!(text.contains("PRODUCT LISTING"));
        assert!(text.contains("1. first\n2. second\n"));
    }

    #[tokio::test]
    async fn add_then_total() {
        let (out, client) = run_script("1\nWidget\n10\n2\n1\nGadget\n5\n3\n4\n7\n").await;

        assert!(out.contains("Product 'Widget' added to the inventory."));
        assert!(out.contains("Product 'Gadget' added to the inventory."));
        assert!(out.contains("Total inventory value: $35.00"));
        assert!(out.contains("Goodbye"));
        assert_eq!(client.list_products().await.unwrap().rows().len(), 2);
    }

    #[tokio::test]
    async fn add_reprompts_until_valid() {
        let (out, client) = run_script("1\n   \n1\n1\nWidget\nabc\n1\nWidget\n-2\n1\nWidget\n2\n1\n7\n").await;

        assert!(out.contains("Error: name cannot be empty"));
        assert!(out.contains("Error: 'abc' is not a valid price"));
        assert!(out.contains("Error: price cannot be negative"));
        assert_eq!(out.matches("Please try again.").count(), 3);

        let listing = client.list_products().await.unwrap();
        let rows = listing.rows();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].1.contains("Price: $2.00"));
    }

    #[tokio::test]
    async fn search_and_list() {
        let (out, _) = run_script("3\n1\nWidget\n1.5\n2\n2\n  WIDGET \n2\nnothing\n3\n7\n").await;

        assert!(out.contains(EMPTY_INVENTORY));
        assert!(out.contains("Product found:\nProduct: Widget | Price: $1.50 | Quantity: 2 | Value: $3.00"));
        assert!(out.contains("No product named 'nothing' was found."));
        assert!(out.contains("1. Product: Widget"));
    }

    #[tokio::test]
    async fn updates_report_outcomes() {
        let (out, client) = run_script("1\nWidget\n1\n1\n5\nwidget\nx\n4\n6\nwidget\n-1\n6\nghost\n2\n7\n").await;

        assert!(out.contains("Error: 'x' is not a valid price"));
        assert!(out.contains("Updated:\nProduct: Widget | Price: $4.00"));
        assert!(out.contains("Error: quantity cannot be negative"));
        assert!(out.contains("No product named 'ghost' was found."));
        assert_eq!(client.total_value().await.unwrap(), 4.0);
    }

    #[tokio::test]
    async fn invalid_choice_and_end_of_input() {
        let (out, _) = run_script("9\n").await;
        assert!(out.contains("Invalid option"));
        assert!(out.contains("Goodbye"));
    }

    #[tokio::test]
    async fn input_ending_mid_add_exits_cleanly() {
        let (out, client) = run_script("1\nWidget\n").await;
        assert!(out.contains("Enter the price: "));
        assert_eq!(client.list_products().await.unwrap(), ProductListing::Empty);
    }
}
