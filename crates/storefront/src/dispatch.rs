//! Input actions and the dispatch table.
//!
//! Each input line parses into an [`Action`]; [`dispatch`] routes the action
//! to the cart store, catalog, or checkout flow and returns the text to
//! display. The router keeps no state of its own, and mutating actions
//! re-render the cart before returning.

use thiserror::Error;

use bowleria_core::ProductKey;

use crate::api::{ApiClient, Product};
use crate::cart::CartStore;
use crate::checkout::{self, CheckoutOutcome, Customer};
use crate::view;

/// Command summary shown by `help`.
pub const HELP: &str = "\
Commands:
  menu                      show the product menu
  cart                      show the cart
  add <product>             add one unit of a product
  inc <product>             increase a line's quantity
  dec <product>             decrease a line's quantity (0 removes it)
  remove <product>          remove a line
  checkout [name [phone]]   place the order
  help                      show this help
  quit                      leave the shop";

/// One parsed user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Menu,
    Cart,
    Add(ProductKey),
    Increment(ProductKey),
    Decrement(ProductKey),
    Remove(ProductKey),
    Checkout { name: String, phone: String },
    Help,
    Quit,
}

/// Why an input line failed to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("nothing to do")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'{0}' needs a product key, e.g. '{0} coco'")]
    MissingKey(String),
}

impl Action {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns an error for blank input, an unknown verb, or a verb missing
    /// its product key.
    pub fn parse(line: &str) -> Result<Self, ParseActionError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ParseActionError::Empty);
        };

        match verb {
            "menu" => Ok(Self::Menu),
            "cart" => Ok(Self::Cart),
            "add" | "inc" | "dec" | "remove" | "rm" => {
                let Some(key) = words.next() else {
                    return Err(ParseActionError::MissingKey(verb.to_owned()));
                };
                let key = ProductKey::from(key);
                Ok(match verb {
                    "add" => Self::Add(key),
                    "inc" => Self::Increment(key),
                    "dec" => Self::Decrement(key),
                    _ => Self::Remove(key),
                })
            }
            "checkout" => {
                let name = words.next().unwrap_or_default().to_owned();
                let phone = words.next().unwrap_or_default().to_owned();
                Ok(Self::Checkout { name, phone })
            }
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ParseActionError::UnknownCommand(other.to_owned())),
        }
    }
}

/// Whether the loop continues after an action.
#[derive(Debug)]
pub enum Flow {
    /// Text to display before reading the next action.
    Continue(String),
    /// The user asked to leave.
    Quit,
}

/// Route one action to the component that handles it.
pub async fn dispatch(
    action: Action,
    store: &mut CartStore,
    catalog: &[Product],
    client: &ApiClient,
) -> Flow {
    match action {
        Action::Menu => Flow::Continue(view::render_catalog(catalog)),
        Action::Cart => Flow::Continue(view::render_cart(store)),
        Action::Add(key) => {
            let Some(product) = catalog.iter().find(|p| p.key() == key) else {
                return Flow::Continue(format!(
                    "No product '{key}' on the menu. Try 'menu'.\n"
                ));
            };
            store.add(product);
            // Adding shows the cart right away
            Flow::Continue(view::render_cart(store))
        }
        Action::Increment(key) => {
            store.increment(&key);
            Flow::Continue(view::render_cart(store))
        }
        Action::Decrement(key) => {
            store.decrement(&key);
            Flow::Continue(view::render_cart(store))
        }
        Action::Remove(key) => {
            store.remove(&key);
            Flow::Continue(view::render_cart(store))
        }
        Action::Checkout { name, phone } => {
            let outcome = checkout::submit_order(store, client, Customer { name, phone }).await;
            let mut out = format!("{outcome}\n");
            if matches!(outcome, CheckoutOutcome::Placed { .. }) {
                out.push_str(&view::render_cart(store));
            }
            Flow::Continue(out)
        }
        Action::Help => Flow::Continue(format!("{HELP}\n")),
        Action::Quit => Flow::Quit,
    }
}
