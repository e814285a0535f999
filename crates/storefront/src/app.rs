use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use stockroom_core::DomainResult;
use stockroom_inventory::InventoryStore;

use crate::config::StorefrontConfig;
use crate::views::{BrowseView, ReportsView, SaleForm, SalesView};

pub const HELP: &str = "\
commands:
  list [query]          show stock levels, optionally filtered by name
  sell <qty> <product>  record a sale
  restock <product>     add the fixed restock increment
  report                show low and out-of-stock items
  refill <product>      restock an item up to the target level
  version               show the store version
  help                  show this help
  quit                  exit";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List(Option<String>),
    Sell { quantity: String, product: String },
    Restock(String),
    Report,
    Refill(String),
    Version,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let rest = (!rest.is_empty()).then(|| rest.to_string());

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "list" | "ls" => Ok(Command::List(rest)),
            "sell" => {
                let rest = rest.ok_or(CommandError::Usage("sell <qty> <product>"))?;
                let (quantity, product) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::Usage("sell <qty> <product>"))?;
                Ok(Command::Sell {
                    quantity: quantity.to_string(),
                    product: product.to_string(),
                })
            }
            "restock" => rest
                .map(Command::Restock)
                .ok_or(CommandError::Usage("restock <product>")),
            "report" => Ok(Command::Report),
            "refill" => rest
                .map(Command::Refill)
                .ok_or(CommandError::Usage("refill <product>")),
            "version" => Ok(Command::Version),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Quit,
}

/// The storefront: one shared store and the views that consume it.
#[derive(Debug, Clone)]
pub struct Storefront {
    store: Arc<InventoryStore>,
    browse: BrowseView,
    sales: SalesView,
    reports: ReportsView,
}

impl Storefront {
    pub fn new(config: StorefrontConfig) -> DomainResult<Self> {
        config.validate()?;
        let store = Arc::new(InventoryStore::new(config.seed)?);

        let threshold = config.low_stock_threshold;

        Ok(Self {
            browse: BrowseView::new(store.clone(), threshold, config.restock_increment),
            sales: SalesView::new(store.clone()),
            reports: ReportsView::new(store.clone(), threshold, config.restock_target),
            store,
        })
    }

    pub fn store(&self) -> &Arc<InventoryStore> {
        &self.store
    }

    pub fn browse(&self) -> &BrowseView {
        &self.browse
    }

    pub fn sales(&self) -> &SalesView {
        &self.sales
    }

    pub fn reports(&self) -> &ReportsView {
        &self.reports
    }

    /// Parse and run one input line. Parse errors are reported, not fatal.
    pub fn handle_line(&self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(CommandError::Empty) => Reply::Print(String::new()),
            Err(err) => Reply::Print(format!("Error: {err}")),
        }
    }

    pub fn execute(&self, command: Command) -> Reply {
        let text = match command {
            Command::List(query) => self.browse.render(query.as_deref()),
            Command::Sell { quantity, product } => {
                match self.sales.submit(&SaleForm::new(&product, &quantity)) {
                    Ok(receipt) => SalesView::confirmation(&receipt),
                    Err(err) => format!("Error: {err}"),
                }
            }
            Command::Restock(product) => match self.browse.restock(&product) {
                Ok(message) => message,
                Err(err) => format!("Error: {err}"),
            },
            Command::Report => self.reports.render(),
            Command::Refill(product) => match self.reports.restock_to_target(&product) {
                Ok(message) => message,
                Err(err) => format!("Error: {err}"),
            },
            Command::Version => {
                format!("store {} at version {}", self.store.id(), self.store.version())
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Reply::Quit,
        };
        Reply::Print(text)
    }
}

#[cfg(test)]
mod tests {
    use stockroom_inventory::SeedProduct;

    use super::*;

    fn storefront() -> Storefront {
        Storefront::new(StorefrontConfig::default()).unwrap()
    }

    fn printed(reply: Reply) -> String {
        match reply {
            Reply::Print(text) => text,
            Reply::Quit => panic!("expected output, got quit"),
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!("list".parse(), Ok(Command::List(None)));
        assert_eq!("LIST hat".parse(), Ok(Command::List(Some("hat".to_string()))));
        assert_eq!(
            "sell 3 Souvenir T-Shirt".parse(),
            Ok(Command::Sell {
                quantity: "3".to_string(),
                product: "Souvenir T-Shirt".to_string()
            })
        );
        assert_eq!("refill  Jungle Hat ".parse(), Ok(Command::Refill("Jungle Hat".to_string())));
        assert_eq!("quit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("sell 3".parse::<Command>(), Err(CommandError::Usage("sell <qty> <product>")));
        assert_eq!("restock".parse::<Command>(), Err(CommandError::Usage("restock <product>")));
        assert_eq!("dance".parse::<Command>(), Err(CommandError::Unknown("dance".to_string())));
    }

    #[test]
    fn sale_then_report_scenario() {
        let app = storefront();

        assert_eq!(
            printed(app.handle_line("sell 3 souvenir t-shirt")),
            "Sale recorded: 3 Souvenir T-Shirt(s) sold! Remaining stock: 0"
        );
        assert_eq!(
            printed(app.handle_line("report")),
            [
                "Items with stock <= 5",
                "Souvenir T-Shirt - Stock: 0 (Out of Stock)",
                "Safari Keychain - Stock: 2 (Low)",
            ]
            .join("\n")
        );
        assert_eq!(
            printed(app.handle_line("refill Souvenir T-Shirt")),
            "Souvenir T-Shirt restocked successfully! New stock: 10 units"
        );
        assert!(printed(app.handle_line("version")).ends_with("at version 2"));
    }

    #[test]
    fn oversell_is_reported_and_nothing_changes() {
        let app = storefront();
        let before = app.store().catalog();

        assert_eq!(
            printed(app.handle_line("sell 5 Safari Keychain")),
            "Error: insufficient stock for Safari Keychain. Available: 2, Requested: 5"
        );
        assert_eq!(app.store().catalog(), before);
    }

    #[test]
    fn views_share_one_store() {
        let app = storefront();
        app.handle_line("restock jungle hat");
        assert_eq!(printed(app.handle_line("list hat")), "Jungle Hat - Stock: 15");
        assert_eq!(app.reports().lines().len(), 2);
    }

    #[test]
    fn padded_seed_names_are_reachable_from_every_command() {
        let app = Storefront::new(StorefrontConfig {
            seed: vec![SeedProduct::new("Jungle Hat ", 3)],
            ..StorefrontConfig::default()
        })
        .unwrap();

        assert_eq!(printed(app.handle_line("list")), "Jungle Hat - Stock: 3 (Low)");
        assert_eq!(
            printed(app.handle_line("sell 1 Jungle Hat ")),
            "Sale recorded: 1 Jungle Hat(s) sold! Remaining stock: 2"
        );
        assert!(printed(app.handle_line("restock jungle hat")).ends_with("2 -> 7"));
        assert_eq!(
            printed(app.handle_line("refill JUNGLE HAT")),
            "Jungle Hat restocked successfully! New stock: 10 units"
        );
        assert_eq!(app.store().version(), 3);
    }

    #[test]
    fn quit_and_bad_input() {
        let app = storefront();
        assert_eq!(app.handle_line("exit"), Reply::Quit);
        assert_eq!(printed(app.handle_line("   ")), "");
        assert!(printed(app.handle_line("sell x Jungle Hat")).starts_with("Error: Please enter"));
    }
}
