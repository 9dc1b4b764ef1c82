//! # Storefront Shell
//!
//! Line-oriented front end over the command layer.
//!
//! ## Line Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  > checkout --name "Ada Lovelace" --email ada@example.com ...          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  tokenize()          quotes group words, no globbing or escapes         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ShellLine::try_parse_from(tokens)        (clap derive grammar)         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Shell::dispatch ──► commands::* ──► Reply ──► Renderer                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Delete Confirmation
//! `admin delete <id>` without `--yes` asks "Delete ...? [y/N]" and reads
//! the answer from the next line. Anything but `y`/`yes` cancels.

use clap::{Parser, Subcommand, ValueEnum};
use scent_core::auth::StaticPassword;
use scent_core::{CoreError, DraftField, ProductId};
use thiserror::Error;
use tracing::debug;

use crate::commands::{admin, cart, catalog, checkout, config};
use crate::error::ApiError;
use crate::render::{Renderer, Reply};
use crate::state::{ConfigState, StoreState};

/// Errors that end the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A line the tokenizer could not split.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unterminated {0} quote")]
pub struct UnterminatedQuote(char);

/// Splits a line into words. Single or double quotes group words.
pub fn tokenize(line: &str) -> Result<Vec<String>, UnterminatedQuote> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(UnterminatedQuote(q));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

// =============================================================================
// Grammar
// =============================================================================

#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "scent-store", disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum ShellCommand {
    /// Filter the product grid by name (no query clears the filter)
    Search {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    /// Show the product grid
    Products,
    /// Show one product
    Show { id: ProductId },
    /// Add a product to the cart
    Add { id: ProductId },
    /// Open the cart
    Cart,
    /// Close the cart
    Close,
    /// Remove a cart line by position, or by line id with --line
    Remove {
        #[arg(required_unless_present = "line")]
        index: Option<usize>,
        #[arg(long, conflicts_with = "index")]
        line: Option<String>,
    },
    /// Place an order from the cart
    Checkout {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        city: String,
    },
    /// Log in as admin (no password opens the login box)
    Login { password: Option<String> },
    /// Log out
    Logout,
    /// Admin catalog management
    Admin {
        #[command(subcommand)]
        action: AdminCommand,
    },
    /// Show the store configuration
    Config,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum AdminCommand {
    /// Start a new product
    New,
    /// Edit an existing product
    Edit { id: ProductId },
    /// Set a field of the open draft
    Set {
        field: FieldArg,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Show the open draft
    Draft,
    /// Save the open draft
    Save,
    /// Discard the open draft
    Cancel,
    /// Delete a product
    Delete {
        id: ProductId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List every product
    Products,
    /// Show order history
    Orders,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FieldArg {
    Name,
    Description,
    Price,
    Image,
}

impl ShellCommand {
    /// Command name for logs. Arguments are left out since `login` carries
    /// the admin password and `checkout` carries customer details.
    fn name(&self) -> &'static str {
        match self {
            ShellCommand::Search { .. } => "search",
            ShellCommand::Products => "products",
            ShellCommand::Show { .. } => "show",
            ShellCommand::Add { .. } => "add",
            ShellCommand::Cart => "cart",
            ShellCommand::Close => "close",
            ShellCommand::Remove { .. } => "remove",
            ShellCommand::Checkout { .. } => "checkout",
            ShellCommand::Login { .. } => "login",
            ShellCommand::Logout => "logout",
            ShellCommand::Admin { action } => match action {
                AdminCommand::New => "admin new",
                AdminCommand::Edit { .. } => "admin edit",
                AdminCommand::Set { .. } => "admin set",
                AdminCommand::Draft => "admin draft",
                AdminCommand::Save => "admin save",
                AdminCommand::Cancel => "admin cancel",
                AdminCommand::Delete { .. } => "admin delete",
                AdminCommand::Products => "admin products",
                AdminCommand::Orders => "admin orders",
            },
            ShellCommand::Config => "config",
            ShellCommand::Quit => "quit",
        }
    }
}

impl From<FieldArg> for DraftField {
    fn from(f: FieldArg) -> Self {
        match f {
            FieldArg::Name => DraftField::Name,
            FieldArg::Description => DraftField::Description,
            FieldArg::Price => DraftField::Price,
            FieldArg::Image => DraftField::Image,
        }
    }
}

// =============================================================================
// Shell
// =============================================================================

/// What the read loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Print(String),
    Silent,
    Quit,
}

/// Interactive storefront session.
pub struct Shell {
    store: StoreState,
    config: ConfigState,
    auth: StaticPassword,
    renderer: Renderer,
    /// Product awaiting a y/N answer.
    pending_delete: Option<ProductId>,
}

impl Shell {
    pub fn new(store: StoreState, config: ConfigState, json: bool) -> Self {
        Shell {
            store,
            auth: config.authenticator(),
            renderer: Renderer::new(config.clone(), json),
            config,
            pending_delete: None,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Prompt shown before reading the next line.
    pub fn prompt(&self) -> &'static str {
        if self.renderer.is_json() || self.pending_delete.is_some() {
            ""
        } else {
            "> "
        }
    }

    /// Handles one input line.
    pub fn execute(&mut self, line: &str) -> Step {
        if let Some(id) = self.pending_delete.take() {
            let answer = line.trim().to_ascii_lowercase();
            let confirmed = answer == "y" || answer == "yes";
            let reply = admin::delete_product(&self.store, id, confirmed).map(Reply::Deleted);
            return self.print(reply);
        }

        let tokens = match tokenize(line) {
            Ok(t) if t.is_empty() => return Step::Silent,
            Ok(t) => t,
            Err(e) => return self.print(Err(ApiError::validation(e.to_string()))),
        };

        match ShellLine::try_parse_from(&tokens) {
            Ok(ShellLine {
                command: ShellCommand::Quit,
            }) => Step::Quit,
            Ok(parsed) => {
                debug!(command = parsed.command.name(), "Shell command");
                let reply = self.dispatch(parsed.command);
                self.print(reply)
            }
            // Usage errors and `help` output both come through here
            Err(e) => Step::Print(e.render().to_string().trim_end().to_string()),
        }
    }

    fn print(&self, reply: Result<Reply, ApiError>) -> Step {
        let reply = reply.unwrap_or_else(Reply::from);
        Step::Print(self.renderer.render(&reply))
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Reply, ApiError> {
        let store = &self.store;
        match command {
            ShellCommand::Search { query } => {
                catalog::search_products(store, &query.join(" ")).map(Reply::Catalog)
            }
            ShellCommand::Products => catalog::list_products(store).map(Reply::Catalog),
            ShellCommand::Show { id } => catalog::get_product_by_id(store, id).map(Reply::Product),
            ShellCommand::Add { id } => cart::add_to_cart(store, id).map(Reply::Cart),
            ShellCommand::Cart => cart::get_cart(store).map(Reply::Cart),
            ShellCommand::Close => cart::close_cart(store).map(Reply::Cart),
            ShellCommand::Remove { index, line } => match (index, line) {
                (_, Some(line_id)) => cart::remove_cart_line(store, &line_id).map(Reply::Cart),
                (Some(index), None) => cart::remove_from_cart(store, index).map(Reply::Cart),
                (None, None) => Err(ApiError::cart("Give a cart index or --line <id>")),
            },
            ShellCommand::Checkout {
                name,
                email,
                phone,
                address,
                city,
            } => {
                let form = checkout::CheckoutRequest {
                    name,
                    email,
                    phone,
                    address,
                    city,
                };
                checkout::place_order(store, &form).map(Reply::Order)
            }
            ShellCommand::Login { password: None } => {
                admin::open_login(store).map(Reply::Session)
            }
            ShellCommand::Login {
                password: Some(password),
            } => admin::login(store, &self.auth, &password).map(Reply::Session),
            ShellCommand::Logout => admin::logout(store).map(Reply::Session),
            ShellCommand::Admin { action } => self.dispatch_admin(action),
            ShellCommand::Config => Ok(Reply::Config(config::get_config(&self.config))),
            ShellCommand::Quit => Ok(Reply::Message(String::new())),
        }
    }

    fn dispatch_admin(&mut self, action: AdminCommand) -> Result<Reply, ApiError> {
        let store = &self.store;
        match action {
            AdminCommand::New => admin::begin_product_create(store).map(Reply::Draft),
            AdminCommand::Edit { id } => admin::begin_product_edit(store, id).map(Reply::Draft),
            AdminCommand::Set { field, value } => {
                admin::update_product_draft(store, field.into(), &value.join(" "))
                    .map(Reply::Draft)
            }
            AdminCommand::Draft => match admin::get_session(store)?.editing {
                Some(draft) => Ok(Reply::Draft(draft)),
                None => Err(CoreError::NotEditing.into()),
            },
            AdminCommand::Save => admin::save_product(store).map(Reply::Saved),
            AdminCommand::Cancel => {
                admin::cancel_product_edit(store)?;
                Ok(Reply::Message("Edit cancelled".to_string()))
            }
            AdminCommand::Delete { id, yes: true } => {
                admin::delete_product(store, id, true).map(Reply::Deleted)
            }
            AdminCommand::Delete { id, yes: false } => {
                if !admin::get_session(store)?.logged_in {
                    return Err(CoreError::Unauthorized.into());
                }
                let question = match catalog::get_product_by_id(store, id) {
                    Ok(p) => format!("Delete \"{}\"? [y/N] ", p.name),
                    Err(_) => format!("Delete product #{id}? [y/N] "),
                };
                self.pending_delete = Some(id);
                Ok(Reply::Message(question))
            }
            AdminCommand::Products => admin::list_all_products(store).map(Reply::Products),
            AdminCommand::Orders => admin::list_orders(store).map(Reply::Orders),
        }
    }
}
