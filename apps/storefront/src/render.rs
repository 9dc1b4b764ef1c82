//! # Rendering
//!
//! Turns command responses into shell output.
//!
//! ## Output Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reply ──► stdout                                     │
//! │                                                                         │
//! │  text (default)                     --json                              │
//! │  ──────────────                     ──────                              │
//! │  [1] Perfume 1 - $20.00             {"kind":"catalog","data":{...}}     │
//! │      This is a premium ...                                              │
//! │                                                                         │
//! │  error [CART_ERROR]: ...            {"kind":"error","data":{"code":..}} │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use scent_core::{ProductDraft, SaveOutcome};
use serde::Serialize;

use crate::commands::admin::{DeleteResponse, SaveResponse, SessionResponse};
use crate::commands::cart::CartResponse;
use crate::commands::catalog::{CatalogResponse, ProductDto};
use crate::commands::checkout::OrderDto;
use crate::error::{ApiError, ErrorCode};
use crate::state::ConfigState;

/// Everything a shell command can print.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "data")]
pub enum Reply {
    Catalog(CatalogResponse),
    Product(ProductDto),
    Cart(CartResponse),
    Order(OrderDto),
    Session(SessionResponse),
    Draft(ProductDraft),
    Saved(SaveResponse),
    Deleted(DeleteResponse),
    /// Admin product list (ignores the search box)
    Products(Vec<ProductDto>),
    Orders(Vec<OrderDto>),
    Config(ConfigState),
    Message(String),
    Error(ApiError),
}

impl From<ApiError> for Reply {
    fn from(err: ApiError) -> Self {
        Reply::Error(err)
    }
}

/// Renders replies in one output mode.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: ConfigState,
    json: bool,
}

impl Renderer {
    pub fn new(config: ConfigState, json: bool) -> Self {
        Renderer { config, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn render(&self, reply: &Reply) -> String {
        if self.json {
            return serde_json::to_string(reply).unwrap_or_else(|e| {
                format!(r#"{{"kind":"error","data":{{"code":"INTERNAL","message":"{e}"}}}}"#)
            });
        }
        match reply {
            Reply::Catalog(c) => self.catalog(c),
            Reply::Product(p) => self.product(p),
            Reply::Cart(c) => self.cart(c),
            Reply::Order(o) => self.order(o),
            Reply::Session(s) => session(s),
            Reply::Draft(d) => draft(d),
            Reply::Saved(s) => saved(s),
            Reply::Deleted(d) => deleted(d),
            Reply::Products(p) => self.admin_products(p),
            Reply::Orders(o) => self.orders(o),
            Reply::Config(c) => config(c),
            Reply::Message(m) => m.clone(),
            Reply::Error(e) => error(e),
        }
    }

    /// Banner printed once at startup.
    pub fn banner(&self, year: i32) -> String {
        if self.json {
            return String::new();
        }
        format!(
            "{name}\n{rule}\nType `help` for commands.\n© {year} {name}",
            name = self.config.store_name,
            rule = "=".repeat(self.config.store_name.chars().count()),
        )
    }

    fn money(&self, cents: i64) -> String {
        self.config.format_currency(cents)
    }

    fn product(&self, p: &ProductDto) -> String {
        format!(
            "[{}] {} - {}\n    {}\n    {}",
            p.id,
            p.name,
            self.money(p.price_cents),
            p.description,
            p.image
        )
    }

    fn catalog(&self, c: &CatalogResponse) -> String {
        if c.products.is_empty() {
            return format!("No products match \"{}\"", c.search);
        }
        let mut out = if c.search.is_empty() {
            format!("{} products\n", c.products.len())
        } else {
            format!(
                "{} of {} products match \"{}\"\n",
                c.products.len(),
                c.catalog_size,
                c.search
            )
        };
        let cards: Vec<String> = c.products.iter().map(|p| self.product(p)).collect();
        out.push_str(&cards.join("\n"));
        out
    }

    fn cart(&self, c: &CartResponse) -> String {
        if !c.open {
            return format!("Cart closed ({} items)", c.count);
        }
        if c.items.is_empty() {
            return "Your cart is empty".to_string();
        }
        let mut out = format!("Cart ({} items)\n", c.count);
        for line in &c.items {
            out.push_str(&format!(
                "  {}. {} - {}\n",
                line.index,
                line.name,
                self.money(line.price_cents)
            ));
        }
        out.push_str(&format!("Total: {}", self.money(c.total_cents)));
        out
    }

    fn order(&self, o: &OrderDto) -> String {
        format!(
            "Order #{} placed for {}: {} ({})",
            o.id,
            o.name,
            o.item_summary,
            self.money(o.total_cents)
        )
    }

    fn admin_products(&self, products: &[ProductDto]) -> String {
        let rows = products
            .iter()
            .map(|p| vec![p.id.to_string(), p.name.clone(), self.money(p.price_cents)])
            .collect();
        table(&["Id", "Name", "Price"], rows)
    }

    fn orders(&self, orders: &[OrderDto]) -> String {
        if orders.is_empty() {
            return "No orders yet".to_string();
        }
        let rows = orders
            .iter()
            .map(|o| {
                vec![
                    o.name.clone(),
                    o.email.clone(),
                    o.phone.clone(),
                    o.address.clone(),
                    o.city.clone(),
                    o.item_summary.clone(),
                    self.money(o.total_cents),
                ]
            })
            .collect();
        table(
            &["Name", "Email", "Phone", "Address", "City", "Items", "Total"],
            rows,
        )
    }
}

fn session(s: &SessionResponse) -> String {
    if s.logged_in {
        "Logged in as admin".to_string()
    } else if s.login_open {
        "Admin login: enter `login <password>`".to_string()
    } else {
        "Logged out".to_string()
    }
}

fn draft(d: &ProductDraft) -> String {
    let title = match d.id {
        Some(id) => format!("Editing product #{id}"),
        None => "New product".to_string(),
    };
    format!(
        "{title}\n  name:        {}\n  description: {}\n  price:       {}\n  image:       {}",
        d.name, d.description, d.price, d.image
    )
}

fn saved(s: &SaveResponse) -> String {
    let verb = match s.outcome {
        SaveOutcome::Created(_) => "Created",
        SaveOutcome::Updated(_) => "Updated",
    };
    format!("{verb} product #{}: {}", s.product.id, s.product.name)
}

fn deleted(d: &DeleteResponse) -> String {
    match &d.deleted {
        Some(p) => format!("Deleted product #{}: {}", p.id, p.name),
        None => "Nothing to delete".to_string(),
    }
}

fn config(c: &ConfigState) -> String {
    format!(
        "store name:     {}\ncurrency:       {} ({} decimals)\nseeded items:   {}\nimage base url: {}",
        c.store_name, c.currency_symbol, c.currency_decimals, c.seed_count, c.image_base_url
    )
}

fn error(e: &ApiError) -> String {
    let code = match e.code {
        ErrorCode::NotFound => "NOT_FOUND",
        ErrorCode::ValidationError => "VALIDATION_ERROR",
        ErrorCode::Unauthorized => "UNAUTHORIZED",
        ErrorCode::CartError => "CART_ERROR",
        ErrorCode::Cancelled => "CANCELLED",
        ErrorCode::Internal => "INTERNAL",
    };
    format!("error [{code}]: {}", e.message)
}

/// Left-aligned plain-text table.
fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers.to_vec())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.extend(
        rows.iter()
            .map(|r| line(r.iter().map(String::as_str).collect())),
    );
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::CartLine;

    fn text() -> Renderer {
        Renderer::new(ConfigState::default(), false)
    }

    fn dto(id: u64, name: &str, cents: i64) -> ProductDto {
        ProductDto {
            id,
            name: name.to_string(),
            description: "desc".to_string(),
            price: String::new(),
            price_cents: cents,
            image: "img".to_string(),
        }
    }

    #[test]
    fn test_catalog_text() {
        let out = text().render(&Reply::Catalog(CatalogResponse {
            search: "rose".to_string(),
            products: vec![dto(1, "Rose", 2000)],
            catalog_size: 20,
        }));
        assert!(out.starts_with("1 of 20 products match \"rose\""));
        assert!(out.contains("[1] Rose - $20.00"));
    }

    #[test]
    fn test_empty_search_result() {
        let out = text().render(&Reply::Catalog(CatalogResponse {
            search: "zzz".to_string(),
            products: vec![],
            catalog_size: 20,
        }));
        assert_eq!(out, "No products match \"zzz\"");
    }

    #[test]
    fn test_cart_text() {
        let out = text().render(&Reply::Cart(CartResponse {
            items: vec![CartLine {
                index: 0,
                line_id: "l".to_string(),
                product_id: 1,
                name: "Perfume 1".to_string(),
                price_cents: 2000,
            }],
            count: 1,
            total_cents: 2000,
            open: true,
        }));
        assert_eq!(out, "Cart (1 items)\n  0. Perfume 1 - $20.00\nTotal: $20.00");
    }

    #[test]
    fn test_error_text_and_json() {
        let err = ApiError::cart("Cart is empty");
        assert_eq!(
            text().render(&Reply::from(err.clone())),
            "error [CART_ERROR]: Cart is empty"
        );

        let json = Renderer::new(ConfigState::default(), true).render(&Reply::from(err));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "error");
        assert_eq!(value["data"]["code"], "CART_ERROR");
    }

    #[test]
    fn test_table_alignment() {
        let out = table(
            &["Name", "City"],
            vec![vec!["Ada".to_string(), "London".to_string()]],
        );
        assert_eq!(out, "Name | City\n-----+-------\nAda  | London");
    }

    #[test]
    fn test_banner_has_footer() {
        let out = text().banner(2026);
        assert!(out.starts_with("Perfume Store\n============="));
        assert!(out.ends_with("© 2026 Perfume Store"));
        assert!(Renderer::new(ConfigState::default(), true)
            .banner(2026)
            .is_empty());
    }
}
