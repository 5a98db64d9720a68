//! Point-of-sale cart types.
//!
//! The cart is only meaningful while the point-of-sale primary action is
//! active; the state machine clears it whenever the composer leaves that
//! mode.

use serde::{Deserialize, Serialize};

/// A sellable item template offered by the POS picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Stable item identifier (e.g. "ticket").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price in dollars.
    pub price: f64,
    /// Optional emoji shown on the item pill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl CartItem {
    /// Creates a new item template.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, emoji: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            emoji: Some(emoji.to_string()),
        }
    }
}

/// The built-in POS catalog.
pub fn catalog() -> Vec<CartItem> {
    vec![
        CartItem::new("ticket", "Ticket", 25.0, "🎫"),
        CartItem::new("wine", "Wine", 12.0, "🍷"),
        CartItem::new("beer", "Beer", 8.0, "🍺"),
        CartItem::new("cocktail", "Cocktail", 15.0, "🍸"),
        CartItem::new("soft-drink", "Soft Drink", 5.0, "🥤"),
        CartItem::new("gift-shop", "Gift Shop Item", 20.0, "🛍️"),
    ]
}

/// A cart line: an item plus the accumulated quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl CartLine {
    /// Line subtotal (quantity × unit price).
    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// Insertion-ordered collection of cart lines.
///
/// Re-adding an item increments its quantity rather than duplicating the
/// line; removing a line deletes it entirely (quantity reduction re-adds
/// from zero). The total is always derived, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`, incrementing an existing line if present.
    pub fn add(&mut self, item: &CartItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                quantity: 1,
                emoji: item.emoji.clone(),
            });
        }
    }

    /// Removes the whole line for `item_id`; no-op if absent.
    pub fn remove(&mut self, item_id: &str) {
        self.lines.retain(|l| l.id != item_id);
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Derived total across all lines.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Comma-joined item summary, e.g. "2× Ticket, 1× Wine".
    pub fn summary(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{}× {}", l.quantity, l.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// How an executed sale is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Cash,
    Card,
    CardOnFile,
}

impl PaymentMethod {
    /// Human-readable label used in pill and receipt text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Card => "Card",
            Self::CardOnFile => "Card on File",
        }
    }
}
