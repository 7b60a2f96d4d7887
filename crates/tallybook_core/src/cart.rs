//! Editable line-item table. Rows hold the text the user typed; totals are
//! recomputed from that text on every read, with unparseable input counting as zero.

use crate::ids::LineItemId;
use crate::models::LineItem;

/// Parse a typed number. Empty, non-numeric and non-finite input is zero.
pub fn parse_number(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineField {
    Name,
    Quantity,
    Rate,
    Discount,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartRow {
    pub id: LineItemId,
    pub name: String,
    pub quantity: String,
    pub rate: String,
    pub discount: String,
}

impl CartRow {
    pub fn blank() -> Self {
        CartRow {
            id: LineItemId::generate(),
            name: String::new(),
            quantity: "1".to_string(),
            rate: String::new(),
            discount: String::new(),
        }
    }

    fn from_item(item: &LineItem) -> Self {
        CartRow {
            id: item.id.clone(),
            name: item.name.clone(),
            quantity: trim_number(item.quantity),
            rate: trim_number(item.rate),
            discount: if item.discount == 0.0 {
                String::new()
            } else {
                trim_number(item.discount)
            },
        }
    }

    pub fn get(&self, field: LineField) -> &str {
        match field {
            LineField::Name => &self.name,
            LineField::Quantity => &self.quantity,
            LineField::Rate => &self.rate,
            LineField::Discount => &self.discount,
        }
    }

    /// max(0, quantity × rate − discount).
    pub fn total(&self) -> f64 {
        self.to_item().total()
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && parse_number(&self.rate) == 0.0
    }

    pub fn to_item(&self) -> LineItem {
        LineItem {
            id: self.id.clone(),
            name: self.name.trim().to_string(),
            quantity: parse_number(&self.quantity),
            rate: parse_number(&self.rate),
            discount: parse_number(&self.discount),
        }
    }
}

fn trim_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// The line-item editor. Always shows at least one row.
#[derive(Clone, Debug, PartialEq)]
pub struct CartEditor {
    rows: Vec<CartRow>,
}

impl Default for CartEditor {
    fn default() -> Self {
        CartEditor {
            rows: vec![CartRow::blank()],
        }
    }
}

impl CartEditor {
    pub fn new(items: &[LineItem]) -> Self {
        if items.is_empty() {
            return Self::default();
        }
        CartEditor {
            rows: items.iter().map(CartRow::from_item).collect(),
        }
    }

    pub fn rows(&self) -> &[CartRow] {
        &self.rows
    }

    pub fn add_row(&mut self) -> LineItemId {
        let row = CartRow::blank();
        let id = row.id.clone();
        self.rows.push(row);
        id
    }

    /// Removing the only row leaves a single blank one.
    pub fn remove_row(&mut self, id: &LineItemId) {
        self.rows.retain(|r| &r.id != id);
        if self.rows.is_empty() {
            self.rows.push(CartRow::blank());
        }
    }

    /// Returns false when no row has `id`.
    pub fn change(&mut self, id: &LineItemId, field: LineField, text: &str) -> bool {
        let Some(row) = self.rows.iter_mut().find(|r| &r.id == id) else {
            return false;
        };
        let slot = match field {
            LineField::Name => &mut row.name,
            LineField::Quantity => &mut row.quantity,
            LineField::Rate => &mut row.rate,
            LineField::Discount => &mut row.discount,
        };
        *slot = text.to_string();
        true
    }

    pub fn row_total(&self, id: &LineItemId) -> Option<f64> {
        self.rows.iter().find(|r| &r.id == id).map(CartRow::total)
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(CartRow::total).sum()
    }

    /// Line items for saving; untouched blank rows are dropped.
    pub fn to_items(&self) -> Vec<LineItem> {
        self.rows
            .iter()
            .filter(|r| !r.is_blank())
            .map(CartRow::to_item)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_treats_junk_as_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(" 12.5 "), 12.5);
        assert_eq!(parse_number("NaN"), 0.0);
    }

    #[test]
    fn totals_follow_edits() {
        let mut cart = CartEditor::default();
        let first = cart.rows()[0].id.clone();
        cart.change(&first, LineField::Name, "Paper");
        cart.change(&first, LineField::Quantity, "10");
        cart.change(&first, LineField::Rate, "5");
        let second = cart.add_row();
        cart.change(&second, LineField::Quantity, "2");
        cart.change(&second, LineField::Rate, "75");
        assert_eq!(cart.row_total(&first), Some(50.0));
        assert!((cart.total() - 200.0).abs() < 1e-9);

        cart.change(&second, LineField::Discount, "500");
        assert_eq!(cart.row_total(&second), Some(0.0));
        assert_eq!(cart.total(), 50.0);
    }

    #[test]
    fn removing_last_row_leaves_a_blank_one() {
        let mut cart = CartEditor::new(&[LineItem::new("li-1", "Ink", 1.0, 9.0, 0.0)]);
        cart.remove_row(&LineItemId("li-1".to_string()));
        assert_eq!(cart.rows().len(), 1);
        assert!(cart.rows()[0].is_blank());
        assert!(cart.to_items().is_empty());
    }

    #[test]
    fn change_on_unknown_row_is_ignored() {
        let mut cart = CartEditor::default();
        assert!(!cart.change(&LineItemId("nope".to_string()), LineField::Rate, "4"));
    }

    #[test]
    fn loads_items_as_text() {
        let cart = CartEditor::new(&[LineItem::new("li-1", "Ink", 2.0, 7.5, 0.0)]);
        let row = &cart.rows()[0];
        assert_eq!(row.get(LineField::Quantity), "2");
        assert_eq!(row.get(LineField::Rate), "7.5");
        assert_eq!(row.get(LineField::Discount), "");
        assert_eq!(cart.to_items()[0].total(), 15.0);
    }
}
