use serde::{Deserialize, Serialize};

use crate::ids::LineItemId;

/// One row of a document: item, quantity, rate and a flat discount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub name: String,
    pub quantity: f64,
    pub rate: f64,
    #[serde(default)]
    pub discount: f64,
}

impl LineItem {
    pub fn new(id: &str, name: &str, quantity: f64, rate: f64, discount: f64) -> Self {
        LineItem {
            id: LineItemId(id.to_string()),
            name: name.to_string(),
            quantity,
            rate,
            discount,
        }
    }

    /// quantity × rate, before discount.
    pub fn gross(&self) -> f64 {
        self.quantity * self.rate
    }

    /// Row total, never negative.
    pub fn total(&self) -> f64 {
        (self.gross() - self.discount).max(0.0)
    }
}

pub fn items_total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_subtracts_discount_and_clamps_at_zero() {
        assert_eq!(LineItem::new("a", "Paper", 10.0, 5.0, 0.0).total(), 50.0);
        assert_eq!(LineItem::new("b", "Ink", 2.0, 75.0, 20.0).total(), 130.0);
        assert_eq!(LineItem::new("c", "Free", 1.0, 5.0, 9.0).total(), 0.0);
    }

    #[test]
    fn items_total_sums_rows() {
        let items = vec![
            LineItem::new("a", "Paper", 10.0, 5.0, 0.0),
            LineItem::new("b", "Ink", 2.0, 75.0, 0.0),
        ];
        assert!((items_total(&items) - 200.0).abs() < 1e-9);
    }
}
