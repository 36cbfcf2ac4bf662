//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::CartLine;
use crate::menu::MenuItem;
use uuid::Uuid;

/// Generates a fresh session identifier (hyphenated UUID v4).
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Sum of `price * quantity` over the captured lines.
pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines
        .iter()
        .fold(0.0, |acc, l| acc + l.price * l.quantity as f64)
}

/// Adds `quantity` of `item` to `lines`.
///
/// # Behaviour
///
/// * If a line for the same item id exists, its `quantity` is increased,
///   saturating at the `i64` bounds.
/// * Otherwise a new line is appended capturing the item's current name and
///   price.
pub fn add_line(lines: &mut Vec<CartLine>, item: &MenuItem, quantity: i64) {
    if let Some(existing) = lines.iter_mut().find(|l| l.item_id == item.id) {
        existing.quantity = existing.quantity.saturating_add(quantity);
    } else {
        lines.push(CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity,
        });
    }
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Garden Salad, 1x Fresh Lemonade"`.
pub fn format_line_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_item(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: format!("Item {id}"),
            category: "Mains".into(),
            price,
            description: String::new(),
            is_vegetarian: false,
            is_vegan: false,
            is_gluten_free: false,
            allergens: Vec::new(),
        }
    }

    #[test]
    fn add_line_accumulates_same_item() {
        let mut lines = Vec::new();
        let salad = menu_item("i1", 8.0);
        add_line(&mut lines, &salad, 2);
        add_line(&mut lines, &salad, 3);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 5);
        assert_eq!(cart_total(&lines), 40.0);
    }

    #[test]
    fn add_line_keeps_insertion_order() {
        let mut lines = Vec::new();
        add_line(&mut lines, &menu_item("b", 1.5), 1);
        add_line(&mut lines, &menu_item("a", 2.0), 2);
        add_line(&mut lines, &menu_item("b", 1.5), 1);

        let ids: Vec<_> = lines.iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(cart_total(&lines), 7.0);
        assert_eq!(format_line_summary(&lines), "2x Item b, 2x Item a");
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(cart_total(&[]), 0.0);
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(new_session_id(), new_session_id());
    }
}
