//! Pretty output formatting.

use todolist_core::todo::TodoItem;

/// Format an item for display.
pub fn format_item(item: &TodoItem) -> String {
    let marker = if item.is_completed { "x" } else { " " };
    format!("[{}] {}\n  ID: {}", marker, item.description, item.id)
}

/// Format items for display.
pub fn format_items(items: &[TodoItem]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_item_shows_completion_marker() {
        let item = TodoItem::new("Buy milk");
        assert!(format_item(&item).starts_with("[ ] Buy milk"));

        let done = TodoItem::new("Walk the dog").completed();
        assert!(format_item(&done).starts_with("[x] Walk the dog"));
    }

    #[test]
    fn test_format_items_empty() {
        assert_eq!(format_items(&[]), "No items found.");
    }
}
