use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingItem {
    pub item: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingList {
    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn from_items(items: Vec<String>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| ShoppingItem {
                    item,
                    checked: false,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flip the checked state of the item at `index`. Out of range is a no-op.
    pub fn toggle(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.checked = !item.checked;
        }
    }

    pub fn clear_checked(&mut self) {
        self.items.retain(|item| !item.checked);
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    pub fn to_clipboard_text(&self) -> String {
        self.items
            .iter()
            .map(|item| {
                let mark = if item.checked { '✓' } else { '☐' };
                format!("{} {}", mark, item.item)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
