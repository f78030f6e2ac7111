pub mod chat;
pub mod common;
pub mod cooking;
pub mod recipe;
pub mod shopping_list;
