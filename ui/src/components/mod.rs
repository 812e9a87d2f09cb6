// Core components
pub mod common;
pub mod state;

// Input components
pub mod login_form;

// Display components
pub mod nav_item;
pub mod notification;
pub mod text_label;

// System components
pub mod global_key_watcher;
