//! Reusable UI components

pub mod confirm;
pub mod input;
pub mod notification;
pub mod widget_list;
