//! UI Components
//!
//! Reusable Leptos components.

mod action_card;
mod delete_confirm_button;
mod flash_banner;
mod graph_view;
mod image_gallery;
mod instruction_card;
mod json_block;
mod nav_bar;
mod prompt_block;
mod record_list;
mod status_badge;
mod validation_form;

pub use action_card::ActionCard;
pub use delete_confirm_button::{delete_prompt, DeleteConfirmButton};
pub use flash_banner::FlashBanner;
pub use graph_view::{InstructionGraph, TaskGraph};
pub use image_gallery::ImageGallery;
pub use instruction_card::InstructionCard;
pub use json_block::JsonBlock;
pub use nav_bar::{Link, NavBar};
pub use prompt_block::PromptBlock;
pub use record_list::RecordList;
pub use status_badge::StatusBadge;
pub use validation_form::ValidationForm;
