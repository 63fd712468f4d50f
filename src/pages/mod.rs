//! Routed Views

mod action_details;
mod actions;
mod home;
mod instruction_details;
mod instructions;
mod not_found;
mod task_details;
mod tasks;

pub use action_details::ActionDetailsPage;
pub use actions::ActionsPage;
pub use home::HomePage;
pub use instruction_details::InstructionDetailsPage;
pub use instructions::InstructionsPage;
pub use not_found::NotFoundPage;
pub use task_details::TaskDetailsPage;
pub use tasks::TasksPage;
