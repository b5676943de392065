//! CLI command implementations.

mod categories;
mod input;
mod options;
mod select;
mod supported;

pub use categories::{run_categories, CategoriesArgs};
pub use options::{run_options, OptionsArgs};
pub use select::{run_select, SelectArgs};
pub use supported::{run_supported, SupportedArgs};
