mod check;
mod context;

pub use check::{run_check, run_check_with_context};
pub use context::{CheckContext, color_choice_to_mode, write_output};
