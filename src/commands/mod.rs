pub mod check;
pub mod context;

pub use check::{collect_comments, run_check, run_check_impl};
pub use context::{CheckContext, default_base_dir};
