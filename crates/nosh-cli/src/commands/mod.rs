//! Command implementations.

pub mod foods;
pub mod log;
pub mod profile;
pub mod search;

pub use self::foods::{execute_add, execute_compose, execute_foods};
pub use self::log::{
    execute_log, execute_remove, execute_show, execute_summary, execute_undo,
};
pub use self::profile::{execute_profile, execute_target};
pub use self::search::execute_search;
