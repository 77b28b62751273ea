//! Terminal presentation: login prompt, menu, and match tables.

pub mod session;
pub mod table;

pub use session::{MenuChoice, menu_loop, prompt_login, watch_live};
pub use table::render_match_table;
