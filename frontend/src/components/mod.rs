pub mod handlers;
pub mod header;
pub mod results;
pub mod sidebar;
pub mod utils;
