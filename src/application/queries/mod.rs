pub mod list;

pub use list::{ITEMS_PER_PAGE, LOAD_DELAY, ListController};
