pub mod filter;
pub mod row;
pub mod utils;

pub use filter::{save_rows, write_rows, FilterStats, HeaderMode};
pub use row::ExtractRow;
