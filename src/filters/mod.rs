pub mod apply;
pub mod query;
pub mod state;
pub mod sync;

pub use apply::apply_filter;
pub use query::{encode_query, parse_query};
pub use state::FilterState;
pub use sync::FilterSync;
