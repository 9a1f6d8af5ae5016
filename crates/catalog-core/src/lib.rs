pub mod collection;
pub mod detail;
pub mod error;
pub mod format;
pub mod game_data;
mod xml;

pub use collection::parse_collection;
pub use detail::parse_detail;
pub use error::ParseError;
pub use game_data::{GameDetail, GameSummary};
