//! Fridge Common Library
//!
//! 賞味期限照合と期限日算出（I/Oを持たない純粋な処理）

pub mod error;
pub mod expiry;
pub mod matcher;
pub mod normalize;
pub mod table;
pub mod types;

pub use error::{Error, Result};
pub use expiry::{compute_expiry, parse_reference_date, DATE_FORMAT};
pub use matcher::{find_matching_entry, match_shelf_life};
pub use table::ShelfLifeTable;
pub use types::{ProductDescription, ShelfLifeEntry};
