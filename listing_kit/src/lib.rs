//! # Listing Kit
//!
//! Lists the direct children of a directory and encodes their names as a
//! one-line JSON array, the input format of a CI build matrix.
//!
//! ## Modules
//!
//! - `listing` - Directory enumeration and the `EntryList` type
//! - `output` - JSON encoding and writing of an entry list
//! - `error` - Error taxonomy shared by both
//! - `logging` - stderr logger setup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use listing_kit::{list_entries, write_entries, EntryOrder};
//! use std::path::Path;
//!
//! let entries = list_entries(Path::new("plugin"))?;
//! write_entries(std::io::stdout().lock(), &EntryOrder::Sorted.apply(entries))?;
//! # Ok::<(), listing_kit::ListingError>(())
//! ```

pub mod error;
pub mod listing;
pub mod logging;
pub mod output;

pub use error::ListingError;
pub use listing::{list_entries, EntryList, EntryOrder};
pub use logging::{init_logging, Verbosity};
pub use output::{encode_entries, write_entries};
