//! Selection engine shared by the single- and multi-select pickers
//!
//! Everything here is pure: no terminal, no I/O. The engine covers three
//! concerns:
//!
//! - **Ordering** ([`order`]): float the initially selected item(s) to the
//!   top of the list, once, when a session opens.
//! - **Filtering** ([`filter`]): case-insensitive substring matching of a
//!   query against each item's search key.
//! - **Selection state** ([`selection`]): a single pick or a set of
//!   identifiers, each paired with a free-text flag.
//!
//! # Examples
//!
//! ```
//! use pickr::engine::{compute_ordered_list, filter, InitialSelection};
//!
//! let items = vec!["apple", "banana", "cherry"];
//! let key = |item: &&str| item.to_string();
//!
//! let ordered = compute_ordered_list(&items, InitialSelection::Single(&"banana"), key, None);
//! assert_eq!(ordered, vec!["banana", "apple", "cherry"]);
//!
//! assert_eq!(filter(&items, "AN", key), vec!["banana"]);
//! ```

pub mod filter;
pub mod order;
pub mod selection;

pub use filter::{filter, filter_positions, matches};
pub use order::{InitialSelection, compute_ordered_list, find_by_key, multi_order, single_order};
pub use selection::{MultiSelection, SingleSelection};
