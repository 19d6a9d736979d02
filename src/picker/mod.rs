//! Picker sessions
//!
//! A picker session holds the state of one interactive pick, from opening to
//! close. Hosts construct a session with their items and accessor
//! functions, hand it to a frontend (see [`crate::ui`]) or drive it
//! directly, and read a [`PickerOutcome`] once it closes.
//!
//! - [`SingleSelect`] - choose one item, or the query as free text
//! - [`MultiSelect`] - check any number of items, then confirm
//!
//! # Examples
//!
//! ```
//! use pickr::picker::{MultiSelect, PickerOutcome};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Fruit { id: u32, name: &'static str }
//!
//! let items = vec![
//!     Fruit { id: 1, name: "apple" },
//!     Fruit { id: 2, name: "banana" },
//!     Fruit { id: 3, name: "cherry" },
//! ];
//!
//! let mut picker = MultiSelect::new(items, |f: &Fruit| f.name.into(), |f: &Fruit| f.id.to_string())
//!     .with_initial(vec![Fruit { id: 2, name: "banana" }]);
//!
//! picker.toggle_id("3");
//! picker.confirm();
//!
//! let names: Vec<_> = picker.into_outcome().into_items().iter().map(|f| f.name).collect();
//! assert_eq!(names, vec!["banana", "cherry"]);
//! ```

mod list;
mod multi;
mod single;
mod types;
mod view;

pub use multi::{MultiPhase, MultiSelect};
pub use single::{SinglePhase, SingleSelect};
pub use types::{
    FreeTextCallback, IdentifierFn, InputDecoration, ItemRenderer, PickerOptions, PickerOutcome,
    SearchKeyFn,
};
pub use view::{PickerView, Row};
