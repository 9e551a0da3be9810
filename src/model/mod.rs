//! Domain model types (pure).
//!
//! All types in this module are plain data. The grid consumes
//! [`DisplayOptions`], [`SortKey`] and [`ItemId`]; the terminal host also uses
//! [`Item`] and [`KeyAction`].

pub mod display_options;
pub mod error;
pub mod identifiers;
pub mod item;
pub mod key_action;
pub mod sort_key;

pub use display_options::{DisplayOptions, InvalidSizeClass, SizeClass};
pub use error::InputError;
pub use identifiers::ItemId;
pub use item::Item;
pub use key_action::KeyAction;
pub use sort_key::SortKey;
