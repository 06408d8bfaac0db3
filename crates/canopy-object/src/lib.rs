//! The canopy object model and codec.
//!
//! Objects are the immutable values moved between stores:
//!
//! - [`Object::Leaf`] — one opaque JSON-serializable payload, no children
//! - [`Object::Tree`] — a mapping from entry name to child [`Hash`]
//!
//! Every object has a canonical serialization ([`Object::content`]) that is
//! byte-stable for a given logical value: field order is fixed and tree
//! entries are kept in lexicographic order. The content hash
//! ([`Object::hash`]) is a pure function of that serialization, which is
//! what makes the store content-addressed.
//!
//! [`Hash`]: canopy_types::Hash

pub mod error;
pub mod object;

pub use error::DecodeError;
pub use object::{Object, ObjectKind};
