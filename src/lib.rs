#![deny(missing_docs)]

//! An in-memory word dictionary with strict add/update semantics.
//!
//! Adding a word that already exists and updating a word that does not are
//! both rejected with a distinct [`DictionaryError`]. A [`DictSession`]
//! drives a dictionary from a stream of JSON requests, and a pair of small
//! text helpers round out the crate.

mod common;
mod dictionary;
mod error;
mod session;
mod text;

pub use common::{Request, Response};
pub use dictionary::{Dictionary, Iter};
pub use error::{DictError, DictionaryError, Result};
pub use session::DictSession;
pub use text::{hello, repeat};
