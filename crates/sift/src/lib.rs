//! Sift - filtering predicates with presence narrowing
//!
//! This crate provides:
//! - A three-state value model: absent, null, or present
//! - Base predicates `is_set` and `not_nullable`
//! - Record predicate builders `required_is_set` and `required_is_not_nullable`
//! - Vec filtering helpers whose output types exclude the filtered-out states

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod filter;
pub mod predicate;
pub mod presence;
pub mod record;

pub use filter::{
    filter_not_nullable, filter_required_is_not_nullable, filter_required_is_set, filter_set,
};
pub use predicate::{is_set, not_nullable, required_is_not_nullable, required_is_set};
pub use presence::{Classify, Presence, Slot};
pub use record::Record;
