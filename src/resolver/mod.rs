//! Field resolvers: pure functions from a [`Cause`](crate::cause::Cause) to
//! one payload field.
//!
//! Each resolver family offers the same factory strategies — a fixed value,
//! a key-indexed mapping (non-empty, with hard failure on a missing key) and
//! an arbitrary function over the cause. Code resolvers additionally offer
//! [`code::from_cause_key`], the default code strategy.

pub mod code;
pub mod message;
pub mod source;

pub use code::CodeResolver;
pub use message::MessageResolver;
pub use source::{DataSourceResolver, Source, SourceKind};
