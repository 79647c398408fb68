//! Type-based dispatch: tokens, the declared hierarchy, the cached registry
//! and the composite entry point.

mod composite;
mod hierarchy;
mod lookup;
mod token;

pub use composite::CompositeResponseGenerator;
pub use hierarchy::{TypeHierarchy, TypeHierarchyBuilder};
pub use lookup::{CacheStats, FaultRegistry, FaultRegistryBuilder, SharedGenerator};
pub use token::{Fault, TypeToken};
