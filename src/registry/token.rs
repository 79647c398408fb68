//! Runtime identity of fault types.
//!
//! Rust has no runtime superclass graph, so fault types are identified by
//! [`TypeToken`] — a [`TypeId`] plus an optional qualified name — and the
//! supertype relation is declared explicitly through
//! [`TypeHierarchy`](crate::registry::TypeHierarchy) at configuration time.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a fault type: its [`TypeId`] plus an optional qualified name.
///
/// Equality and hashing are by id alone; the name is display metadata.
/// [`TypeToken::anonymous`] produces a token whose name is unresolvable,
/// modelling closures and generated types whose compiler name is not a
/// meaningful qualified name.
#[derive(Debug, Clone, Copy, Eq)]
pub struct TypeToken {
    id: TypeId,
    name: Option<&'static str>,
}

impl TypeToken {
    /// Token for `T`, named with `T`'s canonical type name.
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: Some(type_name::<T>()),
        }
    }

    /// Token for `T` with no resolvable qualified name.
    pub fn anonymous<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: None,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "<anonymous {:?}>", self.id),
        }
    }
}

/// A value that can be dispatched through the registry.
///
/// Blanket-implemented for every `Any + Debug + Send + Sync` type, so any
/// application error value is a fault without ceremony. The composite
/// generator's entry point takes `&dyn Fault`.
pub trait Fault: Any + Send + Sync {
    /// Token of the value's concrete runtime type.
    fn token(&self) -> TypeToken;

    /// Upcast for downcasting back to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Human-readable representation, used in diagnostics when no generator
    /// is found.
    fn describe(&self) -> String;
}

impl<T: Any + fmt::Debug + Send + Sync> Fault for T {
    fn token(&self) -> TypeToken {
        TypeToken::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}
