//! Cause resolution: deriving "why" a fault occurred.
//!
//! A [`Cause`] pairs a string key with the original fault, and feeds every
//! downstream resolver. The standard strategies are [`fixed`], [`from_fn`]
//! and [`by_type`]; a configuration picks exactly one per generator.
//!
//! # Examples
//!
//! ```
//! use faultline::cause::{self, CauseResolver};
//!
//! #[derive(Debug)]
//! struct PaymentDeclined;
//!
//! let resolver = cause::fixed("PAYMENT_DECLINED");
//! let cause = resolver.cause_of(&PaymentDeclined)?;
//! assert_eq!(cause.key(), "PAYMENT_DECLINED");
//! # Ok::<(), faultline::error::CauseResolvingError>(())
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{BoxError, CauseResolvingError};
use crate::registry::{Fault, TypeHierarchy};

/// Why a fault occurred: a string key plus the original fault as context.
///
/// Equality and hashing are by key alone — two causes with the same key are
/// the same cause, regardless of differing context. Created fresh per fault
/// processed and discarded once the response is produced.
pub struct Cause<'a, T: ?Sized> {
    key: String,
    context: &'a T,
}

impl<'a, T: ?Sized> Cause<'a, T> {
    pub fn new(key: impl Into<String>, context: &'a T) -> Self {
        Self {
            key: key.into(),
            context,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The original fault (or relevant fragment), for resolvers that read
    /// more than the key.
    pub fn context(&self) -> &'a T {
        self.context
    }
}

impl<T: ?Sized> Clone for Cause<'_, T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            context: self.context,
        }
    }
}

impl<T: ?Sized> PartialEq for Cause<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T: ?Sized> Eq for Cause<'_, T> {}

impl<T: ?Sized> Hash for Cause<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for Cause<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cause")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Maps a fault to a [`Cause`]. Must not fail silently: any problem while
/// computing the key surfaces as [`CauseResolvingError`].
pub trait CauseResolver<T: ?Sized>: Send + Sync {
    fn cause_of<'a>(&self, fault: &'a T) -> Result<Cause<'a, T>, CauseResolvingError>;
}

/// Resolver returning a constant key for every fault.
pub fn fixed(key: impl Into<String>) -> FixedCauseResolver {
    FixedCauseResolver { key: key.into() }
}

#[derive(Debug, Clone)]
pub struct FixedCauseResolver {
    key: String,
}

impl<T: ?Sized> CauseResolver<T> for FixedCauseResolver {
    fn cause_of<'a>(&self, fault: &'a T) -> Result<Cause<'a, T>, CauseResolvingError> {
        Ok(Cause::new(self.key.clone(), fault))
    }
}

/// Resolver computing the key with a caller-supplied function. A failure of
/// the function is wrapped into [`CauseResolvingError::Failed`].
pub fn from_fn<F>(f: F) -> FnCauseResolver<F> {
    FnCauseResolver { f }
}

pub struct FnCauseResolver<F> {
    f: F,
}

impl<T, F> CauseResolver<T> for FnCauseResolver<F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<String, BoxError> + Send + Sync,
{
    fn cause_of<'a>(&self, fault: &'a T) -> Result<Cause<'a, T>, CauseResolvingError> {
        let key = (self.f)(fault).map_err(|source| CauseResolvingError::Failed { source })?;
        Ok(Cause::new(key, fault))
    }
}

/// Resolver keying on the qualified name of the fault's runtime type.
///
/// When the type has no resolvable name (marked anonymous in the hierarchy),
/// the resolver walks its declared supertypes breadth-first, in declaration
/// order, and uses the first ancestor with a resolvable name. It fails only
/// when the entire ancestor chain is exhausted.
pub fn by_type(hierarchy: Arc<TypeHierarchy>) -> TypeCauseResolver {
    TypeCauseResolver { hierarchy }
}

#[derive(Clone)]
pub struct TypeCauseResolver {
    hierarchy: Arc<TypeHierarchy>,
}

impl<T: Fault + ?Sized> CauseResolver<T> for TypeCauseResolver {
    fn cause_of<'a>(&self, fault: &'a T) -> Result<Cause<'a, T>, CauseResolvingError> {
        let token = fault.token();
        let key = self.hierarchy.qualified_name_of(token).ok_or_else(|| {
            CauseResolvingError::UnresolvableTypeName {
                type_repr: token.to_string(),
            }
        })?;
        tracing::debug!(key, "resolved cause by runtime type");
        Ok(Cause::new(key, fault))
    }
}
