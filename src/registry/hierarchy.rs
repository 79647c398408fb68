//! Explicit, statically-declared supertype graph for fault types.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet, VecDeque};

use super::token::TypeToken;

/// Immutable description of the supertype relation between fault types,
/// declared once at configuration time.
///
/// Each type maps to its direct supertypes in declaration order; that order
/// is what the registry's breadth-first walk and the by-type name fallback
/// rely on for deterministic tie-breaking. The hierarchy also carries
/// per-type display-name overrides: [`TypeHierarchyBuilder::anonymous`]
/// marks a type as having no resolvable qualified name,
/// [`TypeHierarchyBuilder::rename`] replaces the compiler name.
///
/// # Examples
///
/// ```
/// use faultline::registry::TypeHierarchy;
///
/// #[derive(Debug)]
/// struct Timeout;
/// #[derive(Debug)]
/// struct NetworkFailure;
///
/// let hierarchy = TypeHierarchy::builder()
///     .link::<Timeout, NetworkFailure>()
///     .build();
///
/// let parents = hierarchy.parents_of(std::any::TypeId::of::<Timeout>());
/// assert_eq!(parents.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TypeHierarchy {
    parents: HashMap<TypeId, Vec<TypeToken>>,
    names: HashMap<TypeId, Option<&'static str>>,
}

impl TypeHierarchy {
    pub fn builder() -> TypeHierarchyBuilder {
        TypeHierarchyBuilder::default()
    }

    /// A hierarchy with no links; every type stands alone.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Direct supertypes of `id`, in declaration order.
    pub fn parents_of(&self, id: TypeId) -> &[TypeToken] {
        self.parents.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The display name of `token` itself, honouring overrides.
    fn display_name(&self, token: TypeToken) -> Option<&'static str> {
        match self.names.get(&token.id()) {
            Some(overridden) => *overridden,
            None => token.name(),
        }
    }

    /// Qualified name of `token`, falling back breadth-first through its
    /// ancestors when the type itself has no resolvable name.
    ///
    /// Returns `None` only when the entire ancestor chain is exhausted
    /// without a resolvable name — a configuration error, surfaced by the
    /// by-type cause resolver.
    pub fn qualified_name_of(&self, token: TypeToken) -> Option<&'static str> {
        let mut queue = VecDeque::from([token]);
        let mut seen = HashSet::from([token.id()]);
        while let Some(current) = queue.pop_front() {
            if let Some(name) = self.display_name(current) {
                return Some(name);
            }
            for parent in self.parents_of(current.id()) {
                if seen.insert(parent.id()) {
                    queue.push_back(*parent);
                }
            }
        }
        None
    }
}

/// Builder for [`TypeHierarchy`].
#[derive(Debug, Default)]
pub struct TypeHierarchyBuilder {
    parents: HashMap<TypeId, Vec<TypeToken>>,
    names: HashMap<TypeId, Option<&'static str>>,
}

impl TypeHierarchyBuilder {
    /// Declares `Parent` as a direct supertype of `Child`. Repeated calls
    /// for the same child append, preserving declaration order.
    pub fn link<Child: Any + ?Sized, Parent: Any + ?Sized>(self) -> Self {
        self.link_token(TypeToken::of::<Child>(), TypeToken::of::<Parent>())
    }

    /// Token-level variant of [`link`](Self::link), for tokens built with
    /// [`TypeToken::anonymous`].
    pub fn link_token(mut self, child: TypeToken, parent: TypeToken) -> Self {
        self.parents.entry(child.id()).or_default().push(parent);
        self
    }

    /// Marks `T` as having no resolvable qualified name.
    pub fn anonymous<T: Any + ?Sized>(mut self) -> Self {
        self.names.insert(TypeId::of::<T>(), None);
        self
    }

    /// Overrides `T`'s display name.
    pub fn rename<T: Any + ?Sized>(mut self, name: &'static str) -> Self {
        self.names.insert(TypeId::of::<T>(), Some(name));
        self
    }

    pub fn build(self) -> TypeHierarchy {
        TypeHierarchy {
            parents: self.parents,
            names: self.names,
        }
    }
}
