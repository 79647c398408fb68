//! Type-based generator registry with cached, hierarchy-aware lookup.

use std::any::{type_name, TypeId};
use std::collections::{HashMap, HashSet, VecDeque};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::OnceCell;

use crate::error::GenerationError;
use crate::response::{ErrorResponse, ResponseGenerator};

use super::hierarchy::TypeHierarchy;
use super::token::{Fault, TypeToken};

/// A registered generator, shared between the table, the cache and callers.
pub type SharedGenerator = Arc<dyn ResponseGenerator<dyn Fault>>;

type CacheSlot = Arc<OnceCell<Option<SharedGenerator>>>;

/// Maps fault types to response generators, honouring type-hierarchy
/// precedence.
///
/// The type-to-generator table and the hierarchy are write-once at
/// construction and read-only afterward. Lookup walks the fault type's
/// hierarchy breadth-first, seeded with the exact runtime type: the first
/// type with a direct mapping wins, so an explicitly mapped subtype always
/// beats a broader ancestor mapping, and ties among equally-deep ancestors
/// are broken by declared supertype order alone.
///
/// Lookups are memoized per observed runtime type, including misses. The
/// cache is single-flight per key: concurrent first-time lookups for the
/// same type collapse into one walk — late arrivals block until the first
/// computation completes and reuse its result. Entries are never
/// invalidated; the table cannot go stale.
pub struct FaultRegistry {
    table: HashMap<TypeId, SharedGenerator>,
    hierarchy: Arc<TypeHierarchy>,
    slots: Mutex<HashMap<TypeId, CacheSlot>>,
    computed: AtomicUsize,
}

impl FaultRegistry {
    pub fn builder() -> FaultRegistryBuilder {
        FaultRegistryBuilder {
            table: HashMap::new(),
            hierarchy: None,
        }
    }

    /// Finds the generator registered for the closest ancestor of `fault`'s
    /// runtime type. `None` means no mapping exists anywhere in the
    /// hierarchy; the composite generator turns that into a failure.
    pub fn search_for(&self, fault: &dyn Fault) -> Option<SharedGenerator> {
        self.lookup(fault.token())
    }

    /// Token-level variant of [`search_for`](Self::search_for).
    pub fn lookup(&self, token: TypeToken) -> Option<SharedGenerator> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(token.id()).or_default())
        };
        slot.get_or_init(|| {
            self.computed.fetch_add(1, Ordering::Relaxed);
            self.walk(token)
        })
        .clone()
    }

    /// Breadth-first upward walk over the declared hierarchy. First match
    /// wins; FIFO order guarantees closer types are checked before farther
    /// ones.
    fn walk(&self, token: TypeToken) -> Option<SharedGenerator> {
        let mut queue = VecDeque::from([token]);
        let mut seen = HashSet::from([token.id()]);
        while let Some(current) = queue.pop_front() {
            if let Some(generator) = self.table.get(&current.id()) {
                tracing::debug!(matched = %current, looked_up = %token, "registry walk matched");
                return Some(Arc::clone(generator));
            }
            for parent in self.hierarchy.parents_of(current.id()) {
                if seen.insert(parent.id()) {
                    queue.push_back(*parent);
                }
            }
        }
        tracing::debug!(looked_up = %token, "registry walk found no generator");
        None
    }

    /// Cache counters, for observability. `computed` counts actual walks,
    /// so it stays at one per distinct type no matter how many concurrent
    /// callers raced on the first lookup.
    pub fn cache_stats(&self) -> CacheStats {
        let entries = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        CacheStats {
            entries,
            computed: self.computed.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of the lookup cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Distinct runtime types observed.
    pub entries: usize,
    /// Hierarchy walks actually executed.
    pub computed: usize,
}

/// Builder for [`FaultRegistry`].
pub struct FaultRegistryBuilder {
    table: HashMap<TypeId, SharedGenerator>,
    hierarchy: Option<Arc<TypeHierarchy>>,
}

impl FaultRegistryBuilder {
    /// The supertype graph lookups walk. Defaults to an empty hierarchy,
    /// in which only exact-type mappings can match.
    pub fn hierarchy(mut self, hierarchy: Arc<TypeHierarchy>) -> Self {
        self.hierarchy = Some(hierarchy);
        self
    }

    /// Registers a generator typed for the concrete fault type `T`, keyed by
    /// `T`'s exact token. A value dispatched here through a hierarchy
    /// mapping of some other type fails with a `TypeMismatch`; generators
    /// meant to serve a whole type family belong in
    /// [`register_dyn`](Self::register_dyn).
    pub fn register<T: Fault>(self, generator: impl ResponseGenerator<T> + 'static) -> Self {
        self.register_token(TypeToken::of::<T>(), Arc::new(Downcast::new(generator)))
    }

    /// Registers a generator operating on `&dyn Fault` under `T`'s token, so
    /// any descendant of `T` in the hierarchy can dispatch to it.
    pub fn register_dyn<T: Fault>(
        self,
        generator: impl ResponseGenerator<dyn Fault> + 'static,
    ) -> Self {
        self.register_token(TypeToken::of::<T>(), Arc::new(generator))
    }

    /// Registers an already-erased generator under an explicit token.
    /// Re-registering a token replaces the previous mapping; keys are
    /// unique.
    pub fn register_token(mut self, token: TypeToken, generator: SharedGenerator) -> Self {
        self.table.insert(token.id(), generator);
        self
    }

    pub fn build(self) -> FaultRegistry {
        FaultRegistry {
            table: self.table,
            hierarchy: self
                .hierarchy
                .unwrap_or_else(|| Arc::new(TypeHierarchy::empty())),
            slots: Mutex::new(HashMap::new()),
            computed: AtomicUsize::new(0),
        }
    }
}

/// Adapter running a generator typed for concrete `T` against `&dyn Fault`
/// by downcasting. The downcast can only fail on a misconfigured hierarchy
/// mapping, surfaced as `TypeMismatch` rather than a panic.
struct Downcast<T: ?Sized, G> {
    inner: G,
    _fault: PhantomData<fn(&T)>,
}

impl<T: ?Sized, G> Downcast<T, G> {
    fn new(inner: G) -> Self {
        Self {
            inner,
            _fault: PhantomData,
        }
    }
}

impl<T, G> ResponseGenerator<dyn Fault> for Downcast<T, G>
where
    T: Fault,
    G: ResponseGenerator<T>,
{
    fn response_of(&self, fault: &dyn Fault) -> Result<ErrorResponse, GenerationError> {
        match fault.as_any().downcast_ref::<T>() {
            Some(typed) => self.inner.response_of(typed),
            None => Err(GenerationError::TypeMismatch {
                expected: type_name::<T>(),
                fault: fault.describe(),
            }),
        }
    }
}
