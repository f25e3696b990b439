use crate::error::Result;
use crate::node::{NodeId, PersonId, WorkId};
use rustc_hash::FxHashMap;
use std::cell::RefCell;

/// Maps between display names and store identifiers.
pub trait IdentityResolver {
    /// Case-insensitive exact match; the lowest identifier wins among
    /// duplicates. A miss is `Ok(None)`.
    fn resolve_person(&self, name: &str) -> Result<Option<PersonId>>;

    /// Fails with `Error::NotFound` when the id has no row.
    fn person_name(&self, id: PersonId) -> Result<String>;

    /// Fails with `Error::NotFound` when the id has no row.
    fn work_name(&self, id: WorkId) -> Result<String>;

    fn node_name(&self, node: NodeId) -> Result<String> {
        match node {
            NodeId::Person(id) => self.person_name(id),
            NodeId::Work(id) => self.work_name(id),
        }
    }
}

impl<R: IdentityResolver + ?Sized> IdentityResolver for &R {
    fn resolve_person(&self, name: &str) -> Result<Option<PersonId>> {
        (**self).resolve_person(name)
    }

    fn person_name(&self, id: PersonId) -> Result<String> {
        (**self).person_name(id)
    }

    fn work_name(&self, id: WorkId) -> Result<String> {
        (**self).work_name(id)
    }
}

/// Memoizes reverse lookups of an inner resolver. Name resolution is passed
/// through untouched.
pub struct CachedResolver<R> {
    inner: R,
    names: RefCell<FxHashMap<NodeId, String>>,
}

impl<R: IdentityResolver> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            names: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn cached_len(&self) -> usize {
        self.names.borrow().len()
    }

    fn cached_name(&self, node: NodeId, lookup: impl FnOnce() -> Result<String>) -> Result<String> {
        if let Some(name) = self.names.borrow().get(&node) {
            return Ok(name.clone());
        }

        let name = lookup()?;
        self.names.borrow_mut().insert(node, name.clone());
        Ok(name)
    }
}

impl<R: IdentityResolver> IdentityResolver for CachedResolver<R> {
    fn resolve_person(&self, name: &str) -> Result<Option<PersonId>> {
        self.inner.resolve_person(name)
    }

    fn person_name(&self, id: PersonId) -> Result<String> {
        self.cached_name(NodeId::Person(id), || self.inner.person_name(id))
    }

    fn work_name(&self, id: WorkId) -> Result<String> {
        self.cached_name(NodeId::Work(id), || self.inner.work_name(id))
    }
}
