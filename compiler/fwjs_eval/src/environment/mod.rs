//! Lexical scope frames.
//!
//! An `Environment` is a handle to one frame of bindings plus a link to the
//! frame that encloses it. Handles are shared: cloning one, capturing it in
//! a closure, or creating a child of it all refer to the same frame, so a
//! write through any handle is seen by every other.
//!
//! The frame with no outer link is the global frame. Lookups and updates
//! that miss every frame in the chain end there.

// Rc is the intentional implementation detail of LocalScope<T>
#![expect(
    clippy::disallowed_types,
    reason = "Rc is the implementation of LocalScope<T>"
)]

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use fwjs_ir::Name;

use crate::Value;

/// Error returned by `Environment::declare`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{name:?} is already bound in this frame")]
pub struct DeclareError {
    pub name: Name,
}

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// Wraps `Rc<RefCell<T>>` so every frame allocation goes through
/// `LocalScope::new()`. Not thread-safe; evaluation runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles refer to the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &LocalScope<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One frame of bindings.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    outer: Option<Environment>,
}

impl Scope {
    /// Look up `name` in this frame only.
    #[inline]
    pub fn get(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    /// Number of bindings in this frame.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Shared handle to a scope frame.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// Create a fresh global frame.
    pub fn new_global() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// Create an empty frame whose outer frame is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            outer: Some(self.clone()),
        }))
    }

    /// The underlying frame.
    pub fn scope(&self) -> &LocalScope<Scope> {
        &self.0
    }

    /// Whether this is the global frame.
    pub fn is_global(&self) -> bool {
        self.0.borrow().outer.is_none()
    }

    /// Walk the outer links to the global frame.
    pub fn global(&self) -> Environment {
        let mut current = self.clone();
        loop {
            let outer = current.0.borrow().outer.clone();
            match outer {
                Some(outer) => current = outer,
                None => return current,
            }
        }
    }

    /// Whether both handles refer to the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }

    /// Find the nearest binding of `name`, searching outward.
    ///
    /// `None` means no frame in the chain binds it.
    pub fn resolve(&self, name: Name) -> Option<Value> {
        let scope = self.0.borrow();
        if let Some(value) = scope.bindings.get(&name) {
            return Some(value.clone());
        }
        scope.outer.as_ref()?.resolve(name)
    }

    /// Overwrite the nearest binding of `name`.
    ///
    /// If no frame binds it, the binding is created in the global frame.
    pub fn update(&self, name: Name, value: Value) {
        let outer = {
            let mut scope = self.0.borrow_mut();
            if let Some(slot) = scope.bindings.get_mut(&name) {
                *slot = value;
                return;
            }
            match &scope.outer {
                Some(outer) => outer.clone(),
                None => {
                    tracing::debug!(?name, "update created global binding");
                    scope.bindings.insert(name, value);
                    return;
                }
            }
        };
        outer.update(name, value);
    }

    /// Bind `name` in this frame only.
    ///
    /// Shadowing an outer binding is allowed; binding the same name twice
    /// in one frame is an error.
    pub fn declare(&self, name: Name, value: Value) -> Result<(), DeclareError> {
        match self.0.borrow_mut().bindings.entry(name) {
            Entry::Occupied(_) => Err(DeclareError { name }),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }
}

// Frames can hold closures that capture them, so only the shape is shown.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        f.debug_struct("Environment")
            .field("bindings", &scope.len())
            .field("global", &scope.outer.is_none())
            .finish()
    }
}
