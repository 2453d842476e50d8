//! Environment for variable scoping in the interpreter.
//!
//! An environment is a chain of frames. Each frame holds its own bindings
//! and a shared handle to its outer frame; closures keep their defining
//! frame alive by holding an [`Environment`] handle to it.


use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::object::Object;

/// A single-threaded shared cell for scope frames.
///
/// Wraps `Rc<RefCell<T>>` so every frame allocation goes through
/// [`LocalScope::new`]. Not thread-safe; the interpreter runs on one thread.
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

    /// Whether both handles point at the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
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
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Object>,
    parent: Option<Environment>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: Environment) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this frame, replacing any previous local binding.
    #[inline]
    pub fn define(&mut self, name: String, value: Object) {
        self.bindings.insert(name, value);
    }

    /// Look `name` up here, then in the outer frames.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.get(name);
        }
        None
    }
}

/// Handle to a frame in the environment chain.
///
/// Cloning the handle shares the frame.
#[derive(Clone, Default)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A frame with no outer frame.
    pub fn new_root() -> Self {
        Environment(LocalScope::new(Scope::new()))
    }

    /// A fresh frame whose lookups fall through to `outer`.
    pub fn new_child(outer: &Environment) -> Self {
        Environment(LocalScope::new(Scope::with_parent(outer.clone())))
    }

    /// Resolve `name` through the chain.
    pub fn get(&self, name: &str) -> Option<Object> {
        self.0.borrow().lookup(name)
    }

    /// Bind `name` in this frame only. Outer frames are never written.
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.0.borrow_mut().define(name.into(), value);
    }

    /// Names bound in this frame, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

// Frames can hold closures that hold the frame again, so Debug lists
// names only.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.local_names())
            .field("has_outer", &self.0.borrow().parent.is_some())
            .finish()
    }
}
