//! Shared, observable value cells.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::registry::{ObserverId, ObserverRegistry};

/// Observer slot. Shared so notification can run without holding a
/// borrow of the cell, which lets callbacks read or write the cell.
type Slot<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    value: T,
    observers: ObserverRegistry<Slot<T>>,
    ignore_count: usize,
    binding: Option<Binding<T>>,
}

/// Link to the observable this one follows.
struct Binding<T> {
    source: Observable<T>,
    observer: ObserverId,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        // Last handle gone: release the source's callback slot.
        if let Some(binding) = self.binding.take() {
            if let Ok(mut source) = binding.source.inner.try_borrow_mut() {
                source.observers.remove(binding.observer);
            }
        }
    }
}

/// A shared value cell that notifies observers when the value changes.
///
/// Cloning an `Observable` clones the handle, not the value: all clones
/// see and notify the same cell.
///
/// An observable can [`bind`](Observable::bind) to another one and then
/// mirrors that source's value until [`unbind`](Observable::unbind) or
/// [`reset`](Observable::reset). The source only keeps a weak link to
/// its followers.
///
/// # Re-entrancy
///
/// Callbacks may call any method on the observable that notified them.
/// A callback that is already running is not re-entered; observers
/// removed during a notification pass are not called later in that pass.
///
/// # Examples
///
/// ```
/// use gyre_observe::Observable;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let padding = Observable::new(0.0_f64);
/// let seen = Rc::new(Cell::new(0.0));
/// let sink = Rc::clone(&seen);
/// padding.observe(move |v| sink.set(*v));
///
/// padding.set(12.0);
/// assert_eq!(seen.get(), 12.0);
/// ```
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create an unbound observable holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                observers: ObserverRegistry::new(),
                ignore_count: 0,
                binding: None,
            })),
        }
    }

    /// A copy of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Run `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Set the value, notifying observers if it changed.
    ///
    /// While an [`ignore_changes`](Self::ignore_changes) budget is left,
    /// the call consumes one unit of it and does nothing else.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.ignore_count > 0 {
                inner.ignore_count -= 1;
                return;
            }
            if inner.value == value {
                return;
            }
            inner.value = value.clone();
        }
        self.notify(&value);
    }

    /// Register a callback invoked with the new value after each change.
    pub fn observe(&self, callback: impl FnMut(&T) + 'static) -> ObserverId {
        let slot: Slot<T> = Rc::new(RefCell::new(callback));
        self.inner.borrow_mut().observers.insert(slot)
    }

    /// Unregister a callback. Returns `true` if it was registered.
    pub fn unobserve(&self, id: ObserverId) -> bool {
        self.inner.borrow_mut().observers.remove(id).is_some()
    }

    /// Number of registered callbacks (including followers bound to
    /// this observable).
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    /// Skip the next `times` calls to [`set`](Self::set). Cumulative.
    ///
    /// Values arriving from a bound source are not affected.
    pub fn ignore_changes(&self, times: usize) {
        self.inner.borrow_mut().ignore_count += times;
    }

    /// Follow `source`: adopt its value now and whenever it changes.
    ///
    /// Rebinding to a different source drops the previous binding.
    /// Binding an observable to itself does nothing.
    pub fn bind(&self, source: &Observable<T>) {
        if Rc::ptr_eq(&self.inner, &source.inner) {
            return;
        }
        let already_bound = self
            .inner
            .borrow()
            .binding
            .as_ref()
            .is_some_and(|b| Rc::ptr_eq(&b.source.inner, &source.inner));

        if !already_bound {
            self.unbind();
            let follower = Rc::downgrade(&self.inner);
            let observer = source.observe(move |value: &T| {
                if let Some(inner) = follower.upgrade() {
                    Observable { inner }.adopt(value);
                }
            });
            self.inner.borrow_mut().binding = Some(Binding {
                source: source.clone(),
                observer,
            });
        }

        let value = source.get();
        self.adopt(&value);
    }

    /// Stop following the bound source. Returns `true` if a binding was
    /// dropped.
    pub fn unbind(&self) -> bool {
        let binding = self.inner.borrow_mut().binding.take();
        match binding {
            Some(binding) => {
                binding.source.unobserve(binding.observer);
                true
            }
            None => false,
        }
    }

    /// Whether this observable currently follows a source.
    pub fn is_bound(&self) -> bool {
        self.inner.borrow().binding.is_some()
    }

    /// Drop any binding, restore the default value without notifying and
    /// clear the ignore budget. A `deep` reset also unregisters every
    /// observer.
    pub fn reset(&self, deep: bool)
    where
        T: Default,
    {
        self.unbind();
        let mut inner = self.inner.borrow_mut();
        if deep {
            inner.observers.clear();
        }
        inner.value = T::default();
        inner.ignore_count = 0;
    }

    /// Take a value pushed by the bound source.
    fn adopt(&self, value: &T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == *value {
                return;
            }
            inner.value = value.clone();
        }
        self.notify(value);
    }

    fn notify(&self, value: &T) {
        let slots: Vec<(ObserverId, Slot<T>)> = self
            .inner
            .borrow()
            .observers
            .iter()
            .map(|(id, slot)| (id, Rc::clone(slot)))
            .collect();

        for (id, slot) in slots {
            if !self.inner.borrow().observers.contains(id) {
                continue;
            }
            if let Ok(mut callback) = slot.try_borrow_mut() {
                (&mut *callback)(value);
            }
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("observers", &inner.observers.len())
            .field("bound", &inner.binding.is_some())
            .finish()
    }
}
