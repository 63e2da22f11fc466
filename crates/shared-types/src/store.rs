use crate::session::AuthSnapshot;
use std::cell::RefCell;
use std::rc::Rc;

/// Handle returned by [`SessionStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&AuthSnapshot)>;

struct StoreInner {
    snapshot: AuthSnapshot,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Shared auth state with publish/subscribe change delivery.
///
/// The session provider is the only writer; views hold clones of the handle
/// and read snapshots. Cloning is cheap and every clone sees the same state.
/// Single-threaded: the handle is `!Send`, matching the UI event loop.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(AuthSnapshot::default())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SessionStore")
            .field("snapshot", &inner.snapshot)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionStore {
    pub fn new(initial: AuthSnapshot) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                snapshot: initial,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> AuthSnapshot {
        self.inner.borrow().snapshot.clone()
    }

    /// Register a listener called with every subsequent change.
    pub fn subscribe(&self, listener: impl Fn(&AuthSnapshot) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _)| *lid != id);
        inner.listeners.len() != before
    }

    /// Replace the state and notify listeners in subscription order.
    ///
    /// Publishing a snapshot equal to the current one is a no-op. Listeners
    /// run after the internal borrow is released, so they may read the store
    /// or publish again.
    pub fn publish(&self, snapshot: AuthSnapshot) -> bool {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.snapshot == snapshot {
                return false;
            }
            inner.snapshot = snapshot.clone();
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener(&snapshot);
        }
        true
    }

    /// Apply an in-place edit to the current snapshot and publish the result.
    pub fn update(&self, edit: impl FnOnce(&mut AuthSnapshot)) -> bool {
        let mut next = self.snapshot();
        edit(&mut next);
        self.publish(next)
    }
}
