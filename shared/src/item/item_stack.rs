use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use crate::TagDocument;

/// A single item stack living in the world, with its durable tag data.
///
/// Stacks are only ever handled through an [`ItemRef`]. Two stacks with equal
/// tags are still different stacks.
pub struct ItemStack {
    tag: Mutex<TagDocument>,
    dirty: AtomicBool,
}

impl ItemStack {
    fn new(tag: TagDocument) -> Self {
        Self {
            tag: Mutex::new(tag),
            dirty: AtomicBool::new(false),
        }
    }

    /// Returns a copy of the stack's tag document
    pub fn tag(&self) -> TagDocument {
        let Ok(tag) = self.tag.lock() else {
            panic!("ItemStack tag lock poisoned");
        };
        tag.clone()
    }

    /// Reads the tag document in place
    pub fn read_tag<R>(&self, f: impl FnOnce(&TagDocument) -> R) -> R {
        let Ok(tag) = self.tag.lock() else {
            panic!("ItemStack tag lock poisoned");
        };
        f(&tag)
    }

    /// Edits the tag document in place. Does not mark the stack dirty, callers
    /// decide whether the edit needs persisting.
    pub fn write_tag<R>(&self, f: impl FnOnce(&mut TagDocument) -> R) -> R {
        let Ok(mut tag) = self.tag.lock() else {
            panic!("ItemStack tag lock poisoned");
        };
        f(&mut tag)
    }

    /// Signals the persistence layer that the tag data needs flushing
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Clears the dirty signal, returning whether it was set
    pub fn clear_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }
}

// ItemRef
/// A shared handle to one specific [`ItemStack`].
///
/// Equality is handle identity: two `ItemRef`s are equal only if they point
/// at the same stack.
#[derive(Clone)]
pub struct ItemRef {
    inner: Arc<ItemStack>,
}

impl ItemRef {
    pub fn new() -> Self {
        Self::with_tag(TagDocument::new())
    }

    pub fn with_tag(tag: TagDocument) -> Self {
        Self {
            inner: Arc::new(ItemStack::new(tag)),
        }
    }

    pub fn ptr_eq(&self, other: &ItemRef) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for ItemRef {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for ItemRef {
    type Target = ItemStack;

    fn deref(&self) -> &ItemStack {
        &self.inner
    }
}

impl PartialEq for ItemRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ItemRef {}

impl fmt::Debug for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemRef({:p})", Arc::as_ptr(&self.inner))
    }
}
