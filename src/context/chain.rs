//! Request-scoped value chain.
//!
//! A `Context` is an immutable, singly linked list of `(key type, value)`
//! entries. Deriving a child prepends an entry and shares the parent's tail,
//! so a child never affects its parent or siblings. Keys are types, usually
//! private zero-sized markers, so unrelated users cannot collide.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
}

struct Node {
    key: TypeId,
    value: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<Node>>,
}

impl Context {
    /// The empty root context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a child carrying `value` under key type `K`.
    pub fn with_value<K, V>(&self, value: V) -> Self
    where
        K: Any,
        V: Any + Send + Sync,
    {
        Self {
            head: Some(Arc::new(Node {
                key: TypeId::of::<K>(),
                value: Arc::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// Nearest value stored under key type `K`, whatever its type.
    pub fn value<K: Any>(&self) -> Option<&(dyn Any + Send + Sync)> {
        let key = TypeId::of::<K>();
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            if current.key == key {
                return Some(current.value.as_ref());
            }
            node = current.parent.as_deref();
        }
        None
    }

    /// Nearest value under `K`, if it is a `V`.
    pub fn get<K: Any, V: Any>(&self) -> Option<&V> {
        self.value::<K>()?.downcast_ref::<V>()
    }

    /// Number of entries in the chain.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            depth += 1;
            node = current.parent.as_deref();
        }
        depth
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("depth", &self.depth()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UserKey;
    struct TenantKey;

    #[test]
    fn test_lookup_walks_to_parent() {
        let root = Context::background();
        let ctx = root
            .with_value::<UserKey, _>("amy".to_string())
            .with_value::<TenantKey, _>(42u32);

        assert_eq!(ctx.get::<UserKey, String>().map(String::as_str), Some("amy"));
        assert_eq!(ctx.get::<TenantKey, u32>(), Some(&42));
        assert_eq!(ctx.depth(), 2);
        assert!(root.value::<UserKey>().is_none());
    }

    #[test]
    fn test_child_shadows_without_touching_parent() {
        let parent = Context::background().with_value::<UserKey, _>("amy".to_string());
        let child = parent.with_value::<UserKey, _>("bob".to_string());
        let sibling = parent.with_value::<TenantKey, _>(7u32);

        assert_eq!(child.get::<UserKey, String>().unwrap(), "bob");
        assert_eq!(parent.get::<UserKey, String>().unwrap(), "amy");
        assert_eq!(sibling.get::<UserKey, String>().unwrap(), "amy");
        assert!(parent.get::<TenantKey, u32>().is_none());
    }

    #[test]
    fn test_wrong_type_under_key() {
        let ctx = Context::background().with_value::<UserKey, _>(1u8);
        assert!(ctx.value::<UserKey>().is_some());
        assert!(ctx.get::<UserKey, String>().is_none());
    }
}
