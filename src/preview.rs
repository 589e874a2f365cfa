use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, info};
use crate::schematic::Schematic;

/// Memoises one rendered preview per schematic key.
///
/// Previews are released together by [`close`](PreviewCache::close) or when
/// the cache itself is dropped.
pub struct PreviewCache<K, P> {
    previews: HashMap<K, P>,
}

impl<K: Hash + Eq, P> PreviewCache<K, P> {
    pub fn new() -> Self {
        PreviewCache {
            previews: HashMap::new(),
        }
    }

    pub fn get_or_render<F>(&mut self, key: K, schematic: &Schematic, render: F) -> &P
    where
        F: FnOnce(&Schematic) -> P,
    {
        self.previews.entry(key).or_insert_with(|| {
            debug!("Rendering preview for {}x{} schematic", schematic.width, schematic.height);
            render(schematic)
        })
    }

    pub fn contains(&self, key: &K) -> bool {
        self.previews.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }

    /// Drops every cached preview and returns how many were released.
    pub fn close(&mut self) -> usize {
        let released = self.previews.len();
        self.previews.clear();
        if released > 0 {
            info!("Released {} schematic previews", released);
        }
        released
    }
}

impl<K: Hash + Eq, P> Default for PreviewCache<K, P> {
    fn default() -> Self {
        PreviewCache::new()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use super::*;

    #[test]
    fn test_preview_memoised() {
        let schematic = Schematic::new(Vec::new(), 2, 3);
        let mut cache = PreviewCache::new();
        let mut renders = 0;

        let first = *cache.get_or_render("a", &schematic, |s| {
            renders += 1;
            s.width * s.height
        });
        assert_eq!(first, 6);
        cache.get_or_render("a", &schematic, |_| {
            renders += 1;
            0
        });

        assert_eq!(renders, 1);
        assert!(cache.contains(&"a"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_close_releases_all() {
        let schematic = Schematic::new(Vec::new(), 1, 1);
        let handle = Rc::new(());
        let mut cache = PreviewCache::new();
        cache.get_or_render(1, &schematic, |_| handle.clone());
        cache.get_or_render(2, &schematic, |_| handle.clone());
        assert_eq!(Rc::strong_count(&handle), 3);

        assert_eq!(cache.close(), 2);
        assert!(cache.is_empty());
        assert_eq!(Rc::strong_count(&handle), 1);
        assert_eq!(cache.close(), 0);
    }

    #[test]
    fn test_drop_releases_all() {
        let schematic = Schematic::new(Vec::new(), 1, 1);
        let handle = Rc::new(());
        {
            let mut cache = PreviewCache::new();
            cache.get_or_render("only", &schematic, |_| handle.clone());
            assert_eq!(Rc::strong_count(&handle), 2);
        }
        assert_eq!(Rc::strong_count(&handle), 1);
    }
}
