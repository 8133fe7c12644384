/// Allocates and recycles `u32` identifiers.
///
/// Texture ids handed to the backend come from here so that a texture
/// released by `TextureManager::cleanup` frees its id for the next load.
/// Freed ids are recycled LIFO.
///
/// ```ignore
/// let mut ids = IdAllocator::new();
/// let a = ids.alloc();  // 0
/// let b = ids.alloc();  // 1
/// ids.free(a);          // 0 is now available
/// let c = ids.alloc();  // 0 (recycled)
/// ```
use rustc_hash::FxHashSet;

pub struct IdAllocator {
    free_list: Vec<u32>,
    live: FxHashSet<u32>,
    next_id: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            free_list: Vec::new(),
            live: FxHashSet::default(),
            next_id: 0,
        }
    }

    /// Allocate the next available id
    pub fn alloc(&mut self) -> u32 {
        let id = self.free_list.pop().unwrap_or_else(|| {
            let id = self.next_id;
            self.next_id += 1;
            id
        });
        self.live.insert(id);
        id
    }

    /// Return an id to the pool.
    ///
    /// Returns false (and changes nothing) if the id is not currently allocated.
    pub fn free(&mut self, id: u32) -> bool {
        if !self.live.remove(&id) {
            return false;
        }
        self.free_list.push(id);
        true
    }

    /// Whether `id` is currently allocated
    pub fn is_live(&self, id: u32) -> bool {
        self.live.contains(&id)
    }

    /// Number of currently allocated ids
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "id_allocator_tests.rs"]
mod tests;
