//! Union-find over arbitrary hashable keys.
//!
//! Parents and ranks live in two hash maps keyed by the element itself, so
//! callers can partition `BuildingId`s (or anything else that is
//! `Copy + Eq + Hash`) without first mapping them to dense indices.
//!
//! `find` compresses paths in two iterative passes: walk up to the root,
//! then walk the same path again pointing every node straight at the root.
//! No recursion, so arbitrarily long parent chains are safe.

use std::hash::Hash;

use crate::IdMap;

/// Disjoint-set forest with union by rank and full path compression.
#[derive(Clone, Debug)]
pub struct DisjointSet<T> {
    parent: IdMap<T, T>,
    rank:   IdMap<T, u32>,
    sets:   usize,
}

impl<T: Copy + Eq + Hash> DisjointSet<T> {
    pub fn new() -> Self {
        Self {
            parent: IdMap::default(),
            rank:   IdMap::default(),
            sets:   0,
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            parent: IdMap::with_capacity_and_hasher(n, Default::default()),
            rank:   IdMap::with_capacity_and_hasher(n, Default::default()),
            sets:   0,
        }
    }

    /// Register `element` as a singleton set with rank 0.
    ///
    /// Adding an element that is already registered does nothing.
    pub fn add(&mut self, element: T) {
        if self.parent.contains_key(&element) {
            return;
        }
        self.parent.insert(element, element);
        self.rank.insert(element, 0);
        self.sets += 1;
    }

    pub fn contains(&self, element: T) -> bool {
        self.parent.contains_key(&element)
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the forest.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `element`, or `None` if the
    /// element was never added.
    pub fn try_find(&mut self, element: T) -> Option<T> {
        let mut root = element;
        loop {
            let parent = *self.parent.get(&root)?;
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut cur = element;
        while cur != root {
            match self.parent.get_mut(&cur) {
                Some(p) => cur = std::mem::replace(p, root),
                None => break,
            }
        }
        Some(root)
    }

    /// Representative of the set containing `element`.
    ///
    /// # Panics
    ///
    /// If `element` was never [`add`](Self::add)ed.  Every element must be
    /// registered before it is queried.
    pub fn find(&mut self, element: T) -> T {
        match self.try_find(element) {
            Some(root) => root,
            None => panic!("DisjointSet::find called on an element that was never added"),
        }
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// The lower-rank root goes under the higher-rank root.  On equal ranks
    /// `a`'s root becomes the parent and its rank grows by one.  Returns
    /// `true` if two distinct sets were merged.
    ///
    /// # Panics
    ///
    /// If either element was never added.
    pub fn union(&mut self, a: T, b: T) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank[&root_a];
        let rank_b = self.rank[&root_b];
        match rank_a.cmp(&rank_b) {
            std::cmp::Ordering::Less => {
                self.parent.insert(root_a, root_b);
            }
            std::cmp::Ordering::Greater => {
                self.parent.insert(root_b, root_a);
            }
            std::cmp::Ordering::Equal => {
                self.parent.insert(root_b, root_a);
                self.rank.insert(root_a, rank_a + 1);
            }
        }
        self.sets -= 1;
        true
    }

    /// `true` if `a` and `b` are in the same set.
    pub fn connected(&mut self, a: T, b: T) -> bool {
        self.find(a) == self.find(b)
    }

    #[cfg(test)]
    pub(crate) fn rank(&self, element: T) -> Option<u32> {
        self.rank.get(&element).copied()
    }

    /// Direct parent of `element`, without compressing anything.
    #[cfg(test)]
    pub(crate) fn parent(&self, element: T) -> Option<T> {
        self.parent.get(&element).copied()
    }
}

impl<T: Copy + Eq + Hash> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
