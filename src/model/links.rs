use std::collections::{BTreeMap, BTreeSet};

/// Both directions of a one-to-many association, held as two maps kept
/// consistent by construction: `child` is in `children[p]` if and only if
/// `parent_of[child] == p`. Mutations touch only the entities named in the
/// call; links of everything else are left as they were. Purely in-memory
/// bookkeeping, nothing here talks to the store.
#[derive(Debug, Clone)]
pub struct LinkIndex<P, C> {
    children: BTreeMap<P, BTreeSet<C>>,
    parent_of: BTreeMap<C, P>,
}

impl<P: Clone + Ord, C: Clone + Ord> LinkIndex<P, C> {
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            parent_of: BTreeMap::new(),
        }
    }

    /// Link `child` under `parent`. Idempotent; a child already linked
    /// elsewhere moves to the new parent.
    pub fn attach(&mut self, parent: &P, child: &C) {
        if let Some(previous) = self.parent_of.get(child) {
            if previous == parent {
                return;
            }
            let previous = previous.clone();
            self.unlink(&previous, child);
        }
        self.children
            .entry(parent.clone())
            .or_default()
            .insert(child.clone());
        self.parent_of.insert(child.clone(), parent.clone());
    }

    /// Unlink `child` from `parent`. The back-reference is cleared only when
    /// the child is currently linked to this particular parent.
    pub fn detach(&mut self, parent: &P, child: &C) {
        if self.parent_of.get(child) == Some(parent) {
            self.unlink(parent, child);
        }
    }

    /// Replace the full child set of `parent`: current children absent from
    /// the new set are unlinked, members of the new set are linked (moving
    /// them from other parents where necessary). `None` is an explicit empty
    /// replacement, not a fault.
    pub fn replace_children(&mut self, parent: &P, new_children: Option<Vec<C>>) {
        for child in self.children_of(parent) {
            self.unlink(parent, &child);
        }
        if let Some(new_children) = new_children {
            for child in &new_children {
                self.attach(parent, child);
            }
        }
    }

    pub fn parent_of(&self, child: &C) -> Option<&P> {
        self.parent_of.get(child)
    }

    pub fn children_of(&self, parent: &P) -> Vec<C> {
        self.children
            .get(parent)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, parent: &P, child: &C) -> bool {
        self.children
            .get(parent)
            .is_some_and(|set| set.contains(child))
    }

    /// Drop every link of a deleted parent, returning the children whose
    /// back-reference was cleared so the caller can null their records.
    pub fn clear_parent(&mut self, parent: &P) -> Vec<C> {
        let detached = self.children_of(parent);
        for child in &detached {
            self.parent_of.remove(child);
        }
        self.children.remove(parent);
        detached
    }

    /// Drop the link of a deleted child, if it had one.
    pub fn remove_child(&mut self, child: &C) {
        if let Some(parent) = self.parent_of.remove(child) {
            if let Some(set) = self.children.get_mut(&parent) {
                set.remove(child);
                if set.is_empty() {
                    self.children.remove(&parent);
                }
            }
        }
    }

    fn unlink(&mut self, parent: &P, child: &C) {
        if let Some(set) = self.children.get_mut(parent) {
            set.remove(child);
            if set.is_empty() {
                self.children.remove(parent);
            }
        }
        self.parent_of.remove(child);
    }
}

impl<P: Clone + Ord, C: Clone + Ord> Default for LinkIndex<P, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_is_idempotent() {
        let mut links: LinkIndex<i64, i64> = LinkIndex::new();
        links.attach(&1, &10);
        links.attach(&1, &10);

        assert_eq!(links.children_of(&1), vec![10]);
        assert_eq!(links.parent_of(&10), Some(&1));
    }

    #[test]
    fn attach_moves_child_between_parents() {
        let mut links: LinkIndex<i64, i64> = LinkIndex::new();
        links.attach(&1, &10);
        links.attach(&2, &10);

        assert!(links.children_of(&1).is_empty());
        assert_eq!(links.children_of(&2), vec![10]);
        assert_eq!(links.parent_of(&10), Some(&2));
    }

    #[test]
    fn detach_only_clears_links_to_that_parent() {
        let mut links: LinkIndex<i64, i64> = LinkIndex::new();
        links.attach(&1, &10);

        links.detach(&2, &10);
        assert_eq!(links.parent_of(&10), Some(&1));

        links.detach(&1, &10);
        assert_eq!(links.parent_of(&10), None);
        assert!(!links.contains(&1, &10));
    }

    #[test]
    fn replace_children_relinks_both_sides() {
        let mut links: LinkIndex<i64, i64> = LinkIndex::new();
        links.attach(&1, &10);
        links.attach(&1, &11);
        links.attach(&2, &12);

        links.replace_children(&1, Some(vec![11, 12]));

        assert_eq!(links.children_of(&1), vec![11, 12]);
        assert_eq!(links.parent_of(&10), None);
        assert_eq!(links.parent_of(&12), Some(&1));
        assert!(links.children_of(&2).is_empty());
    }

    #[test]
    fn replace_children_with_none_clears() {
        let mut links: LinkIndex<i64, i64> = LinkIndex::new();
        links.attach(&1, &10);

        links.replace_children(&1, None);

        assert!(links.children_of(&1).is_empty());
        assert_eq!(links.parent_of(&10), None);
    }

    #[test]
    fn clear_parent_reports_detached_children() {
        let mut links: LinkIndex<i64, i64> = LinkIndex::new();
        links.attach(&1, &10);
        links.attach(&1, &11);

        let detached = links.clear_parent(&1);

        assert_eq!(detached, vec![10, 11]);
        assert_eq!(links.parent_of(&10), None);
        assert_eq!(links.parent_of(&11), None);
    }

    #[test]
    fn remove_child_drops_its_link() {
        let mut links: LinkIndex<i64, i64> = LinkIndex::new();
        links.attach(&1, &10);
        links.attach(&1, &11);

        links.remove_child(&10);

        assert_eq!(links.children_of(&1), vec![11]);
        assert_eq!(links.parent_of(&10), None);
    }
}
