//! Category hierarchy built from flat catalog records.
//!
//! The tree is built once, before a session starts, and is read-only
//! afterwards. Child lists keep the order the records arrived in (tier
//! order, then listing order); that order is what users see and index.

use std::collections::{HashMap, HashSet};

use super::category::{Category, RawCategoryRecord, ROOT_ID};

/// Queryable category hierarchy
#[derive(Debug, Clone)]
pub struct CategoryTree {
    root: Category,
    by_id: HashMap<String, Category>,
    children_by_parent: HashMap<String, Vec<Category>>,
}

impl Default for CategoryTree {
    fn default() -> Self {
        Self {
            root: Category::root(),
            by_id: HashMap::new(),
            children_by_parent: HashMap::new(),
        }
    }
}

impl CategoryTree {
    /// Build the hierarchy from records in listing order.
    ///
    /// Dangling parent ids are kept; such categories are simply never
    /// reachable from the root. A repeated id replaces the earlier record.
    pub fn build(records: impl IntoIterator<Item = RawCategoryRecord>) -> Self {
        let mut tree = Self::default();

        for record in records {
            tree.insert(Category::from_record(record));
        }

        let dangling = tree.dangling_count();
        log::debug!(
            "built category tree: {} categories, {} parents, {} unreachable via dangling parent",
            tree.by_id.len(),
            tree.children_by_parent.len(),
            dangling
        );

        tree
    }

    fn insert(&mut self, category: Category) {
        let parent_id = category.parent_id().unwrap_or(ROOT_ID).to_string();

        if let Some(previous) = self.by_id.remove(category.id()) {
            log::debug!(
                "category id '{}' listed twice; keeping '{}' over '{}'",
                category.id(),
                category.name(),
                previous.name()
            );
            let previous_parent = previous.parent_id().unwrap_or(ROOT_ID);
            if let Some(siblings) = self.children_by_parent.get_mut(previous_parent) {
                siblings.retain(|c| c.id() != previous.id());
                if siblings.is_empty() {
                    self.children_by_parent.remove(previous_parent);
                }
            }
        }

        self.children_by_parent
            .entry(parent_id)
            .or_default()
            .push(category.clone());
        self.by_id.insert(category.id().to_string(), category);
    }

    fn dangling_count(&self) -> usize {
        self.by_id
            .values()
            .filter(|c| {
                let parent = c.parent_id().unwrap_or(ROOT_ID);
                parent != ROOT_ID && !self.by_id.contains_key(parent)
            })
            .count()
    }

    /// The synthetic root (initial navigation position)
    pub fn root(&self) -> &Category {
        &self.root
    }

    /// Look up a category by id; the root id resolves to the synthetic root
    pub fn get(&self, id: &str) -> Option<&Category> {
        if id == ROOT_ID {
            return Some(&self.root);
        }
        self.by_id.get(id)
    }

    /// Children of `id` in listing order (empty if none)
    pub fn children(&self, id: &str) -> &[Category] {
        self.children_by_parent
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_children(&self, id: &str) -> bool {
        !self.children(id).is_empty()
    }

    /// Parent of `id`. `None` for the root itself and for unknown ids.
    ///
    /// A parent id that is not in the index falls back to the root.
    pub fn parent_of(&self, id: &str) -> Option<&Category> {
        let category = self.get(id)?;
        let parent_id = category.parent_id()?;
        Some(self.get(parent_id).unwrap_or(&self.root))
    }

    /// Number of categories, excluding the synthetic root
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Total length of all child lists (always equals `len()`)
    pub fn child_entry_count(&self) -> usize {
        self.children_by_parent.values().map(Vec::len).sum()
    }

    /// Depth-first listing of every category reachable from the root.
    ///
    /// Depth 0 is a top-level category. Ids are visited once, so a record
    /// whose id collides with the root id cannot loop the walk.
    pub fn walk(&self) -> Vec<(usize, &Category)> {
        let mut out = Vec::with_capacity(self.by_id.len());
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(ROOT_ID);

        let mut stack: Vec<(usize, &Category)> = self
            .children(ROOT_ID)
            .iter()
            .rev()
            .map(|c| (0, c))
            .collect();

        while let Some((depth, category)) = stack.pop() {
            out.push((depth, category));
            if !visited.insert(category.id()) {
                continue;
            }
            for child in self.children(category.id()).iter().rev() {
                stack.push((depth + 1, child));
            }
        }

        out
    }
}
