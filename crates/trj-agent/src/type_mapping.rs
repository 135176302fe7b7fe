//! Dense type-name → type-index assignment.
//!
//! Indices are assigned in first-seen order during one linear scan over
//! frames and, within a frame, over live slots in construction order.  The
//! encoder and `TranslateFilter` both derive their mapping here, so a type
//! index named in a filter's configuration means the same type the output
//! will carry.

use std::collections::{BTreeMap, HashMap};

use trj_core::TypeIndex;

use crate::{AgentData, AgentError, AgentResult};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeMapping {
    by_index: BTreeMap<TypeIndex, String>,
    by_name:  HashMap<String, TypeIndex>,
}

impl TypeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a table of pre-assigned indices.
    ///
    /// Two names claiming one index is an error.  A name listed twice keeps
    /// its first index.
    pub fn seeded<'a>(
        reserved: impl IntoIterator<Item = (&'a str, TypeIndex)>,
    ) -> AgentResult<Self> {
        let mut mapping = Self::new();
        for (name, index) in reserved {
            if mapping.by_name.contains_key(name) {
                continue;
            }
            if let Some(first) = mapping.by_index.get(&index) {
                return Err(AgentError::DuplicateTypeIndex {
                    index,
                    first:  first.clone(),
                    second: name.to_owned(),
                });
            }
            mapping.by_index.insert(index, name.to_owned());
            mapping.by_name.insert(name.to_owned(), index);
        }
        Ok(mapping)
    }

    /// Scan every live slot of `data` in order.
    pub fn from_agent_data(data: &AgentData) -> Self {
        let mut mapping = Self::new();
        mapping.extend_from(data);
        mapping
    }

    /// Register every live type name of `data` not yet mapped.
    pub fn extend_from(&mut self, data: &AgentData) {
        for frame in 0..data.total_steps() {
            for name in &data.types[frame][..data.n_agents[frame]] {
                self.get_or_insert(name);
            }
        }
    }

    /// Index of `name`, assigning the smallest free index if it is new.
    pub fn get_or_insert(&mut self, name: &str) -> TypeIndex {
        if let Some(&index) = self.by_name.get(name) {
            return index;
        }
        let index = self.next_free();
        self.by_index.insert(index, name.to_owned());
        self.by_name.insert(name.to_owned(), index);
        index
    }

    pub fn index_of(&self, name: &str) -> Option<TypeIndex> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, index: TypeIndex) -> Option<&str> {
        self.by_index.get(&index).map(String::as_str)
    }

    pub fn contains_index(&self, index: TypeIndex) -> bool {
        self.by_index.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }

    /// `(index, name)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeIndex, &str)> {
        self.by_index.iter().map(|(&i, n)| (i, n.as_str()))
    }

    fn next_free(&self) -> TypeIndex {
        // Indices are dense unless seeded with gaps; fill gaps first.
        let mut candidate = 0u32;
        for &TypeIndex(used) in self.by_index.keys() {
            if used != candidate {
                break;
            }
            candidate += 1;
        }
        TypeIndex(candidate)
    }
}
