//! Minimal [`game_core::ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;

use game_core::{ItemOracle, ItemTemplate};

/// ItemOracle implementation with static item templates.
#[derive(Debug, Default)]
pub struct ItemOracleImpl {
    templates: HashMap<String, ItemTemplate>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: impl Into<String>, template: ItemTemplate) {
        self.templates.insert(id.into(), template);
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<(String, ItemTemplate)> for ItemOracleImpl {
    fn from_iter<T: IntoIterator<Item = (String, ItemTemplate)>>(iter: T) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}

impl ItemOracle for ItemOracleImpl {
    fn template(&self, def_id: &str) -> Option<&ItemTemplate> {
        self.templates.get(def_id)
    }

    fn template_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.templates.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }
}
