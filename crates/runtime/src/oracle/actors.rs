//! Actor oracle implementing [`game_core::ActorOracle`].

use std::collections::HashMap;

use game_core::{ActorOracle, ActorTemplate};

/// Oracle providing actor templates.
#[derive(Debug, Default)]
pub struct ActorOracleImpl {
    templates: HashMap<String, ActorTemplate>,
}

impl ActorOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an actor template to the oracle.
    ///
    /// * `id` - Actor definition id (e.g. "orc", "player")
    pub fn add(&mut self, id: impl Into<String>, template: ActorTemplate) {
        self.templates.insert(id.into(), template);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<(String, ActorTemplate)> for ActorOracleImpl {
    fn from_iter<T: IntoIterator<Item = (String, ActorTemplate)>>(iter: T) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}

impl ActorOracle for ActorOracleImpl {
    fn template(&self, def_id: &str) -> Option<&ActorTemplate> {
        self.templates.get(def_id)
    }

    fn template_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.templates.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }
}
