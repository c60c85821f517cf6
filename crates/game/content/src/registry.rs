//! Name -> prototype catalog.

use std::collections::BTreeMap;

use mamba_core::{ActorTemplate, ItemTemplate, Prototype, ResourceTemplate};

/// Catalog of every spawnable prototype, keyed by display name.
///
/// Populated once at startup, either from [`crate::factory::builtin`] or
/// from RON files, then handed read-only to floor generation. Lookups by
/// the wrong kind (asking for an actor named "Crystal") return `None`
/// rather than panicking.
#[derive(Clone, Debug, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Prototype>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Registers a prototype under its own name. Returns the previous
    /// entry when the name was already taken.
    pub fn insert(&mut self, prototype: Prototype) -> Option<Prototype> {
        self.templates
            .insert(prototype.name().to_owned(), prototype)
    }

    pub fn get(&self, name: &str) -> Option<&Prototype> {
        self.templates.get(name)
    }

    pub fn actor(&self, name: &str) -> Option<&ActorTemplate> {
        match self.templates.get(name)? {
            Prototype::Actor(template) => Some(template),
            _ => None,
        }
    }

    pub fn item(&self, name: &str) -> Option<&ItemTemplate> {
        match self.templates.get(name)? {
            Prototype::Item(template) => Some(template),
            _ => None,
        }
    }

    pub fn resource(&self, name: &str) -> Option<&ResourceTemplate> {
        match self.templates.get(name)? {
            Prototype::Resource(template) => Some(template),
            _ => None,
        }
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_kind_checked() {
        let mut registry = TemplateRegistry::new();
        registry.insert(Prototype::Item(ItemTemplate::plain(
            "Crystal",
            'c',
            (7, 227, 247),
        )));

        assert!(registry.item("Crystal").is_some());
        assert!(registry.actor("Crystal").is_none());
        assert!(registry.get("Quartz").is_none());
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut registry = TemplateRegistry::new();
        registry.insert(Prototype::Item(ItemTemplate::plain(
            "Crystal",
            'c',
            (7, 227, 247),
        )));
        let previous = registry.insert(Prototype::Item(
            ItemTemplate::plain("Crystal", 'c', (7, 227, 247)).with_stack(1, 10),
        ));

        assert!(previous.is_some());
        assert_eq!(registry.item("Crystal").unwrap().max_stack, 10);
        assert_eq!(registry.len(), 1);
    }
}
