//! Tag-to-strategy registry backing every factory in both systems
//!
//! Dispatch is a map from tag to constructor, populated once when a factory
//! is built. New variants are added by registering another entry, never by
//! editing existing dispatch code.

use std::collections::HashMap;

use crate::errors::{SharedError, SharedResult};

type Constructor<S> = Box<dyn Fn() -> Box<S> + Send + Sync>;

/// Maps string tags to strategy constructors for one family of strategies
///
/// `kind` names the family ("notification", "report", "format", "delivery")
/// and is echoed in the error when an unknown tag is looked up. Lookup is
/// exact and case-sensitive.
pub struct Registry<S: ?Sized> {
    kind: &'static str,
    entries: HashMap<&'static str, Constructor<S>>,
}

impl<S: ?Sized> Registry<S> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: HashMap::new(),
        }
    }

    /// Register a constructor under `tag`, replacing any previous entry
    pub fn register<F>(&mut self, tag: &'static str, ctor: F)
    where
        F: Fn() -> Box<S> + Send + Sync + 'static,
    {
        self.entries.insert(tag, Box::new(ctor));
    }

    /// Build a fresh strategy instance for `tag`
    pub fn create(&self, tag: &str) -> SharedResult<Box<S>> {
        match self.entries.get(tag) {
            Some(ctor) => Ok(ctor()),
            None => Err(SharedError::UnsupportedTag {
                kind: self.kind.to_string(),
                tag: tag.to_string(),
            }),
        }
    }

    pub fn supports(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Registered tags, sorted for stable output
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = self.entries.keys().copied().collect();
        tags.sort_unstable();
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct English;

    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    struct Spanish;

    impl Greeter for Spanish {
        fn greet(&self) -> String {
            "hola".to_string()
        }
    }

    fn sample_registry() -> Registry<dyn Greeter> {
        let mut registry: Registry<dyn Greeter> = Registry::new("greeting");
        registry.register("en", || Box::new(English));
        registry.register("es", || Box::new(Spanish));
        registry
    }

    #[test]
    fn test_create_known_tag() {
        let registry = sample_registry();
        let greeter = registry.create("es").unwrap();
        assert_eq!(greeter.greet(), "hola");
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let registry = sample_registry();
        match registry.create("fr") {
            Err(SharedError::UnsupportedTag { kind, tag }) => {
                assert_eq!(kind, "greeting");
                assert_eq!(tag, "fr");
            }
            Ok(_) => panic!("unknown tag must be rejected"),
        }
    }

    #[test]
    fn test_register_adds_new_variant() {
        let mut registry = sample_registry();
        assert!(!registry.supports("fr"));

        registry.register("fr", || {
            struct French;
            impl Greeter for French {
                fn greet(&self) -> String {
                    "bonjour".to_string()
                }
            }
            Box::new(French)
        });

        assert!(registry.supports("fr"));
        assert_eq!(registry.create("fr").unwrap().greet(), "bonjour");
    }

    #[test]
    fn test_reregister_replaces_entry() {
        let mut registry = sample_registry();
        registry.register("en", || Box::new(Spanish));
        assert_eq!(registry.create("en").unwrap().greet(), "hola");
        assert_eq!(registry.tags().len(), 2);
    }

    #[test]
    fn test_tags_are_sorted() {
        let registry = sample_registry();
        assert_eq!(registry.tags(), vec!["en", "es"]);
    }
}
