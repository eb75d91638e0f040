//! The user's collection of caught creatures
//!
//! A plain in-memory keyed store, written through on every successful catch
//! and read by the `inspect` and `pokedex` commands. Not persisted; cleared
//! when the process exits.

use std::collections::HashMap;

use crate::api::Pokemon;

/// Caught creatures keyed by name
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: HashMap<String, Pokemon>,
}

impl Pokedex {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught creature, replacing any earlier catch of the same
    /// name.
    pub fn add(&mut self, pokemon: Pokemon) {
        self.entries.insert(pokemon.name.clone(), pokemon);
    }

    /// Looks up a caught creature by name.
    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.entries.get(name)
    }

    /// Returns the names of all caught creatures, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// True if nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(name: &str) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            base_experience: Some(64),
            height: 7,
            weight: 69,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_empty_pokedex() {
        let dex = Pokedex::new();
        assert!(dex.is_empty());
        assert!(dex.get("pikachu").is_none());
    }

    #[test]
    fn test_add_and_get() {
        let mut dex = Pokedex::new();
        dex.add(pokemon("pikachu"));

        assert!(!dex.is_empty());
        assert_eq!(dex.get("pikachu").unwrap().name, "pikachu");
        assert!(dex.get("mew").is_none());
    }

    #[test]
    fn test_names_are_sorted() {
        let mut dex = Pokedex::new();
        dex.add(pokemon("zubat"));
        dex.add(pokemon("abra"));
        dex.add(pokemon("mew"));

        assert_eq!(dex.names(), vec!["abra", "mew", "zubat"]);
    }
}
