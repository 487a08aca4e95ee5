//! Pokémon records and domain-specific filters
//!
//! [`PokemonQuery`] borrows a slice of records and narrows it with chainable
//! filters such as [`PokemonQuery::legendary`] or [`PokemonQuery::flying`].
//! Each applied filter leaves a human-readable label behind so callers can
//! show what the current selection means.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::generation::Generation;
use crate::sort::SortField;

pub const DEFAULT_EXPERIENCED_MIN: i64 = 100;
pub const DEFAULT_RARE_MIN: i64 = 200;
pub const DEFAULT_TALL_MIN: u32 = 20;

/// A single Pokémon entry of the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub base_experience: i64,
    pub is_legendary: bool,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: BTreeMap<String, u32>,
    #[serde(default)]
    pub abilities: BTreeSet<String>,
    pub generation: Generation,
    pub species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_url: Option<String>,
}

/// Chainable selection over a borrowed set of Pokémon
#[derive(Debug, Clone)]
pub struct PokemonQuery<'a> {
    items: Vec<&'a Pokemon>,
    labels: Vec<String>,
}

impl<'a> PokemonQuery<'a> {
    pub fn new(pokemons: &'a [Pokemon]) -> Self {
        Self {
            items: pokemons.iter().collect(),
            labels: Vec::new(),
        }
    }

    fn filter<F>(mut self, label: String, predicate: F) -> Self
    where
        F: Fn(&Pokemon) -> bool,
    {
        self.items.retain(|pokemon| predicate(pokemon));
        self.labels.push(label);
        self
    }

    /// Positive base experience of at least `min`
    pub fn experienced(self, min: i64) -> Self {
        self.filter(format!("Experienced ({min}+ exp)"), |p| {
            p.base_experience > 0 && p.base_experience >= min
        })
    }

    pub fn flying(self) -> Self {
        self.filter("Flying".to_string(), |p| p.types.iter().any(|t| t == "flying"))
    }

    /// Restrict to one generation; `None` keeps everything
    pub fn generation(self, generation: Option<Generation>) -> Self {
        match generation {
            Some(generation) => self.filter(format!("Generation {generation}"), move |p| {
                p.generation == generation
            }),
            None => self.filter("All Generations".to_string(), |_| true),
        }
    }

    pub fn intimidating(self) -> Self {
        self.filter("Intimidating".to_string(), |p| {
            p.abilities.contains("intimidate")
        })
    }

    pub fn legendary(self, flag: bool) -> Self {
        self.filter(format!("Legendary ({flag})"), move |p| p.is_legendary == flag)
    }

    pub fn rare(self, min: i64) -> Self {
        self.filter(format!("Rare ({min}+ exp)"), |p| p.base_experience >= min)
    }

    pub fn tall(self, min: u32) -> Self {
        self.filter(format!("Tall ({min}+ height)"), |p| p.height >= min)
    }

    /// Stable sort on `field`; ties are always broken by ascending id
    pub fn sort_by(mut self, field: SortField, descending: bool) -> Self {
        self.items.sort_by(|a, b| {
            let ordering = compare_by(field, a, b);
            let ordering = if descending {
                ordering.reverse()
            } else {
                ordering
            };
            ordering.then_with(|| a.id.cmp(&b.id))
        });
        self
    }

    pub fn items(&self) -> &[&'a Pokemon] {
        &self.items
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items of the 1-based `page`; empty when the page is out of range
    pub fn page(&self, page: usize, per_page: usize) -> &[&'a Pokemon] {
        if page == 0 || per_page == 0 {
            return &[];
        }

        let start = match (page - 1).checked_mul(per_page) {
            Some(start) if start < self.items.len() => start,
            _ => return &[],
        };
        let end = start.saturating_add(per_page).min(self.items.len());

        &self.items[start..end]
    }

    pub fn total_pages(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }

        self.items.len().div_ceil(per_page)
    }
}

fn compare_by(field: SortField, a: &Pokemon, b: &Pokemon) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::BaseExperience => a.base_experience.cmp(&b.base_experience),
        SortField::Generation => a.generation.cmp(&b.generation),
        SortField::Height => a.height.cmp(&b.height),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Species => a.species.cmp(&b.species),
        SortField::Weight => a.weight.cmp(&b.weight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(
        id: u32,
        name: &str,
        legendary: bool,
        types: &[&str],
        ability: &str,
        base_experience: i64,
        height: u32,
    ) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            base_experience,
            is_legendary: legendary,
            height,
            weight: 10 * height,
            stats: BTreeMap::new(),
            abilities: BTreeSet::from([ability.to_string()]),
            generation: Generation::I,
            species: format!("{name} species"),
            sprite_url: None,
        }
    }

    fn fixture() -> Vec<Pokemon> {
        vec![
            pokemon(1, "Mewtwo", true, &["psychic"], "pressure", 306, 20),
            pokemon(2, "Pidgey", false, &["flying", "normal"], "keen-eye", 50, 3),
            pokemon(3, "Zapdos", true, &["electric", "flying"], "intimidate", 261, 16),
            pokemon(4, "Bulbasaur", false, &["grass", "poison"], "overgrow", 64, 7),
        ]
    }

    fn names(query: &PokemonQuery<'_>) -> Vec<String> {
        query.items().iter().map(|p| p.name.clone()).collect()
    }

    // ============================================================================
    // Filter tests
    // ============================================================================

    #[test]
    fn test_legendary() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons).legendary(true);
        assert_eq!(names(&query), vec!["Mewtwo", "Zapdos"]);
    }

    #[test]
    fn test_not_legendary() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons).legendary(false);
        assert_eq!(names(&query), vec!["Pidgey", "Bulbasaur"]);
        assert_eq!(query.labels(), ["Legendary (false)"]);
    }

    #[test]
    fn test_flying() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons).flying();
        assert_eq!(names(&query), vec!["Pidgey", "Zapdos"]);
    }

    #[test]
    fn test_intimidating() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons).intimidating();
        assert_eq!(names(&query), vec!["Zapdos"]);
    }

    #[test]
    fn test_experienced() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons).experienced(200);
        assert_eq!(names(&query), vec!["Mewtwo", "Zapdos"]);
    }

    #[test]
    fn test_experienced_default_threshold() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons).experienced(DEFAULT_EXPERIENCED_MIN);
        assert_eq!(names(&query), vec!["Mewtwo", "Zapdos"]);
        assert_eq!(query.labels(), ["Experienced (100+ exp)"]);
    }

    #[test]
    fn test_experienced_excludes_non_positive_experience() {
        let mut pokemons = fixture();
        pokemons[3].base_experience = 0;
        let query = PokemonQuery::new(&pokemons).experienced(0);
        assert_eq!(names(&query), vec!["Mewtwo", "Pidgey", "Zapdos"]);
    }

    #[test]
    fn test_rare() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons).rare(300);
        assert_eq!(names(&query), vec!["Mewtwo"]);
    }

    #[test]
    fn test_rare_default_threshold() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons).rare(DEFAULT_RARE_MIN);
        assert_eq!(names(&query), vec!["Mewtwo", "Zapdos"]);
    }

    #[test]
    fn test_tall() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons).tall(DEFAULT_TALL_MIN);
        assert_eq!(names(&query), vec!["Mewtwo"]);
    }

    #[test]
    fn test_generation_filter() {
        let mut pokemons = fixture();
        pokemons[1].generation = Generation::II;

        let query = PokemonQuery::new(&pokemons).generation(Some(Generation::II));
        assert_eq!(names(&query), vec!["Pidgey"]);
        assert_eq!(query.labels(), ["Generation 2"]);

        let all = PokemonQuery::new(&pokemons).generation(None);
        assert_eq!(all.len(), 4);
        assert_eq!(all.labels(), ["All Generations"]);
    }

    #[test]
    fn test_chaining() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons).legendary(true).flying();
        assert_eq!(names(&query), vec!["Zapdos"]);
        assert_eq!(query.labels(), ["Legendary (true)", "Flying"]);
    }

    #[test]
    fn test_chaining_to_empty() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons).intimidating().tall(20);
        assert!(query.is_empty());
    }

    // ============================================================================
    // Sorting and paging tests
    // ============================================================================

    #[test]
    fn test_sort_by_name() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons).sort_by(SortField::Name, false);
        assert_eq!(names(&query), vec!["Bulbasaur", "Mewtwo", "Pidgey", "Zapdos"]);
    }

    #[test]
    fn test_sort_descending_breaks_ties_by_id() {
        let mut pokemons = fixture();
        pokemons[0].base_experience = 261;
        let query = PokemonQuery::new(&pokemons).sort_by(SortField::BaseExperience, true);
        assert_eq!(names(&query), vec!["Mewtwo", "Zapdos", "Bulbasaur", "Pidgey"]);
    }

    #[test]
    fn test_page_slices() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons);

        assert_eq!(query.total_pages(3), 2);
        assert_eq!(query.page(1, 3).len(), 3);
        assert_eq!(query.page(2, 3).len(), 1);
        assert_eq!(query.page(2, 3)[0].name, "Bulbasaur");
    }

    #[test]
    fn test_page_out_of_range() {
        let pokemons = fixture();
        let query = PokemonQuery::new(&pokemons);

        assert!(query.page(0, 3).is_empty());
        assert!(query.page(3, 3).is_empty());
        assert!(query.page(1, 0).is_empty());
        assert!(query.page(usize::MAX, 2).is_empty());
        assert_eq!(query.total_pages(0), 0);
    }

    // ============================================================================
    // Serialization tests
    // ============================================================================

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "types": ["electric"],
            "base_experience": 112,
            "is_legendary": false,
            "height": 4,
            "weight": 60,
            "stats": {"hp": 35, "speed": 90},
            "abilities": ["static", "lightning-rod"],
            "generation": 1,
            "species": "Mouse"
        }"#;

        let pikachu: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pikachu.generation, Generation::I);
        assert_eq!(pikachu.stats.get("speed"), Some(&90));
        assert!(pikachu.abilities.contains("static"));
        assert_eq!(pikachu.sprite_url, None);
    }
}
