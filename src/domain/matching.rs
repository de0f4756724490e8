//! Recipe matching engine.
//!
//! Ingredients and tags are conjunctive: every selected value must be present.
//! Difficulty and country are membership tests: a recipe has one of each, so
//! several selected values are alternatives. Keep the two semantics apart.

use std::collections::HashSet;

use crate::domain::filters::FilterCatalog;
use crate::domain::recipe::Recipe;

/// Recipes satisfying every constraint, deduplicated by id in input order.
pub fn find_matching<'a, S, F>(
    recipes: &'a [Recipe],
    selected_ingredient_ids: &[S],
    selected_filters: &[F],
    filter_catalog: &FilterCatalog,
) -> Vec<&'a Recipe>
where
    S: AsRef<str>,
    F: AsRef<str>,
{
    let filters = filter_catalog.partition(selected_filters.iter().map(|f| f.as_ref()));
    let mut seen: HashSet<&str> = HashSet::new();
    let mut matched = Vec::new();

    for recipe in recipes {
        let satisfied = matches_ingredients(recipe, selected_ingredient_ids)
            && matches_tags(recipe, &filters.tags)
            && matches_difficulty(recipe, &filters.difficulties)
            && matches_country(recipe, &filters.countries);

        if satisfied && seen.insert(recipe.id.as_str()) {
            matched.push(recipe);
        }
    }

    matched
}

fn matches_ingredients<S: AsRef<str>>(recipe: &Recipe, selected: &[S]) -> bool {
    selected.iter().all(|id| recipe.uses_ingredient(id.as_ref()))
}

fn matches_tags(recipe: &Recipe, tags: &[&str]) -> bool {
    tags.iter().all(|tag| recipe.has_tag(tag))
}

fn matches_difficulty(recipe: &Recipe, difficulties: &[&str]) -> bool {
    if difficulties.is_empty() {
        return true;
    }
    recipe
        .difficulty
        .is_some_and(|d| difficulties.contains(&d.as_str()))
}

fn matches_country(recipe: &Recipe, countries: &[&str]) -> bool {
    if countries.is_empty() {
        return true;
    }
    recipe
        .country_en()
        .is_some_and(|country| countries.contains(&country))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::english;
    use crate::domain::recipe::{Difficulty, RecipeIngredient};

    const NONE: &[&str] = &[];

    fn recipe(
        id: &str,
        tags: &[&str],
        difficulty: Difficulty,
        country: &str,
        ingredients: &[&str],
    ) -> Recipe {
        let mut recipe = Recipe::new(id, english(id));
        recipe.tags = tags.iter().map(|t| t.to_string()).collect();
        recipe.difficulty = Some(difficulty);
        recipe.country = Some(english(country));
        recipe.ingredients = ingredients
            .iter()
            .map(|i| RecipeIngredient::new(*i, "1"))
            .collect();
        recipe
    }

    fn catalog() -> Vec<Recipe> {
        vec![
            recipe("A", &["veg", "quick"], Difficulty::Easy, "Greece", &["tomato", "onion", "feta"]),
            recipe("B", &["veg"], Difficulty::Hard, "Italy", &["tomato", "pasta"]),
        ]
    }

    fn ids(found: &[&Recipe]) -> Vec<String> {
        found.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_no_selection_returns_everything() {
        let recipes = catalog();
        let filters = FilterCatalog::from_recipes(&recipes);
        let found = find_matching(&recipes, NONE, NONE, &filters);
        assert_eq!(ids(&found), vec!["A", "B"]);
    }

    #[test]
    fn test_single_tag() {
        let recipes = catalog();
        let filters = FilterCatalog::from_recipes(&recipes);
        let found = find_matching(&recipes, NONE, &["veg"], &filters);
        assert_eq!(ids(&found), vec!["A", "B"]);
    }

    #[test]
    fn test_tag_and_difficulty_narrow() {
        let recipes = catalog();
        let filters = FilterCatalog::from_recipes(&recipes);
        let found = find_matching(&recipes, NONE, &["veg", "easy"], &filters);
        assert_eq!(ids(&found), vec!["A"]);
    }

    #[test]
    fn test_two_difficulties_are_alternatives() {
        let recipes = catalog();
        let filters = FilterCatalog::from_recipes(&recipes);
        let found = find_matching(&recipes, NONE, &["easy", "hard"], &filters);
        assert_eq!(ids(&found), vec!["A", "B"]);
    }

    #[test]
    fn test_two_tags_are_conjunctive() {
        let recipes = catalog();
        let filters = FilterCatalog::from_recipes(&recipes);
        let found = find_matching(&recipes, NONE, &["veg", "quick"], &filters);
        assert_eq!(ids(&found), vec!["A"]);
    }

    #[test]
    fn test_two_countries_are_alternatives() {
        let recipes = catalog();
        let filters = FilterCatalog::from_recipes(&recipes);
        let found = find_matching(&recipes, NONE, &["Greece", "Italy"], &filters);
        assert_eq!(ids(&found), vec!["A", "B"]);
        let found = find_matching(&recipes, NONE, &["Italy"], &filters);
        assert_eq!(ids(&found), vec!["B"]);
    }

    #[test]
    fn test_ingredients_are_conjunctive() {
        let recipes = catalog();
        let filters = FilterCatalog::from_recipes(&recipes);
        let found = find_matching(&recipes, &["tomato", "onion"], NONE, &filters);
        assert_eq!(ids(&found), vec!["A"]);
        let found = find_matching(&recipes, &["tomato"], NONE, &filters);
        assert_eq!(ids(&found), vec!["A", "B"]);
    }

    #[test]
    fn test_duplicates_in_input_are_collapsed() {
        let mut recipes = catalog();
        recipes.push(recipes[0].clone());
        recipes.insert(1, recipes[0].clone());
        let filters = FilterCatalog::from_recipes(&recipes);
        let found = find_matching(&recipes, NONE, NONE, &filters);
        assert_eq!(ids(&found), vec!["A", "B"]);
    }

    #[test]
    fn test_unknown_filter_is_ignored() {
        let recipes = catalog();
        let filters = FilterCatalog::from_recipes(&recipes);
        let found = find_matching(&recipes, NONE, &["gluten-free"], &filters);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_recipe_without_difficulty_fails_difficulty_constraint() {
        let mut recipes = catalog();
        let mut plain = Recipe::new("C", english("C"));
        plain.tags = vec!["veg".to_string()];
        recipes.push(plain);
        let filters = FilterCatalog::from_recipes(&recipes);
        let found = find_matching(&recipes, NONE, &["veg", "easy"], &filters);
        assert_eq!(ids(&found), vec!["A"]);
    }

    #[test]
    fn test_result_is_subset_of_input() {
        let recipes = catalog();
        let filters = FilterCatalog::from_recipes(&recipes);
        let found = find_matching(&recipes, &["pasta"], &["veg", "Italy"], &filters);
        assert!(found.iter().all(|r| recipes.iter().any(|c| c.id == r.id)));
        assert_eq!(ids(&found), vec!["B"]);
    }
}
