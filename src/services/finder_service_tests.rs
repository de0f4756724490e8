// src/services/finder_service_tests.rs
//
// Selection persistence, suggestions, matching and free-text search against
// the fixture catalog.

#[cfg(test)]
mod finder_tests {
    use std::sync::Arc;

    use crate::db::ConnectionPool;
    use crate::error::AppError;
    use crate::repositories::SqliteSelectionRepository;
    use crate::services::test_support::{loaded_catalog_service, test_pool};
    use crate::services::FinderService;

    fn finder(pool: &Arc<ConnectionPool>) -> FinderService {
        let finder = FinderService::new(
            loaded_catalog_service(pool.clone()),
            Arc::new(SqliteSelectionRepository::new(pool.clone())),
        );
        finder.load();
        finder
    }

    fn ids(recipes: &[crate::domain::Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_no_selection_returns_every_recipe() {
        let pool = test_pool();
        assert_eq!(ids(&finder(&pool).find_recipes()), vec!["A", "B"]);
    }

    #[test]
    fn test_ingredients_are_and_combined() {
        let pool = test_pool();
        let finder = finder(&pool);

        finder.add_ingredient("onion").unwrap();
        assert_eq!(ids(&finder.find_recipes()), vec!["A", "B"]);

        finder.add_ingredient("tomato").unwrap();
        assert_eq!(ids(&finder.find_recipes()), vec!["A"]);
    }

    #[test]
    fn test_filters_mix_and_or() {
        let pool = test_pool();
        let finder = finder(&pool);

        finder.toggle_filter("vegetarian");
        assert_eq!(ids(&finder.find_recipes()), vec!["A", "B"]);

        finder.toggle_filter("easy");
        assert_eq!(ids(&finder.find_recipes()), vec!["A"]);

        finder.toggle_filter("hard");
        assert_eq!(ids(&finder.find_recipes()), vec!["A", "B"]);

        finder.clear_filters();
        finder.toggle_filter("Italy");
        assert_eq!(ids(&finder.find_recipes()), vec!["B"]);
    }

    #[test]
    fn test_toggle_filter_twice_deselects() {
        let pool = test_pool();
        let finder = finder(&pool);

        assert!(finder.toggle_filter("quick"));
        assert!(!finder.toggle_filter("quick"));
        assert!(finder.selected_filters().is_empty());
    }

    #[test]
    fn test_selection_persists_but_filters_do_not() {
        let pool = test_pool();
        {
            let finder = finder(&pool);
            finder.add_ingredient("garlic").unwrap();
            finder.add_ingredient("onion").unwrap();
            finder.toggle_filter("hard");
        }

        let restored = finder(&pool);
        assert_eq!(restored.selection().ingredient_ids, vec!["garlic", "onion"]);
        assert!(restored.selected_filters().is_empty());

        let names: Vec<String> = restored
            .selected_ingredients()
            .iter()
            .map(|i| i.display_name("en").to_string())
            .collect();
        assert_eq!(names, vec!["Garlic", "Onion"]);
    }

    #[test]
    fn test_unknown_ingredient_is_rejected() {
        let pool = test_pool();
        let finder = finder(&pool);

        assert!(matches!(
            finder.add_ingredient("unobtainium"),
            Err(AppError::Validation(_))
        ));
        assert!(finder.selection().ingredient_ids.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let pool = test_pool();
        let finder = finder(&pool);
        finder.add_ingredient("onion").unwrap();
        finder.add_ingredient("feta").unwrap();

        let state = finder.remove_ingredient("onion").unwrap();
        assert_eq!(state.ingredient_ids, vec!["feta"]);

        finder.clear_ingredients().unwrap();
        assert!(self::finder(&pool).selection().ingredient_ids.is_empty());
    }

    #[test]
    fn test_suggestions_match_any_language_and_skip_selected() {
        let pool = test_pool();
        let finder = finder(&pool);

        let suggested: Vec<String> = finder
            .suggest_ingredients("ΣΚΌΡ")
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(suggested, vec!["garlic"]);

        finder.add_ingredient("tomato").unwrap();
        let suggested: Vec<String> = finder
            .suggest_ingredients("to")
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert!(!suggested.contains(&"tomato".to_string()));
    }

    #[test]
    fn test_blank_suggestion_text() {
        let pool = test_pool();
        assert!(finder(&pool).suggest_ingredients("   ").is_empty());
    }
}

#[cfg(test)]
mod search_tests {
    use crate::services::test_support::{loaded_catalog_service, test_pool};
    use crate::services::SearchService;

    fn search(query: &str) -> Vec<String> {
        let service = SearchService::new(loaded_catalog_service(test_pool()));
        service.search(query).into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_search_by_recipe_name() {
        assert_eq!(search("risot"), vec!["B"]);
    }

    #[test]
    fn test_search_by_ingredient_name() {
        assert_eq!(search("FETA"), vec!["A"]);
        assert_eq!(search("κρεμμύδι"), vec!["A", "B"]);
    }

    #[test]
    fn test_blank_query_finds_nothing() {
        assert!(search("  ").is_empty());
    }

    #[test]
    fn test_no_match() {
        assert!(search("sushi").is_empty());
    }
}
