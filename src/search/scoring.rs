//! Ingredient matching and relevance scoring.
//!
//! An ingredient is matched when any normalized input term is a substring of the
//! lower-cased ingredient, or the lower-cased ingredient is a substring of the term.
//! The containment test is intentionally permissive: "tomato" matches both
//! "tomatoes" and "cherry tomatoes", and very short terms match broadly.

use crate::catalog::Catalog;
use crate::recipe::RecipeTemplate;

/// A template paired with the ingredients the caller can satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub template: &'a RecipeTemplate,
    /// Matched template ingredients, in template order.
    pub matched: Vec<String>,
    /// `matched.len() / template.ingredients.len()`, in `[0, 1]`.
    pub score: f64,
}

/// Symmetric substring containment between one ingredient and the input terms.
pub fn ingredient_matches(ingredient: &str, terms: &[String]) -> bool {
    let ingredient = ingredient.to_lowercase();
    terms
        .iter()
        .any(|term| ingredient.contains(term.as_str()) || term.contains(ingredient.as_str()))
}

/// Score one template against normalized input terms.
///
/// The denominator is the template's ingredient count, so short recipes reach
/// high scores with fewer matches. Unused input terms do not lower the score.
pub fn score_template<'a>(template: &'a RecipeTemplate, terms: &[String]) -> ScoredCandidate<'a> {
    let matched: Vec<String> = template
        .ingredients
        .iter()
        .filter(|ingredient| ingredient_matches(ingredient, terms))
        .cloned()
        .collect();

    let score = if template.ingredients.is_empty() {
        0.0
    } else {
        matched.len() as f64 / template.ingredients.len() as f64
    };

    ScoredCandidate {
        template,
        matched,
        score,
    }
}

/// Score every catalog template, preserving catalog order.
pub fn score_catalog<'a>(catalog: &'a Catalog, terms: &[String]) -> Vec<ScoredCandidate<'a>> {
    catalog
        .iter()
        .map(|template| score_template(template, terms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Difficulty;
    use assert2::check;
    use rstest::rstest;

    fn carbonara() -> RecipeTemplate {
        RecipeTemplate {
            title: "Classic Spaghetti Carbonara".to_string(),
            description: String::new(),
            ingredients: ["spaghetti", "eggs", "pecorino romano", "pancetta", "black pepper", "salt"]
                .map(String::from)
                .to_vec(),
            instructions: vec!["Cook.".to_string()],
            cooking_time: 20,
            difficulty: Difficulty::Medium,
            tags: vec![],
        }
    }

    fn terms(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case("cherry tomatoes", "tomato", true)] // term inside ingredient
    #[case("tomato", "tomatoes", true)] // ingredient inside term
    #[case("Black Pepper", "pepper", true)] // ingredient is lower-cased
    #[case("salt", "s", true)] // short terms match broadly
    #[case("garlic", "onion", false)]
    fn test_ingredient_matches(#[case] ingredient: &str, #[case] term: &str, #[case] expected: bool) {
        check!(ingredient_matches(ingredient, &terms(&[term])) == expected);
    }

    #[test]
    fn test_no_terms_never_match() {
        check!(!ingredient_matches("salt", &[]));
    }

    #[test]
    fn test_carbonara_example() {
        let template = carbonara();
        let candidate = score_template(&template, &terms(&["spaghetti", "eggs", "bacon"]));

        check!(candidate.matched == vec!["spaghetti", "eggs"]);
        check!((candidate.score - 2.0 / 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unused_terms_do_not_lower_score() {
        let template = carbonara();
        let few = score_template(&template, &terms(&["salt"]));
        let many = score_template(&template, &terms(&["salt", "kale", "tofu", "quinoa"]));
        check!(few.score == many.score);
    }

    #[test]
    fn test_full_match_scores_one() {
        let template = carbonara();
        let all: Vec<String> = template.ingredients.clone();
        let candidate = score_template(&template, &all);
        check!(candidate.score == 1.0);
        check!(candidate.matched == template.ingredients);
    }

    #[test]
    fn test_matched_keeps_template_order() {
        let template = carbonara();
        let candidate = score_template(&template, &terms(&["salt", "spaghetti"]));
        check!(candidate.matched == vec!["spaghetti", "salt"]);
    }
}
