use super::repository::Chef;

pub const ALL_CATEGORIES: &str = "All";

pub const CATEGORIES: [&str; 7] = [
    ALL_CATEGORIES,
    "Swahili",
    "Vegan",
    "Keto",
    "Grill",
    "Pastry",
    "Healthy",
];

/// Canonical spelling of a food type. `All` is a filter, not a food type.
pub fn food_type(raw: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .skip(1)
        .find(|category| category.eq_ignore_ascii_case(raw.trim()))
        .copied()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(needle)
}

pub fn matches(chef: &Chef, search: Option<&str>, category: Option<&str>) -> bool {
    let search = search.map(|term| term.trim().to_lowercase()).unwrap_or_default();
    let matches_search = search.is_empty()
        || contains_ignore_case(&chef.location, &search)
        || contains_ignore_case(&chef.business_name, &search);

    let matches_category = match category.map(str::trim) {
        None | Some("") => true,
        Some(category) if category.eq_ignore_ascii_case(ALL_CATEGORIES) => true,
        Some(category) => chef
            .food_types
            .iter()
            .any(|food_type| food_type.eq_ignore_ascii_case(category)),
    };

    matches_search && matches_category
}

pub fn filter(chefs: Vec<Chef>, search: Option<&str>, category: Option<&str>) -> Vec<Chef> {
    chefs
        .into_iter()
        .filter(|chef| matches(chef, search, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;

    fn chef(business_name: &str, location: &str, food_types: &[&str]) -> Chef {
        Chef {
            id: business_name.to_lowercase(),
            account_id: format!("acc-{}", business_name),
            business_name: business_name.to_string(),
            location: location.to_string(),
            bio: None,
            phone: None,
            food_types: Json(food_types.iter().map(|t| t.to_string()).collect()),
            base_location: None,
            delivery_zones: Json(vec![]),
            payout_number: None,
            profile_photo: None,
            is_approved: true,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    fn kitchens() -> Vec<Chef> {
        vec![
            chef("Pwani Bites", "Mombasa", &["Swahili", "Grill"]),
            chef("Green Bowl", "Kilimani", &["Vegan", "Healthy"]),
            chef("Crust & Co", "", &["Pastry"]),
        ]
    }

    fn names(chefs: Vec<Chef>) -> Vec<String> {
        chefs.into_iter().map(|chef| chef.business_name).collect()
    }

    #[test]
    fn empty_search_and_all_category_keep_everyone() {
        assert_eq!(filter(kitchens(), Some("  "), Some("All")).len(), 3);
        assert_eq!(filter(kitchens(), None, None).len(), 3);
    }

    #[test]
    fn search_matches_location_or_name_case_insensitively() {
        assert_eq!(names(filter(kitchens(), Some("mOMBA"), None)), vec!["Pwani Bites"]);
        assert_eq!(names(filter(kitchens(), Some("bowl"), None)), vec!["Green Bowl"]);
    }

    #[test]
    fn missing_location_never_matches_a_term() {
        assert!(filter(kitchens(), Some("nairobi"), None).is_empty());
        assert_eq!(names(filter(kitchens(), Some("crust"), None)), vec!["Crust & Co"]);
    }

    #[test]
    fn category_filters_by_food_type() {
        assert_eq!(names(filter(kitchens(), None, Some("vegan"))), vec!["Green Bowl"]);
        assert_eq!(
            names(filter(kitchens(), Some("pwani"), Some("Vegan"))),
            Vec::<String>::new()
        );
    }

    #[test]
    fn food_types_exclude_the_all_filter() {
        assert_eq!(food_type("keto"), Some("Keto"));
        assert_eq!(food_type("All"), None);
        assert_eq!(food_type("Sushi"), None);
    }
}
