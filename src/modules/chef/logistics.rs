use itertools::Itertools;

/// Trims each zone, strips commas, drops blanks and keeps the first of any
/// duplicates.
pub fn normalize_zones(zones: Vec<String>) -> Vec<String> {
    zones
        .into_iter()
        .map(|zone| zone.replace(',', "").trim().to_string())
        .filter(|zone| !zone.is_empty())
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|zone| zone.to_string()).collect()
    }

    #[test]
    fn normalizes_and_dedupes_in_order() {
        let normalized = normalize_zones(zones(&[
            " Westlands ",
            "Kilimani,",
            "",
            "  ,  ",
            "Westlands",
            "Karen",
        ]));

        assert_eq!(normalized, zones(&["Westlands", "Kilimani", "Karen"]));
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        assert_eq!(
            normalize_zones(zones(&["Karen", "karen"])),
            zones(&["Karen", "karen"])
        );
    }
}
