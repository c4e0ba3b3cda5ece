/// Reply category, one per keyword rule plus the fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Incident,
    Audit,
    Compliance,
    Hazard,
    Crew,
    Equipment,
    Analytics,
    Default,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Incident => "incident",
            Category::Audit => "audit",
            Category::Compliance => "compliance",
            Category::Hazard => "hazard",
            Category::Crew => "crew",
            Category::Equipment => "equipment",
            Category::Analytics => "analytics",
            Category::Default => "default",
        }
    }
}

/// Keyword rules in precedence order. First rule with a matching keyword wins.
pub const RULES: &[(Category, &[&str])] = &[
    (Category::Incident, &["incident", "accident", "injury"]),
    (Category::Audit, &["audit", "inspection"]),
    (Category::Compliance, &["compliance", "regulation", "requirement"]),
    (Category::Hazard, &["hazard", "risk"]),
    (Category::Crew, &["crew", "employee", "worker"]),
    (Category::Equipment, &["equipment", "machinery", "tractor"]),
    (Category::Analytics, &["analyze", "report", "data", "insight"]),
];

/// Case-insensitive substring match against [`RULES`]
pub fn classify_category(input: &str) -> Category {
    let lower = input.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword_maps_to_its_category() {
        for (category, keywords) in RULES {
            for keyword in *keywords {
                assert_eq!(classify_category(keyword), *category, "keyword {keyword}");
            }
        }
    }

    #[test]
    fn test_category_names() {
        // Every keyword category is named after its own first keyword
        for (category, keywords) in &RULES[..6] {
            assert_eq!(category.as_str(), keywords[0]);
        }
        assert_eq!(Category::Analytics.as_str(), "analytics");
        assert_eq!(Category::Default.as_str(), "default");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_category("INJURY at the barn"), Category::Incident);
        assert_eq!(classify_category("Tractor rollover"), Category::Equipment);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            classify_category("schedule an audit after the incident"),
            Category::Incident
        );
        assert_eq!(
            classify_category("inspection of compliance"),
            Category::Audit
        );
        assert_eq!(
            classify_category("report on worker hazard"),
            Category::Hazard
        );
        assert_eq!(classify_category("crew tractor data"), Category::Crew);
    }

    #[test]
    fn test_substring_matching() {
        // "reporting" contains "report", "requirements" contains "requirement"
        assert_eq!(classify_category("reporting"), Category::Analytics);
        assert_eq!(
            classify_category("What are Iowa ag safety requirements?"),
            Category::Compliance
        );
        // "risky" contains "risk"
        assert_eq!(classify_category("that looks risky"), Category::Hazard);
    }

    #[test]
    fn test_default_when_nothing_matches() {
        assert_eq!(classify_category(""), Category::Default);
        assert_eq!(classify_category("   "), Category::Default);
        assert_eq!(classify_category("hello there"), Category::Default);
    }
}
