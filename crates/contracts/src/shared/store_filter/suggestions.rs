/// Outcome of narrowing an autocomplete candidate list by typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionList {
    /// Nothing typed yet: every candidate is offered.
    All(Vec<String>),
    /// Typed text matched at least one candidate.
    Matches(Vec<String>),
    /// Typed text matched nothing; the dropdown shows a placeholder.
    NoMatch,
}

impl SuggestionList {
    pub fn items(&self) -> &[String] {
        match self {
            SuggestionList::All(items) | SuggestionList::Matches(items) => items,
            SuggestionList::NoMatch => &[],
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, SuggestionList::NoMatch)
    }
}

/// Case-insensitive substring match, keeping the candidates' order.
pub fn filter_suggestions(candidates: &[String], input: &str) -> SuggestionList {
    if input.is_empty() {
        return SuggestionList::All(candidates.to_vec());
    }

    let needle = input.to_lowercase();
    let matches: Vec<String> = candidates
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if matches.is_empty() {
        SuggestionList::NoMatch
    } else {
        SuggestionList::Matches(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        ["Turkey", "USA", "Germany", "Poland"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_substring_not_prefix() {
        // "an" sits inside both names, neither starts with it
        assert_eq!(
            filter_suggestions(&candidates(), "an"),
            SuggestionList::Matches(vec!["Germany".to_string(), "Poland".to_string()])
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            filter_suggestions(&candidates(), "us").items(),
            &["USA".to_string()]
        );
        assert_eq!(
            filter_suggestions(&candidates(), "TUR").items(),
            &["Turkey".to_string()]
        );
    }

    #[test]
    fn test_keeps_candidate_order() {
        assert_eq!(
            filter_suggestions(&candidates(), "e").items(),
            &["Turkey".to_string(), "Germany".to_string()]
        );
    }

    #[test]
    fn test_empty_input_is_not_no_match() {
        let all = filter_suggestions(&candidates(), "");
        assert_eq!(all, SuggestionList::All(candidates()));
        assert!(!all.is_no_match());

        let none = filter_suggestions(&candidates(), "zz");
        assert!(none.is_no_match());
        assert!(none.items().is_empty());
    }

    #[test]
    fn test_empty_candidates() {
        assert_eq!(filter_suggestions(&[], ""), SuggestionList::All(vec![]));
        assert_eq!(filter_suggestions(&[], "a"), SuggestionList::NoMatch);
    }
}
