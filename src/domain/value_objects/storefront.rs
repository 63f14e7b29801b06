use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::store_types::StoreType;

/// Query parameters accepted by the public store and product listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingFilter {
    #[serde(default)]
    pub search: Option<String>,
    /// Store type slug (`producer`, `wholesaler`, ...). An unknown slug matches nothing.
    #[serde(default)]
    pub store_type: Option<String>,
}

impl ListingFilter {
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches_type(&self, store_type: StoreType) -> bool {
        match self
            .store_type
            .as_deref()
            .map(str::trim)
            .filter(|wanted| !wanted.is_empty())
        {
            None => true,
            Some(wanted) => wanted.eq_ignore_ascii_case(store_type.as_str()),
        }
    }
}

/// Case-insensitive substring match against a record's name or description.
pub fn matches_text(term: Option<&str>, name: &str, description: &str) -> bool {
    match term {
        None => true,
        Some(term) => {
            name.to_lowercase().contains(term) || description.to_lowercase().contains(term)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_is_ignored() {
        let filter = ListingFilter {
            search: Some("   ".to_string()),
            store_type: None,
        };
        assert_eq!(filter.search_term(), None);
    }

    #[test]
    fn search_is_case_insensitive() {
        let filter = ListingFilter {
            search: Some(" Olive ".to_string()),
            store_type: None,
        };
        let term = filter.search_term();
        assert!(matches_text(term.as_deref(), "Extra OLIVE oil", ""));
        assert!(matches_text(term.as_deref(), "Oil", "cold pressed olive"));
        assert!(!matches_text(term.as_deref(), "Dates", "Deglet Nour"));
    }

    #[test]
    fn arabic_terms_match_descriptions() {
        let term = Some("زيت".to_string());
        assert!(matches_text(
            term.as_deref(),
            "عبوة 5 لتر",
            "زيت الزيتون البكر الممتاز"
        ));
    }

    #[test]
    fn type_filter_passes_everything_when_unset() {
        let filter = ListingFilter::default();
        assert!(filter.matches_type(StoreType::Retailer));

        let filter = ListingFilter {
            search: None,
            store_type: Some(" ".to_string()),
        };
        assert!(filter.matches_type(StoreType::Transport));
    }

    #[test]
    fn type_filter_matches_slug_case_insensitively() {
        let filter = ListingFilter {
            search: None,
            store_type: Some("Wholesaler".to_string()),
        };
        assert!(filter.matches_type(StoreType::Wholesaler));
        assert!(!filter.matches_type(StoreType::Producer));
    }

    #[test]
    fn unknown_type_slug_matches_no_store() {
        let filter = ListingFilter {
            search: None,
            store_type: Some("farmer".to_string()),
        };
        for store_type in [
            StoreType::Producer,
            StoreType::Wholesaler,
            StoreType::Retailer,
            StoreType::Transport,
        ] {
            assert!(!filter.matches_type(store_type));
        }
    }
}
