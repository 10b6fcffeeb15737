use crate::listing::Listing;
use serde::{Deserialize, Serialize};

/// Sentinel value of an unset filter dimension.
pub const ALL: &str = "all";

/// Filter state for the listings page, mirrored into the page URL so a
/// filtered view can be linked to and restored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilters {
    /// Transaction type dimension: `"all"` or a value from the type control.
    pub kind: String,
    /// Category dimension: `"all"` or a value from the category control.
    pub category: String,
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self {
            kind: ALL.into(),
            category: ALL.into(),
        }
    }
}

impl ListingFilters {
    /// Seed the state from URL query parameters.
    ///
    /// Each parameter is matched case-insensitively against the values the
    /// corresponding control offers; a match adopts the control's spelling,
    /// anything unrecognized leaves the dimension at `"all"`.
    pub fn from_params(
        type_param: Option<&str>,
        category_param: Option<&str>,
        kind_options: &[&str],
        category_options: &[&str],
    ) -> Self {
        let mut filters = Self::default();
        if let Some(param) = type_param {
            if let Some(opt) = kind_options.iter().find(|o| o.eq_ignore_ascii_case(param)) {
                filters.kind = (*opt).to_string();
            }
        }
        if let Some(param) = category_param {
            if let Some(opt) = category_options
                .iter()
                .find(|o| o.eq_ignore_ascii_case(param))
            {
                filters.category = (*opt).to_string();
            }
        }
        filters
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let kind_ok = self.kind == ALL || listing.kind.eq_ignore_ascii_case(&self.kind);
        let category_ok =
            self.category == ALL || listing.category.eq_ignore_ascii_case(&self.category);
        kind_ok && category_ok
    }

    /// The visible subset, feed order preserved.
    pub fn apply<'a>(&self, feed: &'a [Listing]) -> Vec<&'a Listing> {
        feed.iter().filter(|l| self.matches(l)).collect()
    }

    pub fn is_default(&self) -> bool {
        self.kind == ALL && self.category == ALL
    }

    /// Query string to mirror into the address bar: empty when both
    /// dimensions are `"all"`, otherwise only the non-`"all"` ones appear.
    pub fn to_search(&self) -> String {
        let mut pairs = Vec::new();
        if self.kind != ALL {
            pairs.push(("type", self.kind.as_str()));
        }
        if self.category != ALL {
            pairs.push(("category", self.category.as_str()));
        }
        if pairs.is_empty() {
            return String::new();
        }
        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [&str; 3] = ["all", "sale", "rent"];
    const CATEGORIES: [&str; 3] = ["all", "Villa", "Apartment"];

    fn feed() -> Vec<Listing> {
        let mut a = Listing {
            id: "1".into(),
            title: "Sea View Villa".into(),
            ..Listing::default()
        };
        a.kind = "sale".into();
        a.category = "Villa".into();

        let mut b = Listing {
            id: "2".into(),
            title: "City Apartment".into(),
            ..Listing::default()
        };
        b.kind = "rent".into();
        b.category = "Apartment".into();

        vec![a, b]
    }

    #[test]
    fn default_filters_pass_the_whole_feed() {
        let feed = feed();
        let filters = ListingFilters::default();
        assert_eq!(filters.apply(&feed).len(), feed.len());
        assert!(filters.is_default());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let feed = feed();
        let filters = ListingFilters {
            kind: "SALE".into(),
            category: ALL.into(),
        };
        let visible = filters.apply(&feed);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn every_survivor_satisfies_the_predicate() {
        let feed = feed();
        let filters = ListingFilters {
            kind: "rent".into(),
            category: "Apartment".into(),
        };
        for l in filters.apply(&feed) {
            assert!(filters.matches(l));
        }
    }

    #[test]
    fn params_adopt_the_option_spelling() {
        let filters = ListingFilters::from_params(
            Some("Sale"),
            Some("villa"),
            &KINDS,
            &CATEGORIES,
        );
        assert_eq!(filters.kind, "sale");
        assert_eq!(filters.category, "Villa");
    }

    #[test]
    fn unrecognized_params_leave_the_defaults() {
        let filters =
            ListingFilters::from_params(Some("lease"), Some("castle"), &KINDS, &CATEGORIES);
        assert!(filters.is_default());

        let filters = ListingFilters::from_params(None, None, &KINDS, &CATEGORIES);
        assert!(filters.is_default());
    }

    #[test]
    fn search_string_carries_only_active_dimensions() {
        let mut filters = ListingFilters::default();
        assert_eq!(filters.to_search(), "");

        filters.kind = "sale".into();
        assert_eq!(filters.to_search(), "?type=sale");

        filters.category = "Villa".into();
        assert_eq!(filters.to_search(), "?type=sale&category=Villa");
    }

    #[test]
    fn reset_clears_state_and_search() {
        let mut filters = ListingFilters {
            kind: "sale".into(),
            category: "Villa".into(),
        };
        filters.reset();
        assert!(filters.is_default());
        assert_eq!(filters.to_search(), "");

        let feed = feed();
        assert_eq!(filters.apply(&feed).len(), feed.len());
    }
}
