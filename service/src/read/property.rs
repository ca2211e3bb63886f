//! [`Property`] read model definition.
//!
//! [`Property`]: crate::domain::Property

pub mod list {
    //! [`Property`]s list definitions.

    use crate::domain::{property::ListingStatus, Property};

    /// In-memory filter over listed [`Property`]s.
    ///
    /// All clauses are conjunctive and the whole predicate is recomputed on
    /// every evaluation; no index is maintained.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Term to match (case-insensitively) against the name, street or
        /// neighborhood.
        pub search: String,

        /// Exact neighborhood to match, or [`None`] for any.
        pub neighborhood: Option<String>,

        /// Exact [`ListingStatus`] to match, or [`None`] for any.
        pub status: Option<ListingStatus>,
    }

    impl Filter {
        /// Checks whether the provided [`Property`] passes this [`Filter`].
        #[must_use]
        pub fn matches(&self, property: &Property) -> bool {
            let name: &str = property.name.as_ref();
            let street: &str = property.street.as_ref();
            let neighborhood: &str = property.neighborhood.as_ref();

            let term = self.search.to_lowercase();
            let matches_search = term.is_empty()
                || name.to_lowercase().contains(&term)
                || street.to_lowercase().contains(&term)
                || neighborhood.to_lowercase().contains(&term);

            let matches_neighborhood = self
                .neighborhood
                .as_ref()
                .is_none_or(|n| neighborhood == n.as_str());
            let matches_status = self
                .status
                .is_none_or(|status| property.listing_status == status);

            matches_search && matches_neighborhood && matches_status
        }
    }
}
