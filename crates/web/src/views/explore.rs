//! Explore page display model.

use crate::providers::types::{ALL_CATEGORIES, AgentListing, ListingFilter};
use crate::providers::CatalogProvider;

/// One agent card in the explore grid.
#[derive(Debug, Clone)]
pub struct ListingCard {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub rating: String,
    pub user_count: u64,
    pub creator_name: String,
    pub try_url: String,
}

impl From<&AgentListing> for ListingCard {
    fn from(listing: &AgentListing) -> Self {
        Self {
            name: listing.name.clone(),
            description: listing.description.clone(),
            category: listing.category.clone(),
            price: listing.price.to_string(),
            rating: listing.rating.to_string(),
            user_count: listing.user_count,
            creator_name: listing.creator_name.clone(),
            try_url: listing.invocation_endpoint.to_string(),
        }
    }
}

/// Explore page display model.
#[derive(Debug, Clone)]
pub struct ExploreView {
    /// Category choices for the filter, "All" first.
    pub categories: Vec<String>,
    pub selected_category: String,
    pub search: String,
    pub listings: Vec<ListingCard>,
    /// Set when the Catalog Provider could not be reached; the page
    /// renders an inline notice instead of the grid.
    pub unavailable: bool,
}

/// Assemble the explore page model.
///
/// Read-only: fetches listings with the given filter and nothing else.
/// A catalog failure degrades to an empty grid with the `unavailable`
/// flag set; the render still succeeds.
pub async fn assemble(
    catalog: &dyn CatalogProvider,
    category: Option<String>,
    search: Option<String>,
) -> ExploreView {
    let selected_category = category
        .clone()
        .unwrap_or_else(|| ALL_CATEGORIES.to_owned());
    let search_term = search.clone().unwrap_or_default();

    let filter = ListingFilter { category, search };

    let (listings, unavailable) = match catalog.list_agents(&filter).await {
        Ok(listings) => (listings.iter().map(ListingCard::from).collect(), false),
        Err(e) => {
            tracing::warn!("Catalog provider unavailable for explore: {e}");
            (Vec::new(), true)
        }
    };

    let mut categories = vec![ALL_CATEGORIES.to_owned()];
    categories.extend(catalog.categories());

    ExploreView {
        categories,
        selected_category,
        search: search_term,
        listings,
        unavailable,
    }
}
