use crate::listing::Listing;

/// Card link to the detail page. Carries the id and a slug (stored or
/// derived from the title). When the listings page currently has a query
/// string, a `ref` parameter holding that query string encoded rides along
/// so the detail page's back link can restore the exact filter state.
pub fn detail_href(listing: &Listing, current_search: &str) -> String {
    let mut href = format!(
        "property-details.html?id={}&slug={}",
        urlencoding::encode(&listing.id),
        listing.link_slug()
    );
    if !current_search.is_empty() {
        href.push_str("&ref=");
        href.push_str(&urlencoding::encode(current_search));
    }
    href
}

/// Back-link target on the detail page: the listings page with the prior
/// query string restored, anchored at the listing grid.
pub fn back_href(ref_param: &str) -> String {
    format!("properties.html{ref_param}#property-list")
}
