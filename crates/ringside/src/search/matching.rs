use ringside_data::Venue;

/// Generic words shared by every promotion in the table.
///
/// These double as the domain gate: a query has to mention one of them before
/// any venue is considered. Matching treats them as if each venue listed them
/// among its own aliases.
pub const DOMAIN_TERMS: &[&str] = &[
    "wrestling",
    "wrestle",
    "wrestler",
    "pro wrestling",
    "professional wrestling",
    "lucha libre",
    "lucha",
    "puroresu",
    "promotion",
];

/// `true` when the lower-cased query contains at least one trigger word.
#[must_use]
pub fn passes_domain_gate(query: &str) -> bool {
    passes_domain_gate_with(query, &[])
}

/// Domain gate with additional trigger words on top of [`DOMAIN_TERMS`].
#[must_use]
pub fn passes_domain_gate_with(query: &str, extra_terms: &[String]) -> bool {
    let query = query.to_lowercase();
    DOMAIN_TERMS.iter().any(|term| query.contains(term))
        || extra_terms
            .iter()
            .any(|term| !term.is_empty() && query.contains(&term.to_lowercase()))
}

/// Case-insensitive substring match of a query against one venue.
///
/// Matches when the query is contained in any of the venue's search terms
/// (its own aliases plus the shared domain terms), or when the venue name
/// contains the query. This is the per-venue predicate only; the domain gate
/// is applied by the caller.
#[must_use]
pub fn matches_query(query: &str, venue: &Venue) -> bool {
    matches_query_with(query, venue, &[])
}

pub(crate) fn matches_query_with(query: &str, venue: &Venue, extra_terms: &[String]) -> bool {
    let query = query.to_lowercase();

    venue
        .search_terms
        .iter()
        .any(|term| term.to_lowercase().contains(&query))
        || DOMAIN_TERMS.iter().any(|term| term.contains(&query))
        || extra_terms
            .iter()
            .any(|term| term.to_lowercase().contains(&query))
        || venue.name.to_lowercase().contains(&query)
}
