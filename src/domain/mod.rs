//! Domain primitives shared by the store, the services and the API.
//!
//! Holds the recipe identifier newtype and the pagination arithmetic used by
//! every paginated listing.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a recipe: seven characters drawn from `A-Z0-9`.
///
/// Identifiers are generated at seed time. Generation alone does not guarantee
/// uniqueness (36^7 possible values); the seed loader re-rolls collisions before
/// inserting.
///
/// # Examples
///
/// ```rust
/// use lipucook::domain::RecipeId;
///
/// let id = RecipeId::generate();
/// assert_eq!(id.as_str().len(), RecipeId::LEN);
/// assert!(id.as_str().bytes().all(|b| RecipeId::ALPHABET.contains(&b)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub const LEN: usize = 7;

    pub const ALPHABET: &'static [u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Generates a fresh identifier from the thread-local RNG.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    #[must_use]
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..Self::LEN)
            .map(|_| char::from(Self::ALPHABET[rng.random_range(0..Self::ALPHABET.len())]))
            .collect();
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        id.0
    }
}

/// Page size used when a caller asks for zero or negative items per page.
pub const FALLBACK_PER_PAGE: u64 = 20;

/// A validated request for one page of a listing.
///
/// The requested page number is kept verbatim so responses can echo it back,
/// while the query side always works with a page clamped to at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    requested_page: i64,
    per_page: u64,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: i64, per_page: i64) -> Self {
        let per_page = u64::try_from(per_page)
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(FALLBACK_PER_PAGE);

        Self {
            requested_page: page,
            per_page,
        }
    }

    /// Page number as the caller sent it.
    #[must_use]
    pub const fn requested_page(&self) -> i64 {
        self.requested_page
    }

    #[must_use]
    pub const fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Zero-based page index, with pages below 1 treated as the first page.
    #[must_use]
    pub fn page_index(&self) -> u64 {
        u64::try_from(self.requested_page.max(1) - 1).unwrap_or(0)
    }

    /// Number of rows to skip, or `None` if the offset does not fit in a `u64`.
    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        self.page_index().checked_mul(self.per_page)
    }
}

/// One page of a listing plus the metadata every listing endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub pages: u64,
    pub current_page: i64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            pages: page_count(total, request.per_page()),
            current_page: request.requested_page(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            pages: self.pages,
            current_page: self.current_page,
        }
    }
}

/// `ceil(total / per_page)`; zero when there is nothing to list.
#[must_use]
pub const fn page_count(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn recipe_id_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let id = RecipeId::generate_with(&mut rng);
            assert_eq!(id.as_str().len(), 7);
            assert!(
                id.as_str()
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            );
        }
    }

    #[test]
    fn recipe_id_serializes_as_plain_string() {
        let id = RecipeId("XYZ0001".to_string());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"XYZ0001\"");
        assert_eq!(id.to_string(), "XYZ0001");
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(45, 20), 3);
        assert_eq!(page_count(40, 20), 2);
        assert_eq!(page_count(0, 20), 0);
        assert_eq!(page_count(1, 51), 1);
    }

    #[test]
    fn page_request_clamps_for_query_but_echoes_requested_page() {
        let req = PageRequest::new(0, 10);
        assert_eq!(req.page_index(), 0);
        assert_eq!(req.requested_page(), 0);

        let req = PageRequest::new(-3, 10);
        assert_eq!(req.page_index(), 0);
        assert_eq!(req.requested_page(), -3);

        let req = PageRequest::new(4, 20);
        assert_eq!(req.offset(), Some(60));
    }

    #[test]
    fn page_request_replaces_non_positive_page_size() {
        assert_eq!(PageRequest::new(1, 0).per_page(), FALLBACK_PER_PAGE);
        assert_eq!(PageRequest::new(1, -5).per_page(), FALLBACK_PER_PAGE);
        assert_eq!(PageRequest::new(1, 51).per_page(), 51);
    }

    #[test]
    fn page_reports_metadata() {
        let page: Page<u8> = Page::new(Vec::new(), 45, PageRequest::new(4, 20));
        assert_eq!(page.pages, 3);
        assert_eq!(page.current_page, 4);
        assert!(page.items.is_empty());
    }
}
