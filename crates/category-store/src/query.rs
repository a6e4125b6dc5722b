/// Sort order applied by gateway implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Parses a direction term leniently; anything other than `desc` sorts
    /// ascending.
    pub fn from_term(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }
}

/// Search parameters shared by the list use case and the gateway.
///
/// `terms` is matched case-insensitively as a substring against name and
/// description. `sort` is a free-form field name; gateways map the names they
/// know and fall back to sorting by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySearchQuery {
    /// Zero-based page index.
    pub page: usize,

    /// Page size; at most this many items are returned.
    pub per_page: usize,

    /// Substring filter over name and description; empty matches everything.
    pub terms: String,

    /// Field to order by, passed through to the gateway.
    pub sort: String,

    /// Order applied to `sort`.
    pub direction: Direction,
}

impl CategorySearchQuery {
    pub fn new(
        page: usize,
        per_page: usize,
        terms: impl Into<String>,
        sort: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            page,
            per_page,
            terms: terms.into(),
            sort: sort.into(),
            direction,
        }
    }
}

impl Default for CategorySearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 10,
            terms: String::new(),
            sort: "name".to_string(),
            direction: Direction::Asc,
        }
    }
}

/// A page of results plus metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination<T> {
    /// Zero-based index of this page.
    pub current_page: usize,

    /// Requested page size; `items.len() <= per_page` always holds.
    pub per_page: usize,

    /// Total number of matches across all pages.
    pub total: u64,

    /// The items on this page, in sort order.
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: usize, per_page: usize, total: u64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Transforms the items element-wise, preserving the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagination<U> {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
