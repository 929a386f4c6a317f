//! Filter and paginate pipeline for event/location lists.
//!
//! DESIGN
//! ======
//! The pager stores only the filter and the page count. Filtered and visible
//! slices are derived on demand from the dataset so they can never drift from
//! the source records.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::consts::ALL_CATEGORIES;
use crate::data::types::CatalogItem;

/// Category filter: everything, or one concrete category key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Key(String),
}

impl CategoryFilter {
    /// Parse a dropdown value; the `all` sentinel and blank input mean no filter.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Key(raw.to_owned())
        }
    }

    /// Value to bind back into a `<select>`.
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Key(key) => key,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Key(key) => key == category,
        }
    }
}

/// Items whose category passes `filter`, in source order.
pub fn filter_items<'a, T: CatalogItem>(items: &'a [T], filter: &CategoryFilter) -> Vec<&'a T> {
    items.iter().filter(|item| filter.matches(item.category())).collect()
}

/// Category filter plus a "load more" page counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    filter: CategoryFilter,
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self { filter: CategoryFilter::All, page: 1, page_size: page_size.max(1) }
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the filter and return to the first page.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Extend the visible prefix by one page.
    pub fn load_more(&mut self) {
        self.page += 1;
    }

    /// Length of the visible prefix for a filtered list of `filtered_len` items.
    pub fn visible_len(&self, filtered_len: usize) -> usize {
        self.page.saturating_mul(self.page_size).min(filtered_len)
    }

    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.visible_len(filtered_len) < filtered_len
    }

    pub fn filtered<'a, T: CatalogItem>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter_items(items, &self.filter)
    }

    /// Visible prefix of the filtered list.
    pub fn visible<'a, T: CatalogItem>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut filtered = self.filtered(items);
        let len = self.visible_len(filtered.len());
        filtered.truncate(len);
        filtered
    }
}
