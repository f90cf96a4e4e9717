//! Sorting and pagination of filtered entries

use crate::domain::filter::DatedEntry;
use crate::error::{LedgerError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Sort entries by date; entries sharing a date keep their relative order
pub fn sort_by_date<T: DatedEntry>(entries: Vec<T>, order: SortOrder) -> Result<Vec<T>> {
    let mut keyed = Vec::with_capacity(entries.len());
    for entry in entries {
        keyed.push((entry.calendar_date()?, entry));
    }

    match order {
        SortOrder::NewestFirst => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
        SortOrder::OldestFirst => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
    }

    Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Cut `items` into pages of `page_size` and return page number `page`
///
/// A page past the end is empty rather than an error.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Result<Page<T>> {
    if page == 0 {
        return Err(LedgerError::InvalidPage(
            "Page numbers start at 1".to_string(),
        ));
    }
    if page_size == 0 {
        return Err(LedgerError::InvalidPage(
            "Page size must be at least 1".to_string(),
        ));
    }

    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let skip = (page - 1).saturating_mul(page_size);
    let items: Vec<T> = items.into_iter().skip(skip).take(page_size).collect();

    Ok(Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    })
}
