//! Page arithmetic over a partially loaded item list.
//!
//! [`Limit`] holds only the items of the current page plus the total item
//! count, so page numbers can be computed without loading everything. Page
//! numbers are 1-based; `0` means "no such page".

use serde::{Deserialize, Serialize};

use crate::record::Value;

pub trait Pagination {
    fn items(&self) -> &[Value];
    fn has_items(&self) -> bool {
        !self.items().is_empty()
    }
    fn first_page(&self) -> usize;
    fn has_first_page(&self) -> bool {
        self.first_page() != 0
    }
    fn last_page(&self) -> usize;
    fn has_last_page(&self) -> bool {
        self.last_page() != 0
    }
    fn previous_page(&self) -> usize;
    fn has_previous_page(&self) -> bool {
        self.previous_page() != 0
    }
    fn next_page(&self) -> usize;
    fn has_next_page(&self) -> bool {
        self.next_page() != 0
    }
    fn current_page(&self) -> usize;
    fn total_items(&self) -> usize;
    fn total_pages(&self) -> usize;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limit {
    #[serde(default)]
    total_items: usize,
    #[serde(default, rename = "currentPage")]
    current: usize,
    #[serde(default)]
    items: Vec<Value>,
    #[serde(default)]
    items_per_page: usize,
}

impl Limit {
    pub fn new(total_items: usize, current: usize, items: Vec<Value>, items_per_page: usize) -> Self {
        Self {
            total_items,
            current,
            items,
            items_per_page,
        }
    }
}

impl Pagination for Limit {
    /// At most one page of the held items; all of them when no page size is set.
    fn items(&self) -> &[Value] {
        if self.items_per_page > 0 && self.items.len() > self.items_per_page {
            &self.items[..self.items_per_page]
        } else {
            &self.items
        }
    }

    fn first_page(&self) -> usize {
        usize::from(self.total_items > 0)
    }

    fn last_page(&self) -> usize {
        self.total_pages()
    }

    fn previous_page(&self) -> usize {
        if self.total_items == 0 || self.current <= 1 {
            0
        } else {
            self.current - 1
        }
    }

    fn next_page(&self) -> usize {
        match self.current.checked_add(1) {
            Some(next) if self.total_items > 0 && next <= self.last_page() => next,
            _ => 0,
        }
    }

    fn current_page(&self) -> usize {
        self.current
    }

    fn total_items(&self) -> usize {
        self.total_items
    }

    fn total_pages(&self) -> usize {
        if self.total_items > 0 && self.items_per_page > 0 {
            self.total_items.div_ceil(self.items_per_page)
        } else {
            0
        }
    }
}
