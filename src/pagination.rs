//! Cursor state for paginated catalog listings
//!
//! A paginated command keeps one [`Cursor`] tracking the next/previous page
//! URLs reported by the most recently fetched page, plus which navigation
//! action ("next"/"previous") is driving the current fetch. The cursor only
//! resolves URLs; fetching and caching happen elsewhere.

use thiserror::Error;

/// Errors surfaced when navigation has nowhere to go
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// "next" was requested but the latest page reported no next URL
    #[error("no next page available")]
    NoNextPage,

    /// "previous" was requested but the latest page reported no previous URL
    #[error("no previous page available")]
    NoPreviousPage,
}

/// Which navigation action triggered the current fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Fresh command invocation, no navigation
    #[default]
    None,
    /// A "next" command
    Forward,
    /// A "previous" command
    Backward,
}

/// Pagination state for one paginated command family.
///
/// `next_url` and `previous_url` always reflect the most recently fetched
/// page's view of the sequence; both start empty, so navigating before any
/// page has been fetched fails.
#[derive(Debug, Default)]
pub struct Cursor {
    direction: Direction,
    next_url: String,
    previous_url: String,
}

impl Cursor {
    /// Creates a cursor with no pages seen and no pending navigation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records which navigation action the upcoming fetch is resolving.
    ///
    /// Called with [`Direction::None`] on a fresh invocation of the
    /// paginated command itself.
    pub fn advance(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Returns the URL the pending navigation should fetch.
    ///
    /// With no navigation pending this is `default_url` (the command's
    /// first-page URL). Forward navigation resolves to the latest page's next
    /// URL, backward to its previous URL; either fails if that URL is
    /// unknown.
    pub fn resolve_url(&self, default_url: &str) -> Result<String, PaginationError> {
        match self.direction {
            Direction::None => Ok(default_url.to_string()),
            Direction::Forward => {
                if self.next_url.is_empty() {
                    Err(PaginationError::NoNextPage)
                } else {
                    Ok(self.next_url.clone())
                }
            }
            Direction::Backward => {
                if self.previous_url.is_empty() {
                    Err(PaginationError::NoPreviousPage)
                } else {
                    Ok(self.previous_url.clone())
                }
            }
        }
    }

    /// Overwrites the next/previous URLs from a freshly decoded page.
    ///
    /// The upstream payload carries `null` for a missing neighbor (e.g. no
    /// previous page on page one); that normalizes to an empty string here.
    pub fn update_from_page(&mut self, next: Option<&str>, previous: Option<&str>) {
        self.next_url = next.unwrap_or_default().to_string();
        self.previous_url = previous.unwrap_or_default().to_string();
    }

}
