//! Paged traversal of commit history.

use std::iter::FusedIterator;

use gitfacts_commit::{CommitRecord, Cutoff};
use gitfacts_git::{CommitSource, GitResult};
use tracing::debug;

/// Lazily walks history one page at a time, most recent commit first.
///
/// A page is requested only when the previous one has been consumed. The
/// walk ends at the first empty page. A failed request is yielded once and
/// ends the walk.
pub struct HistoryPages<'a, S: CommitSource + ?Sized> {
    source: &'a S,
    chunk_size: usize,
    state: PageState,
    buffer: std::vec::IntoIter<CommitRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageState {
    Active { skip: usize },
    Exhausted,
}

impl<'a, S: CommitSource + ?Sized> HistoryPages<'a, S> {
    /// Creates a walker requesting `chunk_size` commits per page.
    pub fn new(source: &'a S, chunk_size: usize) -> Self {
        Self {
            source,
            chunk_size: chunk_size.max(1),
            state: PageState::Active { skip: 0 },
            buffer: Vec::new().into_iter(),
        }
    }
}

impl<S: CommitSource + ?Sized> Iterator for HistoryPages<'_, S> {
    type Item = GitResult<CommitRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(commit) = self.buffer.next() {
                return Some(Ok(commit));
            }

            let PageState::Active { skip } = self.state else {
                return None;
            };

            match self.source.fetch_page(skip, self.chunk_size) {
                Ok(page) if page.is_empty() => {
                    debug!(skip, "history exhausted");
                    self.state = PageState::Exhausted;
                    return None;
                }
                Ok(page) => {
                    debug!(skip, count = page.len(), "fetched history page");
                    self.state = PageState::Active {
                        skip: skip + self.chunk_size,
                    };
                    self.buffer = page.into_iter();
                }
                Err(err) => {
                    self.state = PageState::Exhausted;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<S: CommitSource + ?Sized> FusedIterator for HistoryPages<'_, S> {}

/// Returns the commits authored after `cutoff`, most recent first.
///
/// The cutoff is applied after paging, so the whole history is still
/// fetched. Errors are passed through unfiltered.
pub fn commits_since<'a, S: CommitSource + ?Sized>(
    source: &'a S,
    cutoff: Cutoff,
    chunk_size: usize,
) -> impl Iterator<Item = GitResult<CommitRecord>> + 'a {
    HistoryPages::new(source, chunk_size).filter(move |item| match item {
        Ok(commit) => cutoff.admits(commit),
        Err(_) => true,
    })
}
