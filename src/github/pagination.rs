use std::future::Future;

use tokio::time::{Duration, sleep};
use tracing::{debug, warn};

use crate::github::error::ApiFailure;
use crate::github::graphql::graphql_types::PageInfo;

/// Opaque pagination bookmark issued by the API and echoed back to request
/// the next page. `None` in a request means "start from the beginning".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageCursor(pub String);

impl PageCursor {
    pub fn new<T: Into<String>>(cursor: T) -> Self {
        Self(cursor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of a cursor-paginated connection.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub edges: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// A page with nothing in it and no continuation, used when the response
    /// envelope resolves to a missing repository, ref or owner.
    pub fn empty() -> Self {
        Self {
            edges: Vec::new(),
            page_info: PageInfo {
                has_next_page: false,
                end_cursor: None,
            },
        }
    }
}

/// Inter-page delay policy for rate-limit mitigation.
///
/// `None` issues page requests back to back. `Fixed` waits the given duration
/// before each request after the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageDelay {
    #[default]
    None,
    Fixed(Duration),
}

impl PageDelay {
    pub async fn wait(&self) {
        if let Self::Fixed(duration) = self {
            sleep(*duration).await;
        }
    }
}

/// Drives a page-fetching operation until the API reports no further pages,
/// accumulating the edges of every page in order.
///
/// `fetch_page` receives the cursor to resume from (`None` on the first
/// request) and returns one page. On failure the loop aborts and whatever has
/// been accumulated so far is returned; the failure itself is only logged.
///
/// A page claiming `hasNextPage` without supplying a cursor also ends the
/// loop, so a misbehaving response cannot spin it forever.
pub async fn collect_paginated<T, F, Fut>(
    operation_name: &str,
    delay: &PageDelay,
    mut fetch_page: F,
) -> Vec<T>
where
    F: FnMut(Option<PageCursor>) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiFailure>>,
{
    let mut collected = Vec::new();
    let mut cursor: Option<PageCursor> = None;
    let mut page_count: u32 = 0;

    loop {
        if page_count > 0 {
            delay.wait().await;
        }

        let page = match fetch_page(cursor.take()).await {
            Ok(page) => page,
            Err(failure) => {
                warn!(
                    "Aborting {} pagination after {} page(s): {}",
                    operation_name, page_count, failure
                );
                break;
            }
        };

        page_count += 1;
        collected.extend(page.edges);

        if !page.page_info.has_next_page {
            break;
        }
        match page.page_info.end_cursor {
            Some(end_cursor) => cursor = Some(PageCursor(end_cursor)),
            None => {
                warn!(
                    "{} page {} reported a next page without a cursor, stopping",
                    operation_name, page_count
                );
                break;
            }
        }
    }

    debug!(
        "{} pagination finished: {} record(s) over {} page(s)",
        operation_name,
        collected.len(),
        page_count
    );

    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn page(edge_count: usize, next_cursor: Option<&str>) -> Page<u32> {
        Page {
            edges: vec![0; edge_count],
            page_info: PageInfo {
                has_next_page: next_cursor.is_some(),
                end_cursor: next_cursor.map(|c| c.to_string()),
            },
        }
    }

    #[tokio::test]
    async fn collects_every_page_until_exhaustion() {
        let pages = Mutex::new(vec![page(37, None), page(100, Some("C2")), page(100, Some("C1"))]);
        let requested_cursors = Mutex::new(Vec::new());

        let collected = collect_paginated("test", &PageDelay::None, |cursor| {
            let pages = &pages;
            let requested_cursors = &requested_cursors;
            async move {
                requested_cursors
                    .lock()
                    .unwrap()
                    .push(cursor.map(|c| c.0));
                Ok(pages.lock().unwrap().pop().expect("too many requests"))
            }
        })
        .await;

        assert_eq!(collected.len(), 237);
        assert_eq!(
            *requested_cursors.lock().unwrap(),
            vec![None, Some("C1".to_string()), Some("C2".to_string())]
        );
    }

    #[tokio::test]
    async fn single_page_terminates_immediately() {
        let request_count = Mutex::new(0u32);

        let collected = collect_paginated("test", &PageDelay::None, |_cursor| {
            let request_count = &request_count;
            async move {
                *request_count.lock().unwrap() += 1;
                Ok(page(5, None))
            }
        })
        .await;

        assert_eq!(collected.len(), 5);
        assert_eq!(*request_count.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn failure_returns_partial_accumulation() {
        let pages = Mutex::new(vec![
            Err(ApiFailure::Status {
                status: 500,
                body: "boom".to_string(),
            }),
            Ok(page(100, Some("C1"))),
        ]);
        let request_count = Mutex::new(0u32);

        let collected = collect_paginated("test", &PageDelay::None, |_cursor| {
            let pages = &pages;
            let request_count = &request_count;
            async move {
                *request_count.lock().unwrap() += 1;
                pages.lock().unwrap().pop().expect("too many requests")
            }
        })
        .await;

        assert_eq!(collected.len(), 100);
        assert_eq!(*request_count.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn missing_cursor_with_next_page_stops_the_loop() {
        let request_count = Mutex::new(0u32);

        let collected = collect_paginated("test", &PageDelay::None, |_cursor| {
            let request_count = &request_count;
            async move {
                *request_count.lock().unwrap() += 1;
                // hasNextPage=true but no cursor to resume from
                Ok(Page {
                    edges: vec![1u32, 2, 3],
                    page_info: PageInfo {
                        has_next_page: true,
                        end_cursor: None,
                    },
                })
            }
        })
        .await;

        assert_eq!(collected.len(), 3);
        assert_eq!(*request_count.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn first_page_failure_yields_nothing() {
        let collected: Vec<u32> = collect_paginated("test", &PageDelay::None, |_cursor| async {
            Err(ApiFailure::Request("connection refused".to_string()))
        })
        .await;

        assert!(collected.is_empty());
    }
}
