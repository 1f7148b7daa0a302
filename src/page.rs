//! `Link`-header pagination adapted into lazy item streams.

// crates.io
use futures::{Stream, TryStreamExt, stream};
// self
use crate::_prelude::*;

/// One page of decoded items plus the link to the following page, when any.
#[derive(Clone, Debug)]
pub struct Page<T> {
	/// Decoded items on this page.
	pub items: Vec<T>,
	/// URL of the next page, taken from the `Link` response header.
	pub next: Option<Url>,
}

/// Extracts the `rel="next"` target from a raw `Link` header value.
///
/// Malformed entries are skipped, so a header the client cannot understand is
/// treated as the last page rather than an error.
pub fn parse_next_link(raw: &str) -> Option<Url> {
	for entry in raw.split(',') {
		let mut sections = entry.trim().split(';');
		let Some(target) = sections.next() else {
			continue;
		};
		let target = target.trim();

		if !(target.starts_with('<') && target.ends_with('>')) {
			continue;
		}

		let is_next = sections.any(|param| {
			let param = param.trim();

			param == "rel=\"next\"" || param == "rel=next"
		});

		if is_next {
			return Url::parse(&target[1..target.len() - 1]).ok();
		}
	}

	None
}

/// Adapts a page-fetching closure into a lazy item stream.
///
/// The closure receives `None` for the first page and the `rel="next"` URL for
/// every follow-up page. Each page is fetched exactly once, only after the
/// previous page's items have been drained. A failed fetch yields the error and
/// ends the stream.
pub fn paginate<T, F, Fut>(fetch: F) -> impl Stream<Item = Result<T>>
where
	F: Fn(Option<Url>) -> Fut,
	Fut: Future<Output = Result<Page<T>>>,
{
	// State is `Some(cursor)` while pages remain and `None` once exhausted.
	stream::try_unfold((fetch, Some(None)), |(fetch, state)| async move {
		let Some(cursor) = state else {
			return Ok::<_, Error>(None);
		};
		let page = fetch(cursor).await?;
		let state = page.next.map(Some);
		let items = stream::iter(page.items.into_iter().map(Ok));

		Ok(Some((items, (fetch, state))))
	})
	.try_flatten()
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	use super::*;

	const LINK: &str = "<https://api.github.com/authorizations?page=2>; rel=\"next\", \
		<https://api.github.com/authorizations?page=5>; rel=\"last\"";

	#[test]
	fn next_link_is_extracted_from_github_style_headers() {
		let next = parse_next_link(LINK).expect("Next link should be present.");

		assert_eq!(next.as_str(), "https://api.github.com/authorizations?page=2");
	}

	#[test]
	fn missing_or_malformed_next_links_end_pagination() {
		assert!(parse_next_link("<https://api.github.com/authorizations?page=5>; rel=\"last\"")
			.is_none());
		assert!(parse_next_link("not a link header").is_none());
		assert!(parse_next_link("<not a url>; rel=\"next\"").is_none());
	}

	#[tokio::test]
	async fn paginate_walks_pages_lazily() {
		let calls = AtomicUsize::new(0);
		let second = Url::parse("https://api.github.com/authorizations?page=2")
			.expect("Fixture URL should parse.");
		let stream = paginate(|cursor| {
			calls.fetch_add(1, Ordering::SeqCst);

			let next = cursor.is_none().then(|| second.clone());

			async move {
				let items = if next.is_some() { vec![1_u8, 2] } else { vec![3] };

				Ok(Page { items, next })
			}
		});
		let items: Vec<u8> =
			stream.try_collect().await.expect("Pagination fixture should not fail.");

		assert_eq!(items, [1, 2, 3]);
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[tokio::test]
	async fn paginate_surfaces_fetch_errors() {
		let stream = paginate::<u8, _, _>(|_| async {
			Err(crate::error::ConfigError::OpaqueBaseUrl.into())
		});
		let result: Result<Vec<u8>> = stream.try_collect().await;

		assert!(result.is_err());
	}
}
