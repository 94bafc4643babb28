//! Constraints store for jarb form annotation.
//!
//! Holds the server-declared [`ConstraintMap`](jarb_types::ConstraintMap) a
//! process renders forms against, and tells interested parties when it
//! changes.
//!
//! ## Components
//!
//! - **Store**: [`ConstraintsStore`] owns the current snapshot and the
//!   observer registry. Replacing the snapshot notifies every observer
//!   synchronously, in registration order.
//! - **Fetcher**: [`ConstraintsFetcher`] abstracts how constraints are
//!   retrieved; [`HttpFetcher`] is the reqwest-backed implementation.
//!
//! # Example
//!
//! ```no_run
//! use jarb_store::{ConstraintsStore, HttpFetcher, HttpFetcherConfig};
//!
//! # async fn run() -> jarb_store::StoreResult<()> {
//! let fetcher = HttpFetcher::new(HttpFetcherConfig {
//!     base_url: Some("https://api.example.com".to_string()),
//!     ..Default::default()
//! })?;
//! let store = ConstraintsStore::new(fetcher);
//!
//! let subscription = store.on_constraints_changed(|constraints| {
//!     println!("{} entities constrained", constraints.len());
//! });
//! store.load_constraints("/constraints").await?;
//! subscription.deregister();
//! # Ok(())
//! # }
//! ```

mod error;
mod fetcher;
mod http;
mod store;

pub use error::{StoreError, StoreResult};
pub use fetcher::{ConstraintsFetcher, FetchResponse};
pub use http::{HttpFetcher, HttpFetcherConfig};
pub use store::{ConstraintsStore, Subscription, SubscriptionId};
