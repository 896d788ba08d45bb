//! Reconciliation engine for line-oriented configuration documents.
//!
//! Given a persisted item list and either freshly edited text or a released
//! key/value snapshot, the resolver computes the minimal create/update/
//! delete set that turns the persisted state into the target state while
//! keeping line numbers dense, comments attached to the right keys, and
//! keys unique.
//!
//! The engine is a pure, synchronous computation: no I/O, no locks, no state
//! across calls. Callers own persistence and must serialize concurrent
//! reconciliations of the same document.
//!
//! # Key Types
//!
//! - [`Resolver`] — text-edit and revocation reconciliation
//! - [`LineRecord`] — a classified line paired with its synthesized item
//! - [`Normalized`] — a deduped, gap-free baseline
//! - [`ResolveError`] / [`ResolveResult`] — validation failures
//!
//! # Example
//!
//! ```
//! use confrec_resolver::Resolver;
//! use confrec_types::{Item, TextFormat};
//!
//! let base = vec![Item::normal(1, "timeout", "30", "", 1).with_id(7)];
//! let resolver = Resolver::new(TextFormat::Properties);
//! let changes = resolver.resolve(1, "timeout = 60", &base)?;
//!
//! assert_eq!(changes.updates.len(), 1);
//! assert_eq!(changes.updates[0].value, "60");
//! # Ok::<(), confrec_resolver::ResolveError>(())
//! ```

pub mod apply;
pub mod classifier;
pub mod combine;
pub mod engine;
pub mod error;
pub mod index;
pub mod normalize;

pub use apply::{apply, render};
pub use classifier::{parse, split_lines, LineRecord};
pub use combine::combine;
pub use engine::Resolver;
pub use error::{ResolveError, ResolveResult};
pub use index::{index_by_key, index_by_line};
pub use normalize::{normalize, Normalized};
