// * Persistence: the per-unit directory store, the record schema, and the
// * aggregate index rebuilt from disk.

pub mod index;
pub mod schema;
pub mod store;

pub use index::rebuild_index;
pub use schema::{Ability, IndexEntry, SourceInfo, UnitRecord, UnitStats};
pub use store::{AssetOutcome, DataOutcome, StoreError, StoreOutcome, UnitStore};
