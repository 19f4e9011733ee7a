use crate::error::Result;
use crate::types::PostId;
use std::collections::BTreeSet;

pub trait SeenStore {
    /// Load every id checked on earlier runs. A store that does not exist yet is empty.
    fn load(&self) -> Result<BTreeSet<PostId>>;

    /// Replace the stored set with `seen`.
    fn save(&self, seen: &BTreeSet<PostId>) -> Result<()>;
}
