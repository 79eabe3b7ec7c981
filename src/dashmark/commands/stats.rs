use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{BookmarkStore, SlotBackend};

pub fn run<B: SlotBackend>(store: &BookmarkStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(store.stats()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::view::Stats;

    #[test]
    fn counts_seeded_tree() {
        let store = BookmarkStore::open(MemBackend::new());
        assert_eq!(
            run(&store).unwrap().stats,
            Some(Stats {
                categories: 1,
                bookmarks: 2,
                pinned: 1
            })
        );
    }
}
