use crate::commands::{CmdMessage, CmdResult, Confirm};
use crate::error::Result;
use crate::store::{BookmarkStore, RestoreOutcome, SlotBackend};
use tracing::info;

/// Replaces the current tree with the backup slot, after confirmation.
pub fn restore<B: SlotBackend, C: Confirm>(
    store: &mut BookmarkStore<B>,
    confirm: &mut C,
) -> Result<CmdResult> {
    if !store.has_backup()? {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("No backup available.")));
    }

    let summary = vec![format!(
        "Current data ({} bookmark(s)) will be replaced by the backup.",
        store.state().bookmark_count()
    )];
    if !confirm.confirm(&summary)? {
        return Ok(CmdResult::cancelled());
    }

    match store.restore_from_backup()? {
        RestoreOutcome::Restored => {
            let stats = store.stats();
            info!(bookmarks = stats.bookmarks, "restored from backup");
            Ok(CmdResult::default().with_message(CmdMessage::success(format!(
                "Restored {} bookmark(s) in {} categories from backup",
                stats.bookmarks, stats.categories
            ))))
        }
        RestoreOutcome::NoBackup => {
            Ok(CmdResult::default().with_message(CmdMessage::warning("No backup available.")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AutoConfirm;
    use crate::model::RootState;
    use crate::store::mem_backend::MemBackend;

    struct Panicky;

    impl Confirm for Panicky {
        fn confirm(&mut self, _summary: &[String]) -> Result<bool> {
            panic!("should not prompt");
        }
    }

    #[test]
    fn no_backup_does_not_prompt() {
        let mut store = BookmarkStore::open(MemBackend::new());
        let result = restore(&mut store, &mut Panicky).unwrap();
        assert_eq!(result.messages[0].content, "No backup available.");
    }

    #[test]
    fn declined_restore_keeps_state() {
        let mut store = BookmarkStore::open(MemBackend::new());
        store.add_bookmark("a", "a.io", "A").unwrap();
        store.replace_all(RootState::empty()).unwrap();

        let result = restore(&mut store, &mut AutoConfirm(false)).unwrap();
        assert_eq!(result.messages[0].content, "Operation cancelled.");
        assert!(store.state().categories.is_empty());
    }

    #[test]
    fn confirmed_restore_brings_backup_back() {
        let mut store = BookmarkStore::open(MemBackend::new());
        store.add_bookmark("a", "a.io", "A").unwrap();
        let saved = store.state().clone();
        store.replace_all(RootState::empty()).unwrap();

        restore(&mut store, &mut AutoConfirm(true)).unwrap();
        assert_eq!(store.state(), &saved);
    }
}
