//! Swappable font slot.

use std::io::Read;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use super::{Font, FontHandle};
use crate::error::FontError;

/// Holds the font used for generation.
///
/// Readers clone the current [`FontHandle`] and render from that snapshot,
/// so a concurrent swap is seen either fully or not at all.
#[derive(Debug)]
pub struct FontStore {
    slot: RwLock<Option<FontHandle>>,
}

impl Default for FontStore {
    fn default() -> Self {
        Self::with_font(Arc::new(Font::builtin()))
    }
}

impl FontStore {
    /// A store with no font installed.
    pub const fn empty() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    pub fn with_font(font: FontHandle) -> Self {
        Self {
            slot: RwLock::new(Some(font)),
        }
    }

    /// The process-wide store, initialized with the bundled face.
    ///
    /// The bundled face is constant data and cannot fail to load, so there
    /// is no startup error path.
    pub fn global() -> &'static FontStore {
        static GLOBAL: OnceLock<FontStore> = OnceLock::new();
        GLOBAL.get_or_init(FontStore::default)
    }

    /// Snapshot of the installed font.
    pub fn current(&self) -> Result<FontHandle, FontError> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.clone().ok_or(FontError::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Install `font`, returning the previous one.
    pub fn install(&self, font: FontHandle) -> Option<FontHandle> {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        let previous = slot.replace(font);
        tracing::info!(builtin = slot.as_ref().is_some_and(|f| f.is_builtin()), "font installed");
        previous
    }

    /// Remove the installed font, returning it.
    pub fn clear(&self) -> Option<FontHandle> {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        tracing::info!("font cleared");
        slot.take()
    }

    /// Parse `bytes` and install the result. Parsing happens before the
    /// lock is taken; on failure the store is left untouched.
    pub fn load(&self, bytes: impl Into<Vec<u8>>) -> Result<FontHandle, FontError> {
        self.install_parsed(Font::from_bytes(bytes))
    }

    /// Read `reader` to the end, then behave like [`FontStore::load`].
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<FontHandle, FontError> {
        self.install_parsed(Font::from_reader(reader))
    }

    fn install_parsed(&self, parsed: Result<Font, FontError>) -> Result<FontHandle, FontError> {
        let font = parsed.inspect_err(|e| {
            tracing::warn!(error = %e, "rejected font data");
        })?;
        let handle = Arc::new(font);
        self.install(Arc::clone(&handle));
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_reports_not_loaded() {
        let store = FontStore::empty();
        assert!(!store.is_loaded());
        assert!(matches!(store.current(), Err(FontError::NotLoaded)));
    }

    #[test]
    fn test_default_store_has_builtin() {
        let store = FontStore::default();
        assert!(store.current().unwrap().is_builtin());
    }

    #[test]
    fn test_bad_load_keeps_previous_font() {
        let store = FontStore::default();
        let before = store.current().unwrap();
        assert!(store.load(b"not a font".to_vec()).is_err());
        let after = store.current().unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_install_and_clear() {
        let store = FontStore::empty();
        assert!(store.install(Arc::new(Font::builtin())).is_none());
        assert!(store.is_loaded());
        assert!(store.clear().is_some());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_snapshot_survives_swap() {
        let store = FontStore::default();
        let snapshot = store.current().unwrap();
        store.clear();
        assert!(snapshot.is_builtin());
        assert_eq!(Arc::strong_count(&snapshot), 1);
    }

    #[test]
    fn test_concurrent_readers_and_swaps() {
        let store = Arc::new(FontStore::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        if i == 0 {
                            store.install(Arc::new(Font::builtin()));
                        } else {
                            assert!(store.current().is_ok());
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
