// crates/perfcalc-cli/src/io/cache.rs

use std::path::PathBuf;

use anyhow::{bail, Context};

/// Source of raw `.osu` bytes for a beatmap id.
pub trait BeatmapFetcher {
    fn fetch_beatmap(&self, beatmap_id: u32) -> anyhow::Result<Vec<u8>>;
}

/// Directory of `<id>.osu` files filled on demand from a [`BeatmapFetcher`].
///
/// Files already on disk are trusted as-is and never revalidated.
pub struct BeatmapCache<F> {
    dir: PathBuf,
    fetcher: F,
}

impl<F: BeatmapFetcher> BeatmapCache<F> {
    pub fn new(dir: impl Into<PathBuf>, fetcher: F) -> Self {
        Self {
            dir: dir.into(),
            fetcher,
        }
    }

    pub fn path_for(&self, beatmap_id: u32) -> PathBuf {
        self.dir.join(format!("{beatmap_id}.osu"))
    }

    pub fn contains(&self, beatmap_id: u32) -> bool {
        self.path_for(beatmap_id).is_file()
    }

    pub fn fetch(&self, beatmap_id: u32) -> anyhow::Result<PathBuf> {
        let path = self.path_for(beatmap_id);
        if path.is_file() {
            log::debug!("cache hit: {}", path.display());
            return Ok(path);
        }

        log::debug!("cache miss: {}", path.display());
        let bytes = self
            .fetcher
            .fetch_beatmap(beatmap_id)
            .with_context(|| format!("download beatmap {beatmap_id}"))?;
        if bytes.is_empty() {
            bail!("download of beatmap {beatmap_id} returned no data");
        }

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create cache dir: {}", self.dir.display()))?;
        std::fs::write(&path, &bytes)
            .with_context(|| format!("write cached beatmap: {}", path.display()))?;

        Ok(path)
    }
}

impl<F: BeatmapFetcher + ?Sized> BeatmapFetcher for &F {
    fn fetch_beatmap(&self, beatmap_id: u32) -> anyhow::Result<Vec<u8>> {
        (**self).fetch_beatmap(beatmap_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting {
        calls: Cell<u32>,
        body: &'static [u8],
    }

    impl Counting {
        fn new(body: &'static [u8]) -> Self {
            Self {
                calls: Cell::new(0),
                body,
            }
        }
    }

    impl BeatmapFetcher for Counting {
        fn fetch_beatmap(&self, _beatmap_id: u32) -> anyhow::Result<Vec<u8>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.body.to_vec())
        }
    }

    #[test]
    fn second_fetch_is_served_from_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let fake = Counting::new(b"osu file format v14\n");
        let cache = BeatmapCache::new(tmp.path().join("maps"), &fake);

        assert!(!cache.contains(42));
        let first = cache.fetch(42).unwrap();
        let second = cache.fetch(42).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, tmp.path().join("maps").join("42.osu"));
        assert_eq!(fake.calls.get(), 1);
        assert!(cache.contains(42));
        assert_eq!(std::fs::read(&first).unwrap(), b"osu file format v14\n");
    }

    #[test]
    fn existing_file_is_not_refetched() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("7.osu"), b"stale but trusted").unwrap();

        let fake = Counting::new(b"fresh");
        let cache = BeatmapCache::new(tmp.path(), &fake);
        let path = cache.fetch(7).unwrap();

        assert_eq!(fake.calls.get(), 0);
        assert_eq!(std::fs::read(path).unwrap(), b"stale but trusted");
    }

    #[test]
    fn empty_download_is_rejected_and_not_written() {
        let tmp = tempfile::tempdir().unwrap();
        let fake = Counting::new(b"");
        let cache = BeatmapCache::new(tmp.path(), &fake);

        assert!(cache.fetch(9).is_err());
        assert!(!cache.contains(9));
    }
}
