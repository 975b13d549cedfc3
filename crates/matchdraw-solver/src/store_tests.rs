//! Tests for cache persistence.

use super::*;
use crate::oracle::FeasibilityOracle;
use matchdraw_core::Remaining;
use matchdraw_test::champions_league_2022;

fn warmed_cache() -> MemoCache {
    let problem = champions_league_2022();
    let matrix = problem.initial_matrix();
    let remaining = Remaining::all(8).unwrap();
    let mut oracle = FeasibilityOracle::new();
    for b in 0..8 {
        oracle.feasible(&matrix, &remaining, 0, b);
    }
    oracle.into_cache()
}

#[test]
fn test_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileCacheStore::new(dir.path().join("cache.bin"));
    let cache = warmed_cache();
    assert!(!cache.is_empty());

    store.save(&cache).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, cache);
    for (key, feasible) in loaded.iter() {
        assert_eq!(cache.get(key), Some(feasible));
        assert_eq!(key.matrix().size(), 8);
        assert!(key.remaining().len() <= 8);
        let (a, b) = key.pair();
        assert!(a < 8 && b < 8);
    }
}

#[test]
fn test_load_then_save_reproduces_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let first = FileCacheStore::new(dir.path().join("first.bin"));
    let second = FileCacheStore::new(dir.path().join("second.bin"));

    first.save(&warmed_cache()).unwrap();
    second.save(&first.load().unwrap()).unwrap();

    assert_eq!(first.load().unwrap(), second.load().unwrap());
}

#[test]
fn test_save_overwrites_and_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.bin");
    let store = FileCacheStore::new(&path);

    store.save(&warmed_cache()).unwrap();
    store.save(&MemoCache::new()).unwrap();

    assert!(store.load().unwrap().is_empty());
    assert!(!dir.path().join("cache.bin.tmp").exists());
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileCacheStore::new(dir.path().join("absent.bin"));
    assert!(matches!(store.load(), Err(StoreError::Io(_))));
}

#[test]
fn test_corrupted_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.bin");
    std::fs::write(&path, b"\x01\x00\x00\x00not a cache").unwrap();

    let store = FileCacheStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Codec(_))));
}

#[test]
fn test_version_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.bin");
    let bytes = bincode::serialize(&CacheFileRef {
        version: CACHE_FORMAT_VERSION + 1,
        cache: &MemoCache::new(),
    })
    .unwrap();
    std::fs::write(&path, bytes).unwrap();

    let store = FileCacheStore::new(&path);
    assert!(matches!(
        store.load(),
        Err(StoreError::VersionMismatch { found, expected })
            if found == CACHE_FORMAT_VERSION + 1 && expected == CACHE_FORMAT_VERSION
    ));
}
