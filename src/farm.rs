//! Faster (but not DoS-resistant) hashmap
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hash, Hasher};

/// Act like a streaming farmhash
///
/// Farmhash isn't a streaming hash, so every write is hashed with the running state as seed.
/// `str` writes its bytes and then a terminator byte, which is why chaining matters.
pub struct FarmHashLie(u64);

impl Default for FarmHashLie {
    #[inline]
    fn default() -> FarmHashLie { FarmHashLie(0) }
}

impl Hasher for FarmHashLie {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0 = farmhash::hash64_with_seed(bytes, self.0);
    }
}

pub type Farm = BuildHasherDefault<FarmHashLie>;
pub type FarmMap<X, Y> = HashMap<X, Y, Farm>;
pub type FarmSet<X> = HashSet<X, Farm>;

pub fn new_farm<X: Hash + Eq, Y>() -> FarmMap<X, Y> {
    Default::default()
}

pub fn new_farm_set<X: Hash + Eq>() -> FarmSet<X> {
    Default::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut hasher = FarmHashLie::default();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn distinct_strings_hash_differently() {
        assert_ne!(hash_of("hund"), hash_of("katze"));
        assert_ne!(hash_of(&("hund", "katze")), hash_of(&("katze", "hund")));
    }

    #[test]
    fn farm_map_behaves_like_a_map() {
        let mut map = new_farm();
        map.insert("hund".to_string(), 1);
        map.insert("katze".to_string(), 2);
        map.insert("hund".to_string(), 3);
        assert_eq!(map.len(), 2);
        assert_eq!(map["hund"], 3);
    }
}
