/*!
Frequency table over logical character codes
*/

/// One counter per logical code (0-255)
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counter: [u64; 256],
}

impl FrequencyTable {
    pub fn new() -> FrequencyTable {
        FrequencyTable { counter: [0; 256] }
    }
    /// Count one more occurrence of `code`
    #[inline]
    pub fn increment(&mut self, code: u8) {
        self.counter[code as usize] += 1;
    }
    #[inline]
    pub fn count(&self, code: u8) -> u64 {
        self.counter[code as usize]
    }
    /// Non-zero entries in ascending code order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counter
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(code, count)| (code as u8, *count))
    }
    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counter.iter().sum()
    }
    /// Number of distinct codes seen
    pub fn distinct(&self) -> usize {
        self.counter.iter().filter(|c| **c > 0).count()
    }
    pub fn is_empty(&self) -> bool {
        self.counter.iter().all(|c| *c == 0)
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_and_iterates_ascending() {
        let mut table = FrequencyTable::new();
        for code in b"banana" {
            table.increment(*code);
        }
        table.increment(0xE9);
        let entries: Vec<(u8, u64)> = table.iter().collect();
        assert_eq!(entries, vec![(b'a', 3), (b'b', 1), (b'n', 2), (0xE9, 1)]);
        assert_eq!(table.count(b'a'), 3);
        assert_eq!(table.count(b'z'), 0);
        assert_eq!(table.total(), 7);
        assert_eq!(table.distinct(), 4);
        assert!(!table.is_empty());
    }

    #[test]
    fn empty_table() {
        let table = FrequencyTable::default();
        assert_eq!(table.iter().count(), 0);
        assert_eq!(table.total(), 0);
        assert!(table.is_empty());
    }
}
