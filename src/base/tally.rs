/// Frequency table that remembers the order in which keys were first seen.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    keys: Vec<K>,
    counts: Vec<u64>,
    index: std::collections::HashMap<K, usize>,
    sum: u64,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            keys: Default::default(),
            counts: Default::default(),
            index: Default::default(),
            sum: 0,
        }
    }
}

/// Two tallies are equal if they hold the same counts, regardless of the order
/// keys were first seen.
impl<K> PartialEq for Tally<K>
where
    K: Eq + std::hash::Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.sum == other.sum
            && self.len() == other.len()
            && self.index.iter().all(|(k, &i)| {
                other.index.get(k).map(|&j| other.counts[j]) == Some(self.counts[i])
            })
    }
}

impl<K> Eq for Tally<K> where K: Eq + std::hash::Hash {}

impl<K> Tally<K> {
    /// Total of all counts.
    pub fn sum(&self) -> u64 {
        self.sum
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn add(&mut self, key: K)
    where
        K: Copy + Eq + std::hash::Hash,
    {
        let i = *self.index.entry(key).or_insert_with(|| {
            self.keys.push(key);
            self.counts.push(0);
            self.keys.len() - 1
        });
        self.counts[i] += 1;
        self.sum += 1;
    }

    pub fn get(&self, key: K) -> Option<u64>
    where
        K: Eq + std::hash::Hash,
    {
        self.index.get(&key).map(|&i| self.counts[i])
    }

    /// Iterates in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (K, u64)> + '_
    where
        K: Copy,
    {
        self.keys.iter().copied().zip(self.counts.iter().copied())
    }

    /// Returns all entries by descending count. Equal counts keep first-seen
    /// order.
    pub fn ranked(&self) -> Vec<(K, u64)>
    where
        K: Copy,
    {
        let mut v = self.iter().collect::<Vec<_>>();
        v.sort_by(|a, b| b.1.cmp(&a.1));
        v
    }

    /// Returns at most `n` keys, ranked as in [`Tally::ranked`].
    pub fn top(&self, n: usize) -> Vec<K>
    where
        K: Copy,
    {
        self.ranked().into_iter().take(n).map(|(k, _)| k).collect()
    }
}

impl<K> FromIterator<K> for Tally<K>
where
    K: Copy + Eq + std::hash::Hash,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tally = Tally::<K>::default();
        for k in iter {
            tally.add(k);
        }
        tally
    }
}
