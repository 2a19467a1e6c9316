use crate::base;

/// Read-only queries over a fixed collection of accidents.
///
/// The collection is owned and never mutated after construction, so every
/// query borrows from it and repeated calls return identical results.
#[derive(Debug, Clone, Default, PartialEq, derive_more::IntoIterator)]
#[into_iterator(ref)]
pub struct Aggregator(Vec<base::Accident>);

impl Aggregator {
    pub fn new(accidents: Vec<base::Accident>) -> Self {
        log::debug!("aggregating {} accidents", accidents.len());
        Self(accidents)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Accident> {
        self.0.iter()
    }

    /// Returns a new aggregator over the accidents satisfying `pred`, in their
    /// original order.
    pub fn filter<P>(&self, pred: P) -> Self
    where
        P: FnMut(&&base::Accident) -> bool,
    {
        self.iter().filter(pred).collect()
    }

    /// Returns the first accident with the given id, or `None` if there is no
    /// such accident.
    pub fn find_by_id(&self, id: &str) -> Option<&base::Accident> {
        self.iter().find(|a| a.accident_id() == id)
    }

    /// Returns every accident within `[min_longitude, max_longitude] x
    /// [min_latitude, max_latitude]`. Inverted bounds match nothing.
    pub fn find_by_bounding_box(
        &self,
        min_longitude: f64,
        max_longitude: f64,
        min_latitude: f64,
        max_latitude: f64,
    ) -> Vec<&base::Accident> {
        self.find_in(base::BoundingBox::new(
            min_longitude,
            max_longitude,
            min_latitude,
            max_latitude,
        ))
    }

    /// Scans in parallel. Results keep dataset order.
    pub fn find_in(&self, bbox: base::BoundingBox) -> Vec<&base::Accident> {
        use rayon::prelude::*;

        if bbox.is_empty() {
            return Vec::new();
        }
        let found = self
            .0
            .par_iter()
            .filter(|a| bbox.contains(a.longitude(), a.latitude()))
            .collect::<Vec<_>>();
        log::debug!("{} of {} accidents within {}", found.len(), self.len(), bbox);
        found
    }

    pub fn count_by_surface_condition(&self) -> base::Tally<&str> {
        self.iter().map(base::Accident::road_surface_conditions).collect()
    }

    pub fn count_by_weather_condition(&self) -> base::Tally<&str> {
        self.iter().map(base::Accident::weather_conditions).collect()
    }

    /// Returns at most `n` weather conditions by descending accident count.
    /// Conditions with equal counts are ordered by first appearance in the
    /// dataset.
    pub fn top_weather_conditions(&self, n: usize) -> Vec<&str> {
        self.count_by_weather_condition().top(n)
    }

    pub fn top_three_weather_conditions(&self) -> Vec<&str> {
        self.top_weather_conditions(3)
    }

    /// Maps each district authority to the ids of its accidents, in dataset
    /// order.
    pub fn group_ids_by_authority(&self) -> std::collections::BTreeMap<&str, Vec<&str>> {
        let mut groups = std::collections::BTreeMap::<_, Vec<_>>::new();
        for a in self {
            groups
                .entry(a.district_authority())
                .or_default()
                .push(a.accident_id());
        }
        groups
    }
}

impl FromIterator<base::Accident> for Aggregator {
    fn from_iter<T: IntoIterator<Item = base::Accident>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Accident> for Aggregator {
    fn from_iter<T: IntoIterator<Item = &'a base::Accident>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Aggregator {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for a in self {
            writeln!(f, "{}", a)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Aggregator {
    type Err = base::dataset::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        base::dataset::parse(s, base::dataset::Format::Jsonl)
    }
}
