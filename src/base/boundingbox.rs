/// Closed rectangle of longitude and latitude bounds. If either minimum is
/// greater than its maximum, the box is considered empty. All empty boxes are
/// equivalent.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
}

impl PartialEq for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty()
            || self.min_longitude == other.min_longitude
                && self.max_longitude == other.max_longitude
                && self.min_latitude == other.min_latitude
                && self.max_latitude == other.max_latitude
    }
}

impl BoundingBox {
    /// The box containing every finite coordinate.
    pub const MAX: Self = Self {
        min_longitude: f64::NEG_INFINITY,
        max_longitude: f64::INFINITY,
        min_latitude: f64::NEG_INFINITY,
        max_latitude: f64::INFINITY,
    };

    pub const EMPTY: Self = Self {
        min_longitude: f64::INFINITY,
        max_longitude: f64::NEG_INFINITY,
        min_latitude: f64::INFINITY,
        max_latitude: f64::NEG_INFINITY,
    };

    pub fn new(
        min_longitude: f64,
        max_longitude: f64,
        min_latitude: f64,
        max_latitude: f64,
    ) -> Self {
        Self {
            min_longitude,
            max_longitude,
            min_latitude,
            max_latitude,
        }
    }

    /// NaN bounds make the box empty.
    pub fn is_empty(self) -> bool {
        !(self.min_longitude <= self.max_longitude && self.min_latitude <= self.max_latitude)
    }

    /// Boundaries are inclusive.
    pub fn contains(self, longitude: f64, latitude: f64) -> bool {
        self.min_longitude <= longitude
            && longitude <= self.max_longitude
            && self.min_latitude <= latitude
            && latitude <= self.max_latitude
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{},{}:{}",
            self.min_longitude, self.max_longitude, self.min_latitude, self.max_latitude
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("expected 'LON:LON,LAT:LAT'")]
    MissingSeparator,
    #[error("invalid longitude range")]
    Longitude(#[source] std::num::ParseFloatError),
    #[error("invalid latitude range")]
    Latitude(#[source] std::num::ParseFloatError),
}

/// Parses `A:B`, `A:`, `:B`, `:` or `A`. Missing bounds are unbounded, and a
/// lone value is a degenerate range containing only itself.
fn parse_range(s: &str) -> Result<(f64, f64), std::num::ParseFloatError> {
    let s = s.trim();
    match s.split_once(':') {
        Some((left, right)) => Ok((
            match left.trim() {
                "" => f64::NEG_INFINITY,
                x => x.parse()?,
            },
            match right.trim() {
                "" => f64::INFINITY,
                x => x.parse()?,
            },
        )),
        None => {
            let x = s.parse()?;
            Ok((x, x))
        }
    }
}

impl std::str::FromStr for BoundingBox {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lon, lat) = s.split_once(',').ok_or(ParseError::MissingSeparator)?;
        let (min_longitude, max_longitude) = parse_range(lon).map_err(ParseError::Longitude)?;
        let (min_latitude, max_latitude) = parse_range(lat).map_err(ParseError::Latitude)?;
        Ok(Self {
            min_longitude,
            max_longitude,
            min_latitude,
            max_latitude,
        })
    }
}
