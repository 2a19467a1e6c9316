/// A single road accident. Coordinates are expected to be finite; JSON has no
/// representation for NaN or infinity.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Accident {
    #[serde(rename = "id")]
    accident_id: String,
    #[serde(rename = "lon")]
    longitude: f64,
    #[serde(rename = "lat")]
    latitude: f64,
    #[serde(rename = "surface")]
    road_surface_conditions: String,
    #[serde(rename = "weather")]
    weather_conditions: String,
    #[serde(rename = "authority")]
    district_authority: String,
}

impl Accident {
    pub fn accident_id(&self) -> &str {
        &self.accident_id
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn road_surface_conditions(&self) -> &str {
        &self.road_surface_conditions
    }

    pub fn weather_conditions(&self) -> &str {
        &self.weather_conditions
    }

    pub fn district_authority(&self) -> &str {
        &self.district_authority
    }

    pub fn new(
        accident_id: impl Into<String>,
        longitude: f64,
        latitude: f64,
        road_surface_conditions: impl Into<String>,
        weather_conditions: impl Into<String>,
        district_authority: impl Into<String>,
    ) -> Self {
        Self {
            accident_id: accident_id.into(),
            longitude,
            latitude,
            road_surface_conditions: road_surface_conditions.into(),
            weather_conditions: weather_conditions.into(),
            district_authority: district_authority.into(),
        }
    }
}

impl std::fmt::Display for Accident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Accident {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
