use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Found(Option<base::Accident>),
    Accidents(Vec<base::Accident>),
    Counts(Vec<(String, u64)>),
    Ranking(Vec<String>),
    Groups(Vec<(String, Vec<String>)>),
    Json(serde_json::Value),
}

impl Output {
    /// Converts the payload to its JSON representation.
    pub fn into_json(self) -> serde_json::Result<Self> {
        let v = match self {
            Output::Json(_) => return Ok(self),
            Output::Found(a) => serde_json::to_value(a)?,
            Output::Accidents(v) => serde_json::to_value(v)?,
            Output::Counts(v) => serde_json::Value::Object(
                v.into_iter().map(|(k, n)| (k, n.into())).collect(),
            ),
            Output::Ranking(v) => serde_json::to_value(v)?,
            Output::Groups(v) => serde_json::Value::Object(
                v.into_iter()
                    .map(|(k, ids)| (k, ids.into()))
                    .collect(),
            ),
        };
        Ok(Output::Json(v))
    }
}

const NO_ACCIDENTS: &str = "No accidents.";

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Found(None) => writeln!(f, "No matching accident."),
            Output::Found(Some(a)) => {
                writeln!(f, "id:        {}", a.accident_id())?;
                writeln!(f, "location:  {}, {}", a.longitude(), a.latitude())?;
                writeln!(f, "surface:   {}", a.road_surface_conditions())?;
                writeln!(f, "weather:   {}", a.weather_conditions())?;
                writeln!(f, "authority: {}", a.district_authority())
            }
            Output::Accidents(v) if v.is_empty() => writeln!(f, "{}", NO_ACCIDENTS),
            Output::Accidents(v) => {
                let w = v.iter().map(|a| a.accident_id().len()).max().unwrap_or(0);
                for a in v {
                    writeln!(
                        f,
                        "{:<w$}  {}, {}  {} / {} / {}",
                        a.accident_id(),
                        a.longitude(),
                        a.latitude(),
                        a.road_surface_conditions(),
                        a.weather_conditions(),
                        a.district_authority(),
                    )?;
                }
                Ok(())
            }
            Output::Counts(v) if v.is_empty() => writeln!(f, "{}", NO_ACCIDENTS),
            Output::Counts(v) => {
                let w = v.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
                for (k, n) in v {
                    writeln!(f, "{:<w$}  {}", k, n)?;
                }
                Ok(())
            }
            Output::Ranking(v) if v.is_empty() => writeln!(f, "{}", NO_ACCIDENTS),
            Output::Ranking(v) => {
                for (i, k) in v.iter().enumerate() {
                    writeln!(f, "{}. {}", i + 1, k)?;
                }
                Ok(())
            }
            Output::Groups(v) if v.is_empty() => writeln!(f, "{}", NO_ACCIDENTS),
            Output::Groups(v) => {
                for (k, ids) in v {
                    writeln!(f, "{}: {}", k, ids.join(", "))?;
                }
                Ok(())
            }
            Output::Json(v) => {
                let s = serde_json::to_string_pretty(v).map_err(|_| std::fmt::Error)?;
                writeln!(f, "{}", s)
            }
        }
    }
}
