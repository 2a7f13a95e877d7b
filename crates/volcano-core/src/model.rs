// crates/volcano-core/src/model.rs
use serde::{Deserialize, Serialize};

/// Value of the tsunami flag on eruptions that caused a tsunami.
pub const TSUNAMI_MARKER: &str = "tsu";

/// Value of the tsunami flag on eruptions with no tsunami on record.
pub const NO_TSUNAMI: &str = "";

/// A single eruption record.
///
/// Records are immutable once parsed: fields are private and only exposed
/// through borrowing accessors. JSON keys follow the NOAA significant
/// eruptions export (`Name`, `Country`, `Type`, `VEI`, `TSU`, `DEATHS`,
/// `Agent`, ...); lowercase aliases are accepted as well.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Volcano {
    #[serde(rename = "Name", alias = "name")]
    name: String,

    #[serde(rename = "Country", alias = "country")]
    country: String,

    #[serde(rename = "Type", alias = "type", alias = "kind")]
    kind: String,

    /// Negative for BCE.
    #[serde(rename = "Year", alias = "year")]
    year: i32,

    #[serde(
        rename = "VEI",
        alias = "vei",
        default,
        deserialize_with = "lenient::number_or_blank"
    )]
    vei: i32,

    /// Metres above sea level.
    #[serde(
        rename = "Elevation",
        alias = "elevation",
        default,
        deserialize_with = "lenient::number_or_blank"
    )]
    elevation: f64,

    #[serde(rename = "Latitude", alias = "latitude")]
    latitude: f64,

    #[serde(
        rename = "Longitude",
        alias = "longitude",
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    longitude: Option<f64>,

    #[serde(
        rename = "Location",
        alias = "location",
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    location: Option<String>,

    /// `"tsu"` or `""`, trimmed.
    #[serde(
        rename = "TSU",
        alias = "Tsu",
        alias = "tsu",
        alias = "tsunami",
        default,
        deserialize_with = "lenient::flag"
    )]
    tsunami: String,

    #[serde(
        rename = "EQ",
        alias = "eq",
        alias = "earthquake",
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    earthquake: Option<String>,

    #[serde(
        rename = "DEATHS",
        alias = "Deaths",
        alias = "deaths",
        default,
        deserialize_with = "lenient::number_or_blank"
    )]
    deaths: u64,

    /// Agents of death, e.g. `P` (pyroclastic flows) or `T` (tsunami).
    #[serde(
        rename = "Agent",
        alias = "agent",
        alias = "agents",
        alias = "agents_of_death",
        alias = "agentsOfDeath",
        default,
        deserialize_with = "lenient::agents"
    )]
    agents: Vec<String>,
}

impl Volcano {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Eruption / edifice type, e.g. `Stratovolcano` or `Caldera`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn vei(&self) -> i32 {
        self.vei
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Tsunami flag as stored after loading: surrounding whitespace is
    /// trimmed and a missing or `null` flag becomes `""`, so a raw `" "`
    /// compares equal to [`NO_TSUNAMI`].
    pub fn tsunami(&self) -> &str {
        &self.tsunami
    }

    pub fn earthquake(&self) -> Option<&str> {
        self.earthquake.as_deref()
    }

    pub fn deaths(&self) -> u64 {
        self.deaths
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    #[inline]
    pub fn caused_tsunami(&self) -> bool {
        self.tsunami == TSUNAMI_MARKER
    }

    /// Strictly north of the equator.
    #[inline]
    pub fn is_northern(&self) -> bool {
        self.latitude > 0.0
    }

    /// `start` inclusive, `end` exclusive.
    #[inline]
    pub fn erupted_between(&self, start: i32, end: i32) -> bool {
        (start..end).contains(&self.year)
    }
}

/// Deserializers for the loosely typed columns of the source export.
///
/// The export writes unknown numbers as `""` and joins agent codes with
/// commas, so these accept both the loose and the strict encodings.
mod lenient {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText<T> {
        Number(T),
        Text(String),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AgentList {
        Joined(String),
        List(Vec<String>),
    }

    fn parse_text<T: FromStr, E: Error>(s: &str) -> Result<Option<T>, E> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        s.parse()
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Str(s), &"a number or an empty string"))
    }

    pub(super) fn optional_number<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr,
    {
        match Option::<NumberOrText<T>>::deserialize(d)? {
            None => Ok(None),
            Some(NumberOrText::Number(n)) => Ok(Some(n)),
            Some(NumberOrText::Text(s)) => parse_text(&s),
        }
    }

    /// Blank or `null` becomes the type's default (0).
    pub(super) fn number_or_blank<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr + Default,
    {
        optional_number(d).map(Option::unwrap_or_default)
    }

    pub(super) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(d)?
            .map(|s| s.trim().to_string())
            .unwrap_or_default())
    }

    pub(super) fn optional_text<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(flag(d).map(Some)?.filter(|s| !s.is_empty()))
    }

    pub(super) fn agents<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        let raw = match Option::<AgentList>::deserialize(d)? {
            None => return Ok(Vec::new()),
            Some(AgentList::Joined(s)) => s.split(',').map(str::to_string).collect(),
            Some(AgentList::List(v)) => v,
        };
        Ok(raw
            .into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Volcano {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn reads_noaa_export_columns() {
        let v = parse(
            r#"{"Year":1883,"Month":"8","Day":"27","TSU":"tsu","EQ":"","Name":"Krakatau",
                "Location":"Indonesia","Country":"Indonesia","Latitude":-6.102,
                "Longitude":105.423,"Elevation":813,"Type":"Caldera","VEI":6,
                "Agent":"T","DEATHS":36417}"#,
        );
        assert_eq!(v.name(), "Krakatau");
        assert_eq!(v.kind(), "Caldera");
        assert_eq!(v.year(), 1883);
        assert_eq!(v.vei(), 6);
        assert_eq!(v.elevation(), 813.0);
        assert_eq!(v.longitude(), Some(105.423));
        assert_eq!(v.earthquake(), None);
        assert_eq!(v.deaths(), 36417);
        assert_eq!(v.agents(), ["T"]);
        assert!(v.caused_tsunami());
        assert!(!v.is_northern());
    }

    #[test]
    fn blank_numbers_fall_back_to_zero() {
        let v = parse(
            r#"{"Name":"Ruang","Country":"Indonesia","Type":"Stratovolcano","Year":1871,
                "Latitude":2.3,"VEI":"","DEATHS":"","Elevation":null,"TSU":null,"Agent":""}"#,
        );
        assert_eq!(v.vei(), 0);
        assert_eq!(v.deaths(), 0);
        assert_eq!(v.elevation(), 0.0);
        assert_eq!(v.tsunami(), NO_TSUNAMI);
        assert!(v.agents().is_empty());
    }

    #[test]
    fn tsunami_flag_is_trimmed() {
        let blank = parse(
            r#"{"Name":"A","Country":"X","Type":"T","Year":1,"Latitude":0,"TSU":" "}"#,
        );
        let padded = parse(
            r#"{"Name":"B","Country":"X","Type":"T","Year":1,"Latitude":0,"TSU":" tsu "}"#,
        );
        assert_eq!(blank.tsunami(), NO_TSUNAMI);
        assert_eq!(padded.tsunami(), TSUNAMI_MARKER);
        assert!(padded.caused_tsunami());
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let v = parse(
            r#"{"name":"Pelee","country":"Martinique","type":"Stratovolcano","year":1902,
                "latitude":14.82,"vei":"4","deaths":"28000","elevation":"1397"}"#,
        );
        assert_eq!(v.vei(), 4);
        assert_eq!(v.deaths(), 28000);
        assert_eq!(v.elevation(), 1397.0);
    }

    #[test]
    fn agents_accept_joined_or_list_form() {
        let joined = parse(
            r#"{"Name":"A","Country":"X","Type":"T","Year":1,"Latitude":0,"Agent":"P, T,,M"}"#,
        );
        let listed = parse(
            r#"{"Name":"A","Country":"X","Type":"T","Year":1,"Latitude":0,
                "agents_of_death":["P","T","M"]}"#,
        );
        assert_eq!(joined.agents(), ["P", "T", "M"]);
        assert_eq!(joined.agents(), listed.agents());
    }

    #[test]
    fn garbage_number_is_rejected() {
        let err = serde_json::from_str::<Volcano>(
            r#"{"Name":"A","Country":"X","Type":"T","Year":1,"Latitude":0,"VEI":"huge"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = serde_json::from_str::<Volcano>(r#"{"Name":"A","Country":"X","Year":1}"#);
        assert!(err.is_err());
    }

    #[test]
    fn year_range_is_half_open() {
        let v = parse(r#"{"Name":"A","Country":"X","Type":"T","Year":1990,"Latitude":0}"#);
        assert!(v.erupted_between(1990, 1991));
        assert!(!v.erupted_between(1980, 1990));
    }
}
