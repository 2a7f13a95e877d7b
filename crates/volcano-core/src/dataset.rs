// crates/volcano-core/src/dataset.rs
use crate::common::DatasetStats;
use crate::error::{Result, VolcanoError};
use crate::loader::{self, DEFAULT_SOURCE};
use crate::model::Volcano;
use crate::query::{mean, percent_of, MatchCriteria};
use crate::text::equals_ignore_case;
use crate::traits::NameMatch;
use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Number of records used by [`VolcanoDataset::agents_of_death_for_ten_deadliest`].
pub const DEFAULT_TOP_N: usize = 10;

/// An in-memory set of eruption records plus the queries over it.
///
/// The dataset starts out unloaded. Every query returns
/// [`VolcanoError::NotLoaded`] until a [`load`](Self::load) succeeds, so a
/// forgotten load never masquerades as an empty result.
#[derive(Debug, Clone, Default)]
pub struct VolcanoDataset {
    volcanoes: Option<Vec<Volcano>>,
    source: Option<PathBuf>,
}

impl VolcanoDataset {
    /// An unloaded dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// A loaded dataset over already-parsed records.
    pub fn from_volcanoes(volcanoes: Vec<Volcano>) -> Self {
        Self {
            volcanoes: Some(volcanoes),
            source: None,
        }
    }

    /// Parses a JSON array of records from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let volcanoes = loader::parse_volcanoes(reader, Path::new("<reader>"))?;
        Ok(Self::from_volcanoes(volcanoes))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let volcanoes = loader::parse_volcanoes(json.as_bytes(), Path::new("<string>"))?;
        Ok(Self::from_volcanoes(volcanoes))
    }

    pub fn default_data_dir() -> PathBuf {
        loader::default_data_dir()
    }

    pub fn default_source() -> &'static str {
        DEFAULT_SOURCE
    }

    /// Loads (or reloads) the collection from `source`, or from the bundled
    /// [`DEFAULT_SOURCE`] when `None`.
    ///
    /// `None` always reads `<volcano-core>/data/volcano.json`; a file of the
    /// same name in the working directory is ignored. Explicit identifiers
    /// follow [`loader::resolve_source`].
    ///
    /// The file is parsed completely before the collection is swapped in. On
    /// error the previous state, loaded or not, is kept as it was.
    pub fn load(&mut self, source: Option<&Path>) -> Result<()> {
        let (identifier, loaded) = match source {
            Some(path) => (path.to_path_buf(), loader::read_volcanoes(path)),
            None => (loader::default_source_path(), loader::read_default()),
        };
        match loaded {
            Ok((path, volcanoes)) => {
                info!(path = %path.display(), eruptions = volcanoes.len(), "loaded volcano dataset");
                self.volcanoes = Some(volcanoes);
                self.source = Some(path);
                Ok(())
            }
            Err(e) => {
                warn!(source = %identifier.display(), error = %e, "dataset load failed; keeping previous collection");
                Err(e)
            }
        }
    }

    pub fn load_default(&mut self) -> Result<()> {
        self.load(None)
    }

    pub fn load_from(&mut self, source: impl AsRef<Path>) -> Result<()> {
        self.load(Some(source.as_ref()))
    }

    pub fn is_loaded(&self) -> bool {
        self.volcanoes.is_some()
    }

    /// Resolved path of the last successful file load.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// All records in source order.
    pub fn volcanoes(&self) -> Result<&[Volcano]> {
        self.volcanoes.as_deref().ok_or(VolcanoError::NotLoaded)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn count(&self) -> Result<usize> {
        Ok(self.volcanoes()?.len())
    }

    /// Records with `start <= year < end`, in source order.
    pub fn erupted_in_range(&self, start: i32, end: i32) -> Result<Vec<&Volcano>> {
        Ok(self
            .volcanoes()?
            .iter()
            .filter(|v| v.erupted_between(start, end))
            .collect())
    }

    pub fn names_with_minimum_vei(&self, threshold: i32) -> Result<Vec<&str>> {
        Ok(self
            .volcanoes()?
            .iter()
            .filter(|v| v.vei() >= threshold)
            .map(Volcano::name)
            .collect())
    }

    /// Share of eruptions flagged with a tsunami, in percent. 0 when empty.
    pub fn percent_causing_tsunami(&self) -> Result<f64> {
        let all = self.volcanoes()?;
        let tsunamis = all.iter().filter(|v| v.caused_tsunami()).count();
        Ok(percent_of(tsunamis, all.len()))
    }

    /// Occurrences per type, in order of first appearance.
    pub fn count_by_type(&self) -> Result<Vec<(&str, usize)>> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();
        for v in self.volcanoes()? {
            match slots.entry(v.kind()) {
                Entry::Occupied(slot) => counts[*slot.get()].1 += 1,
                Entry::Vacant(slot) => {
                    slot.insert(counts.len());
                    counts.push((v.kind(), 1));
                }
            }
        }
        Ok(counts)
    }

    /// The most frequent type. Ties go to the type that appears first in
    /// the dataset; `None` when empty.
    pub fn most_common_type(&self) -> Result<Option<&str>> {
        let best = self
            .count_by_type()?
            .into_iter()
            .fold(None, |best, (kind, n)| match best {
                Some((_, top)) if top >= n => best,
                _ => Some((kind, n)),
            });
        Ok(best.map(|(kind, _)| kind))
    }

    /// Eruptions whose country equals `country`, ignoring case.
    pub fn eruption_count_by_country(&self, country: &str) -> Result<usize> {
        Ok(self
            .volcanoes()?
            .iter()
            .filter(|v| equals_ignore_case(v.country(), country))
            .count())
    }

    /// Mean elevation in metres. 0 when empty.
    pub fn average_elevation(&self) -> Result<f64> {
        Ok(mean(self.volcanoes()?.iter().map(Volcano::elevation)))
    }

    /// Each type once, in order of first appearance.
    pub fn distinct_types(&self) -> Result<Vec<&str>> {
        Ok(self
            .count_by_type()?
            .into_iter()
            .map(|(kind, _)| kind)
            .collect())
    }

    /// Share of eruptions with latitude > 0, in percent. 0 when empty.
    pub fn percent_in_northern_hemisphere(&self) -> Result<f64> {
        let all = self.volcanoes()?;
        let north = all.iter().filter(|v| v.is_northern()).count();
        Ok(percent_of(north, all.len()))
    }

    pub fn names_matching_all_of(&self, criteria: &MatchCriteria) -> Result<Vec<&str>> {
        Ok(self
            .volcanoes()?
            .iter()
            .filter(|v| criteria.matches(v))
            .map(Volcano::name)
            .collect())
    }

    /// Names of volcanoes strictly higher than `min_elevation` metres.
    pub fn names_above_elevation(&self, min_elevation: f64) -> Result<Vec<&str>> {
        Ok(self
            .volcanoes()?
            .iter()
            .filter(|v| v.elevation() > min_elevation)
            .map(Volcano::name)
            .collect())
    }

    /// The eruption with the highest death toll. On a tie the earliest record
    /// in source order wins.
    pub fn deadliest_eruption(&self) -> Result<Option<&Volcano>> {
        Ok(self
            .volcanoes()?
            .iter()
            .fold(None, |best: Option<&Volcano>, v| match best {
                Some(b) if b.deaths() >= v.deaths() => best,
                _ => Some(v),
            }))
    }

    pub fn agents_of_death_for_deadliest_eruption(&self) -> Result<Vec<&str>> {
        Ok(self
            .deadliest_eruption()?
            .map(|v| v.agents().iter().map(String::as_str).collect())
            .unwrap_or_default())
    }

    /// The `n` deadliest eruptions, death toll descending. Equal tolls keep
    /// their source order.
    pub fn deadliest(&self, n: usize) -> Result<Vec<&Volcano>> {
        let mut ranked: Vec<&Volcano> = self.volcanoes()?.iter().collect();
        ranked.sort_by_key(|v| Reverse(v.deaths()));
        ranked.truncate(n);
        Ok(ranked)
    }

    /// Agents of death of the `n` deadliest eruptions, flattened in rank order.
    pub fn agents_of_death_for_top_n_deadliest(&self, n: usize) -> Result<Vec<&str>> {
        Ok(self
            .deadliest(n)?
            .into_iter()
            .flat_map(|v| v.agents().iter().map(String::as_str))
            .collect())
    }

    // -----------------------------------------------------------------------
    // Fixed reports
    // -----------------------------------------------------------------------

    /// Eruptions from 1980 up to (not including) 1990.
    pub fn erupted_in_eighties(&self) -> Result<Vec<&Volcano>> {
        self.erupted_in_range(1980, 1990)
    }

    /// Names of eruptions with VEI 6 or more.
    pub fn high_vei_names(&self) -> Result<Vec<&str>> {
        self.names_with_minimum_vei(6)
    }

    pub fn quiet_southern_vei5_since_1800(&self) -> Result<Vec<&str>> {
        self.names_matching_all_of(&MatchCriteria::quiet_southern_vei5_since_1800())
    }

    pub fn agents_of_death_for_ten_deadliest(&self) -> Result<Vec<&str>> {
        self.agents_of_death_for_top_n_deadliest(DEFAULT_TOP_N)
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    pub fn stats(&self) -> Result<DatasetStats> {
        let all = self.volcanoes()?;
        let countries: HashSet<&str> = all.iter().map(Volcano::country).collect();
        Ok(DatasetStats {
            eruptions: all.len(),
            types: self.count_by_type()?.len(),
            countries: countries.len(),
            total_deaths: all
                .iter()
                .fold(0u64, |acc, v| acc.saturating_add(v.deaths())),
        })
    }

    /// Records whose name contains `query`, ignoring case and accents.
    pub fn find_by_name(&self, query: &str) -> Result<Vec<&Volcano>> {
        let q = query.trim();
        if q.is_empty() {
            self.volcanoes()?;
            return Ok(Vec::new());
        }
        Ok(self
            .volcanoes()?
            .iter()
            .filter(|v| v.name_contains(q))
            .collect())
    }
}
