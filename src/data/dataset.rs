use super::record::{parse_count, parse_int, parse_non_negative, parse_win, Record};
use crate::error::AppError;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

pub const COL_GOLD_DIFF: &str = "golddiffat10";
pub const COL_KILLS_DIFF: &str = "kills_diff_10";
pub const COL_DRAGONS: &str = "dragons";
pub const COL_BARONS: &str = "barons";
pub const COL_TOWERS: &str = "towers";
pub const COL_VISION: &str = "visionscore";
pub const COL_WIN: &str = "win";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Column positions resolved once from the header row.
struct Columns {
    gold_diff: usize,
    kills_diff: usize,
    dragons: usize,
    barons: usize,
    towers: usize,
    vision: usize,
    win: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, AppError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| AppError::MissingColumn(name.to_string()))
        };

        Ok(Columns {
            gold_diff: find(COL_GOLD_DIFF)?,
            kills_diff: find(COL_KILLS_DIFF)?,
            dragons: find(COL_DRAGONS)?,
            barons: find(COL_BARONS)?,
            towers: find(COL_TOWERS)?,
            vision: find(COL_VISION)?,
            win: find(COL_WIN)?,
        })
    }

    fn parse(&self, row: &StringRecord) -> Option<Record> {
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        Some(Record {
            gold_diff_10: parse_int(cell(self.gold_diff)),
            kills_diff_10: parse_int(cell(self.kills_diff)),
            dragons: parse_count(cell(self.dragons)),
            barons: parse_count(cell(self.barons)),
            towers: parse_count(cell(self.towers)),
            vision_score: parse_non_negative(cell(self.vision)),
            won: parse_win(cell(self.win))?,
        })
    }
}

/// The match rows for a session. Loaded once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    report: LoadReport,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|e| AppError::DatasetError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            records = dataset.report.loaded,
            skipped = dataset.report.skipped,
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = Columns::resolve(csv_reader.headers()?)?;

        let mut records = Vec::new();
        let mut report = LoadReport::default();

        for (idx, row) in csv_reader.records().enumerate() {
            let row = row?;
            match columns.parse(&row) {
                Some(record) => records.push(record),
                None => {
                    // +2: header is line 1
                    warn!(line = idx + 2, value = ?row.get(columns.win), "skipping row with invalid win flag");
                    report.skipped += 1;
                }
            }
        }

        report.loaded = records.len();
        if records.is_empty() {
            warn!("dataset contains no usable rows");
        }
        debug!(?report, "parsed dataset");

        Ok(Dataset { records, report })
    }

    #[cfg(test)]
    pub fn from_records(records: Vec<Record>) -> Self {
        let report = LoadReport {
            loaded: records.len(),
            skipped: 0,
        };
        Dataset { records, report }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
