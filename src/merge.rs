use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The year range {first}..={last} is empty")]
    EmptyYearRange { first: u16, last: u16 },
    #[error("Could not open CSV file at '{}'", path.display())]
    OpenCsv {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not read CSV file at '{}'", path.display())]
    ReadCsv { path: PathBuf, source: csv::Error },
    #[error("Could not create output directory at '{}'", path.display())]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not create output file at '{}'", path.display())]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not write JSON to '{}'", path.display())]
    WriteOutput {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Could not flush JSON to '{}'", path.display())]
    FlushOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Clone, Debug)]
pub struct Options {
    /// The directory containing one `billionaires_<year>.csv` file per year.
    pub input_dir: PathBuf,
    /// Where to write the JSON array to, or `<input_dir>/data/billionaires.json` if unset.
    pub output: Option<PathBuf>,
    /// The years to look for, both ends included.
    pub years: RangeInclusive<u16>,
    /// Add residence, citizenship and gender to each record.
    pub with_profile: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            input_dir: "public".into(),
            output: None,
            years: 1997..=2024,
            with_profile: false,
        }
    }
}

impl Options {
    /// The path of the CSV file for `year`, which may or may not exist.
    pub fn source_path(&self, year: u16) -> PathBuf {
        self.input_dir.join(format!("billionaires_{year}.csv"))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            self.input_dir.join("data").join("billionaires.json")
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The year and amount of records for each file that was found, in ascending order.
    pub years: Vec<(u16, usize)>,
    /// The total amount of records written.
    pub records: usize,
    /// The file the records were written to.
    pub output: PathBuf,
}

pub(crate) mod function {
    use super::{ensure_parent_dir, Error, Options, Outcome};
    use crate::read_records;
    use log::{debug, info};
    use std::io::Write;

    /// Read the CSV file of every year in `options.years` that exists, normalize all rows and write them as
    /// a single pretty-printed JSON array.
    ///
    /// The output is written in place, an error while writing leaves a truncated file.
    pub fn merge(options: Options) -> Result<Outcome, Error> {
        let (first, last) = (*options.years.start(), *options.years.end());
        if options.years.is_empty() {
            return Err(Error::EmptyYearRange { first, last });
        }

        let mut records = Vec::new();
        let mut years = Vec::new();
        for year in options.years.clone() {
            let path = options.source_path(year);
            let file = match std::fs::File::open(&path) {
                Ok(file) => file,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    debug!("No data for {year} at '{}'", path.display());
                    continue;
                }
                Err(source) => return Err(Error::OpenCsv { path, source }),
            };
            let year_records = read_records(std::io::BufReader::new(file), options.with_profile)
                .map_err(|source| Error::ReadCsv {
                    path: path.clone(),
                    source,
                })?;
            info!("Read {} records from '{}'", year_records.len(), path.display());
            years.push((year, year_records.len()));
            records.extend(year_records);
        }

        let output = options.output_path();
        ensure_parent_dir(&output)?;
        let file = std::fs::File::create(&output).map_err(|source| Error::CreateOutput {
            path: output.clone(),
            source,
        })?;
        let mut out = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, &records).map_err(|source| Error::WriteOutput {
            path: output.clone(),
            source,
        })?;
        out.flush().map_err(|source| Error::FlushOutput {
            path: output.clone(),
            source,
        })?;
        info!(
            "Merged {} records of {} years into '{}'",
            records.len(),
            years.len(),
            output.display()
        );

        Ok(Outcome {
            years,
            records: records.len(),
            output,
        })
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), Error> {
    match path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => std::fs::create_dir_all(dir).map_err(|source| Error::CreateOutputDir {
            path: dir.to_owned(),
            source,
        }),
        None => Ok(()),
    }
}
