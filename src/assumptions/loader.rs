//! Load assumption scenarios from CSV
//!
//! Expected header: employees,salary,trainingHours,turnover,replaceCost,term

use super::Assumptions;
use crate::error::{Result, RoiError};
use csv::{Reader, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load one `Assumptions` per CSV row from a file
pub fn load_scenarios(path: &Path) -> Result<Vec<Assumptions>> {
    let file = File::open(path)?;
    let scenarios = load_scenarios_from_reader(file)?;
    if scenarios.is_empty() {
        return Err(RoiError::EmptyScenarioFile(path.display().to_string()));
    }

    info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any reader (file, stdin, in-memory buffer)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Assumptions>> {
    let mut reader = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    read_rows(&mut reader)
}

fn read_rows<R: Read>(reader: &mut Reader<R>) -> Result<Vec<Assumptions>> {
    let mut scenarios = Vec::new();

    for (row, record) in reader.deserialize::<Assumptions>().enumerate() {
        let assumptions = record?;
        debug!("Scenario row {}: {:?}", row + 1, assumptions);
        scenarios.push(assumptions);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIOS: &str = "\
employees,salary,trainingHours,turnover,replaceCost,term
10, 20000, 0, 0, 5000, 1
250,65000,40,18.5,12000,3
";

    #[test]
    fn test_load_from_reader() {
        let scenarios = load_scenarios_from_reader(SCENARIOS.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0], Assumptions::new(10, 20_000.0, 0, 0.0, 5_000.0, 1));
        assert_eq!(scenarios[1].employees, 250);
        assert_eq!(scenarios[1].turnover, 18.5);
        assert_eq!(scenarios[1].term, 3);
    }

    #[test]
    fn test_bad_row_is_csv_error() {
        let data = "employees,salary,trainingHours,turnover,replaceCost,term\nten,1,1,1,1,1\n";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, RoiError::Csv(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_scenarios(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, RoiError::Io(_)));
    }

    #[test]
    fn test_header_only_file_is_rejected() {
        let path = std::env::temp_dir().join("roi_calculator_empty_scenarios.csv");
        std::fs::write(&path, "employees,salary,trainingHours,turnover,replaceCost,term\n").unwrap();

        let err = load_scenarios(&path).unwrap_err();
        assert!(matches!(err, RoiError::EmptyScenarioFile(_)));

        let _ = std::fs::remove_file(&path);
    }
}
