//! Result encoding (CSV via `csv`, JSON via `serde_json`)

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// One drawn deviate
#[derive(Debug, Serialize)]
struct SampleRecord {
    index: usize,
    value: f64,
}

/// State of every series after one step
#[derive(Debug, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub time: f64,
    pub values: Vec<f64>,
}

/// Write a flat list of deviates as `index,value` rows or a JSON array
pub fn write_samples<W: Write>(writer: W, format: OutputFormat, samples: &[f64]) -> Result<()> {
    let records = samples
        .iter()
        .enumerate()
        .map(|(index, &value)| SampleRecord { index, value });

    match format {
        OutputFormat::Csv => {
            let mut csv = csv::Writer::from_writer(writer);
            for record in records {
                csv.serialize(record)?;
            }
            csv.flush()?;
        }
        OutputFormat::Json => {
            let records: Vec<_> = records.collect();
            write_json(writer, &records)?;
        }
    }
    Ok(())
}

/// Write red-noise steps as `step,time,v0..` rows or a JSON array
pub fn write_steps<W: Write>(writer: W, format: OutputFormat, steps: &[StepRecord]) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut csv = csv::Writer::from_writer(writer);
            let series = steps.first().map_or(0, |s| s.values.len());

            let mut header = vec!["step".to_string(), "time".to_string()];
            header.extend((0..series).map(|i| format!("v{}", i)));
            csv.write_record(&header)?;

            for record in steps {
                let mut row = vec![record.step.to_string(), record.time.to_string()];
                row.extend(record.values.iter().map(|v| v.to_string()));
                csv.write_record(&row)?;
            }
            csv.flush()?;
        }
        OutputFormat::Json => write_json(writer, steps)?,
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}
