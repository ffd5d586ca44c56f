//! Output writers for simulation results: one JSON record per game
//! (optionally gzipped) plus a CSV summary.

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct OutputWriter {
    format: OutputFormat,
    json_writer: Box<dyn Write + Send>,
    csv_writer: csv::Writer<BufWriter<File>>,
    json_path: PathBuf,
    csv_path: PathBuf,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let filename = format!("simulation_{timestamp}.{extension}");
        let (json_writer, json_path): (Box<dyn Write + Send>, PathBuf) = if compress {
            let gz_path = dir.join(format!("{filename}.gz"));
            let writer = Box::new(BufWriter::new(GzEncoder::new(
                File::create(&gz_path)?,
                Compression::default(),
            )));
            (writer, gz_path)
        } else {
            let path = dir.join(&filename);
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)?;
            (Box::new(BufWriter::new(file)), path)
        };

        // Always create CSV summary
        let csv_path = dir.join(format!("simulation_{timestamp}_summary.csv"));
        let csv_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&csv_path)?;
        let mut csv_writer = csv::Writer::from_writer(BufWriter::new(csv_file));
        csv_writer.write_record([
            "game_id",
            "seed",
            "rounds",
            "seat0_exact",
            "seat1_exact",
            "seat2_exact",
            "seat3_exact",
            "seat0_ai",
            "seat1_ai",
            "seat2_ai",
            "seat3_ai",
        ])?;

        Ok(Self {
            format: format.clone(),
            json_writer,
            csv_writer,
            json_path,
            csv_path,
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        let json = match self.format {
            OutputFormat::Jsonl => serde_json::to_string(metrics)?,
            OutputFormat::Json => serde_json::to_string_pretty(metrics)?,
        };
        writeln!(self.json_writer, "{json}")?;
        self.json_writer.flush()?;

        let row: CsvSummaryRow = metrics.into();
        self.csv_writer.serialize(&row)?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.json_writer.flush()?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&PathBuf, &PathBuf) {
        (&self.json_path, &self.csv_path)
    }
}
