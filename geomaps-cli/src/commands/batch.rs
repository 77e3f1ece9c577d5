use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use geomaps::GeoClient;
use indicatif::{ProgressBar, ProgressStyle};

use super::require_api_key;

pub fn run(
    api_key: Option<String>,
    input: PathBuf,
    output: Option<PathBuf>,
    address_col: String,
) -> Result<()> {
    let api_key = require_api_key(api_key)?;
    let client = GeoClient::new(api_key).context("Failed to create client")?;

    let file = File::open(&input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find the address column
    let headers = reader.headers()?.clone();
    let addr_idx = headers
        .iter()
        .position(|h| h == address_col)
        .with_context(|| format!("Column '{}' not found in CSV", address_col))?;

    // Collect records for progress bar
    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let total = records.len() as u64;

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    // Prepare output
    let output_path = output.unwrap_or_else(|| {
        let stem = input.file_stem().unwrap().to_string_lossy();
        input.with_file_name(format!("{}_geocoded.csv", stem))
    });
    let output_file = File::create(&output_path).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    // Write header
    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push("lat");
    new_headers.push("lng");
    writer.write_record(&new_headers)?;

    // Process records; failed lookups get empty coordinate fields
    let mut failures = 0u64;
    for record in records {
        let address = record.get(addr_idx).context("Missing address")?;

        let (lat, lng) = match client.geocode_address(address) {
            Ok(coord) => (coord.lat.to_string(), coord.lng.to_string()),
            Err(_) => {
                failures += 1;
                (String::new(), String::new())
            }
        };

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&lat);
        new_record.push(&lng);
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    println!("Output written to: {}", output_path.display());
    if failures > 0 {
        println!("{} of {} addresses failed to geocode", failures, total);
    }

    Ok(())
}
