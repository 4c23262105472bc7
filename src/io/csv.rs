//! CSV input/output
//!
//! Reads a sampling frame from delimited text and writes the three export
//! artifacts of a sampling run: the sampled rows, the allocation table and a
//! descriptive-statistics table. Every writer has an `io::Write` variant so
//! exports can go to memory as well as to files.

use csv::{ReaderBuilder, Writer};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{Read, Write as IoWrite};
use std::path::Path;

use crate::core::error::{Error, Result};
use crate::frame::Frame;
use crate::series::Series;
use crate::stats::{DescriptiveStats, StratumAllocation};

/// Read a Frame from a CSV file
pub fn read_csv<P: AsRef<Path>>(path: P, has_header: bool) -> Result<Frame> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;
    read_csv_from_reader(file, has_header)
}

/// Read a Frame from any CSV reader
pub fn read_csv_from_reader<R: Read>(reader: R, has_header: bool) -> Result<Frame> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut headers: Vec<String> = if has_header {
        rdr.headers()
            .map_err(Error::Csv)?
            .iter()
            .map(|h| h.to_string())
            .collect()
    } else {
        Vec::new()
    };

    // A repeated header name would merge two columns into one vec
    let mut seen = HashSet::new();
    for header in &headers {
        if !seen.insert(header.clone()) {
            return Err(Error::DuplicateColumnName(header.clone()));
        }
    }

    let mut columns: HashMap<String, Vec<String>> = HashMap::new();
    for header in &headers {
        columns.insert(header.clone(), Vec::new());
    }

    for result in rdr.records() {
        let record = result.map_err(Error::Csv)?;

        // Without a header row, column names are inferred from the first record
        if headers.is_empty() {
            headers = (0..record.len()).map(|i| format!("column_{}", i)).collect();
            for header in &headers {
                columns.insert(header.clone(), Vec::new());
            }
        }

        for (i, header) in headers.iter().enumerate() {
            let value = record.get(i).unwrap_or("").to_string();
            columns
                .get_mut(header)
                .expect("column initialized from headers")
                .push(value);
        }
    }

    let mut frame = Frame::new();
    for header in headers {
        if let Some(values) = columns.remove(&header) {
            let series = Series::new(values, Some(header.clone()))?;
            frame.add_column(header, series)?;
        }
    }

    Ok(frame)
}

/// Write a Frame to a CSV file
pub fn write_csv<P: AsRef<Path>>(frame: &Frame, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(Error::Io)?;
    write_csv_to_writer(frame, file)
}

/// Write a Frame as CSV to any writer
pub fn write_csv_to_writer<W: IoWrite>(frame: &Frame, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);

    let column_names = frame.column_names();
    wtr.write_record(&column_names).map_err(Error::Csv)?;

    for i in 0..frame.row_count() {
        let mut row = Vec::with_capacity(column_names.len());
        for column_name in &column_names {
            let series = frame.get_column(column_name)?;
            let value = series.get(i).ok_or(Error::IndexOutOfBounds {
                index: i,
                size: series.len(),
            })?;
            row.push(value.clone());
        }
        wtr.write_record(&row).map_err(Error::Csv)?;
    }

    wtr.flush().map_err(Error::Io)?;
    Ok(())
}

/// Write an allocation table to a CSV file
///
/// Columns: `stratum,Nh,nh`, one row per stratum.
pub fn write_allocation<P: AsRef<Path>>(
    allocation: &[StratumAllocation],
    path: P,
) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(Error::Io)?;
    write_allocation_to_writer(allocation, file)
}

/// Write an allocation table as CSV to any writer
pub fn write_allocation_to_writer<W: IoWrite>(
    allocation: &[StratumAllocation],
    writer: W,
) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for row in allocation {
        wtr.serialize(row).map_err(Error::Csv)?;
    }
    wtr.flush().map_err(Error::Io)?;
    Ok(())
}

/// Write descriptive statistics to a CSV file, one row per statistic
pub fn write_describe<P: AsRef<Path>>(stats: &DescriptiveStats, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(Error::Io)?;
    write_describe_to_writer(stats, file)
}

/// Write descriptive statistics as CSV to any writer
pub fn write_describe_to_writer<W: IoWrite>(
    stats: &DescriptiveStats,
    writer: W,
) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["statistic", "value"]).map_err(Error::Csv)?;

    let rows: [(&str, f64); 8] = [
        ("count", stats.count as f64),
        ("mean", stats.mean),
        ("std", stats.std),
        ("min", stats.min),
        ("25%", stats.q1),
        ("50%", stats.median),
        ("75%", stats.q3),
        ("max", stats.max),
    ];
    for (name, value) in rows {
        let rendered = value.to_string();
        wtr.write_record([name, rendered.as_str()]).map_err(Error::Csv)?;
    }

    wtr.flush().map_err(Error::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_with_header() {
        let data = "region,pop_block\nNorth,120\nSouth,45\n";
        let frame = read_csv_from_reader(data.as_bytes(), true).unwrap();

        assert_eq!(frame.column_names(), vec!["region", "pop_block"]);
        assert_eq!(frame.row_count(), 2);
        assert_eq!(
            frame.get_column("region").unwrap().values(),
            &["North".to_string(), "South".to_string()]
        );
    }

    #[test]
    fn test_read_csv_without_header() {
        let data = "North,120\nSouth,45\n";
        let frame = read_csv_from_reader(data.as_bytes(), false).unwrap();

        assert_eq!(frame.column_names(), vec!["column_0", "column_1"]);
        assert_eq!(frame.row_count(), 2);
    }

    #[test]
    fn test_read_csv_rejects_duplicate_headers() {
        // Two columns named "region" would silently collapse into one
        let data = "region,region\nNorth,South\n";
        assert!(matches!(
            read_csv_from_reader(data.as_bytes(), true),
            Err(Error::DuplicateColumnName(name)) if name == "region"
        ));
    }

    #[test]
    fn test_read_csv_pads_short_rows() {
        let data = "a,b,c\n1,2,3\n4,5\n";
        let frame = read_csv_from_reader(data.as_bytes(), true).unwrap();

        assert_eq!(frame.row_count(), 2);
        assert_eq!(
            frame.get_column("c").unwrap().values(),
            &["3".to_string(), "".to_string()]
        );
    }

    #[test]
    fn test_read_csv_empty_input() {
        let frame = read_csv_from_reader("".as_bytes(), false).unwrap();
        assert_eq!(frame.row_count(), 0);
        assert_eq!(frame.column_count(), 0);
    }

    #[test]
    fn test_write_csv_round_trip() {
        let data = "region,area\nNorth,Urban\nSouth,Rural\n";
        let frame = read_csv_from_reader(data.as_bytes(), true).unwrap();

        let mut buffer = Vec::new();
        write_csv_to_writer(&frame, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), data);
    }

    #[test]
    fn test_write_allocation() {
        let allocation = vec![
            StratumAllocation {
                stratum: "A".to_string(),
                population: 600,
                sample_size: 60,
            },
            StratumAllocation {
                stratum: "B".to_string(),
                population: 400,
                sample_size: 40,
            },
        ];

        let mut buffer = Vec::new();
        write_allocation_to_writer(&allocation, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "stratum,Nh,nh\nA,600,60\nB,400,40\n"
        );
    }

    #[test]
    fn test_write_describe() {
        let stats = crate::stats::describe(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        let mut buffer = Vec::new();
        write_describe_to_writer(&stats, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("statistic,value\ncount,5\nmean,3\n"));
        assert!(text.contains("50%,3\n"));
        assert!(text.ends_with("max,5\n"));
    }
}
