use std::path::Path;

use crate::error::Result;
use crate::models::{ChannelAnalysis, VideoRecord};

/// Column superset: record fields followed by analysis fields. Record rows
/// leave the analysis columns empty; the trailing summary row does the
/// reverse.
pub const COLUMNS: [&str; 15] = [
    "title",
    "video_id",
    "url",
    "views",
    "upload_text",
    "upload_date",
    "duration_secs",
    "likes",
    "tags",
    "location",
    "subscriber_count",
    "average_views",
    "average_likes",
    "average_duration",
    "average_subscriber_count",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Serialize the records plus one trailing summary row to a CSV file.
///
/// Undefined averages render as empty cells, never as zero.
pub fn write_csv(
    path: &Path,
    records: &[VideoRecord],
    analysis: &ChannelAnalysis,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;

    for record in records {
        writer.write_record(&[
            record.title.clone(),
            record.video_id.clone(),
            record.url.clone(),
            record.views.to_string(),
            record.upload_text.clone(),
            record.upload_date.format(DATE_FORMAT).to_string(),
            record.duration_secs.to_string(),
            record.likes.to_string(),
            record.tags.clone(),
            record.location.clone(),
            record.subscriber_count.to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ])?;
    }

    let average = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
    writer.write_record(&[
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        average(analysis.average_views),
        average(analysis.average_likes),
        average(analysis.average_duration),
        average(analysis.average_subscriber_count),
    ])?;

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VideoRecord;
    use chrono::{TimeZone, Utc};

    fn sample_records() -> Vec<VideoRecord> {
        vec![
            VideoRecord {
                title: "A video, with a comma".to_string(),
                video_id: "abc123".to_string(),
                url: "https://www.youtube.com/watch?v=abc123".to_string(),
                views: 1234567,
                upload_text: "3 days ago".to_string(),
                upload_date: Utc.with_ymd_and_hms(2024, 5, 14, 9, 30, 0).unwrap(),
                duration_secs: 933,
                likes: 4321,
                tags: "rust, parsing".to_string(),
                location: "Oslo, Norway".to_string(),
                subscriber_count: 12000,
            },
            VideoRecord {
                title: "Second".to_string(),
                video_id: "def456".to_string(),
                url: "https://www.youtube.com/watch?v=def456".to_string(),
                views: 10,
                upload_text: "Unknown".to_string(),
                upload_date: Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap(),
                duration_secs: 0,
                likes: 0,
                tags: String::new(),
                location: String::new(),
                subscriber_count: 0,
            },
        ]
    }

    #[test]
    fn test_round_trip_reproduces_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let records = sample_records();
        let analysis = crate::analysis::analyze(&records);
        write_csv(&path, &records, &analysis).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            COLUMNS.to_vec()
        );

        let rows: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), records.len() + 1);

        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(&row[0], record.title);
            assert_eq!(&row[1], record.video_id);
            assert_eq!(&row[2], record.url);
            assert_eq!(row[3].parse::<u64>().unwrap(), record.views);
            assert_eq!(&row[4], record.upload_text);
            // Day-level granularity for timestamps.
            assert_eq!(&row[5], record.upload_date.format(DATE_FORMAT).to_string());
            assert_eq!(row[6].parse::<u64>().unwrap(), record.duration_secs);
            assert_eq!(row[7].parse::<u64>().unwrap(), record.likes);
            assert_eq!(&row[8], record.tags);
            assert_eq!(&row[9], record.location);
            assert_eq!(row[10].parse::<u64>().unwrap(), record.subscriber_count);
            assert!(row.iter().skip(11).all(|cell| cell.is_empty()));
        }

        let summary = rows.last().unwrap();
        assert!(summary.iter().take(11).all(|cell| cell.is_empty()));
        assert_eq!(
            summary[11].parse::<f64>().unwrap(),
            analysis.average_views.unwrap()
        );
        assert_eq!(
            summary[12].parse::<f64>().unwrap(),
            analysis.average_likes.unwrap()
        );
        assert_eq!(
            summary[13].parse::<f64>().unwrap(),
            analysis.average_duration.unwrap()
        );
        assert_eq!(
            summary[14].parse::<f64>().unwrap(),
            analysis.average_subscriber_count.unwrap()
        );
    }

    #[test]
    fn test_empty_run_renders_undefined_averages_as_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&path, &[], &ChannelAnalysis::default()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 1);
        assert!(rows[0].iter().all(|cell| cell.is_empty()));
    }
}
