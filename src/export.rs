//! Flat-file export of submitted records.
//!
//! Each submission writes one pretty-printed JSON file per entity into the
//! data directory: `vehicle_{stamp}.json`, `crossing_{stamp}.json` and, when
//! the record carries cargo, `cargo_manifest_{stamp}.json`.

use anyhow::{Context, Result};
use chrono::Local;
use crossing_core::{CrossingRecord, Entity};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Filename timestamp format, local time to the second.
const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the record's entity files, stamped with the current local time.
    ///
    /// Names of written files are pushed onto `files_created` as they land,
    /// so a failure part-way leaves the earlier names in place.
    pub fn export(&self, record: &CrossingRecord, files_created: &mut Vec<String>) -> Result<()> {
        let stamp = Local::now().format(FILE_STAMP_FORMAT).to_string();
        self.export_with_stamp(record, &stamp, files_created)
    }

    pub fn export_with_stamp(
        &self,
        record: &CrossingRecord,
        stamp: &str,
        files_created: &mut Vec<String>,
    ) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory {}", self.dir.display()))?;

        for entity in Entity::from_record(record) {
            let filename = format!("{}_{stamp}.json", entity.collection());
            match &entity {
                Entity::Vehicle(v) => self.write_json(&filename, v)?,
                Entity::Crossing(c) => self.write_json(&filename, c)?,
                Entity::CargoManifest(m) => self.write_json(&filename, m)?,
            }
            files_created.push(filename);
        }
        Ok(())
    }

    fn write_json<T: Serialize>(&self, filename: &str, value: &T) -> Result<()> {
        let path = self.dir.join(filename);
        std::fs::write(&path, serde_json::to_string_pretty(value)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Saved {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossing_core::CrossingPurpose;
    use crossing_generator::RecordGenerator;

    #[test]
    fn test_export_personal_record() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FileExporter::new(dir.path().join("data"));
        let record =
            RecordGenerator::new(42).generate_crossing_record_with_purpose(CrossingPurpose::Personal);

        let mut files = Vec::new();
        exporter
            .export_with_stamp(&record, "20251030_131000", &mut files)
            .unwrap();

        assert_eq!(
            files,
            vec!["vehicle_20251030_131000.json", "crossing_20251030_131000.json"]
        );
        let content = std::fs::read_to_string(exporter.dir().join(&files[0])).unwrap();
        assert!(content.contains("\n  \"license_plate_number\""));
        let vehicle: crossing_core::VehicleDetails = serde_json::from_str(&content).unwrap();
        assert_eq!(vehicle, record.vehicle);
    }

    #[test]
    fn test_export_shipping_record_includes_cargo() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FileExporter::new(dir.path());
        let record =
            RecordGenerator::new(42).generate_crossing_record_with_purpose(CrossingPurpose::Shipping);

        let mut files = Vec::new();
        exporter
            .export_with_stamp(&record, "20251030_131000", &mut files)
            .unwrap();

        assert_eq!(files.len(), 3);
        assert_eq!(files[2], "cargo_manifest_20251030_131000.json");
        assert!(dir.path().join(&files[2]).exists());
    }

    #[test]
    fn test_export_failure_keeps_written_names() {
        let dir = tempfile::tempdir().unwrap();
        // A plain file where the data directory should be.
        let blocked = dir.path().join("data");
        std::fs::write(&blocked, "not a directory").unwrap();
        let exporter = FileExporter::new(&blocked);
        let record = RecordGenerator::new(1).generate_crossing_record();

        let mut files = Vec::new();
        assert!(exporter.export(&record, &mut files).is_err());
        assert!(files.is_empty());
    }
}
