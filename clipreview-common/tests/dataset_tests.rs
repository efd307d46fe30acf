//! Unit tests for CSV dataset loading and validation

use clipreview_common::dataset::ClipTable;
use clipreview_common::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn metadata_columns() -> Vec<String> {
    vec![
        "gt_labels".to_string(),
        "split".to_string(),
        "study_type".to_string(),
    ]
}

fn write_csv(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("clips.csv");
    fs::write(&path, contents).expect("Should write fixture CSV");
    path
}

#[test]
fn load_basic_table() {
    let dir = TempDir::new().unwrap();
    let csv_path = write_csv(
        &dir,
        "avipath,gt_labels,split,study_type\n\
         data/echo/a0.avi,normal,train,apical\n\
         data/echo/a1.avi,abnormal,val,parasternal\n",
    );

    let table = ClipTable::load(&csv_path, "avipath", &metadata_columns()).unwrap();
    assert_eq!(table.len(), 2);

    let clip = &table.clips()[0];
    assert_eq!(clip.video_path, "data/echo/a0.avi");
    assert_eq!(clip.filename, "a0.avi");
    assert_eq!(
        clip.metadata_line(),
        "gt_labels: normal | split: train | study_type: apical"
    );
}

#[test]
fn load_preserves_row_order() {
    let dir = TempDir::new().unwrap();
    let csv_path = write_csv(
        &dir,
        "avipath,gt_labels,split,study_type\n\
         z.avi,a,train,x\n\
         m.avi,b,train,x\n\
         a.avi,c,train,x\n",
    );

    let table = ClipTable::load(&csv_path, "avipath", &metadata_columns()).unwrap();
    let names: Vec<&str> = table.clips().iter().map(|c| c.filename.as_str()).collect();
    assert_eq!(names, vec!["z.avi", "m.avi", "a.avi"]);
}

#[test]
fn rows_without_path_are_dropped() {
    let dir = TempDir::new().unwrap();
    let csv_path = write_csv(
        &dir,
        "avipath,gt_labels,split,study_type\n\
         a0.avi,normal,train,apical\n\
         ,abnormal,val,apical\n\
         a2.avi,normal,test,apical\n",
    );

    let table = ClipTable::load(&csv_path, "avipath", &metadata_columns()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.clips()[1].filename, "a2.avi");
}

#[test]
fn missing_columns_are_reported() {
    let dir = TempDir::new().unwrap();
    let csv_path = write_csv(&dir, "avipath,gt_labels\na0.avi,normal\n");

    let err = ClipTable::load(&csv_path, "avipath", &metadata_columns()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("missing required columns"));
    assert!(message.contains("split"));
    assert!(message.contains("study_type"));
    assert!(!message.contains("gt_labels"));
}

#[test]
fn missing_path_column_is_reported() {
    let dir = TempDir::new().unwrap();
    let csv_path = write_csv(
        &dir,
        "path,gt_labels,split,study_type\na0.avi,normal,train,apical\n",
    );

    let err = ClipTable::load(&csv_path, "avipath", &metadata_columns()).unwrap_err();
    assert!(err.to_string().contains("avipath"));
}

#[test]
fn missing_file_is_not_found() {
    let err = ClipTable::load(
        &PathBuf::from("/nonexistent/clips.csv"),
        "avipath",
        &metadata_columns(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn filename_is_final_path_component() {
    let dir = TempDir::new().unwrap();
    let csv_path = write_csv(
        &dir,
        "avipath,gt_labels,split,study_type\n\
         /absolute/path/to/clip.avi,normal,train,apical\n\
         bare.avi,normal,train,apical\n",
    );

    let table = ClipTable::load(&csv_path, "avipath", &metadata_columns()).unwrap();
    assert_eq!(table.clips()[0].filename, "clip.avi");
    assert_eq!(table.clips()[1].filename, "bare.avi");
}

#[test]
fn video_file_check_samples_leading_rows() {
    let dir = TempDir::new().unwrap();
    let base = TempDir::new().unwrap();
    let csv_path = write_csv(
        &dir,
        "avipath,gt_labels,split,study_type\n\
         present.avi,normal,train,apical\n\
         absent.avi,normal,train,apical\n",
    );
    fs::write(base.path().join("present.avi"), b"fake video").unwrap();

    let table = ClipTable::load(&csv_path, "avipath", &metadata_columns()).unwrap();

    // Only the first row is sampled, so the missing second file passes
    table.check_video_files(base.path(), 1).unwrap();

    // Sampling both rows catches the missing file
    let err = table.check_video_files(base.path(), 10).unwrap_err();
    assert!(err.to_string().contains("absent.avi"));
}
