//! tests/default_naming_tests.rs
//! Default output names resolve against the current directory.
//!
//! Kept in its own test binary: it changes the process working directory.
//! Tests here hold `CWD` for their whole body.

mod common;
use common::{TEST_DATA, TEST_KEY_FILE_BYTES};

use shcrypt::{run, FileResource, ResourceRequest};
use std::fs;
use std::path::Path;
use std::sync::Mutex;

static CWD: Mutex<()> = Mutex::new(());

#[test]
fn report_pdf_roundtrip_with_default_names() {
    let _cwd = CWD.lock().unwrap_or_else(|e| e.into_inner());
    let src_dir = tempfile::tempdir().unwrap();
    let work_dir = tempfile::tempdir().unwrap();

    let source = src_dir.path().join("report.pdf");
    let key = src_dir.path().join("key.bin");
    fs::write(&source, TEST_DATA).unwrap();
    fs::write(&key, TEST_KEY_FILE_BYTES).unwrap();

    std::env::set_current_dir(work_dir.path()).unwrap();

    // encrypt: <name>.shc in the working directory, not next to the source
    let encrypted = run(&ResourceRequest::encrypt(&source, &key)).unwrap();
    assert_eq!(encrypted.path.file_name().unwrap(), "report.pdf.shc");
    assert!(work_dir.path().join("report.pdf.shc").exists());
    assert!(!src_dir.path().join("report.pdf.shc").exists());

    // decrypt: trailing .shc stripped
    let request = ResourceRequest::decrypt("report.pdf.shc", &key).with_output("");
    let decrypted = run(&request).unwrap();
    assert_eq!(decrypted.path.file_name().unwrap(), "report.pdf");
    assert_eq!(fs::read(work_dir.path().join("report.pdf")).unwrap(), TEST_DATA);
}

#[test]
fn staged_persist_with_empty_path_uses_default_name() {
    let _cwd = CWD.lock().unwrap_or_else(|e| e.into_inner());
    let src_dir = tempfile::tempdir().unwrap();
    let work_dir = tempfile::tempdir().unwrap();

    let source = src_dir.path().join("report.pdf");
    let key = src_dir.path().join("key.bin");
    fs::write(&source, TEST_DATA).unwrap();
    fs::write(&key, TEST_KEY_FILE_BYTES).unwrap();

    std::env::set_current_dir(work_dir.path()).unwrap();

    let written = FileResource::load(&source, &key)
        .unwrap()
        .encrypt()
        .unwrap()
        .persist(Some(Path::new("")))
        .unwrap();
    assert_eq!(written.path.file_name().unwrap(), "report.pdf.shc");
    assert!(work_dir.path().join("report.pdf.shc").exists());

    let written = FileResource::load(Path::new("report.pdf.shc"), &key)
        .unwrap()
        .decrypt()
        .unwrap()
        .persist(Some(Path::new("")))
        .unwrap();
    assert_eq!(written.path.file_name().unwrap(), "report.pdf");
    assert_eq!(fs::read(work_dir.path().join("report.pdf")).unwrap(), TEST_DATA);
}
