use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::common::test_utils::{BLACK_RGB, WHITE_RGB, draw_frame, gradient_rgb, solid};

/// 0.1 of the shorter side: a 40x30 image gets a 3 px border.
fn test_border() -> AddBorder {
    AddBorder::new(0.1)
}

fn framed_image() -> Image {
    let mut image = solid(40, 30, ColorFormat::RGB8, WHITE_RGB);
    draw_frame(&mut image, 2, BLACK_RGB);
    image
}

fn write_image(dir: &Path, name: &str, image: &Image) {
    image.save_file(dir.join(name)).unwrap();
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn config_defaults() {
    let config = BatchConfig::default();
    assert_eq!(config.directory, Path::new("."));
    assert!(!config.overwrite);
    assert!(!config.dry_run);
    assert_eq!(config.output_dir_name, "with_borders");
    assert_eq!(config.detector, UniformBorder::default());
    assert_eq!(config.border, AddBorder::default());
    assert_eq!(
        BatchConfig::new("photos").output_dir(),
        Path::new("photos").join("with_borders")
    );
}

#[test]
fn validate_rejects_bad_output_dir_name() {
    for name in ["", "a/b", "..", "."] {
        let config = BatchConfig::default().output_dir_name(name);
        assert!(
            matches!(config.validate(), Err(Error::InvalidParameter(_))),
            "{:?}",
            name
        );
    }
    assert!(BatchConfig::default().validate().is_ok());
}

#[test]
fn validate_rejects_bad_parameters_before_touching_files() {
    let dir = TempDir::new().unwrap();
    let config = BatchConfig::new(dir.path()).border(AddBorder::new(-1.0));

    assert!(process_directory(&config).is_err());
    assert!(!dir.path().join("with_borders").exists());
}

#[test]
fn non_image_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_image(dir.path(), "a.png", &framed_image());
    write_image(dir.path(), "b.bmp", &gradient_rgb(40, 30));
    write_image(dir.path(), "C.JPG", &gradient_rgb(40, 30));
    fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

    let config = BatchConfig::new(dir.path()).border(test_border());
    let report = process_directory(&config).unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.processed, 2);
    assert_eq!(report.copied, 1);
    assert!(report.failed.is_empty());
    assert_eq!(
        file_names(&dir.path().join("with_borders")),
        vec!["C.JPG", "a.png", "b.bmp"]
    );
}

#[test]
fn output_directory_gets_copies_and_bordered_images() {
    let dir = TempDir::new().unwrap();
    let uniform = framed_image();
    let photo = gradient_rgb(40, 30);
    write_image(dir.path(), "uniform.png", &uniform);
    write_image(dir.path(), "photo.png", &photo);

    let config = BatchConfig::new(dir.path()).border(test_border());
    let report = process_directory(&config).unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.processed, 1);
    assert_eq!(report.copied, 1);

    let out = dir.path().join("with_borders");
    assert_eq!(file_names(&out), vec!["photo.png", "uniform.png"]);

    assert_eq!(
        fs::read(out.join("uniform.png")).unwrap(),
        fs::read(dir.path().join("uniform.png")).unwrap()
    );

    let bordered = Image::read_file(out.join("photo.png")).unwrap();
    assert_eq!(bordered, test_border().apply(&photo).unwrap());
    assert_eq!(bordered.dimensions(), (46, 36));

    // originals are untouched
    assert_eq!(
        Image::read_file(dir.path().join("photo.png")).unwrap(),
        photo
    );
}

#[test]
fn default_parameters_on_large_images() {
    let dir = TempDir::new().unwrap();
    let mut uniform = solid(500, 500, ColorFormat::RGB8, WHITE_RGB);
    draw_frame(&mut uniform, 2, BLACK_RGB);
    write_image(dir.path(), "framed.png", &uniform);
    write_image(dir.path(), "photo.png", &gradient_rgb(500, 500));

    let report = process_directory(&BatchConfig::new(dir.path())).unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.processed, 1);

    let bordered = Image::read_file(dir.path().join("with_borders").join("photo.png")).unwrap();
    assert_eq!(bordered.dimensions(), (502, 502));
    assert!(UniformBorder::default().is_uniform(&bordered));
}

#[test]
fn overwrite_mode_rewrites_only_non_uniform_images() {
    let dir = TempDir::new().unwrap();
    let photo = gradient_rgb(40, 30);
    write_image(dir.path(), "uniform.png", &framed_image());
    write_image(dir.path(), "photo.png", &photo);
    let uniform_bytes = fs::read(dir.path().join("uniform.png")).unwrap();

    let config = BatchConfig::new(dir.path())
        .overwrite(true)
        .border(test_border());
    let report = process_directory(&config).unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.processed, 1);
    assert_eq!(report.copied, 0);
    assert!(!dir.path().join("with_borders").exists());

    assert_eq!(
        fs::read(dir.path().join("uniform.png")).unwrap(),
        uniform_bytes
    );
    assert_eq!(
        Image::read_file(dir.path().join("photo.png")).unwrap(),
        test_border().apply(&photo).unwrap()
    );
}

#[test]
fn overwrite_twice_is_stable() {
    let dir = TempDir::new().unwrap();
    write_image(dir.path(), "photo.png", &gradient_rgb(40, 30));

    let config = BatchConfig::new(dir.path())
        .overwrite(true)
        .border(test_border());

    assert_eq!(process_directory(&config).unwrap().processed, 1);
    let once = fs::read(dir.path().join("photo.png")).unwrap();

    assert_eq!(process_directory(&config).unwrap().processed, 0);
    assert_eq!(fs::read(dir.path().join("photo.png")).unwrap(), once);
}

#[test]
fn corrupt_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.png"), b"garbage").unwrap();
    write_image(dir.path(), "photo.png", &gradient_rgb(40, 30));

    let config = BatchConfig::new(dir.path()).border(test_border());
    let report = process_directory(&config).unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.processed, 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, dir.path().join("broken.png"));
    assert_eq!(
        file_names(&dir.path().join("with_borders")),
        vec!["photo.png"]
    );
}

#[test]
fn write_failures_are_skipped() {
    let dir = TempDir::new().unwrap();
    write_image(dir.path(), "other.png", &gradient_rgb(40, 30));
    write_image(dir.path(), "photo.png", &gradient_rgb(40, 30));
    // a directory where the bordered photo would be written
    fs::create_dir_all(dir.path().join("with_borders").join("photo.png")).unwrap();

    let config = BatchConfig::new(dir.path()).border(test_border());
    let report = process_directory(&config).unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.processed, 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, dir.path().join("photo.png"));
    assert!(dir.path().join("with_borders").join("other.png").is_file());
    assert!(dir.path().join("with_borders").join("photo.png").is_dir());
}

#[test]
fn empty_directory_reports_zero() {
    let dir = TempDir::new().unwrap();

    let report = process_directory(&BatchConfig::new(dir.path())).unwrap();

    assert_eq!(report, BatchReport::default());
    assert!(dir.path().join("with_borders").is_dir());
}

#[test]
fn missing_directory_is_fatal() {
    let config = BatchConfig::new("/nonexistent/images");
    assert!(matches!(process_directory(&config), Err(Error::Io(_))));
}

#[test]
fn output_dir_creation_failure_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_image(dir.path(), "photo.png", &gradient_rgb(40, 30));
    fs::write(dir.path().join("with_borders"), b"not a directory").unwrap();

    let config = BatchConfig::new(dir.path()).border(test_border());
    assert!(matches!(process_directory(&config), Err(Error::Io(_))));

    assert!(dir.path().join("with_borders").is_file());
    assert_eq!(
        Image::read_file(dir.path().join("photo.png")).unwrap(),
        gradient_rgb(40, 30)
    );
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_image(dir.path(), "uniform.png", &framed_image());
    write_image(dir.path(), "photo.png", &gradient_rgb(40, 30));

    let config = BatchConfig::new(dir.path())
        .border(test_border())
        .dry_run(true);
    let report = process_directory(&config).unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.processed, 1);
    assert_eq!(report.copied, 1);
    assert!(!dir.path().join("with_borders").exists());
}

#[test]
fn callback_sees_files_in_name_order() {
    let dir = TempDir::new().unwrap();
    write_image(dir.path(), "b.png", &framed_image());
    write_image(dir.path(), "a.png", &gradient_rgb(40, 30));

    let config = BatchConfig::new(dir.path())
        .overwrite(true)
        .border(test_border());
    let mut seen = Vec::new();
    process_directory_with(&config, |path, outcome| {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        seen.push((name, outcome));
    })
    .unwrap();

    assert_eq!(
        seen,
        vec![
            ("a.png".to_string(), Outcome::Bordered),
            ("b.png".to_string(), Outcome::Unchanged),
        ]
    );
}

#[test]
fn custom_output_dir_name() {
    let dir = TempDir::new().unwrap();
    write_image(dir.path(), "photo.png", &gradient_rgb(40, 30));

    let config = BatchConfig::new(dir.path())
        .border(test_border())
        .output_dir_name("framed");
    process_directory(&config).unwrap();

    assert!(dir.path().join("framed").join("photo.png").is_file());
}

#[test]
fn summary_lines() {
    let mut report = BatchReport {
        total: 3,
        processed: 2,
        copied: 1,
        failed: Vec::new(),
    };
    assert_eq!(
        report.summary_lines(),
        vec!["Total images considered: 3", "Total images processed: 2"]
    );

    report.failed.push(("x.png".into(), "bad".to_string()));
    assert_eq!(report.summary_lines()[2], "Images skipped due to errors: 1");
}
