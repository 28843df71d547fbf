//! Directory batch processing.
//!
//! Every candidate image in a directory is classified with [`UniformBorder`]. Images
//! without a uniform border get an [`AddBorder`] frame and are written either back in
//! place or into an output subdirectory next to the originals.

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use ::common::files_with_extensions;

use crate::prelude::*;

/// Name of the subdirectory that receives results when not overwriting.
pub const DEFAULT_OUTPUT_DIR: &str = "with_borders";

#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Directory scanned for candidate images. Not descended into.
    pub directory: PathBuf,
    /// Write bordered images back to their original paths.
    pub overwrite: bool,
    pub detector: UniformBorder,
    pub border: AddBorder,
    /// Output subdirectory name, used when `overwrite` is false.
    pub output_dir_name: String,
    /// Classify and report without writing anything.
    pub dry_run: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            overwrite: false,
            detector: UniformBorder::default(),
            border: AddBorder::default(),
            output_dir_name: DEFAULT_OUTPUT_DIR.to_string(),
            dry_run: false,
        }
    }
}

impl BatchConfig {
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn detector(mut self, detector: UniformBorder) -> Self {
        self.detector = detector;
        self
    }

    pub fn border(mut self, border: AddBorder) -> Self {
        self.border = border;
        self
    }

    pub fn output_dir_name<S: Into<String>>(mut self, name: S) -> Self {
        self.output_dir_name = name.into();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Directory that receives results in non-overwrite mode.
    pub fn output_dir(&self) -> PathBuf {
        self.directory.join(&self.output_dir_name)
    }

    pub fn validate(&self) -> Result<()> {
        self.detector.validate()?;
        self.border.validate()?;

        let is_plain_name = Path::new(&self.output_dir_name)
            .file_name()
            .is_some_and(|name| name == self.output_dir_name.as_str());
        if !is_plain_name {
            return Err(Error::InvalidParameter(format!(
                "output directory name must be a plain directory name, got {:?}",
                self.output_dir_name
            )));
        }

        Ok(())
    }
}

/// What happened to a single candidate image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Border added and the result written.
    Bordered,
    /// Already uniform, copied unchanged into the output directory.
    Copied,
    /// Already uniform, left in place.
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Candidate images found, including the ones that failed.
    pub total: usize,
    /// Images that received a border.
    pub processed: usize,
    /// Uniform images copied into the output directory.
    pub copied: usize,
    /// Images skipped because of read, encode or write errors.
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Total images considered: {}", self.total),
            format!("Total images processed: {}", self.processed),
        ];
        if !self.failed.is_empty() {
            lines.push(format!(
                "Images skipped due to errors: {}",
                self.failed.len()
            ));
        }
        lines
    }
}

/// Processes every candidate image in `config.directory`.
///
/// See [`process_directory_with`].
pub fn process_directory(config: &BatchConfig) -> Result<BatchReport> {
    process_directory_with(config, |_, _| {})
}

/// Processes every candidate image in `config.directory`, in file name order, calling
/// `on_file` after each successfully handled image.
///
/// A file that cannot be decoded, bordered or written is logged, recorded in
/// [`BatchReport::failed`] and skipped. In overwrite mode a failed write may already
/// have truncated the original file.
///
/// # Errors
/// Returns an error for invalid parameters, an unreadable directory, or when the output
/// directory cannot be created.
pub fn process_directory_with<F>(config: &BatchConfig, mut on_file: F) -> Result<BatchReport>
where
    F: FnMut(&Path, Outcome),
{
    config.validate()?;

    let candidates = files_with_extensions(&config.directory, SUPPORTED_EXTENSIONS)?;
    log::debug!(
        "{} candidate images in {}",
        candidates.len(),
        config.directory.display()
    );

    let output_dir = if config.overwrite {
        None
    } else {
        let dir = config.output_dir();
        if !config.dry_run {
            fs::create_dir_all(&dir)?;
        }
        Some(dir)
    };

    let mut report = BatchReport::default();

    for path in candidates {
        report.total += 1;

        match process_file(config, &path, output_dir.as_deref()) {
            Ok(outcome) => {
                match outcome {
                    Outcome::Bordered => report.processed += 1,
                    Outcome::Copied => report.copied += 1,
                    Outcome::Unchanged => {}
                }
                on_file(&path, outcome);
            }
            Err(err) => {
                log::warn!("Skipping {}: {}", path.display(), err);
                report.failed.push((path, err.to_string()));
            }
        }
    }

    log::info!(
        "{}: {} considered, {} bordered, {} copied, {} failed",
        config.directory.display(),
        report.total,
        report.processed,
        report.copied,
        report.failed.len()
    );

    Ok(report)
}

fn process_file(config: &BatchConfig, path: &Path, output_dir: Option<&Path>) -> Result<Outcome> {
    let image = Image::read_file(path)?;

    if config.detector.is_uniform(&image) {
        let Some(dir) = output_dir else {
            return Ok(Outcome::Unchanged);
        };

        let target = target_path(dir, path)?;
        if !config.dry_run {
            fs::copy(path, &target)?;
        }
        log::debug!("{} copied to {}", path.display(), target.display());

        return Ok(Outcome::Copied);
    }

    if config.dry_run {
        log::info!("{} needs a border", path.display());
        return Ok(Outcome::Bordered);
    }

    let target = match output_dir {
        Some(dir) => target_path(dir, path)?,
        None => path.to_path_buf(),
    };

    let bordered = config.border.apply(&image)?;
    bordered.save_file(&target)?;
    log::info!(
        "{} bordered ({} px) -> {}",
        path.display(),
        config.border.border_size(&image),
        target.display()
    );

    Ok(Outcome::Bordered)
}

fn target_path(dir: &Path, path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::InvalidParameter(format!("{} has no file name", path.display())))?;

    Ok(dir.join(file_name))
}
