use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use passepartout::batch::{BatchConfig, DEFAULT_OUTPUT_DIR};
use passepartout::{AddBorder, UniformBorder};

#[derive(Parser, Debug)]
#[command(name = "passepartout")]
#[command(
    version,
    about = "Adds a black border to images that do not already have a uniform one",
    long_about = None
)]
pub struct Cli {
    /// Directory with images (png, jpg, jpeg, bmp, gif). Defaults to the current directory
    #[arg(value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Overwrite bordered images in place instead of writing them into the output directory.
    /// A failed write can leave the original file truncated. Images with 16-bit channels are
    /// written back at 8 bits per channel
    #[arg(long)]
    pub overwrite: bool,

    /// Ask for the directory and the overwrite choice on stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Sampling depth as a fraction of the shorter image side
    #[arg(long, value_name = "FLOAT", default_value_t = 0.001)]
    pub sample_percentage: f64,

    /// Total number of border samples (a quarter per edge)
    #[arg(long, value_name = "N", default_value_t = 100)]
    pub samples: usize,

    /// Largest per-channel interquartile range still considered uniform (exclusive)
    #[arg(long, value_name = "FLOAT", default_value_t = 5.0)]
    pub threshold: f64,

    /// Border width as a fraction of the shorter image side
    #[arg(long, value_name = "FLOAT", default_value_t = 0.002)]
    pub border_percentage: f64,

    /// Name of the output subdirectory used without --overwrite
    #[arg(long, value_name = "NAME", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir_name: String,

    /// Classify and report without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Log level or flexi_logger spec, e.g. "debug" or "passepartout=debug"
    #[arg(long, value_name = "SPEC", default_value = "info")]
    pub log_level: String,

    /// Write rotated log files into this directory instead of stderr
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn to_config(&self) -> BatchConfig {
        let detector = UniformBorder::new()
            .border_percentage(self.sample_percentage)
            .num_samples(self.samples)
            .threshold(self.threshold);

        BatchConfig::new(self.directory.clone().unwrap_or_else(|| PathBuf::from(".")))
            .overwrite(self.overwrite)
            .detector(detector)
            .border(AddBorder::new(self.border_percentage))
            .output_dir_name(self.output_dir_name.clone())
            .dry_run(self.dry_run)
    }

    /// Replaces the directory and overwrite choice with answers read from `input`.
    ///
    /// A blank directory answer means the current directory; only `yes` enables overwriting.
    pub fn prompt<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<()> {
        let directory = ask(
            input,
            output,
            "Enter the directory path (or press Enter to use the current directory): ",
        )?;
        self.directory = Some(if directory.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(directory)
        });

        let overwrite = ask(
            input,
            output,
            "Do you want to overwrite the images? (yes/no): ",
        )?;
        self.overwrite = overwrite.to_lowercase() == "yes";

        Ok(())
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim().to_string())
}
