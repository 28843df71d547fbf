
use crate::common::{ColorFormat, Result};
use crate::image::Image;
use crate::ops::{border_size, validate_non_negative};
use crate::statistics::{interquartile_range, linspace_indices};

/// Pixel values collected near the four image edges.
///
/// Pixels are stored in sampling order: top and bottom interleaved per x position,
/// then left and right interleaved per y position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderSamples {
    color_format: ColorFormat,
    values: Vec<u8>,
}

impl BorderSamples {
    fn with_capacity(color_format: ColorFormat, pixels: usize) -> Self {
        Self {
            color_format,
            values: Vec::with_capacity(pixels * color_format.byte_count() as usize),
        }
    }

    fn push(&mut self, pixel: &[u8]) {
        self.values.extend_from_slice(pixel);
    }

    pub fn color_format(&self) -> ColorFormat {
        self.color_format
    }

    /// Number of sampled pixels.
    pub fn len(&self) -> usize {
        self.values.len() / self.color_format.byte_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.values
            .chunks_exact(self.color_format.byte_count() as usize)
    }

    /// Values of one channel across all samples, in sampling order.
    pub fn channel_values(&self, channel: usize) -> Vec<u8> {
        self.pixels().map(|pixel| pixel[channel]).collect()
    }
}

/// Uniform border detection.
///
/// Samples pixels along the first `border_size` positions of each edge, where
/// `border_size` is `border_percentage` of the shorter image side, and calls the border
/// uniform when the interquartile range of every channel is below `threshold`.
/// Sampling positions are evenly spaced, so the verdict is deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformBorder {
    /// Sampling depth as a fraction of the shorter image side.
    pub border_percentage: f64,
    /// Total number of samples; each edge gets `num_samples / 4`.
    pub num_samples: usize,
    /// Exclusive upper bound for the per-channel interquartile range.
    pub threshold: f64,
}

impl Default for UniformBorder {
    fn default() -> Self {
        Self {
            border_percentage: 0.001,
            num_samples: 100,
            threshold: 5.0,
        }
    }
}

impl UniformBorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the sampling depth.
    pub fn border_percentage(mut self, border_percentage: f64) -> Self {
        self.border_percentage = border_percentage;
        self
    }

    /// Builder method to set the total sample count.
    pub fn num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Builder method to set the spread threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_non_negative("sampling border percentage", self.border_percentage)?;
        validate_non_negative("uniformity threshold", self.threshold)?;
        Ok(())
    }

    /// Sampling depth in pixels for `image`.
    pub fn border_size(&self, image: &Image) -> u32 {
        let (width, height) = image.dimensions();
        border_size(width, height, self.border_percentage)
    }

    /// Collects the border sample set of `image`.
    pub fn sample(&self, image: &Image) -> BorderSamples {
        let (width, height) = image.dimensions();
        let per_edge = self.num_samples / 4;
        let positions = linspace_indices(self.border_size(image).saturating_sub(1), per_edge);

        let mut samples = BorderSamples::with_capacity(image.desc().color_format, 4 * per_edge);

        for &x in &positions {
            let x = x.min(width - 1);
            samples.push(image.pixel(x, 0));
            samples.push(image.pixel(x, height - 1));
        }
        for &y in &positions {
            let y = y.min(height - 1);
            samples.push(image.pixel(0, y));
            samples.push(image.pixel(width - 1, y));
        }

        samples
    }

    /// Interquartile range of each channel over the border samples.
    /// Empty when the sample set is empty.
    pub fn channel_iqr(&self, image: &Image) -> Vec<f64> {
        let samples = self.sample(image);
        let channels = samples.color_format().channel_count() as usize;

        (0..channels)
            .filter_map(|channel| interquartile_range(&mut samples.channel_values(channel)))
            .collect()
    }

    /// Returns true if every channel's border spread is strictly below the threshold.
    ///
    /// An empty sample set (fewer than 4 samples requested) is never uniform.
    pub fn is_uniform(&self, image: &Image) -> bool {
        let iqr = self.channel_iqr(image);

        let uniform = !iqr.is_empty() && iqr.iter().all(|&spread| spread < self.threshold);

        log::debug!(
            "border of {} image: size {} px, iqr {:?}, uniform {}",
            image.desc(),
            self.border_size(image),
            iqr,
            uniform
        );

        uniform
    }
}
