/// Pixel layout of an [`Image`](crate::Image). Every channel is an 8-bit unsigned integer.
#[derive(Debug, Hash, PartialEq, Eq, Copy, Clone, Default)]
pub enum ColorFormat {
    L8,
    LA8,
    RGB8,
    #[default]
    RGBA8,
}

impl ColorFormat {
    pub fn channel_count(&self) -> u8 {
        match self {
            ColorFormat::L8 => 1,
            ColorFormat::LA8 => 2,
            ColorFormat::RGB8 => 3,
            ColorFormat::RGBA8 => 4,
        }
    }

    /// Bytes per pixel. Equal to the channel count since channels are one byte each.
    pub fn byte_count(&self) -> u8 {
        self.channel_count()
    }

    pub fn has_alpha(&self) -> bool {
        ALPHA_FORMATS.contains(self)
    }

    /// The same layout without its alpha channel.
    pub fn without_alpha(&self) -> ColorFormat {
        match self {
            ColorFormat::L8 | ColorFormat::LA8 => ColorFormat::L8,
            ColorFormat::RGB8 | ColorFormat::RGBA8 => ColorFormat::RGB8,
        }
    }

    /// Pixel value used for border bands: zero color channels, opaque alpha.
    pub fn black(&self) -> &'static [u8] {
        match self {
            ColorFormat::L8 => &[0],
            ColorFormat::LA8 => &[0, u8::MAX],
            ColorFormat::RGB8 => &[0, 0, 0],
            ColorFormat::RGBA8 => &[0, 0, 0, u8::MAX],
        }
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorFormat::L8 => write!(f, "L u8"),
            ColorFormat::LA8 => write!(f, "LA u8"),
            ColorFormat::RGB8 => write!(f, "RGB u8"),
            ColorFormat::RGBA8 => write!(f, "RGBA u8"),
        }
    }
}

/// All supported color formats.
pub const ALL_FORMATS: &[ColorFormat] = &[
    ColorFormat::L8,
    ColorFormat::LA8,
    ColorFormat::RGB8,
    ColorFormat::RGBA8,
];

/// Formats with alpha channel (LA and RGBA).
pub const ALPHA_FORMATS: &[ColorFormat] = &[ColorFormat::LA8, ColorFormat::RGBA8];
