//! Hack bitmap converter in Rust
//!
//! This crate turns 1-bit images into Jack source for the Hack platform.
//! Pixels are packed sixteen to a word, least-significant bit on the left,
//! and written as signed Jack literals. The output is an ASCII preview, a
//! list of per-row calls, or a class fragment that stores the image in a
//! static array.

#![warn(missing_docs)]

// Re-export commonly used types
pub use ndarray::Array2;

use thiserror::Error;

/// Errors that can occur while converting an image
#[derive(Error, Debug)]
pub enum HackError {
    /// A sample was neither the black nor the white sentinel
    #[error("Not a binary image: sample {value} at row {row}, column {column}")]
    InvalidSample {
        /// The offending sample
        value: u8,
        /// Zero-based row
        row: usize,
        /// Zero-based column in the unpadded row
        column: usize,
    },

    /// The sample source ran out before the image was complete
    #[error("Sample stream truncated in row {row}: expected {expected} samples, got {received}")]
    TruncatedStream {
        /// Row that could not be completed
        row: usize,
        /// Samples the row needed
        expected: usize,
        /// Samples actually read for that row
        received: usize,
    },

    /// The naming alphabet cannot name every word of a row
    #[error("Rows need {required} parameter identifiers but the naming alphabet has {available}")]
    IdentifierCapacity {
        /// Words per padded row
        required: usize,
        /// Identifiers in the alphabet
        available: usize,
    },

    /// The image does not fit in a Jack array
    #[error("Image needs {words} words, more than a Jack array can address")]
    ImageTooLarge {
        /// Words the bitmap array would need
        words: usize,
    },

    /// Some row index cannot be written as a Jack integer literal
    #[error("Image has {rows} rows, but row indices above 32767 are not valid Jack literals")]
    TooManyRows {
        /// Image height
        rows: usize,
    },

    /// Configuration rejected before conversion
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was rejected
        message: String,
    },

    /// Array shape error during conversion
    #[error("Array shape error")]
    ArrayShapeError {
        /// Underlying ndarray error
        #[from]
        source: ndarray::ShapeError,
    },

    /// Writing into the output buffer failed
    #[error("Formatting output failed")]
    Format(#[from] std::fmt::Error),
}

// Module declarations
pub mod hackemit;
pub mod hackimage;
pub mod hackpad;
pub mod hackpixel;
pub mod hackshared;
pub mod hackstructs;
pub mod hackword;

// Re-export the main conversion types and config
pub use hackimage::Image;
pub use hackstructs::{CodecConfig, EmitMode, NamingConfig};
pub use hackword::Word;

use log::info;

/// Context for a conversion: codec constants, names and output mode
#[derive(Debug, Clone, Default)]
pub struct HackContext {
    codec: CodecConfig,
    naming: NamingConfig,
    mode: EmitMode,
}

impl HackContext {
    /// Create a new context with default values (flat calls to `XXX`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that renders an ASCII preview
    pub fn preview() -> Self {
        Self::with_mode(EmitMode::Preview)
    }

    /// Create a context that emits `do <func_name>(...)` calls
    pub fn flat_call(func_name: &str) -> Self {
        Self {
            naming: NamingConfig {
                func_name: func_name.to_string(),
                ..NamingConfig::default()
            },
            ..Self::default()
        }
    }

    /// Create a context that emits a full class fragment
    pub fn template(class_name: &str, image_name: &str) -> Self {
        Self {
            naming: NamingConfig {
                class_name: class_name.to_string(),
                image_name: image_name.to_string(),
                ..NamingConfig::default()
            },
            mode: EmitMode::FullTemplate,
            ..Self::default()
        }
    }

    /// Create a context with the default configs and the given mode
    pub fn with_mode(mode: EmitMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Create a context with custom configs
    pub fn with_config(codec: CodecConfig, naming: NamingConfig, mode: EmitMode) -> Self {
        Self {
            codec,
            naming,
            mode,
        }
    }

    /// Codec constants
    pub fn codec(&self) -> &CodecConfig {
        &self.codec
    }

    /// Names used in the generated code
    pub fn naming(&self) -> &NamingConfig {
        &self.naming
    }

    /// Selected generator
    pub fn mode(&self) -> EmitMode {
        self.mode
    }

    /// Checks both configs before any sample is read
    pub fn validate(&self) -> Result<(), HackError> {
        self.codec
            .validate()
            .map_err(|message| HackError::InvalidConfig {
                message: message.to_string(),
            })?;
        self.naming
            .validate()
            .map_err(|message| HackError::InvalidConfig { message })
    }
}

/// Converts an image with the given context
///
/// The samples are pulled one row at a time. The returned text is only
/// produced if every sample of the image is valid.
pub fn convert<I>(image: Image<I>, ctx: &HackContext) -> Result<String, HackError>
where
    I: Iterator<Item = u8>,
{
    ctx.validate()?;
    if image.width() == 0 || image.height() == 0 {
        return Err(HackError::InvalidConfig {
            message: format!("Image must not be empty, got {}x{}", image.width(), image.height()),
        });
    }

    let layout = image.layout(ctx.codec.word_width);
    info!(
        "Converting {}x{} image ({} words per row, {} fill pixels) in {:?} mode",
        layout.width,
        layout.height,
        layout.words_per_row,
        layout.fill_per_row(),
        ctx.mode
    );

    hackemit::emit(image, ctx.mode, &ctx.codec, &ctx.naming)
}

/// Converts a row-major sample buffer
///
/// # Arguments
/// * `input` - Samples, `width * height` of them (0 = black, 255 = white)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `ctx` - Conversion context
pub fn convert_single_image(
    input: &[u8],
    width: u32,
    height: u32,
    ctx: &HackContext,
) -> Result<String, HackError> {
    let width = hackshared::u32_to_usize(width);
    let height = hackshared::u32_to_usize(height);
    let expected_len = width * height;
    if input.len() < expected_len && width > 0 {
        // Report the first row that cannot be completed
        let row = input.len() / width;
        return Err(HackError::TruncatedStream {
            row,
            expected: width,
            received: input.len() - row * width,
        });
    }

    convert(Image::from_slice(width, height, input), ctx)
}

/// Converts a flat buffer after shaping it into a `(height, width)` array
pub fn convert_buffer(
    input: Vec<u8>,
    width: u32,
    height: u32,
    ctx: &HackContext,
) -> Result<String, HackError> {
    let array = Array2::from_shape_vec(
        (
            hackshared::u32_to_usize(height),
            hackshared::u32_to_usize(width),
        ),
        input,
    )?;
    convert_array(&array, ctx)
}

/// Converts a `(height, width)` array of samples
pub fn convert_array(array: &Array2<u8>, ctx: &HackContext) -> Result<String, HackError> {
    convert(Image::from_array(array), ctx)
}

/// Get the version string for the crate
pub fn get_version() -> String {
    let platform = option_env!("HACK_PLATFORM_VERSION").unwrap_or("unknown");
    format!(
        "hackbitmap-rs {}, Hack platform {}",
        env!("CARGO_PKG_VERSION"),
        platform
    )
}

/// Get the build information string
pub fn get_build_info() -> String {
    let build_ts = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown");
    let build_type = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    format!("{} (built with {})", build_ts, build_type)
}
