//! Configuration structures for the bitmap codec and the code generator.

use crate::hackshared::is_jack_identifier;

/// Pixel value the Hack tooling treats as black.
pub const BLACK: u8 = 0;

/// Pixel value the Hack tooling treats as white.
pub const WHITE: u8 = 255;

/// Native word width of the Hack machine, in bits.
pub const HACK_WORD_BITS: usize = 16;

/// Identifiers available to the generated store function, in order.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

// -----------------------------------------------------------------------------
// Codec configuration
// -----------------------------------------------------------------------------

/// Constants the codec needs to turn samples into words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// Bits per word (1-16, 16 for Hack)
    pub word_width: usize,
    /// Sentinel classified as bit 1
    pub black: u8,
    /// Sentinel classified as bit 0
    pub white: u8,
    /// Sample appended to short rows
    pub fill: u8,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            word_width: HACK_WORD_BITS,
            black: BLACK,
            white: WHITE,
            fill: WHITE,
        }
    }
}

impl CodecConfig {
    /// Creates a Hack codec config with a different word width.
    pub fn with_word_width(word_width: usize) -> Self {
        Self {
            word_width,
            ..Self::default()
        }
    }

    /// Checks the constants are usable together.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.word_width == 0 || self.word_width > HACK_WORD_BITS {
            return Err("Word width must be 1-16 bits");
        }
        if self.black == self.white {
            return Err("Black and white sentinels must differ");
        }
        if self.fill != self.black && self.fill != self.white {
            return Err("Fill sample must be one of the sentinels");
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Naming configuration
// -----------------------------------------------------------------------------

/// Names used when generating Jack source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamingConfig {
    /// Function called once per row in flat-call output
    pub func_name: String,
    /// Class that owns the generated template functions
    pub class_name: String,
    /// Prefix for the generated fields and functions
    pub image_name: String,
    /// Single-character parameter names for the store function
    pub alphabet: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            func_name: "XXX".to_string(),
            class_name: "Main".to_string(),
            image_name: "image".to_string(),
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }
}

impl NamingConfig {
    /// Number of store-function parameters the alphabet can name.
    pub fn capacity(&self) -> usize {
        self.alphabet.chars().count()
    }

    /// Parameter identifiers for a row of `count` words, if the alphabet is large enough.
    pub fn parameters(&self, count: usize) -> Option<Vec<char>> {
        if count > self.capacity() {
            return None;
        }
        Some(self.alphabet.chars().take(count).collect())
    }

    /// Checks every name against Jack's identifier rules.
    pub fn validate(&self) -> Result<(), String> {
        // `func_name` may be qualified once, e.g. `Screen.drawRow`
        let parts: Vec<&str> = self.func_name.split('.').collect();
        if parts.len() > 2 || !parts.iter().all(|p| is_jack_identifier(p)) {
            return Err(format!("'{}' is not a Jack subroutine name", self.func_name));
        }
        for name in [&self.class_name, &self.image_name] {
            if !is_jack_identifier(name) {
                return Err(format!("'{}' is not a Jack identifier", name));
            }
        }

        if self.alphabet.is_empty() {
            return Err("Naming alphabet is empty".to_string());
        }
        let mut seen = Vec::with_capacity(self.alphabet.len());
        for c in self.alphabet.chars() {
            if !(c.is_ascii_alphabetic() || c == '_') {
                return Err(format!("'{}' cannot start a Jack identifier", c));
            }
            if seen.contains(&c) {
                return Err(format!("'{}' appears twice in the naming alphabet", c));
            }
            seen.push(c);
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Output selection
// -----------------------------------------------------------------------------

/// Text generator used for a conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmitMode {
    /// ASCII rendering, one character per padded pixel
    Preview,
    /// One `do <func>(row, words...);` statement per row
    #[default]
    FlatCall,
    /// Static fields plus init/store/load functions
    FullTemplate,
}
