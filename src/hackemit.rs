//! Text generators for converted images.
//!
//! Each [`EmitMode`] pulls padded rows from a [`RowStream`] one at a time and
//! appends its text to an in-memory buffer. The buffer is only handed back
//! once every row has been converted, so a failing image produces no output.

use log::{debug, warn};
use std::fmt::Write;

use crate::hackimage::{Image, RowStream};
use crate::hackpixel::classify;
use crate::hackstructs::{CodecConfig, EmitMode, NamingConfig};
use crate::hackword::encode_row;
use crate::HackError;

/// Largest value a Jack integer literal can hold.
const MAX_JACK_LITERAL: usize = i16::MAX as usize;

/// Member indentation inside a Jack class body.
const MEMBER: &str = "    ";
/// Statement indentation inside a Jack subroutine body.
const STATEMENT: &str = "        ";

/// Converts `image` with the generator selected by `mode`.
pub fn emit<I>(
    image: Image<I>,
    mode: EmitMode,
    codec: &CodecConfig,
    naming: &NamingConfig,
) -> Result<String, HackError>
where
    I: Iterator<Item = u8>,
{
    let mut rows = image.rows(codec);
    let text = match mode {
        EmitMode::Preview => render_preview(&mut rows, codec)?,
        EmitMode::FlatCall => render_flat_calls(&mut rows, codec, &naming.func_name)?,
        EmitMode::FullTemplate => render_template(&mut rows, codec, naming)?,
    };

    if rows.has_trailing_samples() {
        let layout = rows.layout();
        warn!(
            "Ignoring samples beyond the {}x{} image",
            layout.width, layout.height
        );
    }
    Ok(text)
}

/// One line of `@`/`.` per row, padded pixels included.
pub fn render_preview<I>(rows: &mut RowStream<'_, I>, codec: &CodecConfig) -> Result<String, HackError>
where
    I: Iterator<Item = u8>,
{
    let layout = rows.layout();
    let mut out = String::with_capacity((layout.padded_width + 1) * layout.height);
    for row in rows {
        let row = row?;
        for (column, &value) in row.samples.iter().enumerate() {
            out.push(classify(value, row.index, column, codec)?.glyph());
        }
        out.push('\n');
    }
    Ok(out)
}

/// One `do <func_name>(<row>, <words>...);` statement per row.
///
/// The row index is a literal, so images taller than 32768 rows are refused
/// before any sample is read.
pub fn render_flat_calls<I>(
    rows: &mut RowStream<'_, I>,
    codec: &CodecConfig,
    func_name: &str,
) -> Result<String, HackError>
where
    I: Iterator<Item = u8>,
{
    let layout = rows.layout();
    if layout.height > MAX_JACK_LITERAL + 1 {
        return Err(HackError::TooManyRows {
            rows: layout.height,
        });
    }

    let mut out = String::new();
    for row in rows {
        let row = row?;
        let words = encode_row(row.index, &row.samples, codec)?;
        writeln!(
            out,
            "do {}({}, {});",
            func_name,
            words.index,
            words.joined_literals()
        )?;
    }
    Ok(out)
}

/// Static fields plus `Init`, `Store` and `Load` functions for one image.
pub fn render_template<I>(
    rows: &mut RowStream<'_, I>,
    codec: &CodecConfig,
    naming: &NamingConfig,
) -> Result<String, HackError>
where
    I: Iterator<Item = u8>,
{
    let layout = rows.layout();
    let params = naming
        .parameters(layout.words_per_row)
        .ok_or(HackError::IdentifierCapacity {
            required: layout.words_per_row,
            available: naming.capacity(),
        })?;
    if layout.total_words() > MAX_JACK_LITERAL {
        return Err(HackError::ImageTooLarge {
            words: layout.total_words(),
        });
    }

    let class = &naming.class_name;
    let image = &naming.image_name;
    let bitmap = format!("{}Bitmap", image);
    let size = format!("{}Size", image);
    let store = format!("{}Store", image);
    let load = format!("{}Load", image);

    // Rows are pulled first so a bad sample aborts before any text is assembled.
    let mut calls = String::new();
    for row in rows {
        let row = row?;
        let words = encode_row(row.index, &row.samples, codec)?;
        writeln!(
            calls,
            "{}do {}.{}({}, {});",
            STATEMENT,
            class,
            store,
            words.index,
            words.joined_literals()
        )?;
    }
    debug!(
        "Template for {}.{}: {} rows of {} words",
        class, image, layout.height, layout.words_per_row
    );

    let mut out = String::new();
    writeln!(out, "{}static Array {};", MEMBER, bitmap)?;
    writeln!(out, "{}static Array {};", MEMBER, size)?;
    writeln!(out)?;

    writeln!(out, "{}function void {}Init() {{", MEMBER, image)?;
    writeln!(out, "{}let {} = Array.new(2);", STATEMENT, size)?;
    writeln!(out, "{}let {}[0] = {};", STATEMENT, size, layout.height)?;
    writeln!(out, "{}let {}[1] = {};", STATEMENT, size, layout.words_per_row)?;
    writeln!(out, "{}let {} = Array.new({});", STATEMENT, bitmap, layout.total_words())?;
    writeln!(out, "{}do {}.{}();", STATEMENT, class, load)?;
    writeln!(out, "{}return;", STATEMENT)?;
    writeln!(out, "{}}}", MEMBER)?;
    writeln!(out)?;

    let param_list = params
        .iter()
        .map(|p| format!("int {}", p))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "{}function void {}(int row, {}) {{", MEMBER, store, param_list)?;
    writeln!(out, "{}var int base;", STATEMENT)?;
    writeln!(out, "{}let base = row * {};", STATEMENT, layout.words_per_row)?;
    for (offset, p) in params.iter().enumerate() {
        if offset == 0 {
            writeln!(out, "{}let {}[base] = {};", STATEMENT, bitmap, p)?;
        } else {
            writeln!(out, "{}let {}[base + {}] = {};", STATEMENT, bitmap, offset, p)?;
        }
    }
    writeln!(out, "{}return;", STATEMENT)?;
    writeln!(out, "{}}}", MEMBER)?;
    writeln!(out)?;

    writeln!(out, "{}function void {}() {{", MEMBER, load)?;
    out.push_str(&calls);
    writeln!(out, "{}return;", STATEMENT)?;
    writeln!(out, "{}}}", MEMBER)?;

    Ok(out)
}
