//! Minimal binary Netpbm reader (P4 bitmaps and 8-bit P5 greymaps).
//!
//! Samples come back row-major in the converter's sentinel domain: PBM bits
//! are mapped to 0 (black) and 255 (white), PGM values are passed through.

use anyhow::{anyhow, bail, Context, Result};
use log::info;
use std::path::Path;

use hackbitmap_rust::hackstructs::{BLACK, WHITE};

/// A decoded image ready for the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pnm {
    pub width: usize,
    pub height: usize,
    pub samples: Vec<u8>,
}

pub fn read_pnm(path: &Path) -> Result<Pnm> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    parse_pnm(&data).with_context(|| format!("decoding {}", path.display()))
}

/// Splits the next whitespace-separated header token, skipping `#` comments.
fn next_token<'a>(data: &'a [u8], pos: &mut usize) -> Result<&'a [u8]> {
    loop {
        while *pos < data.len() && data[*pos].is_ascii_whitespace() {
            *pos += 1;
        }
        if *pos < data.len() && data[*pos] == b'#' {
            while *pos < data.len() && data[*pos] != b'\n' {
                *pos += 1;
            }
            continue;
        }
        break;
    }
    let start = *pos;
    while *pos < data.len() && !data[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
    if start == *pos {
        bail!("unexpected end of header");
    }
    Ok(&data[start..*pos])
}

fn next_number(data: &[u8], pos: &mut usize, what: &str) -> Result<usize> {
    let token = next_token(data, pos)?;
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| anyhow!("invalid {}: {:?}", what, String::from_utf8_lossy(token)))
}

pub fn parse_pnm(data: &[u8]) -> Result<Pnm> {
    let mut pos = 0;
    let magic = next_token(data, &mut pos)?.to_vec();
    let width = next_number(data, &mut pos, "width")?;
    let height = next_number(data, &mut pos, "height")?;
    if width == 0 || height == 0 {
        bail!("empty image ({}x{})", width, height);
    }

    let samples = match magic.as_slice() {
        b"P4" => {
            // Single whitespace byte separates the header from the raster
            let raster = &data[(pos + 1).min(data.len())..];
            let bytes_per_row = (width + 7) / 8;
            let expected = bytes_per_row * height;
            if raster.len() < expected {
                bail!("raster holds {} bytes, expected {}", raster.len(), expected);
            }
            let mut samples = Vec::with_capacity(width * height);
            for row in raster.chunks(bytes_per_row).take(height) {
                for x in 0..width {
                    let bit = (row[x / 8] >> (7 - (x % 8))) & 1;
                    samples.push(if bit == 1 { BLACK } else { WHITE });
                }
            }
            samples
        }
        b"P5" => {
            let maxval = next_number(data, &mut pos, "maxval")?;
            if maxval == 0 || maxval > 255 {
                bail!("unsupported maxval {}, only 8-bit greymaps are read", maxval);
            }
            let raster = &data[(pos + 1).min(data.len())..];
            let expected = width * height;
            if raster.len() < expected {
                bail!("raster holds {} bytes, expected {}", raster.len(), expected);
            }
            raster[..expected].to_vec()
        }
        other => bail!(
            "unsupported Netpbm magic number: {}",
            String::from_utf8_lossy(other)
        ),
    };

    info!(
        "Decoded {} image: {}x{}",
        String::from_utf8_lossy(&magic),
        width,
        height
    );
    Ok(Pnm {
        width,
        height,
        samples,
    })
}
