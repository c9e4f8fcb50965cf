//! Common utility functions for integration tests
#![allow(dead_code)]

use hackbitmap_rust::hackstructs::{BLACK, WHITE};

/// Samples for a row drawn as `@` (black) and `.` (white).
pub fn row(pattern: &str) -> Vec<u8> {
    pattern
        .chars()
        .map(|c| if c == '@' { BLACK } else { WHITE })
        .collect()
}

/// Row-major samples for a picture; every line must have the same width.
pub fn picture(lines: &[&str]) -> (u32, u32, Vec<u8>) {
    let width = lines.first().map_or(0, |l| l.len());
    assert!(lines.iter().all(|l| l.len() == width), "ragged picture");
    let samples = lines.iter().flat_map(|l| row(l)).collect();
    (width as u32, lines.len() as u32, samples)
}

/// Classified bits for a 16-bit value, pixel `i` taken from bit `i`.
pub fn bits_of(value: u16, width: usize) -> Vec<bool> {
    (0..width).map(|i| value & (1 << i) != 0).collect()
}

/// Binary PGM (P5) file contents.
pub fn pgm_bytes(width: usize, height: usize, samples: &[u8]) -> Vec<u8> {
    let mut out = format!("P5\n{} {}\n255\n", width, height).into_bytes();
    out.extend_from_slice(samples);
    out
}

/// Binary PBM (P4) file contents from `@`/`.` lines.
pub fn pbm_bytes(lines: &[&str]) -> Vec<u8> {
    let width = lines[0].len();
    let mut out = format!("P4\n{} {}\n", width, lines.len()).into_bytes();
    for line in lines {
        let mut bytes = vec![0u8; (width + 7) / 8];
        for (x, c) in line.chars().enumerate() {
            if c == '@' {
                bytes[x / 8] |= 0x80 >> (x % 8);
            }
        }
        out.extend_from_slice(&bytes);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_is_row_major() {
        let (w, h, samples) = picture(&["@.", ".@"]);
        assert_eq!((w, h), (2, 2));
        assert_eq!(samples, vec![BLACK, WHITE, WHITE, BLACK]);
    }
}
