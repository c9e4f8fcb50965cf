// Integration tests for the preview, flat-call and template generators
use hackbitmap_rust as hackbitmap;

mod common;
use common::{picture, row};

use hackbitmap::hackstructs::{CodecConfig, EmitMode, NamingConfig, BLACK, WHITE};
use hackbitmap::{
    convert, convert_array, convert_buffer, convert_single_image, Array2, HackContext, HackError,
    Image,
};

// ==============================================
// Flat calls
// ==============================================

#[test]
fn test_flat_call_half_black_row() {
    let mut samples = vec![BLACK; 16];
    samples.extend_from_slice(&[WHITE; 16]);
    let text = convert_single_image(&samples, 32, 1, &HackContext::flat_call("X")).unwrap();
    assert_eq!(text, "do X(0, -1, 0);\n");
}

#[test]
fn test_flat_call_single_words() {
    let ctx = HackContext::new();
    assert_eq!(
        convert_single_image(&[BLACK; 16], 16, 1, &ctx).unwrap(),
        "do XXX(0, -1);\n"
    );
    assert_eq!(
        convert_single_image(&[WHITE; 16], 16, 1, &ctx).unwrap(),
        "do XXX(0, 0);\n"
    );
}

#[test]
fn test_flat_call_pads_every_row() {
    let (w, h, samples) = picture(&[
        "@...................",
        "@@@@@@@@@@@@@@@@@@@@",
        "...............@....",
    ]);
    let text = convert_single_image(&samples, w, h, &HackContext::flat_call("Screen.row")).unwrap();
    assert_eq!(
        text,
        "do Screen.row(0, 1, 0);\n\
         do Screen.row(1, -1, 15);\n\
         do Screen.row(2, (-32767 - 1), 0);\n"
    );
}

#[test]
fn test_flat_call_ignores_trailing_samples() {
    let mut samples = vec![BLACK; 16];
    samples.extend_from_slice(&[WHITE; 4]);
    let image = Image::new(16, 1, samples.into_iter());
    assert_eq!(convert(image, &HackContext::new()).unwrap(), "do XXX(0, -1);\n");
}

#[test]
fn test_flat_call_last_row_index_is_a_valid_literal() {
    let image = Image::new(1, 32768, std::iter::repeat(WHITE));
    let text = convert(image, &HackContext::new()).unwrap();
    assert!(text.ends_with("do XXX(32767, 0);\n"));
    assert!(!text.contains("32768"));
}

#[test]
fn test_flat_call_rejects_rows_past_literal_range() {
    let samples = std::iter::from_fn(|| -> Option<u8> { panic!("sample read before row check") });
    let image = Image::new(16, 32769, samples);
    let err = convert(image, &HackContext::new()).unwrap_err();
    assert!(matches!(err, HackError::TooManyRows { rows: 32769 }));
}

// ==============================================
// Preview
// ==============================================

#[test]
fn test_preview_shows_padding() {
    let (w, h, samples) = picture(&["@...................", "@@@@@@@@@@@@@@@@@@@@"]);
    let text = convert_single_image(&samples, w, h, &HackContext::preview()).unwrap();
    let expected = format!(
        "@{}\n{}{}\n",
        ".".repeat(31),
        "@".repeat(20),
        ".".repeat(12)
    );
    assert_eq!(text, expected);
}

#[test]
fn test_preview_rejects_non_binary_samples() {
    let mut samples = row("@@@@");
    samples[2] = 100;
    let err = convert_single_image(&samples, 4, 1, &HackContext::preview()).unwrap_err();
    assert!(matches!(
        err,
        HackError::InvalidSample {
            value: 100,
            row: 0,
            column: 2
        }
    ));
}

// ==============================================
// Errors while streaming
// ==============================================

#[test]
fn test_invalid_sample_in_last_row() {
    let mut samples = vec![WHITE; 48];
    samples[47] = 1;
    let err = convert_single_image(&samples, 16, 3, &HackContext::new()).unwrap_err();
    assert!(matches!(
        err,
        HackError::InvalidSample {
            value: 1,
            row: 2,
            column: 15
        }
    ));
}

#[test]
fn test_invalid_sample_stops_reading() {
    // The second row would panic if it were ever pulled
    let mut first = vec![WHITE; 16];
    first[3] = 9;
    let rest = std::iter::from_fn(|| -> Option<u8> { panic!("read past the bad row") });
    let image = Image::new(16, 2, first.into_iter().chain(rest));
    let err = convert(image, &HackContext::new()).unwrap_err();
    assert!(matches!(err, HackError::InvalidSample { value: 9, .. }));
}

#[test]
fn test_truncated_stream() {
    let image = Image::new(16, 2, vec![WHITE; 20].into_iter());
    let err = convert(image, &HackContext::new()).unwrap_err();
    assert!(matches!(
        err,
        HackError::TruncatedStream {
            row: 1,
            expected: 16,
            received: 4
        }
    ));

    let image = Image::new(16, 2, vec![WHITE; 16].into_iter());
    let err = convert(image, &HackContext::preview()).unwrap_err();
    assert!(matches!(
        err,
        HackError::TruncatedStream {
            row: 1,
            received: 0,
            ..
        }
    ));
}

#[test]
fn test_truncated_buffer_reported_up_front() {
    let err = convert_single_image(&[WHITE; 40], 20, 3, &HackContext::new()).unwrap_err();
    assert!(matches!(
        err,
        HackError::TruncatedStream {
            row: 2,
            expected: 20,
            received: 0
        }
    ));
}

#[test]
fn test_empty_image_rejected() {
    let err = convert_single_image(&[], 0, 4, &HackContext::new()).unwrap_err();
    assert!(matches!(err, HackError::InvalidConfig { .. }));
}

// ==============================================
// Full template
// ==============================================

#[test]
fn test_full_template() {
    let (w, h, samples) = picture(&[
        "@@@@@@@@@@@@@@@@................",
        "...............@................",
    ]);
    let text = convert_single_image(&samples, w, h, &HackContext::template("Main", "logo")).unwrap();
    let expected = "    static Array logoBitmap;
    static Array logoSize;

    function void logoInit() {
        let logoSize = Array.new(2);
        let logoSize[0] = 2;
        let logoSize[1] = 2;
        let logoBitmap = Array.new(4);
        do Main.logoLoad();
        return;
    }

    function void logoStore(int row, int a, int b) {
        var int base;
        let base = row * 2;
        let logoBitmap[base] = a;
        let logoBitmap[base + 1] = b;
        return;
    }

    function void logoLoad() {
        do Main.logoStore(0, -1, 0);
        do Main.logoStore(1, (-32767 - 1), 0);
        return;
    }
";
    assert_eq!(text, expected);
}

#[test]
fn test_template_uses_custom_alphabet() {
    let naming = NamingConfig {
        class_name: "Sprite".to_string(),
        image_name: "ship".to_string(),
        alphabet: "pq".to_string(),
        ..NamingConfig::default()
    };
    let ctx = HackContext::with_config(CodecConfig::default(), naming, EmitMode::FullTemplate);
    let text = convert_single_image(&[WHITE; 20], 20, 1, &ctx).unwrap();
    assert!(text.contains("function void shipStore(int row, int p, int q) {"));
    assert!(text.contains("let shipBitmap[base + 1] = q;"));
    assert!(text.contains("do Sprite.shipStore(0, 0, 0);"));
}

#[test]
fn test_identifier_capacity_checked_before_reading() {
    let naming = NamingConfig {
        alphabet: "ab".to_string(),
        ..NamingConfig::default()
    };
    let ctx = HackContext::with_config(CodecConfig::default(), naming, EmitMode::FullTemplate);
    let samples = std::iter::from_fn(|| -> Option<u8> { panic!("sample read before capacity check") });
    let err = convert(Image::new(48, 1, samples), &ctx).unwrap_err();
    assert!(matches!(
        err,
        HackError::IdentifierCapacity {
            required: 3,
            available: 2
        }
    ));
}

#[test]
fn test_default_alphabet_limit() {
    let ctx = HackContext::template("Main", "wide");
    assert!(convert_single_image(&vec![WHITE; 416], 416, 1, &ctx).is_ok());
    let err = convert_single_image(&vec![WHITE; 417], 417, 1, &ctx).unwrap_err();
    assert!(matches!(
        err,
        HackError::IdentifierCapacity {
            required: 27,
            available: 26
        }
    ));
}

#[test]
fn test_template_too_large_for_jack_array() {
    let ctx = HackContext::template("Main", "huge");
    let image = Image::new(416, 1261, std::iter::repeat(WHITE));
    let err = convert(image, &ctx).unwrap_err();
    assert!(matches!(err, HackError::ImageTooLarge { words: 32786 }));
}

#[test]
fn test_invalid_names_rejected() {
    let err = convert_single_image(&[WHITE; 16], 16, 1, &HackContext::flat_call("do it")).unwrap_err();
    assert!(matches!(err, HackError::InvalidConfig { .. }));

    let err = convert_single_image(&[WHITE; 16], 16, 1, &HackContext::template("Main", "2x")).unwrap_err();
    assert!(matches!(err, HackError::InvalidConfig { .. }));
}

#[test]
fn test_keyword_and_nested_names_rejected() {
    for ctx in [
        HackContext::flat_call("return"),
        HackContext::flat_call("Screen.do"),
        HackContext::flat_call("a.b.c"),
        HackContext::template("class", "logo"),
        HackContext::template("Main", "while"),
    ] {
        let err = convert_single_image(&[WHITE; 16], 16, 1, &ctx).unwrap_err();
        assert!(matches!(err, HackError::InvalidConfig { .. }), "{:?}", ctx);
    }
}

// ==============================================
// Array inputs
// ==============================================

#[test]
fn test_convert_array() {
    let mut array = Array2::<u8>::from_elem((2, 16), WHITE);
    array[(1, 0)] = BLACK;
    let text = convert_array(&array, &HackContext::new()).unwrap();
    assert_eq!(text, "do XXX(0, 0);\ndo XXX(1, 1);\n");
}

#[test]
fn test_convert_buffer_shape_mismatch() {
    let err = convert_buffer(vec![WHITE; 10], 4, 4, &HackContext::new()).unwrap_err();
    assert!(matches!(err, HackError::ArrayShapeError { .. }));

    let text = convert_buffer(vec![BLACK; 16], 16, 1, &HackContext::new()).unwrap();
    assert_eq!(text, "do XXX(0, -1);\n");
}
