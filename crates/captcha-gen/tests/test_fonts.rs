//! Font loading and rendering with real font files.
//!
//! Outline-font tests need a TrueType file. They use `CAPTCHA_TEST_FONT`
//! when set, otherwise a common system location. When no font is found they
//! print a skip notice, and fail instead if `CAPTCHA_REQUIRE_TEST_FONT` is
//! set.

use std::env;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use captcha_gen::{load_font, Canvas, Font, FontError, FontStore, Generator, Options, Rgba};

/// Common locations of a TrueType font on CI images and desktops.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn font_fixture_bytes(test: &str) -> Option<Vec<u8>> {
    let path = env::var_os("CAPTCHA_TEST_FONT")
        .map(PathBuf::from)
        .or_else(|| SYSTEM_FONTS.iter().map(PathBuf::from).find(|p| p.is_file()));

    match path {
        Some(path) => Some(fs::read(&path).unwrap()),
        None => {
            assert!(
                env::var_os("CAPTCHA_REQUIRE_TEST_FONT").is_none(),
                "{}: no TrueType font found and CAPTCHA_REQUIRE_TEST_FONT is set",
                test
            );
            eprintln!(
                "skipping {}: no TrueType font found (set CAPTCHA_TEST_FONT)",
                test
            );
            None
        }
    }
}

// ============================================================================
// Malformed data
// ============================================================================

#[test]
fn test_load_font_rejects_garbage_and_keeps_previous() {
    // the process-wide font is only read here, never replaced
    let err = load_font(b"\x00\x01\x00\x00garbage".to_vec()).unwrap_err();
    assert!(matches!(err, FontError::Parse(_)));
    assert!(captcha_gen::generate(120, 40, &Options::default()).is_ok());
}

#[test]
fn test_store_load_rejects_truncated_data() {
    let store = FontStore::default();
    let before = store.current().unwrap();
    assert!(store.load(Vec::new()).is_err());
    assert!(Arc::ptr_eq(&before, &store.current().unwrap()));
}

// ============================================================================
// Outline fonts
// ============================================================================

#[test]
fn test_bad_load_after_truetype_keeps_truetype() {
    let Some(bytes) = font_fixture_bytes("test_bad_load_after_truetype_keeps_truetype") else {
        return;
    };

    let store = FontStore::default();
    let loaded = store.load(bytes).unwrap();
    assert!(!loaded.is_builtin());

    let err = store.load(b"\x00\x01\x00\x00 truncated".to_vec()).unwrap_err();
    assert!(matches!(err, FontError::Parse(_)));
    assert!(store.load_from_reader(Cursor::new(Vec::new())).is_err());

    let current = store.current().unwrap();
    assert!(Arc::ptr_eq(&loaded, &current));
    let captcha = Generator::with_fonts(&store)
        .generate(150, 50, &Options::default().with_seed(2))
        .unwrap();
    assert_eq!(captcha.solution().chars().count(), 4);
}

#[test]
fn test_truetype_font_renders() {
    let Some(bytes) = font_fixture_bytes("test_truetype_font_renders") else {
        return;
    };

    let store = FontStore::empty();
    let font = store.load_from_reader(Cursor::new(bytes)).unwrap();
    assert!(!font.is_builtin());
    assert!(font.glyph_count() > 0);

    let ink = Rgba::opaque(10, 20, 200);
    let opts = Options::default()
        .with_palette(vec![ink])
        .with_curve_count(0)
        .with_noise(0.01)
        .with_seed(21);
    let captcha = Generator::with_fonts(&store).generate(200, 70, &opts).unwrap();

    // anti-aliased edges blend, solid stems keep the exact ink
    let inked = captcha
        .canvas()
        .pixels()
        .iter()
        .filter(|p| p.a > 0 && p.b > 100 && p.r < 50)
        .count();
    assert!(inked > 20, "only {} glyph pixels", inked);
}

#[test]
fn test_truetype_glyph_off_canvas_is_skipped() {
    let Some(bytes) = font_fixture_bytes("test_truetype_glyph_off_canvas_is_skipped") else {
        return;
    };

    let font = Font::from_bytes(bytes).unwrap();
    let mut canvas = Canvas::new(150, 50);
    font.draw_glyph(&mut canvas, 'W', 4000.0, (500.0, 30.0), Rgba::BLACK);
    font.draw_glyph(&mut canvas, 'W', 4000.0, (-10_000.0, 30.0), Rgba::BLACK);
    assert!(canvas.pixels().iter().all(|p| *p == Rgba::TRANSPARENT));
}

#[test]
fn test_truetype_font_replaces_builtin() {
    let Some(bytes) = font_fixture_bytes("test_truetype_font_replaces_builtin") else {
        return;
    };

    let store = FontStore::default();
    let previous = store.current().unwrap();
    store.load(bytes).unwrap();
    assert!(previous.is_builtin());
    assert!(!store.current().unwrap().is_builtin());

    let captcha = Generator::with_fonts(&store)
        .generate_equation(120, 40, &Options::default())
        .unwrap();
    assert_eq!(captcha.width(), 120);
}
