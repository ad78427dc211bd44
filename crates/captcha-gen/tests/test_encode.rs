//! Container encoding of generated challenges.

use captcha_gen::{
    encode, encode_with_hash, EncodeError, FontStore, Generator, ImageFormat, Options, Rgba,
};
use pretty_assertions::assert_eq;

fn sample(opts: &Options) -> captcha_gen::Captcha {
    let store = FontStore::default();
    Generator::with_fonts(&store).generate(150, 50, opts).unwrap()
}

#[test]
fn test_encoding_twice_is_identical() {
    let captcha = sample(&Options::default());
    for format in [ImageFormat::Png, ImageFormat::jpeg(), ImageFormat::Gif] {
        let first = encode(&captcha, &format).unwrap();
        let second = encode(&captcha, &format).unwrap();
        assert_eq!(first, second, "{:?}", format);
    }
}

#[test]
fn test_container_signatures() {
    let captcha = sample(&Options::default());
    let png = encode(&captcha, &ImageFormat::Png).unwrap();
    assert_eq!(&png[1..4], b"PNG");
    let jpeg = encode(&captcha, &ImageFormat::Jpeg { quality: 60 }).unwrap();
    assert_eq!(&jpeg[..3], &[0xFF, 0xD8, 0xFF]);
    let gif = encode(&captcha, &ImageFormat::Gif).unwrap();
    assert_eq!(&gif[..6], b"GIF89a");
}

#[test]
fn test_png_roundtrips_pixels() {
    let captcha = sample(&Options::default().with_background(Rgba::opaque(9, 9, 9)));
    let png = encode(&captcha, &ImageFormat::Png).unwrap();

    let decoder = png::Decoder::new(png.as_slice());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!((info.width, info.height), (150, 50));
    assert_eq!(&buf[..info.buffer_size()], captcha.canvas().to_rgba8().as_slice());
}

#[test]
fn test_jpeg_quality_out_of_range() {
    let captcha = sample(&Options::default());
    let err = encode(&captcha, &ImageFormat::Jpeg { quality: 0 }).unwrap_err();
    assert!(matches!(err, EncodeError::InvalidQuality(0)));
}

#[test]
fn test_lower_quality_is_smaller() {
    let captcha = sample(&Options::default().with_seed(17).with_background(Rgba::WHITE));
    let low = encode(&captcha, &ImageFormat::Jpeg { quality: 10 }).unwrap();
    let high = encode(&captcha, &ImageFormat::Jpeg { quality: 100 }).unwrap();
    assert!(low.len() < high.len());
}

#[test]
fn test_hash_matches_content() {
    let captcha = sample(&Options::default());
    let (bytes, hash) = encode_with_hash(&captcha, &ImageFormat::Png).unwrap();
    assert_eq!(hash, blake3::hash(&bytes).to_hex().to_string());
}

#[test]
fn test_write_to_matches_encode() {
    let captcha = sample(&Options::default());
    let mut out = std::io::Cursor::new(Vec::new());
    captcha.write_to(&mut out, &ImageFormat::Gif).unwrap();
    assert_eq!(out.into_inner(), encode(&captcha, &ImageFormat::Gif).unwrap());
}
