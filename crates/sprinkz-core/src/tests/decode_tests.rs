use sprinkz_types::Coordinate;

use crate::buffer::{Frame, LIT, PixelBuffer};
use crate::decoder::{DecodeResult, decode};
use crate::synth::{BACKGROUND, label_frame, render_label};

fn found(x: i32, y: i32, z: i32) -> DecodeResult {
    DecodeResult::Found(Coordinate::new(x, y, z))
}

#[test]
fn test_round_trip_scale_two() {
    let frame = label_frame(900, 300, 2, "100, 64, -32");
    assert_eq!(decode(&frame.view()), found(100, 64, -32));
}

#[test]
fn test_round_trip_scale_one() {
    let frame = label_frame(480, 150, 1, "-1234, 70, 5678");
    assert_eq!(decode(&frame.view()), found(-1234, 70, 5678));
}

#[test]
fn test_round_trip_scale_three() {
    let mut frame = Frame::filled(1500, 400, BACKGROUND);
    render_label(&mut frame, 12, 45, 3, "-5, -60, 7");
    assert_eq!(decode(&frame.view()), found(-5, -60, 7));
}

#[test]
fn test_sign_without_digits_is_zero() {
    let frame = label_frame(480, 150, 1, "-, 5, 7");
    assert_eq!(decode(&frame.view()), found(0, 5, 7));
}

#[test]
fn test_all_black_not_found() {
    let frame = Frame::filled(900, 300, BACKGROUND);
    assert_eq!(decode(&frame.view()), DecodeResult::NotFound);

    let frame = Frame::filled(900, 300, 0);
    assert_eq!(decode(&frame.view()), DecodeResult::NotFound);
}

#[test]
fn test_undersized_frames_not_found() {
    // search region ends above the first scanned row
    let frame = Frame::filled(300, 89, LIT);
    assert_eq!(decode(&frame.view()), DecodeResult::NotFound);

    let frame = Frame::filled(23, 89, LIT);
    assert_eq!(decode(&frame.view()), DecodeResult::NotFound);

    let mut frame = Frame::filled(23, 300, BACKGROUND);
    for x in 10..13 {
        frame.set(x, 40, LIT);
    }
    assert_eq!(decode(&frame.view()), DecodeResult::NotFound);

    let frame = Frame::filled(1, 1, LIT);
    assert_eq!(decode(&frame.view()), DecodeResult::NotFound);

    let empty = PixelBuffer::new(0, 0, 0, &[]).unwrap();
    assert_eq!(decode(&empty), DecodeResult::NotFound);
}

#[test]
fn test_narrow_white_frame_decodes_zero() {
    // a lit run is found but the first value column lies past the region
    let frame = Frame::filled(20, 300, LIT);
    assert_eq!(decode(&frame.view()), found(0, 0, 0));
}

#[test]
fn test_near_white_is_not_lit() {
    let frame = label_frame(480, 150, 1, "1, 2, 3");
    let dimmed: Vec<u32> = frame
        .pixels()
        .iter()
        .map(|&p| if p == LIT { 0xFFFF_FFFE } else { p })
        .collect();
    let dimmed = Frame::new(frame.width(), frame.height(), dimmed).unwrap();

    assert_eq!(decode(&dimmed.view()), DecodeResult::NotFound);
}

#[test]
fn test_label_above_scan_start_not_found() {
    let mut frame = Frame::filled(480, 150, BACKGROUND);
    render_label(&mut frame, 10, 10, 1, "1, 2, 3");
    assert_eq!(decode(&frame.view()), DecodeResult::NotFound);
}

#[test]
fn test_row_padding_is_ignored() {
    let frame = label_frame(900, 300, 2, "100, 64, -32");
    let stride = frame.width() + 7;

    let mut padded = vec![LIT; stride * frame.height()];
    for (row, pixels) in frame.pixels().chunks(frame.width()).enumerate() {
        padded[row * stride..row * stride + frame.width()].copy_from_slice(pixels);
    }
    let buffer = PixelBuffer::new(frame.width(), frame.height(), stride, &padded).unwrap();

    assert_eq!(decode(&buffer), found(100, 64, -32));
}

#[test]
fn test_unknown_column_flips_pending_sign() {
    // the unknown column negates 12 early, the comma negates -117 back
    let frame = label_frame(480, 150, 1, "-12#3, 4, 5");
    assert_eq!(decode(&frame.view()), found(117, 4, 5));
}

#[test]
fn test_noise_after_last_field_ignored() {
    let frame = label_frame(480, 150, 1, "1, 2, 3#");
    assert_eq!(decode(&frame.view()), found(1, 2, 3));
}

#[test]
fn test_fourth_field_ignored() {
    let frame = label_frame(480, 150, 1, "1, 2, 3, 4");
    assert_eq!(decode(&frame.view()), found(1, 2, 3));
}

#[test]
fn test_decode_from_rgba() {
    let frame = label_frame(480, 150, 1, "8, -9, 0");
    let rgba: Vec<u8> = frame
        .pixels()
        .iter()
        .flat_map(|&p| {
            let [a, r, g, b] = p.to_be_bytes();
            [r, g, b, a]
        })
        .collect();
    let repacked = Frame::from_rgba8(480, 150, &rgba).unwrap();

    assert_eq!(decode(&repacked.view()), found(8, -9, 0));
}
