mod common;

use adxl345::{Adxl345, ReadError, Sample, Unit};
use common::*;
use embedded_hal::i2c::ErrorKind;

fn assert_close(actual: f64, expected: f64) {
    let tol = 1e-9 * if expected == 0.0 { 1.0 } else { expected.abs() };
    assert!((actual - expected).abs() <= tol, "{} != {}", actual, expected);
}

fn measuring(unit: Unit, extra: &[I2cTrans]) -> Adxl345<I2cMock, ErrorKind> {
    let mut trans = trans_init(0x0B, 0x08);
    trans.extend_from_slice(extra);
    Adxl345::default(I2cMock::new(&trans), 100, 2, unit).unwrap()
}

#[test]
fn decodes_block_in_g() {
    let mut accel = measuring(
        Unit::G,
        &[trans_axes([0x00, 0x01, 0x00, 0x00, 0xFF, 0xFF])],
    );
    let Sample { x, y, z } = accel.read().unwrap();
    assert_close(x, 0.9984);
    assert_close(y, 0.0);
    assert_close(z, -0.0039);
    accel.destroy().done();
}

#[test]
fn decodes_block_in_m_per_s2() {
    let mut accel = measuring(
        Unit::MeterPerSecondSquared,
        &[trans_axes([0x00, 0x01, 0x00, 0x00, 0xFF, 0xFF])],
    );
    let sample = accel.read().unwrap();
    assert_close(sample.x, 0.9984 * 9.80665);
    assert_close(sample.y, 0.0);
    assert_close(sample.z, -0.0039 * 9.80665);
    accel.destroy().done();
}

#[test]
fn unknown_unit_label_reads_like_g() {
    let block = [0x34, 0x12, 0xCD, 0xAB, 0x01, 0x00];
    let mut fallback = measuring(Unit::from_label("parsec"), &[trans_axes(block)]);
    let mut explicit = measuring(Unit::G, &[trans_axes(block)]);
    assert_eq!(fallback.read().unwrap(), explicit.read().unwrap());
    fallback.destroy().done();
    explicit.destroy().done();
}

#[test]
fn repeated_reads_each_issue_one_block_transaction() {
    let mut accel = measuring(
        Unit::G,
        &[
            trans_axes([0x01, 0x00, 0x02, 0x00, 0x03, 0x00]),
            trans_axes([0x00, 0x80, 0xFF, 0x7F, 0x00, 0x00]),
        ],
    );
    let first = accel.read().unwrap();
    assert_close(first.x, 0.0039);
    assert_close(first.y, 2.0 * 0.0039);
    assert_close(first.z, 3.0 * 0.0039);
    let second = accel.read().unwrap();
    assert_close(second.x, -32768.0 * 0.0039);
    assert_close(second.y, 32767.0 * 0.0039);
    assert_close(second.z, 0.0);
    accel.destroy().done();
}

#[test]
fn bus_error_surfaces_as_read_error() {
    let failing = I2cTrans::write_read(DEV_ADDR, vec![0x32], vec![0u8; 6])
        .with_error(ErrorKind::Other);
    let mut accel = measuring(Unit::G, &[failing]);
    assert!(matches!(accel.read(), Err(ReadError::I2c(_))));
    accel.destroy().done();
}
