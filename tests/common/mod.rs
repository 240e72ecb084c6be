#![allow(dead_code)]

pub use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEV_ADDR: u8 = 0x53;

pub fn trans_device_id() -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![0x00], vec![0xE5])
}

/// The three configuration writes issued during construction, in order.
pub fn trans_wakeup(rate_code: u8, data_format: u8) -> [I2cTrans; 3] {
    [
        I2cTrans::write(DEV_ADDR, vec![0x2C, rate_code]),
        I2cTrans::write(DEV_ADDR, vec![0x31, data_format]),
        I2cTrans::write(DEV_ADDR, vec![0x2D, 0x08]),
    ]
}

pub fn trans_init(rate_code: u8, data_format: u8) -> Vec<I2cTrans> {
    let mut trans = vec![trans_device_id()];
    trans.extend(trans_wakeup(rate_code, data_format));
    trans
}

pub fn trans_axes(block: [u8; 6]) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![0x32], block.to_vec())
}
