#![no_std]
#![allow(dead_code)]

pub mod configs;
pub mod registers;

use core::marker::PhantomData;

use embedded_hal::i2c::I2c;
use log::debug;

pub use configs::*;
use registers::*;

/// Trait alias to support both I2c<SevenBitAddress> and I2c without address mode.
pub trait CompatibleI2c<E>: I2c<Error = E> {}
impl<T, E> CompatibleI2c<E> for T where T: I2c<Error = E> {}

pub const DEFAULT_ADDRESS: u8 = 0x53;

pub struct Adxl345<I2C, E> {
    i2c: I2C,
    address: u8,
    unit: Unit,
    _error: PhantomData<E>,
}

#[derive(Debug)]
pub enum InitError<E> {
    I2c(E),
    InvalidDevice(u8),
}

#[derive(Debug)]
pub enum ReadError<E> {
    I2c(E),
}

/// One decoded measurement, all three axes from a single measurement cycle,
/// in the unit the driver was constructed with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Sample> for (f64, f64, f64) {
    fn from(s: Sample) -> (f64, f64, f64) {
        (s.x, s.y, s.z)
    }
}

fn decode_axis(lo: u8, hi: u8) -> i16 {
    i16::from_le_bytes([lo, hi])
}

fn decode_block(raw: &[u8; 6], unit: Unit) -> Sample {
    let scale = SCALE_FACTOR * unit.factor();
    Sample {
        x: f64::from(decode_axis(raw[0], raw[1])) * scale,
        y: f64::from(decode_axis(raw[2], raw[3])) * scale,
        z: f64::from(decode_axis(raw[4], raw[5])) * scale,
    }
}

impl<I2C, E> Adxl345<I2C, E> {
    pub fn i2c(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl<I2C, E> Adxl345<I2C, E>
where
    I2C: CompatibleI2c<E>,
    E: core::fmt::Debug,
{
    /// Probes the device and configures it for continuous measurement.
    /// Fails as a whole if the device id is wrong or any register write
    /// errors, so a partially configured driver is never handed out.
    pub fn new(
        i2c: I2C,
        address: u8,
        rate_hz: u16,
        range_g: u8,
        unit: Unit,
    ) -> Result<Self, InitError<E>> {
        let mut accel = Self {
            i2c,
            address,
            unit,
            _error: PhantomData,
        };

        let id = accel.read_reg(AccelReg::DevId.addr()).map_err(InitError::I2c)?;
        if id != DEVICE_ID {
            return Err(InitError::InvalidDevice(id));
        }

        accel.apply_config(&config_wakeup(rate_hz, range_g))?;
        Ok(accel)
    }

    pub fn default(i2c: I2C, rate_hz: u16, range_g: u8, unit: Unit) -> Result<Self, InitError<E>> {
        Self::new(i2c, DEFAULT_ADDRESS, rate_hz, range_g, unit)
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    pub fn device_id(&mut self) -> Result<u8, ReadError<E>> {
        self.read_reg(AccelReg::DevId.addr()).map_err(ReadError::I2c)
    }

    /// Reads one sample. All six axis registers are fetched in a single
    /// transaction so the sample cannot tear across two measurement cycles.
    pub fn read(&mut self) -> Result<Sample, ReadError<E>> {
        let mut raw = [0u8; 6];
        self.read_bytes(AccelReg::DataX0.addr(), &mut raw)
            .map_err(ReadError::I2c)?;
        Ok(decode_block(&raw, self.unit))
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, E> {
        let mut buf = [0u8];
        self.i2c.write_read(self.address, &[reg], &mut buf)?;
        Ok(buf[0])
    }

    fn write_reg(&mut self, reg: u8, val: u8) -> Result<(), E> {
        self.i2c.write(self.address, &[reg, val])
    }

    fn read_bytes(&mut self, start_reg: u8, buffer: &mut [u8]) -> Result<(), E> {
        self.i2c.write_read(self.address, &[start_reg], buffer)
    }

    /// Accepts any register type that implements the `Register` trait
    pub fn apply_config<R>(&mut self, config: &[RegConfig<R>]) -> Result<(), InitError<E>>
    where
        R: Register + NamedRegister + Copy,
    {
        for entry in config {
            let addr = entry.reg.addr();
            match entry.op {
                RegOp::Write => {
                    debug!("write_reg {:<11}({:#04X}) = {:#04x}", entry.reg.name(), addr, entry.value);
                    self.write_reg(addr, entry.value).map_err(InitError::I2c)?;
                }
                RegOp::Read => {
                    let data = self.read_reg(addr).map_err(InitError::I2c)?;
                    debug!("read_reg {:<11}({:#04X}) = {:#04x}", entry.reg.name(), addr, data);
                }
            }
        }
        Ok(())
    }

    pub fn dump_config<R>(&mut self, regs: &[R]) -> Result<(), ReadError<E>>
    where
        R: NamedRegister + Copy,
    {
        for reg in regs {
            let addr = reg.addr();
            let val = self.read_reg(addr).map_err(ReadError::I2c)?;
            debug!("{:<11}({:#04x}): 0x{:02X} ({:>3}) 0b{:08b}", reg.name(), addr, val, val, val);
        }
        Ok(())
    }
}
