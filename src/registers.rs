use bitflags::bitflags;

macro_rules! registers {
    (
        $enum_name:ident, $slice_name:ident {
            $($name:ident = $val:expr),* $(,)?
        }
    ) => {
        #[repr(u8)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum $enum_name {
            $($name = $val),*
        }

        pub const $slice_name: &[$enum_name] = &[
            $($enum_name::$name),*
        ];

        impl $enum_name {
            pub fn name(&self) -> &'static str {
                match self {
                    $($enum_name::$name => stringify!($name),)*
                }
            }
        }

        impl Register for $enum_name {
            fn addr(self) -> u8 {
                self as u8
            }
        }

        impl NamedRegister for $enum_name {
            fn name(&self) -> &'static str {
                self.name()
            }
        }

        impl From<$enum_name> for u8 {
            fn from(r: $enum_name) -> u8 {
                r as u8
            }
        }
    };
}

#[derive(Clone, Copy, Debug)]
pub enum RegOp {
    Read,
    Write,
}

pub trait NamedRegister: Register {
    fn name(&self) -> &'static str;
}

pub trait Register: Copy {
    fn addr(self) -> u8;
}

pub struct RegConfig<R: Register> {
    pub op: RegOp,
    pub reg: R,
    pub value: u8,
}

registers! {
    AccelReg, ACCEL_REGS {
        DevId = 0x00,
        BwRate = 0x2C,
        PowerCtl = 0x2D,
        DataFormat = 0x31,
        DataX0 = 0x32,
        DataX1 = 0x33,
        DataY0 = 0x34,
        DataY1 = 0x35,
        DataZ0 = 0x36,
        DataZ1 = 0x37,
    }
}

/// Fixed DEVID register contents for the ADXL345.
pub const DEVICE_ID: u8 = 0xE5;

/* BW_RATE
 * B7   B6   B5   B4   B3   B2   B1   B0
 * 0    0    0    LPWR R3   R2   R1   R0
*/
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputDataRate {
    Hz1600 = 0x0F,
    Hz800  = 0x0E,
    Hz400  = 0x0D,
    Hz200  = 0x0C,
    Hz100  = 0x0B,
    Hz50   = 0x0A,
    Hz25   = 0x09,
}

/* DATA_FORMAT
 * B7   B6   B5   B4   B3   B2   B1   B0
 * ST   SPI  INTI 0    FRES JUST G1   G0
*/
bitflags! {
    pub struct DataFormatFlags: u8 {
        const SELF_TEST  = 1 << 7;
        const SPI        = 1 << 6;
        const INT_INVERT = 1 << 5;
        const FULL_RES   = 1 << 3;
        const JUSTIFY    = 1 << 2;
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GRange {
    G2  = 0x00,
    G4  = 0x01,
    G8  = 0x02,
    G16 = 0x03,
}

/* POWER_CTL
 * B7   B6   B5   B4   B3   B2   B1   B0
 * 0    0    LINK ASLP MEAS SLP  W1   W0
*/
bitflags! {
    pub struct PowerCtlFlags: u8 {
        const LINK       = 1 << 5;
        const AUTO_SLEEP = 1 << 4;
        const MEASURE    = 1 << 3;
        const SLEEP      = 1 << 2;
    }
}

/// Sensitivity in full resolution mode, 3.9 mg per LSB at every range.
pub const SCALE_FACTOR: f64 = 0.0039;

/// Standard gravity, m/s^2 per g.
pub const EARTH_GRAVITY: f64 = 9.80665;
