use log::warn;

use crate::registers::*;

/// Output unit for decoded samples. Resolved once at construction so an
/// invalid label is reported a single time, not on every read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Unit {
    G,
    MeterPerSecondSquared,
}

impl Unit {
    /// Maps the wire labels "g" and "m2s". Anything else degrades to g
    /// with a diagnostic.
    pub fn from_label(label: &str) -> Self {
        match label {
            "g" => Unit::G,
            "m2s" => Unit::MeterPerSecondSquared,
            other => {
                warn!("invalid unit {:?}, choose g or m2s, defaulting to g", other);
                Unit::G
            }
        }
    }

    pub(crate) fn factor(self) -> f64 {
        match self {
            Unit::G => 1.0,
            Unit::MeterPerSecondSquared => EARTH_GRAVITY,
        }
    }
}

/// Maps a requested output data rate in Hz to its BW_RATE code.
/// Unsupported rates degrade to 100 Hz with a diagnostic.
pub fn resolve_rate(rate_hz: u16) -> OutputDataRate {
    match rate_hz {
        1600 => OutputDataRate::Hz1600,
        800 => OutputDataRate::Hz800,
        400 => OutputDataRate::Hz400,
        200 => OutputDataRate::Hz200,
        100 => OutputDataRate::Hz100,
        50 => OutputDataRate::Hz50,
        25 => OutputDataRate::Hz25,
        other => {
            warn!("invalid data rate {} Hz, defaulting to 100 Hz", other);
            OutputDataRate::Hz100
        }
    }
}

/// Maps a requested range in g to the full DATA_FORMAT byte. FULL_RES is
/// always set so the scale stays at 3.9 mg/LSB at every range. Unsupported
/// ranges degrade to 2g with a diagnostic.
pub fn resolve_range(range_g: u8) -> u8 {
    let range = match range_g {
        2 => GRange::G2,
        4 => GRange::G4,
        8 => GRange::G8,
        16 => GRange::G16,
        other => {
            warn!("invalid range {} g, defaulting to 2 g", other);
            GRange::G2
        }
    };
    range as u8 | DataFormatFlags::FULL_RES.bits()
}

/// Initialization write sequence. Order matters: MEASURE must be enabled
/// only after rate and range are in place, otherwise the first samples are
/// taken with undefined settings.
pub fn config_wakeup(rate_hz: u16, range_g: u8) -> [RegConfig<AccelReg>; 3] {
    [
        RegConfig {
            op: RegOp::Write,
            reg: AccelReg::BwRate,
            value: resolve_rate(rate_hz) as u8,
        },
        RegConfig {
            op: RegOp::Write,
            reg: AccelReg::DataFormat,
            value: resolve_range(range_g),
        },
        RegConfig {
            op: RegOp::Write,
            reg: AccelReg::PowerCtl,
            value: PowerCtlFlags::MEASURE.bits(),
        },
    ]
}
