use std::fmt;

/// Kernel bus code for USB devices, from `linux/input.h`.
pub const BUS_USB: u16 = 0x03;
/// Kernel bus code for Bluetooth devices, from `linux/input.h`.
pub const BUS_BLUETOOTH: u16 = 0x05;

/// Physical bus a tablet is connected through.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum BusType {
    #[default]
    Unknown,
    Usb,
    Serial,
    Bluetooth,
    I2c,
}

impl BusType {
    /// Creates a new [BusType].
    pub const fn new() -> Self {
        Self::Unknown
    }

    /// Gets the kernel bus code used in hwdb lookup keys.
    ///
    /// Only USB and Bluetooth have one. Serial tablets are tagged by their own udev rules, and
    /// the remaining buses have no stable input modalias.
    pub const fn bus_code(&self) -> Option<u16> {
        match self {
            Self::Usb => Some(BUS_USB),
            Self::Bluetooth => Some(BUS_BLUETOOTH),
            Self::Serial | Self::I2c | Self::Unknown => None,
        }
    }
}

impl From<&str> for BusType {
    fn from(val: &str) -> Self {
        match val {
            "usb" => Self::Usb,
            "serial" => Self::Serial,
            "bluetooth" => Self::Bluetooth,
            "i2c" => Self::I2c,
            _ => Self::Unknown,
        }
    }
}

impl From<&BusType> for &'static str {
    fn from(val: &BusType) -> Self {
        match val {
            BusType::Unknown => "unknown",
            BusType::Usb => "usb",
            BusType::Serial => "serial",
            BusType::Bluetooth => "bluetooth",
            BusType::I2c => "i2c",
        }
    }
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", <&str>::from(self))
    }
}
