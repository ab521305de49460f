use std::fmt;

use crate::{BusType, Error, Result};

/// Match string for devices without a fixed bus/vendor/product triple.
pub const GENERIC_MATCH: &str = "generic";

/// Hardware identification rule of a tablet.
///
/// Parsed from a `DeviceMatch` entry of the form `bus:vid:pid[:name]`, with `vid` and `pid` in
/// hexadecimal.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct WacomMatch {
    bus: BusType,
    vendor_id: u16,
    product_id: u16,
    name: Option<String>,
}

impl WacomMatch {
    /// Creates a new [WacomMatch].
    pub const fn new() -> Self {
        Self {
            bus: BusType::new(),
            vendor_id: 0,
            product_id: 0,
            name: None,
        }
    }

    /// Creates a new [WacomMatch] from the provided parameters.
    pub const fn create(bus: BusType, vendor_id: u16, product_id: u16) -> Self {
        Self {
            bus,
            vendor_id,
            product_id,
            name: None,
        }
    }

    /// Parses a `DeviceMatch` entry.
    ///
    /// Returns `Ok(None)` for the `generic` match, which carries no identifiers.
    pub fn parse(val: &str) -> Result<Option<Self>> {
        if val == GENERIC_MATCH {
            return Ok(None);
        }

        let mut fields = val.splitn(4, ':');
        let (bus, vid, pid) = match (fields.next(), fields.next(), fields.next()) {
            (Some(bus), Some(vid), Some(pid)) => (bus, vid, pid),
            _ => {
                return Err(Error::Match(format!(
                    "expected `bus:vid:pid[:name]`, have: {val}"
                )))
            }
        };

        let bus = BusType::from(bus);
        if bus == BusType::Unknown {
            log::debug!("unknown bus type in match: {val}");
        }

        Ok(Some(Self {
            bus,
            vendor_id: u16::from_str_radix(vid, 16)?,
            product_id: u16::from_str_radix(pid, 16)?,
            name: fields.next().filter(|n| !n.is_empty()).map(String::from),
        }))
    }

    /// Gets the [BusType].
    pub const fn bus_type(&self) -> BusType {
        self.bus
    }

    /// Gets the vendor ID.
    pub const fn vendor_id(&self) -> u16 {
        self.vendor_id
    }

    /// Gets the product ID.
    pub const fn product_id(&self) -> u16 {
        self.product_id
    }

    /// Gets the optional kernel device name the match is restricted to.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Builder function that sets the kernel device name.
    pub fn with_name<N: Into<String>>(mut self, name: N) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Gets whether `other` identifies the same hardware.
    ///
    /// The name suffix is ignored: it does not take part in the hwdb lookup key.
    pub fn same_ids(&self, other: &Self) -> bool {
        self.bus == other.bus
            && self.vendor_id == other.vendor_id
            && self.product_id == other.product_id
    }
}

impl fmt::Display for WacomMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:04x}:{:04x}", self.bus, self.vendor_id, self.product_id)?;
        if let Some(name) = self.name() {
            write!(f, ":{name}")?;
        }
        Ok(())
    }
}
