//! hwdb text generation.
//!
//! Emits `libwacom:name:*:input:<key>*` match lines followed by ` KEY=VALUE` property lines, in
//! the format `systemd-hwdb` compiles into `hwdb.bin`. Every block ends with a blank line.

use std::{fmt::Write as _, io, path::Path};

use heapless::String as FixedString;

use crate::{BusType, Error, Result, WacomDevice, WacomDeviceDatabase, WacomMatch};

/// Capacity of a [MatchKey].
pub const MATCH_KEY_MAX: usize = 64;

pub const ID_INPUT: &str = "ID_INPUT";
pub const ID_INPUT_TABLET: &str = "ID_INPUT_TABLET";
pub const ID_INPUT_JOYSTICK: &str = "ID_INPUT_JOYSTICK";
pub const ID_INPUT_TOUCHPAD: &str = "ID_INPUT_TOUCHPAD";
pub const ID_INPUT_TOUCHSCREEN: &str = "ID_INPUT_TOUCHSCREEN";
pub const ID_INPUT_TABLET_PAD: &str = "ID_INPUT_TABLET_PAD";

/// Fixed comment block at the top of the generated file.
pub const HWDB_HEADER: &str = "\
# hwdb entries for libwacom supported devices
# This file is generated by libwacom, do not edit
#
# The lookup key is a contract between the udev rules and the hwdb entries.
# It is not considered public API and may change.

";

/// Name of the Wireless Accessory Kit dongle.
pub const WIRELESS_KIT_NAME: &str = "Wacom Wireless Accessory Kit";

/// Bamboo and Intuos tablets behind the Wireless Accessory Kit report the dongle's IDs instead
/// of their own.
pub const WIRELESS_KIT_MATCH: WacomMatch = WacomMatch::create(BusType::Usb, 0x056a, 0x0084);

const WIRELESS_KIT_SUFFIX: &str = ":";

/// hwdb lookup key in the form `b<bus>v<vendor>p<product>`, each field four uppercase hex digits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchKey(FixedString<MATCH_KEY_MAX>);

impl MatchKey {
    /// Builds the [MatchKey] for a [WacomMatch].
    ///
    /// Returns `None` for buses without a kernel bus code.
    pub fn from_match(m: &WacomMatch) -> Option<Self> {
        let bus = m.bus_type().bus_code()?;
        let mut key = FixedString::<MATCH_KEY_MAX>::new();
        write!(key, "b{bus:04X}v{:04X}p{:04X}", m.vendor_id(), m.product_id()).ok()?;
        Some(Self(key))
    }

    /// Gets the key as a string reference.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for MatchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes hwdb entries to an [io::Write] sink.
pub struct HwdbWriter<W: io::Write> {
    out: W,
}

impl<W: io::Write> HwdbWriter<W> {
    /// Creates a new [HwdbWriter].
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the [HwdbWriter], returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes the fixed file header.
    pub fn print_header(&mut self) -> Result<()> {
        self.out.write_all(HWDB_HEADER.as_bytes())?;
        Ok(())
    }

    /// Writes the fixed Wireless Accessory Kit entries.
    ///
    /// The tablet behind the dongle is unknown, so the kit gets every block. Its Finger and Pad
    /// match lines carry a trailing `:` after the glob, as they always have in generated files.
    pub fn print_wireless_kit_quirk(&mut self) -> Result<()> {
        let key = MatchKey::from_match(&WIRELESS_KIT_MATCH)
            .ok_or(Error::Hwdb("wireless kit has no bus code".into()))?;

        self.print_comment(WIRELESS_KIT_NAME)?;
        self.print_generic(&key)?;
        self.print_finger(&key, ID_INPUT_TOUCHPAD, WIRELESS_KIT_SUFFIX)?;
        self.print_pad(&key, WIRELESS_KIT_SUFFIX)
    }

    /// Writes the entries for one match of a device.
    ///
    /// Matches on buses without a bus code (serial tablets have their own udev rules) are
    /// skipped.
    pub fn print_entry(&mut self, device: &WacomDevice, m: &WacomMatch) -> Result<()> {
        let Some(key) = MatchKey::from_match(m) else {
            log::trace!("{}: no hwdb entry for {m}", device.name());
            return Ok(());
        };

        // generic block first, then Finger, then Pad
        self.print_comment(device.name())?;
        self.print_generic(&key)?;

        if device.has_touch() {
            let touch = if device.integration_flags().is_integrated() {
                ID_INPUT_TOUCHSCREEN
            } else {
                ID_INPUT_TOUCHPAD
            };
            self.print_finger(&key, touch, "")?;
        }

        if device.num_buttons() > 0 {
            self.print_pad(&key, "")?;
        }

        Ok(())
    }

    fn print_comment(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "# {text}")?;
        Ok(())
    }

    fn print_generic(&mut self, key: &MatchKey) -> Result<()> {
        writeln!(self.out, "libwacom:name:*:input:{key}*")?;
        self.print_properties(&[(ID_INPUT, 1), (ID_INPUT_TABLET, 1), (ID_INPUT_JOYSTICK, 0)])
    }

    fn print_finger(&mut self, key: &MatchKey, touch: &str, suffix: &str) -> Result<()> {
        writeln!(self.out, "libwacom:name:* Finger:input:{key}*{suffix}")?;
        self.print_properties(&[(touch, 1)])
    }

    fn print_pad(&mut self, key: &MatchKey, suffix: &str) -> Result<()> {
        writeln!(self.out, "libwacom:name:* Pad:input:{key}*{suffix}")?;
        self.print_properties(&[(ID_INPUT_TABLET_PAD, 1)])
    }

    fn print_properties(&mut self, props: &[(&str, u8)]) -> Result<()> {
        for (name, value) in props.iter() {
            writeln!(self.out, " {name}={value}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

/// Writes the complete hwdb file for every device in `db`.
///
/// Fails before writing anything if the database has no devices.
pub fn generate<W: io::Write>(db: &WacomDeviceDatabase, out: W) -> Result<W> {
    let devices = db.list_devices()?;

    let mut writer = HwdbWriter::new(out);
    writer.print_header()?;
    writer.print_wireless_kit_quirk()?;

    for device in devices.iter() {
        for m in device.matches().iter() {
            writer.print_entry(device, m)?;
        }
    }

    Ok(writer.into_inner())
}

/// Diagnostic printed when the tablet database cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load device database.";

/// Loads the database at `path` and writes its hwdb file to `out`.
///
/// The file is rendered in memory first, so `out` sees nothing if loading fails. Any failure
/// to read the data directory is reported as [Error::DatabaseLoad].
pub fn generate_for_path<P: AsRef<Path>, W: io::Write>(path: P, mut out: W) -> Result<()> {
    let db = WacomDeviceDatabase::new_for_path(path).map_err(|err| match err {
        Error::DatabaseLoad(_) => err,
        other => Error::DatabaseLoad(format!("{other}")),
    })?;
    let hwdb = generate(&db, Vec::new())?;

    out.write_all(&hwdb)?;
    out.flush()?;

    Ok(())
}

/// Generates the hwdb file for the database at `path`, returning the process exit status.
///
/// On success the file goes to `out` and the status is `0`. On failure `out` is untouched,
/// a single diagnostic line goes to `err`, and the status is `1`.
pub fn run<P: AsRef<Path>, O: io::Write, E: io::Write>(path: P, out: O, mut err: E) -> i32 {
    match generate_for_path(path, out) {
        Ok(()) => 0,
        Err(Error::DatabaseLoad(reason)) => {
            log::debug!("{reason}");
            let _ = writeln!(err, "{LOAD_FAILURE_MESSAGE}");
            1
        }
        Err(other) => {
            let _ = writeln!(err, "Failed to write hwdb: {other}");
            1
        }
    }
}
