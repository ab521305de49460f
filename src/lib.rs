//! Generates [udev hwdb](https://www.freedesktop.org/software/systemd/man/latest/hwdb.html)
//! entries for graphics tablets.
//!
//! Reads `libwacom`-style `.tablet` data files into a [WacomDeviceDatabase], and writes a rules
//! file tagging every USB and Bluetooth tablet as `ID_INPUT_TABLET`, with its touch and pad
//! interfaces tagged as touchpad/touchscreen and tablet-pad.

#[macro_use]
extern crate bitflags;

mod bus;
mod database;
mod device;
mod error;
mod hwdb;
mod integration;
mod keyfile;
mod matches;

pub use bus::*;
pub use database::*;
pub use device::*;
pub use error::*;
pub use hwdb::*;
pub use integration::*;
pub use keyfile::*;
pub use matches::*;

/// Directory the tablet data files are read from.
pub const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
