//! Read-only database of supported tablets.
//!
//! Each `*.tablet` file in the data directory describes one device. Files are loaded in file
//! name order, so the device list is stable across runs.

use std::path::{Path, PathBuf};

use crate::{Error, KeyFile, Result, WacomDevice, WacomMatch};

/// File name pattern of tablet data files.
pub const TABLET_FILE_PATTERN: &str = "*.tablet";

/// In-memory database of [WacomDevice] records.
///
/// Owns every device and match record. Views handed out by [list_devices](Self::list_devices)
/// borrow from the database, and are released together with it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WacomDeviceDatabase {
    path: Option<PathBuf>,
    devices: Vec<WacomDevice>,
}

impl WacomDeviceDatabase {
    /// Creates a new, empty [WacomDeviceDatabase].
    pub const fn new() -> Self {
        Self {
            path: None,
            devices: Vec::new(),
        }
    }

    /// Loads the database from the tablet data files in `path`.
    ///
    /// Files that fail to parse are skipped. A missing or empty directory yields
    /// an empty database, which is reported by [list_devices](Self::list_devices).
    pub fn new_for_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let pattern = path.join(TABLET_FILE_PATTERN);
        let pattern = pattern.to_str().ok_or(Error::Io(format!(
            "data path contains non-Unicode bytes: {}",
            path.display()
        )))?;

        let mut files = glob::glob(pattern)?.collect::<std::result::Result<Vec<_>, _>>()?;
        files.sort();

        log::debug!("=== tablet database ===");
        log::debug!("data path:          {}", path.display());
        log::debug!("tablet files:       {:8}", files.len());

        let mut db = Self {
            path: Some(path.to_owned()),
            devices: Vec::with_capacity(files.len()),
        };

        for file in files.iter() {
            match KeyFile::load(file).and_then(|kf| WacomDevice::from_keyfile(&kf)) {
                Ok(device) => db.add_device(device),
                Err(err) => log::debug!("skipping {}: {err}", file.display()),
            }
        }

        log::debug!("devices:            {:8}", db.devices.len());

        Ok(db)
    }

    /// Creates a new [WacomDeviceDatabase] from a list of in-memory devices.
    pub fn from_devices<D: IntoIterator<Item = WacomDevice>>(devices: D) -> Self {
        let mut db = Self::new();
        devices.into_iter().for_each(|d| db.add_device(d));
        db
    }

    /// Adds a device to the database.
    ///
    /// A match already claimed by an earlier device is dropped from `device`.
    pub fn add_device(&mut self, mut device: WacomDevice) {
        let existing: Vec<&WacomMatch> = self.devices.iter().flat_map(|d| d.matches()).collect();

        let mut duplicates = Vec::new();
        device.retain_matches(|m| {
            let dup = existing.iter().any(|e| e.same_ids(m));
            if dup {
                duplicates.push(m.to_string());
            }
            !dup
        });

        for dup in duplicates.iter() {
            log::debug!("{}: duplicate match {dup}, keeping the earlier device", device.name());
        }

        self.devices.push(device);
    }

    /// Gets the data directory the database was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Gets the list of every [WacomDevice] in the database.
    ///
    /// An empty database is a load failure.
    pub fn list_devices(&self) -> Result<&[WacomDevice]> {
        if self.devices.is_empty() {
            let from = self
                .path()
                .map(|p| format!(" in {}", p.display()))
                .unwrap_or_default();
            Err(Error::DatabaseLoad(format!("no tablet devices{from}")))
        } else {
            Ok(self.devices.as_ref())
        }
    }
}

impl Drop for WacomDeviceDatabase {
    fn drop(&mut self) {
        log::trace!("releasing tablet database: {} devices", self.devices.len());
    }
}
