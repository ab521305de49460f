use std::collections::BTreeSet;

use crate::{Error, IntegrationFlags, KeyFile, Result, WacomMatch};

const DEVICE_GROUP: &str = "Device";
const FEATURES_GROUP: &str = "Features";
const BUTTONS_GROUP: &str = "Buttons";

/// `[Buttons]` keys that list button letters by their physical position.
pub const BUTTON_POSITIONS: [&str; 4] = ["Left", "Right", "Top", "Bottom"];

/// One supported tablet model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WacomDevice {
    name: String,
    matches: Vec<WacomMatch>,
    has_touch: bool,
    integration_flags: IntegrationFlags,
    num_buttons: u32,
}

impl WacomDevice {
    /// Creates a new [WacomDevice].
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            matches: Vec::new(),
            has_touch: false,
            integration_flags: IntegrationFlags::new(),
            num_buttons: 0,
        }
    }

    /// Builds a [WacomDevice] from a parsed tablet data file.
    pub fn from_keyfile(file: &KeyFile) -> Result<Self> {
        let name = file
            .string(DEVICE_GROUP, "Name")
            .filter(|n| !n.is_empty())
            .ok_or(Error::Device("missing [Device] Name".into()))?;

        if !file
            .section(DEVICE_GROUP)
            .is_some_and(|s| s.has_key("DeviceMatch"))
        {
            return Err(Error::Device(format!("{name}: missing [Device] DeviceMatch")));
        }

        let matches = file
            .string_list(DEVICE_GROUP, "DeviceMatch")
            .into_iter()
            .filter_map(|m| WacomMatch::parse(m).transpose())
            .collect::<Result<Vec<WacomMatch>>>()
            .map_err(|err| Error::Device(format!("{name}: {err}")))?;

        let has_touch = file.boolean(FEATURES_GROUP, "Touch")?.unwrap_or(false);
        let integration_flags =
            IntegrationFlags::from_list(file.string_list(DEVICE_GROUP, "IntegratedIn"));

        let num_buttons = match file.integer(FEATURES_GROUP, "Buttons")? {
            Some(count) => count,
            None => {
                let letters: BTreeSet<&str> = BUTTON_POSITIONS
                    .iter()
                    .flat_map(|pos| file.string_list(BUTTONS_GROUP, pos))
                    .collect();
                letters.len() as u32
            }
        };

        Ok(Self {
            name: name.to_owned(),
            matches,
            has_touch,
            integration_flags,
            num_buttons,
        })
    }

    /// Gets the display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Builder function that sets the display name.
    pub fn with_name<N: Into<String>>(mut self, name: N) -> Self {
        self.name = name.into();
        self
    }

    /// Gets the list of [WacomMatch] rules identifying this device.
    pub fn matches(&self) -> &[WacomMatch] {
        self.matches.as_ref()
    }

    /// Builder function that sets the list of [WacomMatch] rules.
    pub fn with_matches<M: Into<Vec<WacomMatch>>>(mut self, matches: M) -> Self {
        self.matches = matches.into();
        self
    }

    pub(crate) fn retain_matches<F: FnMut(&WacomMatch) -> bool>(&mut self, f: F) {
        self.matches.retain(f);
    }

    /// Gets whether the device reports finger touch.
    pub const fn has_touch(&self) -> bool {
        self.has_touch
    }

    /// Builder function that sets touch capability.
    pub fn with_touch(mut self, has_touch: bool) -> Self {
        self.has_touch = has_touch;
        self
    }

    /// Gets the [IntegrationFlags].
    pub const fn integration_flags(&self) -> IntegrationFlags {
        self.integration_flags
    }

    /// Builder function that sets the [IntegrationFlags].
    pub fn with_integration_flags(mut self, flags: IntegrationFlags) -> Self {
        self.integration_flags = flags;
        self
    }

    /// Gets the number of pad buttons.
    pub const fn num_buttons(&self) -> u32 {
        self.num_buttons
    }

    /// Builder function that sets the number of pad buttons.
    pub fn with_num_buttons(mut self, num_buttons: u32) -> Self {
        self.num_buttons = num_buttons;
        self
    }
}
