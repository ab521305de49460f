/// Where the tablet's sensing surface is built in.
///
/// An empty set means a standalone tablet.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct IntegrationFlags(u32);
bitflags! {
    impl IntegrationFlags: u32 {
        const DISPLAY = 1 << 0;
        const SYSTEM = 1 << 1;
        const REMOTE = 1 << 2;
    }
}

impl IntegrationFlags {
    /// Creates a new [IntegrationFlags] with no bits set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Gets whether the surface is integrated into anything.
    pub fn is_integrated(&self) -> bool {
        !self.is_empty()
    }

    /// Parses the `IntegratedIn` list of a tablet data file.
    ///
    /// Unknown entries are skipped.
    pub fn from_list<'a, I: IntoIterator<Item = &'a str>>(items: I) -> Self {
        items.into_iter().fold(Self::new(), |flags, item| match item {
            "Display" => flags | Self::DISPLAY,
            "System" => flags | Self::SYSTEM,
            "Remote" => flags | Self::REMOTE,
            other => {
                log::debug!("unknown IntegratedIn entry: {other}");
                flags
            }
        })
    }
}
