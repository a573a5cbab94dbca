use std::fmt;

/// A volume or bind mount attached to a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountPoint {
    pub name: Option<String>,
    pub source: String,
    pub destination: String,
    pub driver: Option<String>,
    pub mode: String,
    pub read_write: bool,
}

impl Default for MountPoint {
    fn default() -> Self {
        Self {
            name: None,
            source: String::new(),
            destination: String::new(),
            driver: None,
            mode: String::new(),
            read_write: true,
        }
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.destination)?;
        if !self.read_write {
            f.write_str(":ro")?;
        }
        Ok(())
    }
}

impl From<bollard::models::MountPoint> for MountPoint {
    fn from(value: bollard::models::MountPoint) -> Self {
        MountPoint {
            name: value.name.filter(|name| !name.is_empty()),
            source: value.source.unwrap_or_default(),
            destination: value.destination.unwrap_or_default(),
            driver: value.driver.filter(|driver| !driver.is_empty()),
            mode: value.mode.unwrap_or_default(),
            read_write: value.rw.unwrap_or(true),
        }
    }
}
