use std::fmt;

/// Namespaced identity of an upgrade, e.g. `computercraft:wireless_modem`
#[derive(PartialEq, Eq, Hash, Clone, Debug, PartialOrd, Ord)]
pub struct UpgradeId(String);

impl UpgradeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UpgradeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for UpgradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
