//! Durable data layout of a pocket device's backing item.

use crate::{ItemRef, TagDocument, UpgradeId};

pub const NBT_COLOUR: &str = "Color";
pub const NBT_LIGHT: &str = "Light";
pub const NBT_UPGRADE: &str = "Upgrade";
pub const NBT_UPGRADE_INFO: &str = "UpgradeInfo";

/// Largest value accepted as a light colour override (24-bit RGB)
pub const MAX_LIGHT: i32 = 0xFFFFFF;

/// Dye colour of the item, or -1 if undyed
pub fn colour(item: &ItemRef) -> i32 {
    item.read_tag(|tag| tag.get_int(NBT_COLOUR).unwrap_or(-1))
}

/// Sets the dye colour. -1 removes it.
pub fn set_colour(item: &ItemRef, colour: i32) {
    item.write_tag(|tag| {
        if colour == -1 {
            tag.remove(NBT_COLOUR);
        } else {
            tag.put_int(NBT_COLOUR, colour);
        }
    });
}

/// Light colour override, or -1 if none is stored
pub fn light(item: &ItemRef) -> i32 {
    item.read_tag(|tag| {
        if tag.contains_numeric(NBT_LIGHT) {
            tag.get_int(NBT_LIGHT).unwrap_or(-1)
        } else {
            -1
        }
    })
}

/// Stores a light colour override. Values outside `0..=MAX_LIGHT` clear it.
///
/// Returns true if the document changed.
pub fn set_light(item: &ItemRef, colour: i32) -> bool {
    item.write_tag(|tag| {
        if (0..=MAX_LIGHT).contains(&colour) {
            let current = if tag.contains_numeric(NBT_LIGHT) {
                tag.get_int(NBT_LIGHT)
            } else {
                None
            };
            if current == Some(colour) {
                return false;
            }
            tag.put_int(NBT_LIGHT, colour);
            true
        } else if tag.contains_numeric(NBT_LIGHT) {
            tag.remove(NBT_LIGHT);
            true
        } else {
            false
        }
    })
}

/// Identity of the upgrade persisted on the item
pub fn upgrade_id(item: &ItemRef) -> Option<UpgradeId> {
    item.read_tag(|tag| tag.get_string(NBT_UPGRADE).map(UpgradeId::from))
}

/// Persists the upgrade identity onto the item. Any upgrade-owned data left
/// by a previous upgrade is discarded.
pub fn set_upgrade(item: &ItemRef, upgrade: Option<&UpgradeId>) {
    item.write_tag(|tag| {
        match upgrade {
            Some(id) => tag.put_string(NBT_UPGRADE, id.as_str()),
            None => {
                tag.remove(NBT_UPGRADE);
            }
        }
        tag.remove(NBT_UPGRADE_INFO);
    });
}

/// Copy of the upgrade-owned data document, empty if none exists
pub fn upgrade_info(item: &ItemRef) -> TagDocument {
    item.read_tag(|tag| tag.compound(NBT_UPGRADE_INFO).cloned().unwrap_or_default())
}

/// Edits the upgrade-owned data document in place, creating it if needed
pub fn update_upgrade_info<R>(item: &ItemRef, f: impl FnOnce(&mut TagDocument) -> R) -> R {
    item.write_tag(|tag| f(tag.compound_mut(NBT_UPGRADE_INFO)))
}
