use pocket_shared::{Actor, ActorKey, ActorRegistry, CarrierKind, ItemRef};

/// Returns `candidate` if it is alive and legitimately holds `item` right now.
///
/// Players must have the item in their main inventory or off-hand slot. Other
/// living actors must have it equipped in either hand. Item identity is
/// compared by handle, never by contents.
pub fn resolve<'a>(candidate: Option<&'a Actor>, item: Option<&ItemRef>) -> Option<&'a Actor> {
    let (Some(actor), Some(item)) = (candidate, item) else {
        return None;
    };
    if !actor.alive {
        return None;
    }

    let holds = match &actor.kind {
        CarrierKind::Player(player) => player.holds(item),
        CarrierKind::Living(living) => living.holds(item),
        CarrierKind::Unsupported => false,
    };

    if holds {
        Some(actor)
    } else {
        None
    }
}

/// Looks `key` up in `registry` and resolves the live actor against `item`.
pub fn resolve_key(
    registry: &dyn ActorRegistry,
    key: Option<&ActorKey>,
    item: Option<&ItemRef>,
) -> Option<Actor> {
    let actor = registry.actor(key?)?;
    resolve(Some(&actor), item)?;
    Some(actor)
}
