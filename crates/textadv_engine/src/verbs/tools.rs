//! `use <tool> <target>` and `break <target> <tool>`.

use textadv_foundation::{Error, ErrorKind, Result};
use textadv_world::{EntityId, World};
use tracing::debug;

use crate::outcome::{Event, Outcome};
use crate::verbs::acquisition;

/// The use ladder. Rungs 2 to 5 are exclusive and tried in this order:
///
/// 1. the tool must be carried;
/// 2. a powerful tool breaks a fragile target;
/// 3. a burning target is put out with the tool, a cold one is lit;
/// 4. a vessel is filled from the target when empty, poured on it when full;
/// 5. the first tool-openable link the target knows about is opened, with the
///    target as the unlocking entity;
/// 6. a transport link named by the target is boarded;
/// 7. nothing applies.
pub(crate) fn use_on(world: &mut World, tool_name: &str, target_name: &str) -> Result<Outcome> {
    let Some(tool) = world.carried(tool_name) else {
        return Err(Error::cannot_use(format!(
            "You are not carrying the {tool_name}."
        )));
    };

    if let Some(target) = world.visible(target_name) {
        return apply(world, tool, target, tool_name, target_name);
    }

    let transport = world
        .link_id(target_name)
        .is_some_and(|link| world.link(link).is_transport());
    if transport {
        return acquisition::take(world, target_name).map_err(|err| match err.kind {
            ErrorKind::CannotTake(_) => Error::cannot_use(format!(
                "You cannot ride the {target_name} with the {tool_name}."
            )),
            _ => err,
        });
    }

    Err(cannot_use(tool_name, target_name))
}

fn apply(
    world: &mut World,
    tool: EntityId,
    target: EntityId,
    tool_name: &str,
    target_name: &str,
) -> Result<Outcome> {
    let tool_entity = world.entity(tool);
    let target_entity = world.entity(target);

    if tool_entity.is_powerful() && target_entity.fragile().is_some() {
        debug!(tool = tool_name, target = target_name, "use: break");
        let scattered = world.break_entity_with(target, tool)?;
        return Ok(Outcome::message(format!(
            "You break the {target_name} with the {tool_name}."
        ))
        .with_event(Event::Broken(target))
        .with_revealed(world, &scattered));
    }

    if let Some(fire) = target_entity.ignitable() {
        debug!(tool = tool_name, target = target_name, "use: fire");
        if fire.is_lit() {
            let revealed = world.extinguish(target, tool)?;
            return Ok(Outcome::message(format!(
                "You put out the {target_name} with the {tool_name}."
            ))
            .with_event(Event::Extinguished(target))
            .with_revealed(world, &revealed));
        }
        world.light(target)?;
        return Ok(Outcome::message(format!("You light the {target_name}."))
            .with_event(Event::Lit(target)));
    }

    if let Some(vessel) = tool_entity.vessel() {
        debug!(tool = tool_name, target = target_name, "use: vessel");
        if vessel.is_full() {
            let revealed = world.empty_onto(tool, target)?;
            return Ok(Outcome::message(format!(
                "You empty the {tool_name} onto the {target_name}."
            ))
            .with_event(Event::Extinguished(target))
            .with_revealed(world, &revealed));
        }
        let revealed = world.fill_from(tool, target)?;
        return Ok(Outcome::message(format!(
            "You fill the {tool_name} from the {target_name}."
        ))
        .with_event(Event::Filled(tool))
        .with_revealed(world, &revealed));
    }

    let fastened = target_entity.targets().links().find(|link| {
        world
            .link(*link)
            .openable()
            .is_some_and(|lid| lid.accepts_tool())
    });
    if let Some(link) = fastened {
        debug!(tool = tool_name, target = target_name, "use: unfasten");
        let fits = tool_entity.knows(target_name) || tool_entity.knows(world.link(link).name());
        if !fits {
            return Err(Error::cannot_use(format!(
                "The {tool_name} does not fit the {target_name}."
            )));
        }
        world.open_link_with(link, target)?;
        let link_name = world.link(link).name();
        return Ok(Outcome::message(format!(
            "You work the {target_name} with the {tool_name}. The {link_name} opens."
        ))
        .with_event(Event::OpenedLink(link)));
    }

    Err(cannot_use(tool_name, target_name))
}

fn cannot_use(tool: &str, target: &str) -> Error {
    Error::cannot_use(format!("You cannot use the {tool} on the {target}."))
}
