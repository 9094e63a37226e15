//! `open` and `break`.

use textadv_foundation::{Error, Result};
use textadv_world::World;

use crate::outcome::{Event, Outcome};

/// Bare-handed `open`: a visible container first, then a link here. Things
/// with nothing to open are not found.
pub(crate) fn open(world: &mut World, name: &str) -> Result<Outcome> {
    let container = world
        .visible(name)
        .filter(|id| world.entity(*id).openable().is_some());
    if let Some(id) = container {
        let revealed = world.open_entity(id)?;
        return Ok(Outcome::message(format!("You open the {name}."))
            .with_event(Event::OpenedEntity(id))
            .with_revealed(world, &revealed));
    }
    let door = world
        .link_here(name)
        .filter(|link| world.link(*link).openable().is_some());
    if let Some(link) = door {
        world.open_link(link)?;
        return Ok(Outcome::message(format!("You open the {name}."))
            .with_event(Event::OpenedLink(link)));
    }
    Err(Error::entity_not_found(name))
}

/// `open <tool> <target>`. When the first word is not carried but the second
/// is, the phrasing is read the other way round (`open door key`).
pub(crate) fn open_with(world: &mut World, first: &str, second: &str) -> Result<Outcome> {
    let (tool, tool_name, target) = if let Some(tool) = world.carried(first) {
        (tool, first, second)
    } else if let Some(tool) = world.carried(second) {
        (tool, second, first)
    } else {
        let missing = if openable_here(world, first) {
            second
        } else {
            first
        };
        return Err(Error::cannot_open(format!(
            "You are not carrying the {missing}."
        )));
    };

    if let Some(id) = world.visible(target) {
        let revealed = world.open_entity_with(id, tool)?;
        return Ok(
            Outcome::message(format!("You open the {target} with the {tool_name}."))
                .with_event(Event::OpenedEntity(id))
                .with_revealed(world, &revealed),
        );
    }
    if let Some(link) = world.link_here(target) {
        world.open_link_with(link, tool)?;
        return Ok(
            Outcome::message(format!("You open the {target} with the {tool_name}."))
                .with_event(Event::OpenedLink(link)),
        );
    }
    Err(Error::entity_not_found(target))
}

/// Returns true if `name` is something here that can be opened.
fn openable_here(world: &World, name: &str) -> bool {
    world
        .visible(name)
        .is_some_and(|id| world.entity(id).openable().is_some())
        || world
            .link_here(name)
            .is_some_and(|link| world.link(link).openable().is_some())
}

/// Bare-handed `break`, or with whatever powerful item is carried.
pub(crate) fn smash(world: &mut World, name: &str) -> Result<Outcome> {
    let Some(id) = world.visible(name) else {
        return Err(Error::entity_not_found(name));
    };
    let scattered = world.break_entity(id)?;
    Ok(Outcome::message(format!("You break the {name}."))
        .with_event(Event::Broken(id))
        .with_revealed(world, &scattered))
}
