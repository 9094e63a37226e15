//! `go`, `enter` and `use <transport>`.

use textadv_foundation::{Direction, Error, Result};
use textadv_world::{LinkKind, World};
use tracing::info;

use crate::outcome::{Event, Outcome};

/// `go <direction>`.
pub(crate) fn go(world: &mut World, token: &str) -> Result<Outcome> {
    let Some(direction) = Direction::parse(token) else {
        return Err(Error::cannot_go(format!("{token} is not a direction.")));
    };
    go_direction(world, direction)
}

/// Walks through the first link listed in `direction`.
///
/// An open door or any opening or transport is crossed. A closed door stops
/// the move: links listed after it in the same direction are never tried.
/// Every link kind decides the move, so only the first one is consulted.
pub(crate) fn go_direction(world: &mut World, direction: Direction) -> Result<Outcome> {
    let Some(&id) = world.current().links_toward(direction).first() else {
        return Err(Error::cannot_go(format!(
            "You cannot go {direction} from here."
        )));
    };
    let link = world.link(id);
    let passable = match link.kind() {
        LinkKind::Door(door) => door.lid.is_open(),
        LinkKind::Opening | LinkKind::Transport(_) => true,
    };
    if !passable {
        return Err(Error::cannot_go(format!("The {} is closed.", link.name())));
    }
    let to = world.traverse(id);
    info!(room = %world.room(to).name(), %direction, "walked");
    Ok(Outcome::message(world.describe_room()).with_event(Event::Moved(to)))
}

/// `enter <room-or-link>`: finds the direction of the named place and goes
/// that way.
pub(crate) fn enter(world: &mut World, name: &str) -> Result<Outcome> {
    let here = world.current_room();
    let direction = if let Some(link) = world.link_here(name) {
        world.current().direction_of(link)
    } else if let Some(room) = world.room_id(name) {
        world.current().exits().find_map(|(direction, links)| {
            links
                .iter()
                .any(|link| world.link(*link).other_end(here) == room)
                .then_some(direction)
        })
    } else {
        None
    };
    match direction {
        Some(direction) => go_direction(world, direction),
        None => Err(Error::link_not_found(name)),
    }
}

/// `use <transport>`.
pub(crate) fn ride(world: &mut World, name: &str) -> Result<Outcome> {
    let transport = world
        .link_here(name)
        .filter(|link| world.link(*link).is_transport());
    let Some(link) = transport else {
        return Err(Error::cannot_use(format!("You cannot use the {name}.")));
    };
    match world.current().direction_of(link) {
        Some(direction) => go_direction(world, direction),
        None => Err(Error::link_not_found(name)),
    }
}
