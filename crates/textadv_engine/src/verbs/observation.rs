//! `look`, `inventory`, `talk` and `pet`. None of these change the world.

use textadv_foundation::{Direction, Error, Result};
use textadv_world::World;

use crate::outcome::Outcome;

pub(crate) fn look_around(world: &World) -> Outcome {
    Outcome::message(world.describe_room())
}

/// A visible or carried entity first, then a direction.
pub(crate) fn look_at(world: &World, name: &str) -> Result<Outcome> {
    if let Some(id) = world.visible(name).or_else(|| world.carried(name)) {
        return Ok(Outcome::message(world.describe_entity(id)));
    }
    match Direction::parse(name) {
        Some(direction) => Ok(Outcome::message(world.describe_direction(direction))),
        None => Err(Error::entity_not_found(name)),
    }
}

pub(crate) fn inventory(world: &World) -> Outcome {
    Outcome::message(world.describe_inventory())
}

pub(crate) fn talk(world: &World, name: &str) -> Result<Outcome> {
    let Some(id) = world.visible(name) else {
        return Err(Error::entity_not_found(name));
    };
    let Some(character) = world.entity(id).character() else {
        return Err(Error::cannot_interact(format!(
            "The {name} does not answer."
        )));
    };
    match &character.dialogue {
        Some(line) => Ok(Outcome::message(format!("The {name} says: \"{line}\""))),
        None => Err(Error::cannot_interact(format!(
            "The {name} has nothing to say."
        ))),
    }
}

pub(crate) fn pet(world: &World, name: &str) -> Result<Outcome> {
    let Some(id) = world.visible(name).or_else(|| world.carried(name)) else {
        return Err(Error::entity_not_found(name));
    };
    match world.entity(id).animal() {
        Some(animal) => Ok(Outcome::message(format!(
            "You pet the {name}. {}",
            animal.sound
        ))),
        None => Err(Error::cannot_interact(format!("You cannot pet the {name}."))),
    }
}
