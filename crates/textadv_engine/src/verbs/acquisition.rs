//! `take` and `give`.

use std::fmt::Write as _;

use textadv_foundation::{Error, Result};
use textadv_world::{CharacterRole, World};

use crate::outcome::{Event, Outcome};
use crate::verbs::navigation;

/// The take ladder:
///
/// 1. a for-sale entity in the room must be paid for;
/// 2. a carryable, unwatched entity goes to the inventory;
/// 3. a watched one stays put;
/// 4. a transport link of that name is boarded;
/// 5. something hidden behind a visible entity cannot be reached yet;
/// 6. anything else cannot be taken.
pub(crate) fn take(world: &mut World, name: &str) -> Result<Outcome> {
    if let Some(id) = world.visible(name) {
        world.check_takeable(id)?;
        world.pick_up(id);
        return Ok(Outcome::message(format!("You take the {name}.")).with_event(Event::Taken(id)));
    }

    let transport = world
        .link_here(name)
        .filter(|link| world.link(*link).is_transport());
    if let Some(link) = transport {
        if let Some(direction) = world.current().direction_of(link) {
            return navigation::go_direction(world, direction);
        }
    }

    if world.carried(name).is_some() {
        return Err(Error::cannot_take(format!("You already have the {name}.")));
    }
    if let Some(holder) = world.concealer_of(name) {
        let holder = world.entity(holder).name();
        return Err(Error::cannot_take(format!(
            "You cannot get to the {name} right now. Try the {holder}."
        )));
    }
    Err(Error::cannot_take(format!("The {name} cannot be taken.")))
}

/// `take <item> <holder>`: takes a named target out of a visible holder.
pub(crate) fn take_from(world: &mut World, name: &str, holder: &str) -> Result<Outcome> {
    let Some(holder_id) = world.visible(holder) else {
        return Err(Error::entity_not_found(holder));
    };
    let id = world.take_from(holder_id, name)?;
    Ok(Outcome::message(format!("You take the {name} from the {holder}."))
        .with_event(Event::Taken(id)))
}

/// `give <item> <character>`: vendors sell, guards accept.
pub(crate) fn give(world: &mut World, item: &str, recipient: &str) -> Result<Outcome> {
    let Some(item_id) = world.carried(item) else {
        return Err(Error::cannot_give(format!("You are not carrying the {item}.")));
    };
    let Some(recipient_id) = world.visible(recipient) else {
        return Err(Error::cannot_give(format!("There is no {recipient} here.")));
    };
    let Some(character) = world.entity(recipient_id).character() else {
        return Err(Error::cannot_give(format!(
            "The {recipient} cannot take anything."
        )));
    };

    match character.role.clone() {
        CharacterRole::Vendor => {
            let bought = world.buy(recipient_id, item_id)?;
            let names: Vec<&str> = bought.iter().map(|id| world.entity(*id).name()).collect();
            let message = format!(
                "You pay the {recipient} with the {item}. You now have: {}.",
                names.join(", ")
            );
            let mut outcome = Outcome::message(message).with_event(Event::Given {
                item: item_id,
                to: recipient_id,
            });
            outcome.events.extend(bought.into_iter().map(Event::Bought));
            Ok(outcome)
        }
        CharacterRole::Guard(_) => {
            let freed = world.bribe_guard(recipient_id, item_id)?;
            let mut message = format!("You give the {item} to the {recipient}.");
            if !freed.is_empty() {
                let _ = write!(message, " The {recipient} is distracted.");
            }
            let mut outcome = Outcome::message(message).with_event(Event::Given {
                item: item_id,
                to: recipient_id,
            });
            outcome.events.extend(freed.into_iter().map(Event::Freed));
            Ok(outcome)
        }
        CharacterRole::Animal(_) => Err(Error::cannot_give(format!(
            "The {recipient} is not interested in the {item}."
        ))),
    }
}
