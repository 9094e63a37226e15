//! Capability operations that touch more than one object.
//!
//! These drive the state machines in [`capability`](crate::capability) with
//! the world's knowledge of names, tools and rooms, and apply the side effects
//! (revealing hidden targets, moving payments) in one place. Every method that
//! can make things appear returns the entities that became visible.

use textadv_foundation::{Error, Result};
use tracing::{debug, info};

use crate::entity::{Attention, CharacterRole, EntityKind, Sale};
use crate::id::{EntityId, LinkId};
use crate::world::World;

impl World {
    /// Opens a container bare-handed. A spilling container drops its
    /// contents into the room.
    ///
    /// # Errors
    ///
    /// `CannotOpen` if the entity is not a container or is locked,
    /// `AlreadyOpen` if it is open.
    pub fn open_entity(&mut self, id: EntityId) -> Result<Vec<EntityId>> {
        let entity = &mut self.entities[id.index()];
        let name = entity.name.clone();
        let Some(lid) = entity.openable_mut() else {
            return Err(Error::cannot_open(format!("The {name} cannot be opened.")));
        };
        lid.open(&name)?;
        Ok(self.after_opening(id))
    }

    /// Opens a container with a tool the player holds.
    ///
    /// # Errors
    ///
    /// `CannotOpen` unless the container takes tools and the tool lists it
    /// among its targets.
    pub fn open_entity_with(&mut self, id: EntityId, tool: EntityId) -> Result<Vec<EntityId>> {
        let tool_name = self.entity(tool).name.clone();
        let name = self.entity(id).name.clone();
        let fits = self.entity(tool).knows(&name);
        let Some(lid) = self.entities[id.index()].openable_mut() else {
            return Err(Error::cannot_open(format!("The {name} cannot be opened.")));
        };
        lid.open_with(&name, &tool_name, fits)?;
        info!(entity = %name, tool = %tool_name, "unlocked");
        Ok(self.after_opening(id))
    }

    /// Opens a door or hatch bare-handed.
    ///
    /// # Errors
    ///
    /// `CannotOpen` if the link has nothing to open or is locked,
    /// `AlreadyOpen` if it is open.
    pub fn open_link(&mut self, id: LinkId) -> Result<()> {
        let link = &mut self.links[id.index()];
        let name = link.name.clone();
        let Some(lid) = link.openable_mut() else {
            return Err(Error::cannot_open(format!("The {name} has nothing to open.")));
        };
        lid.open(&name)
    }

    /// Opens a door or hatch with `tool`, which need not be carried: a
    /// fastener fixed in the room unlocks the hatch it lists.
    ///
    /// # Errors
    ///
    /// `CannotOpen` unless the link takes tools and `tool` lists it among its
    /// targets.
    pub fn open_link_with(&mut self, id: LinkId, tool: EntityId) -> Result<()> {
        let tool_name = self.entity(tool).name.clone();
        let name = self.link(id).name.clone();
        let fits = self.entity(tool).knows(&name);
        let Some(lid) = self.links[id.index()].openable_mut() else {
            return Err(Error::cannot_open(format!("The {name} has nothing to open.")));
        };
        lid.open_with(&name, &tool_name, fits)?;
        info!(link = %name, tool = %tool_name, "unlocked");
        Ok(())
    }

    /// Breaks a fragile entity using bare hands or any powerful item carried.
    ///
    /// # Errors
    ///
    /// `CannotBreak` if it is not fragile or nothing strong enough is at hand,
    /// `AlreadyBroken` if it is broken.
    pub fn break_entity(&mut self, id: EntityId) -> Result<Vec<EntityId>> {
        let armed = self
            .player
            .inventory
            .iter()
            .any(|held| self.entity(held).is_powerful());
        let entity = self.entity(id);
        let Some(fragile) = entity.fragile() else {
            return Err(Error::cannot_break(format!(
                "The {} cannot be broken.",
                entity.name
            )));
        };
        if !armed && !fragile.breaks_bare_handed() && !fragile.is_broken() {
            return Err(Error::cannot_break(format!(
                "You need something powerful to break the {}.",
                entity.name
            )));
        }
        self.shatter(id)
    }

    /// Breaks a fragile entity with a specific tool.
    ///
    /// # Errors
    ///
    /// `CannotBreak` if the tool is not powerful or the target not fragile,
    /// `AlreadyBroken` if it is broken.
    pub fn break_entity_with(&mut self, id: EntityId, tool: EntityId) -> Result<Vec<EntityId>> {
        let tool = self.entity(tool);
        if !tool.is_powerful() {
            return Err(Error::cannot_break(format!(
                "The {} is not strong enough to break anything.",
                tool.name
            )));
        }
        let entity = self.entity(id);
        if entity.fragile().is_none() {
            return Err(Error::cannot_break(format!(
                "The {} cannot be broken.",
                entity.name
            )));
        }
        self.shatter(id)
    }

    /// Lights a fire.
    ///
    /// # Errors
    ///
    /// `CannotUse` if the entity does not burn, `AlreadyLit` if it burns.
    pub fn light(&mut self, id: EntityId) -> Result<()> {
        let entity = &mut self.entities[id.index()];
        let name = entity.name.clone();
        let EntityKind::Burner(fire) = &mut entity.kind else {
            return Err(Error::cannot_use(format!("The {name} does not burn.")));
        };
        fire.light(&name)?;
        info!(entity = %name, "lit");
        Ok(())
    }

    /// Puts a fire out with a full vessel. The vessel ends up empty and the
    /// fire's hidden targets appear.
    ///
    /// # Errors
    ///
    /// `CannotUse` if the entity does not burn or the tool is not a full
    /// vessel, `AlreadyUnlit` if the fire is out.
    pub fn extinguish(&mut self, id: EntityId, tool: EntityId) -> Result<Vec<EntityId>> {
        let name = self.entity(id).name.clone();
        let tool_name = self.entity(tool).name.clone();
        let Some(fire) = self.entity(id).ignitable() else {
            return Err(Error::cannot_use(format!("The {name} does not burn.")));
        };
        if !fire.is_lit() {
            return Err(Error::already_unlit(name));
        }
        if !self.entity(tool).vessel().is_some_and(|vessel| vessel.is_full()) {
            return Err(Error::cannot_use(format!(
                "You cannot put out the {name} with the {tool_name}."
            )));
        }

        if let Some(vessel) = self.entities[tool.index()].vessel_mut() {
            vessel.drain(&tool_name)?;
        }
        if let EntityKind::Burner(fire) = &mut self.entities[id.index()].kind {
            fire.extinguish(&name)?;
        }
        info!(entity = %name, tool = %tool_name, "extinguished");
        Ok(self.reveal_targets(id))
    }

    /// Fills a vessel from a liquid source, emptying the source and
    /// revealing what it hid.
    ///
    /// # Errors
    ///
    /// `CannotFill` if the vessel holds no water or the source is not a
    /// non-empty source, `AlreadyFull` if the vessel is full.
    pub fn fill_from(&mut self, vessel: EntityId, source: EntityId) -> Result<Vec<EntityId>> {
        let vessel_name = self.entity(vessel).name.clone();
        let source_name = self.entity(source).name.clone();
        if self.entity(vessel).vessel().is_none() {
            return Err(Error::cannot_fill(format!(
                "The {vessel_name} cannot hold water."
            )));
        }
        match self.entity(source).source() {
            Some(well) if well.is_full() => {}
            Some(_) => {
                return Err(Error::cannot_fill(format!("The {source_name} is dry.")));
            }
            None => {
                return Err(Error::cannot_fill(format!(
                    "You cannot fill the {vessel_name} from the {source_name}."
                )));
            }
        }

        if let Some(fillable) = self.entities[vessel.index()].vessel_mut() {
            fillable.fill(&vessel_name)?;
        }
        if let EntityKind::Source(well) = &mut self.entities[source.index()].kind {
            well.drain(&source_name)?;
        }
        info!(vessel = %vessel_name, source = %source_name, "filled");
        Ok(self.reveal_targets(source))
    }

    /// Pours a full vessel onto a fire, putting it out.
    ///
    /// # Errors
    ///
    /// `AlreadyEmpty` if the vessel is empty, `CannotUse` if the target does
    /// not burn, plus whatever [`extinguish`](Self::extinguish) reports.
    pub fn empty_onto(&mut self, vessel: EntityId, target: EntityId) -> Result<Vec<EntityId>> {
        let vessel_name = self.entity(vessel).name.clone();
        let target_name = self.entity(target).name.clone();
        let Some(water) = self.entity(vessel).vessel() else {
            return Err(Error::cannot_use(format!(
                "The {vessel_name} cannot hold water."
            )));
        };
        if !water.is_full() {
            return Err(Error::already_empty(vessel_name));
        }
        if self.entity(target).ignitable().is_none() {
            return Err(Error::cannot_use(format!(
                "Pouring the {vessel_name} on the {target_name} does nothing."
            )));
        }
        self.extinguish(target, vessel)
    }

    /// Pays a vendor. The payment goes to the vendor and every item it sells
    /// goes to the player.
    ///
    /// # Errors
    ///
    /// `CannotBuy` if the payment is not money or nothing is left for sale.
    pub fn buy(&mut self, vendor: EntityId, payment: EntityId) -> Result<Vec<EntityId>> {
        let vendor_name = self.entity(vendor).name.clone();
        if !self.entity(payment).is_money() {
            return Err(Error::cannot_buy(format!(
                "The {vendor_name} only accepts money."
            )));
        }
        let wares: Vec<EntityId> = self
            .entity(vendor)
            .targets()
            .entities()
            .filter(|ware| self.entity(*ware).is_for_sale())
            .collect();
        if wares.is_empty() {
            return Err(Error::cannot_buy(format!(
                "The {vendor_name} has nothing left to sell."
            )));
        }

        self.hand_over(payment, vendor);
        for ware in &wares {
            let ware_name = self.entity(*ware).name.clone();
            self.entities[vendor.index()].targets.remove(&ware_name);
            if let Some(item) = self.entities[ware.index()].item_mut() {
                item.sale = Sale::Sold;
            }
            self.pick_up(*ware);
            info!(entity = %ware_name, vendor = %vendor_name, "bought");
        }
        Ok(wares)
    }

    /// Gives an item to a guard. An animal distracts the guard and frees
    /// every guarded target it watches. Returns the freed items.
    ///
    /// # Errors
    ///
    /// `CannotGive` if the recipient is not a guard.
    pub fn bribe_guard(&mut self, guard: EntityId, item: EntityId) -> Result<Vec<EntityId>> {
        let guard_name = self.entity(guard).name.clone();
        if !matches!(
            self.entity(guard).character().map(|c| &c.role),
            Some(CharacterRole::Guard(_))
        ) {
            return Err(Error::cannot_give(format!(
                "The {guard_name} is not a guard."
            )));
        }
        let distracting = self.entity(item).animal().is_some();
        self.hand_over(item, guard);
        if !distracting {
            return Ok(Vec::new());
        }

        if let Some(character) = self.entities[guard.index()].character_mut() {
            character.role = CharacterRole::Guard(Attention::Distracted);
        }
        let watched: Vec<EntityId> = self.entity(guard).targets().entities().collect();
        let mut freed = Vec::new();
        for id in watched {
            if let Some(guarded) = self.entities[id.index()].guarded_mut() {
                if guarded.is_watched() {
                    guarded.release();
                    freed.push(id);
                }
            }
        }
        info!(guard = %guard_name, freed = freed.len(), "guard distracted");
        Ok(freed)
    }

    /// Takes a named target out of a container or other holder.
    ///
    /// # Errors
    ///
    /// `CannotTake` if the holder has no such entity, is a closed container,
    /// or the entity cannot be carried off.
    pub fn take_from(&mut self, holder: EntityId, name: &str) -> Result<EntityId> {
        let holder_entity = self.entity(holder);
        let holder_name = holder_entity.name.clone();
        let Some(id) = holder_entity.targets().get(name).and_then(|t| t.entity()) else {
            return Err(Error::cannot_take(format!(
                "There is no {name} in the {holder_name}."
            )));
        };
        if holder_entity.openable().is_some_and(|lid| !lid.is_open()) {
            return Err(Error::cannot_take(format!("The {holder_name} is closed.")));
        }
        self.check_takeable(id)?;
        self.entities[holder.index()].targets.remove(name);
        self.pick_up(id);
        Ok(id)
    }

    /// Whether the player may pick the entity up right now.
    ///
    /// # Errors
    ///
    /// `CannotTake` if it is for sale, watched, or not carryable.
    pub fn check_takeable(&self, id: EntityId) -> Result<()> {
        let entity = self.entity(id);
        if entity.is_for_sale() {
            return Err(Error::cannot_take(format!(
                "You have to pay for the {}!",
                entity.name
            )));
        }
        if entity.guarded().is_some_and(|guarded| guarded.is_watched()) {
            return Err(Error::cannot_take(format!(
                "The {} is being watched. You cannot take it.",
                entity.name
            )));
        }
        if !entity.is_carryable() {
            return Err(Error::cannot_take(format!(
                "The {} cannot be taken.",
                entity.name
            )));
        }
        Ok(())
    }

    fn after_opening(&mut self, id: EntityId) -> Vec<EntityId> {
        let spills = matches!(
            self.entity(id).kind(),
            EntityKind::Container(container) if container.spills
        );
        info!(entity = %self.entity(id).name, "opened");
        if spills {
            self.reveal_targets(id)
        } else {
            Vec::new()
        }
    }

    fn shatter(&mut self, id: EntityId) -> Result<Vec<EntityId>> {
        let entity = &mut self.entities[id.index()];
        let name = entity.name.clone();
        if let EntityKind::Breakable(fragile) = &mut entity.kind {
            fragile.shatter(&name)?;
        }
        debug!(entity = %name, "shattered");
        Ok(self.reveal_targets(id))
    }
}
