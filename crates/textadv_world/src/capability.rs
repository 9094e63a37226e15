//! Capability state machines.
//!
//! Each capability owns a small state enum and the transitions allowed on it.
//! Entities and links embed the capabilities they support; the world layer
//! decides which capability a command reaches by matching on the owner's kind.
//!
//! Transitions take the owner's display name so the errors they return are
//! ready to be shown to the player.

use textadv_foundation::{Error, Result};

/// Whether something is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpenState {
    /// Shut.
    Closed,
    /// Open. Terminal: nothing closes again.
    Open,
}

/// Lock flags of something that may need a tool to open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lock {
    /// Bare hands are not enough.
    pub tool_required: bool,
    /// A fitting tool has been applied. Never reset.
    pub unlocked: bool,
}

/// Something that can be opened, optionally only with a fitting tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Openable {
    state: OpenState,
    lock: Option<Lock>,
}

impl Openable {
    /// A closed openable that never needs a tool.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            state: OpenState::Closed,
            lock: None,
        }
    }

    /// A closed openable that accepts a tool. Bare hands still work until
    /// [`require_tool`](Self::require_tool) is called.
    #[must_use]
    pub const fn lockable() -> Self {
        Self {
            state: OpenState::Closed,
            lock: Some(Lock {
                tool_required: false,
                unlocked: false,
            }),
        }
    }

    /// A closed openable that needs a tool from the start.
    #[must_use]
    pub const fn locked() -> Self {
        Self {
            state: OpenState::Closed,
            lock: Some(Lock {
                tool_required: true,
                unlocked: false,
            }),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> OpenState {
        self.state
    }

    /// Returns true once opened.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, OpenState::Open)
    }

    /// Returns true if a tool can be applied to this openable.
    #[must_use]
    pub const fn accepts_tool(&self) -> bool {
        self.lock.is_some()
    }

    /// Returns the lock flags, if any.
    #[must_use]
    pub const fn lock(&self) -> Option<Lock> {
        self.lock
    }

    /// Returns true if bare hands cannot open this right now.
    #[must_use]
    pub const fn needs_tool(&self) -> bool {
        match self.lock {
            Some(lock) => lock.tool_required && !lock.unlocked,
            None => false,
        }
    }

    /// Marks this openable as needing a tool. Returns false if it does not
    /// accept one.
    pub fn require_tool(&mut self) -> bool {
        match self.lock.as_mut() {
            Some(lock) => {
                lock.tool_required = true;
                true
            }
            None => false,
        }
    }

    /// Opens with bare hands.
    ///
    /// # Errors
    ///
    /// `AlreadyOpen` if open, `CannotOpen` if a tool is required and none has
    /// been applied yet.
    pub fn open(&mut self, name: &str) -> Result<()> {
        if self.is_open() {
            return Err(Error::already_open(name));
        }
        if self.needs_tool() {
            return Err(Error::cannot_open(format!(
                "The {name} is locked. You need something to open it."
            )));
        }
        self.state = OpenState::Open;
        Ok(())
    }

    /// Opens with a tool. `fits` tells whether the tool lists this openable
    /// among its targets.
    ///
    /// Succeeds iff the tool fits, whatever the current state. A fitting tool
    /// unlocks for good.
    ///
    /// # Errors
    ///
    /// `CannotOpen` if this openable takes no tool or the tool does not fit.
    pub fn open_with(&mut self, name: &str, tool: &str, fits: bool) -> Result<()> {
        let Some(lock) = self.lock.as_mut() else {
            return Err(Error::cannot_open(format!(
                "The {name} cannot be opened with the {tool}."
            )));
        };
        if !fits {
            return Err(Error::cannot_open(format!(
                "The {tool} does not open the {name}."
            )));
        }
        lock.unlocked = true;
        self.state = OpenState::Open;
        Ok(())
    }
}

/// Whether a vessel or a liquid source holds water.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillState {
    /// Nothing inside.
    Empty,
    /// Filled up.
    Full,
}

/// Something that can be filled and emptied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fillable {
    state: FillState,
}

impl Fillable {
    /// An empty fillable.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            state: FillState::Empty,
        }
    }

    /// A full fillable.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            state: FillState::Full,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> FillState {
        self.state
    }

    /// Returns true if full.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        matches!(self.state, FillState::Full)
    }

    /// Empty to full.
    ///
    /// # Errors
    ///
    /// `AlreadyFull` if already full.
    pub fn fill(&mut self, name: &str) -> Result<()> {
        if self.is_full() {
            return Err(Error::already_full(name));
        }
        self.state = FillState::Full;
        Ok(())
    }

    /// Full to empty.
    ///
    /// # Errors
    ///
    /// `AlreadyEmpty` if already empty.
    pub fn drain(&mut self, name: &str) -> Result<()> {
        if !self.is_full() {
            return Err(Error::already_empty(name));
        }
        self.state = FillState::Empty;
        Ok(())
    }
}

/// Whether a fragile object is still whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Integrity {
    /// Whole.
    Intact,
    /// Broken. Terminal.
    Broken,
}

/// Something that can be broken once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragile {
    state: Integrity,
    bare_handed: bool,
}

impl Fragile {
    /// An intact object that needs a powerful tool to break.
    #[must_use]
    pub const fn sturdy() -> Self {
        Self {
            state: Integrity::Intact,
            bare_handed: false,
        }
    }

    /// An intact object that breaks with bare hands.
    #[must_use]
    pub const fn flimsy() -> Self {
        Self {
            state: Integrity::Intact,
            bare_handed: true,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> Integrity {
        self.state
    }

    /// Returns true once broken.
    #[must_use]
    pub const fn is_broken(&self) -> bool {
        matches!(self.state, Integrity::Broken)
    }

    /// Returns true if bare hands are enough.
    #[must_use]
    pub const fn breaks_bare_handed(&self) -> bool {
        self.bare_handed
    }

    /// Intact to broken.
    ///
    /// # Errors
    ///
    /// `AlreadyBroken` if already broken.
    pub fn shatter(&mut self, name: &str) -> Result<()> {
        if self.is_broken() {
            return Err(Error::already_broken(name));
        }
        self.state = Integrity::Broken;
        Ok(())
    }
}

/// Whether a fire is burning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flame {
    /// Burning.
    Lit,
    /// Out.
    Unlit,
}

/// Something that can be lit and put out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ignitable {
    state: Flame,
}

impl Ignitable {
    /// A burning ignitable.
    #[must_use]
    pub const fn lit() -> Self {
        Self { state: Flame::Lit }
    }

    /// An ignitable that is out.
    #[must_use]
    pub const fn unlit() -> Self {
        Self {
            state: Flame::Unlit,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> Flame {
        self.state
    }

    /// Returns true while burning.
    #[must_use]
    pub const fn is_lit(&self) -> bool {
        matches!(self.state, Flame::Lit)
    }

    /// Unlit to lit.
    ///
    /// # Errors
    ///
    /// `AlreadyLit` if burning.
    pub fn light(&mut self, name: &str) -> Result<()> {
        if self.is_lit() {
            return Err(Error::already_lit(name));
        }
        self.state = Flame::Lit;
        Ok(())
    }

    /// Lit to unlit. The tool check happens at the world layer, which knows
    /// the tool.
    ///
    /// # Errors
    ///
    /// `AlreadyUnlit` if already out.
    pub fn extinguish(&mut self, name: &str) -> Result<()> {
        if !self.is_lit() {
            return Err(Error::already_unlit(name));
        }
        self.state = Flame::Unlit;
        Ok(())
    }
}

/// Whether a guarded item is being watched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Watch {
    /// A guard keeps an eye on it.
    Watched,
    /// Nobody is watching.
    Free,
}

/// Something that may be watched by a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guarded {
    state: Watch,
}

impl Guarded {
    /// A guarded item nobody watches yet.
    #[must_use]
    pub const fn free() -> Self {
        Self { state: Watch::Free }
    }

    /// A guarded item under watch.
    #[must_use]
    pub const fn watched() -> Self {
        Self {
            state: Watch::Watched,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> Watch {
        self.state
    }

    /// Returns true while watched.
    #[must_use]
    pub const fn is_watched(&self) -> bool {
        matches!(self.state, Watch::Watched)
    }

    /// Puts the item under watch.
    pub fn watch(&mut self) {
        self.state = Watch::Watched;
    }

    /// Nobody watches any more.
    pub fn release(&mut self) {
        self.state = Watch::Free;
    }
}
