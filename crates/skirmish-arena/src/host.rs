//! `Host` implementation backed by an `Arena`.

use skirmish_controller::Host;
use skirmish_core::commands::CommandBatch;
use skirmish_core::state::{OwnState, TickInput};

use crate::engine::Arena;

/// Plays one round. Once the round is decided the controller still gets a
/// closing tick carrying the last events (e.g. the hit that ended it), and
/// `round_over` reports it so no commands are expected for it.
pub struct ArenaHost {
    arena: Arena,
    /// Own state handed out last; stands in once the controlled bot is gone.
    last_own: Option<OwnState>,
    closed: bool,
}

impl ArenaHost {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            last_own: None,
            closed: false,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn into_arena(self) -> Arena {
        self.arena
    }

    fn current_own(&self) -> Option<OwnState> {
        if let Some(own) = self.arena.own_state() {
            return Some(own);
        }
        let mut wreck = self.last_own.clone()?;
        wreck.energy = 0.0;
        wreck.velocity = 0.0;
        wreck.others = self.arena.others();
        Some(wreck)
    }
}

impl Host for ArenaHost {
    fn next_tick(&mut self) -> Option<TickInput> {
        if self.closed {
            return None;
        }
        let own = self.current_own()?;
        self.closed = self.arena.outcome().is_some();
        self.last_own = Some(own.clone());
        Some(TickInput {
            tick: self.arena.tick(),
            own,
            events: self.arena.take_events(),
        })
    }

    fn commit(&mut self, commands: CommandBatch) {
        if !self.closed {
            self.arena.step(&commands);
        }
    }

    fn round_over(&self) -> bool {
        self.closed
    }
}
