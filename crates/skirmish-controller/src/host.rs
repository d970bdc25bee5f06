//! Adapter between a controller and a simulator's next-tick/commit protocol.

use log::debug;

use skirmish_core::commands::CommandBatch;
use skirmish_core::state::TickInput;

use crate::controller::EngagementController;

/// A simulator seen from one controlled bot.
pub trait Host {
    /// Input for the next tick, or `None` once the round is over.
    fn next_tick(&mut self) -> Option<TickInput>;

    /// Apply the commands and advance exactly one tick.
    fn commit(&mut self, commands: CommandBatch);

    /// True once the round is decided. The input handed out last only
    /// carries the round's final events and nothing will be committed for it.
    fn round_over(&self) -> bool {
        false
    }
}

/// Run one round: step the controller on every tick the host offers.
/// Returns the number of ticks whose commands were committed.
pub fn drive<H: Host + ?Sized>(controller: &mut EngagementController, host: &mut H) -> u64 {
    controller.begin_round();
    let mut ticks = 0;
    while let Some(input) = host.next_tick() {
        if host.round_over() {
            controller.finish_round(&input);
            break;
        }
        let commands = controller.step(&input);
        host.commit(commands);
        ticks += 1;
    }
    debug!("round over after {ticks} ticks");
    ticks
}
