//! Forwarding of live capacity commands from a line-oriented input.

use std::io::BufRead;
use std::thread::{self, JoinHandle};

use crate::core::{AppResult, CommandSender, SimulationError};

/// One-line usage hint printed before commands are read.
pub const COMMAND_HINT: &str =
    "Type 1 (or `increase`) to open a counter, 2 (or `decrease`) to close one.";

/// Read lines from `input` and forward recognized commands to the controller.
///
/// Returns the number of commands forwarded. Stops at end of input or once the
/// controller has shut down; anything unrecognized is skipped.
pub fn forward_commands<R: BufRead>(input: R, commands: &CommandSender) -> AppResult<u32> {
    let mut forwarded = 0;
    for line in input.lines() {
        let line = line?;
        match commands.forward_line(&line) {
            Ok(true) => forwarded += 1,
            Ok(false) => {}
            Err(SimulationError::ControllerClosed) => {
                tracing::debug!("controller stopped, no longer reading commands");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(forwarded)
}

/// Run [`forward_commands`] on a dedicated OS thread.
///
/// Blocking reads (such as stdin) stay off the async runtime.
pub fn spawn_command_reader<R>(input: R, commands: CommandSender) -> JoinHandle<AppResult<u32>>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || forward_commands(input, &commands))
}
