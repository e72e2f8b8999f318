//! # Events Commands
//!
//! `/events` (upcoming) and `/now` (ongoing) definitions.

use serenity::builder::CreateApplicationCommand;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_events_command(), create_now_command()]
}

fn create_events_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("events")
        .description("Show all upcoming campus events");
    command
}

fn create_now_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("now")
        .description("Show events that are happening right now");
    command
}
