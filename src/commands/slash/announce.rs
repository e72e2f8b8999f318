//! # Announce Command
//!
//! `/announce` — create a new event and post a Dyno-style announcement.

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_announce_command()]
}

fn create_announce_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("announce")
        .description("Announce a new campus event")
        .create_option(|option| {
            option
                .name("title")
                .description("Event title (e.g., AI Workshop)")
                .kind(CommandOptionType::String)
                .required(true)
                .min_length(1)
                .max_length(200)
        })
        .create_option(|option| {
            option
                .name("date")
                .description("Date (Format: YYYY-MM-DD)")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("start_time")
                .description("Start time (Format: HH:MM 24hr)")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("end_time")
                .description("End time (Format: HH:MM 24hr)")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("location")
                .description("Where is it happening?")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("description")
                .description("Optional event description")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .create_option(|option| {
            option
                .name("ping_everyone")
                .description("Ping @everyone? (default: true)")
                .kind(CommandOptionType::Boolean)
                .required(false)
        });
    command
}
