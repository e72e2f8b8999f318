//! Shared context for command handlers

use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::id::ChannelId;

use crate::features::events::EventStore;

/// Shared state handed to every command handler: the event store and the
/// locked announcement channel.
#[derive(Clone)]
pub struct CommandContext {
    pub store: EventStore,
    pub announce_channel_id: ChannelId,
}

impl CommandContext {
    pub fn new(store: EventStore, announce_channel_id: ChannelId) -> Self {
        Self {
            store,
            announce_channel_id,
        }
    }

    /// All herald commands are restricted to the announcement channel.
    pub fn in_announce_channel(&self, command: &ApplicationCommandInteraction) -> bool {
        command.channel_id == self.announce_channel_id
    }
}
