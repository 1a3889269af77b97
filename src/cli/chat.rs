//! Chat command: converse with the virtual coach

use std::path::Path;

use anyhow::Result;

use gambit::chat::{ChatClient, GREETING};
use gambit::config::Settings;
use gambit::profile::UserProfile;

use super::read_line;

pub fn chat_command(profile: &UserProfile, data_dir: &Path) -> Result<()> {
    let settings = Settings::load(data_dir)?;
    let client = ChatClient::new(settings.chat_endpoint);

    println!("🧙 Coach: {GREETING}");
    println!("(empty line or `quit` to leave)\n");

    loop {
        let message = read_line(&format!("{}> ", profile.name))?;
        if message.is_empty() || message == "quit" {
            println!("🧙 Coach: Good luck out there!");
            return Ok(());
        }
        println!("🧙 Coach: {}\n", client.send(&message));
    }
}
