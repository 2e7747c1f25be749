//! User-facing text, English only.

use mnemo_core::Message;

pub(crate) const APP_TITLE: &str = "Memory Game";
pub(crate) const INPUT_LABEL: &str = "How many buttons to create?";
pub(crate) const GO_BUTTON: &str = "Go!";

pub(crate) fn message_text(message: Message) -> String {
    match message {
        Message::Victory => "Excellent memory!".to_string(),
        Message::Defeat => "Wrong order!".to_string(),
        Message::InvalidInput { min, max } => {
            format!("Please enter a whole number from {min} to {max}.")
        }
    }
}
