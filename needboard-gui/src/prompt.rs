use needboard_lib::Prompt;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Native blocking message boxes.
#[derive(Debug, Default)]
pub struct DialogPrompt;

impl Prompt for DialogPrompt {
    fn confirm(&self, message: &str) -> bool {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Confirmar")
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();

        matches!(answer, MessageDialogResult::Yes)
    }

    fn notify(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title("Casa Geriátrica São Mateus")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
