//! Background side of the UI: runs generation requests off the event loop.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;

use crate::generation::DeckGenerator;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Serve `UiCommand`s until the channel closes.
///
/// Each request runs in its own task and nothing is cancelled; results may
/// arrive out of order and are tagged with their request id.
pub async fn run_command_worker(
    mut commands: Receiver<UiCommand>,
    generator: Arc<dyn DeckGenerator>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::GenerateDeck { request, topic } => {
                let generator = Arc::clone(&generator);
                let events = events.clone();
                tokio::spawn(async move {
                    let result = generator.generate(&topic).await.map_err(|err| {
                        tracing::error!(
                            request = request.value(),
                            topic = %topic,
                            error = %err,
                            "Failed to generate deck"
                        );
                        err.user_message().to_string()
                    });
                    // The UI may already be gone.
                    let _ = events.send(AppEvent::DeckGenerated { request, result });
                });
            }
        }
    }
    tracing::debug!("Command channel closed, worker stopping");
}
