/// Marker trait for intents.
///
/// An intent is either a user action (tap, drag, key press, topic submit)
/// or a system event (a generation request finished).
pub trait Intent: Send + 'static {}
