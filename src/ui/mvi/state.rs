/// Marker trait for reducer-owned state.
///
/// `Default` is the state at process start; `PartialEq` lets tests and the
/// render loop compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
