/// Render-ready state of one feature.
///
/// `Default` is the state before the feature has seen any intent.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
