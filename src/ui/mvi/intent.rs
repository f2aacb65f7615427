/// Something that happened: a key press, or a result coming back from the
/// worker.
pub trait Intent: Send + 'static {}
