use serde::Serialize;

/// `{ "data": ... }` wrapper for successful person and validation responses.
/// Errors use the `{ "error", "code" }` body built in [`crate::error`].
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
