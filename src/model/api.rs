use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    pub error: String,
}
