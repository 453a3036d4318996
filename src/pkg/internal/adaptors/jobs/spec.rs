use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JobEntry {
    pub id: String,
    pub name: String,
    pub experience: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Raw bytes of a file part from a multipart form.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub data: Vec<u8>,
}
