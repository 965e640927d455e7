use thiserror::Error;

/// Failure converting between a typed record and its draft representation.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("{collection}: {source}")]
    Decode {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{collection}: expected an array of records")]
    NotAnArray { collection: String },
}

impl RecordError {
    pub(crate) fn decode(collection: &str, source: serde_json::Error) -> Self {
        RecordError::Decode {
            collection: collection.to_string(),
            source,
        }
    }

    pub(crate) fn not_an_array(collection: &str) -> Self {
        RecordError::NotAnArray {
            collection: collection.to_string(),
        }
    }
}
