//! Domain models shared across gateway components.

mod climate;
mod question;
mod upload;

pub use climate::{ClimateDocumentMetadata, ClimateFileType};
pub use question::{Answer, Question, QuestionWithAnswer};
pub use upload::{
    AggregateUploadResponse, ProcessFileResponse, ProcessingStatus, UploadedFile, UploadResponse,
};
