use serde::{Deserialize, Serialize};

/// Fallback wire names when an attachment arrives without a file name.
const FALLBACK_PDF_FILE_NAME: &str = "attachment.pdf";
const FALLBACK_TEXT_FILE_NAME: &str = "attachment.txt";

/// How the service should deliver generated artifacts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Hosted spec URLs (the service default).
    Url,
    /// Inline spec content in the response body.
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Url => "url",
            OutputFormat::Json => "json",
        }
    }
}

/// A file uploaded alongside the generation request.
///
/// Content is read fully into memory before dispatch; the service caps
/// uploads around 20MB and rejects oversized files server-side.
#[derive(Debug, Clone)]
pub struct FileAttachment {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl FileAttachment {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            file_name: None,
            content_type: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Name used on the wire: the declared name, or a deterministic
    /// fallback derived from the content type.
    pub(crate) fn effective_file_name(&self) -> String {
        if let Some(name) = &self.file_name {
            return name.clone();
        }
        match self.content_type.as_deref() {
            Some(content_type) if content_type.contains("pdf") => {
                FALLBACK_PDF_FILE_NAME.to_string()
            }
            _ => FALLBACK_TEXT_FILE_NAME.to_string(),
        }
    }
}

/// What to generate. `input` is the only required field.
///
/// Unset optionals are omitted from the wire entirely, never sent as null.
/// The attachment is excluded from JSON serialization; its presence is what
/// switches the request body to multipart form encoding.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecRequest {
    /// Free-text description of the project or feature.
    pub input: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Description of the existing system, for feature-addition requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,

    /// Reference documentation URLs, forwarded in order.
    #[serde(rename = "docURLs", skip_serializing_if = "Option::is_none")]
    pub doc_urls: Option<Vec<String>>,

    #[serde(skip)]
    pub attachment: Option<FileAttachment>,
}

impl SpecRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output_format: None,
            current_context: None,
            doc_urls: None,
            attachment: None,
        }
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = Some(output_format);
        self
    }

    pub fn with_current_context(mut self, current_context: impl Into<String>) -> Self {
        self.current_context = Some(current_context.into());
        self
    }

    pub fn with_doc_urls(mut self, doc_urls: Vec<String>) -> Self {
        self.doc_urls = Some(doc_urls);
        self
    }

    pub fn with_attachment(mut self, attachment: FileAttachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}
