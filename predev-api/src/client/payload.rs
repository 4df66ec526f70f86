//! Request-body encoding: JSON by default, multipart form when a file
//! rides along.

use crate::error::PredevError;
use crate::types::request::{FileAttachment, SpecRequest};

use reqwest::multipart::{Form, Part};
use serde_json::Value;

/// Fixed multipart field name the service expects for the upload.
pub(crate) const FILE_FIELD_NAME: &str = "file";

/// Body flag signalling the server to return a pollable handle immediately.
const ASYNC_FIELD_NAME: &str = "async";

/// An encoded request body.
///
/// The content-type header (and the multipart boundary) is left entirely
/// to reqwest. Fixing a boundary-less content-type by hand corrupts the
/// form body, so nothing here ever sets that header.
pub(crate) enum SpecPayload {
    Json(Value),
    Multipart(Form),
}

/// Pick the encoding from the presence of the attachment. This is the one
/// branch point between the two strategies.
pub(crate) fn encode_spec_request(
    request: &SpecRequest,
    async_mode: bool,
) -> Result<SpecPayload, PredevError> {
    match &request.attachment {
        None => Ok(SpecPayload::Json(json_body(request, async_mode)?)),
        Some(attachment) => Ok(SpecPayload::Multipart(multipart_form(
            request, attachment, async_mode,
        )?)),
    }
}

fn json_body(request: &SpecRequest, async_mode: bool) -> Result<Value, PredevError> {
    let mut body = serde_json::to_value(request)?;
    if async_mode {
        if let Value::Object(map) = &mut body {
            map.insert(ASYNC_FIELD_NAME.to_string(), Value::Bool(true));
        }
    }
    Ok(body)
}

fn multipart_form(
    request: &SpecRequest,
    attachment: &FileAttachment,
    async_mode: bool,
) -> Result<Form, PredevError> {
    let mut form = Form::new().text("input", request.input.clone());

    if let Some(output_format) = request.output_format {
        form = form.text("outputFormat", output_format.as_str());
    }
    if let Some(current_context) = &request.current_context {
        form = form.text("currentContext", current_context.clone());
    }
    if let Some(doc_urls) = &request.doc_urls {
        // Array-valued fields travel as a single JSON-encoded text part.
        form = form.text("docURLs", serde_json::to_string(doc_urls)?);
    }
    if async_mode {
        form = form.text(ASYNC_FIELD_NAME, "true");
    }

    let mut part =
        Part::bytes(attachment.bytes.clone()).file_name(attachment.effective_file_name());
    if let Some(content_type) = &attachment.content_type {
        part = part.mime_str(content_type)?;
    }

    Ok(form.part(FILE_FIELD_NAME, part))
}
