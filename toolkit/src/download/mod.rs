//! Synthesized downloads.
//!
//! Processing is simulated, so every download carries the same one-page
//! placeholder PDF whatever was uploaded. Only the file name and the MIME
//! type change from tool to tool.

use serde::{Deserialize, Serialize};

/// MIME type of PDF outputs.
pub const PDF_MIME: &str = "application/pdf";
/// MIME type of multi-file outputs.
pub const ZIP_MIME: &str = "application/zip";
/// MIME type of Office/text outputs.
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// Text drawn on the placeholder page.
const PLACEHOLDER_TEXT: &str = "PDF Tools";

// =============================================================================
// Download Spec
// =============================================================================

/// Name and type of the file a finished tool offers for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadSpec {
    pub file_name: String,
    pub mime: String,
}

impl DownloadSpec {
    pub fn pdf(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: PDF_MIME.to_string(),
        }
    }

    pub fn zip(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: ZIP_MIME.to_string(),
        }
    }

    pub fn octet_stream(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: OCTET_STREAM_MIME.to_string(),
        }
    }

    /// `prefix-original.pdf`, the naming used by single-file PDF tools.
    pub fn prefixed(prefix: &str, original_name: &str) -> Self {
        Self::pdf(format!("{}-{}", prefix, original_name))
    }
}

// =============================================================================
// Artifact
// =============================================================================

/// Bytes ready to hand to the browser as a blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DownloadArtifact {
    /// Package the placeholder document under the requested name and type.
    pub fn from_spec(spec: &DownloadSpec) -> Self {
        Self {
            file_name: spec.file_name.clone(),
            mime: spec.mime.clone(),
            bytes: placeholder_pdf(),
        }
    }
}

/// The fixed one-page document every tool "produces".
///
/// Header, five objects (catalog, page tree, page, content stream, font),
/// a cross-reference table with real offsets, trailer and `%%EOF`.
pub fn placeholder_pdf() -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 100 700 Td ({}) Tj ET", PLACEHOLDER_TEXT);
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /Resources << /Font << /F1 5 0 R >> >> \
         /MediaBox [0 0 612 792] /Contents 4 0 R >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut out = String::from("%PDF-1.5\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }

    let xref_start = out.len();
    out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    out.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        out.push_str(&format!("{:010} 00000 n \n", offset));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_start
    ));

    out.into_bytes()
}
