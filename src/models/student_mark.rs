//! Student mark uploads (server-paginated list)

use serde::{Deserialize, Serialize};

use super::{null_as_default, string_or_number};
use crate::pagination::{Page, PageDescriptor};

/// One uploaded mark sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentMarkUpload {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upload_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_url: String,
}

/// Body of `GET /api/StudentMarksUpload/uploads/paginated`.
///
/// This endpoint names its fields `uploads` and `totalRecords`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentMarkUploadPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uploads: Vec<StudentMarkUpload>,
    #[serde(default)]
    pub total_records: usize,
    #[serde(default)]
    pub total_pages: usize,
}

impl StudentMarkUploadPage {
    /// Normalise, filling the request's paging values the body omits
    pub fn into_page(self, page_number: usize, page_size: usize) -> Page<StudentMarkUpload> {
        Page {
            descriptor: PageDescriptor {
                page_number,
                page_size,
                total_items: self.total_records,
                total_pages: self.total_pages,
            },
            items: self.uploads,
        }
    }
}
