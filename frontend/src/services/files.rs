//! Browser file handles to toolkit metadata.

use pdftools::AcceptedFile;
use web_sys::{File, FileList};

/// Metadata of every file in a picker or drop `FileList`, in order.
pub fn accepted_files(list: &FileList) -> Vec<AcceptedFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| from_file(&file))
        .collect()
}

pub fn from_file(file: &File) -> AcceptedFile {
    describe(file.name(), file.size(), file.type_())
}

/// `File.size` is a JS number; negative or NaN sizes become 0.
fn describe(name: String, size: f64, mime: String) -> AcceptedFile {
    let size = if size.is_finite() && size > 0.0 {
        size as u64
    } else {
        0
    };
    AcceptedFile::new(name, size, mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_sizes() {
        let file = describe("a.pdf".into(), 2048.0, "application/pdf".into());
        assert_eq!(file.size, 2048);
        assert_eq!(describe("b".into(), f64::NAN, String::new()).size, 0);
        assert_eq!(describe("c".into(), -1.0, String::new()).size, 0);
    }
}
