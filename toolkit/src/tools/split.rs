//! Split: turn one PDF into several documents.
//!
//! The page count is not read from the file. It is simulated once, when the
//! file is selected, with [`simulated_page_count`].
//!
//! Page range expressions look like `1-3, 5, 7-9`: comma separated single
//! pages or inclusive ranges, 1-indexed.

use std::collections::BTreeSet;

use rand::Rng;

use super::{require_file, OutcomeDetail, ToolKind, ToolOutcome};
use crate::config::{SIMULATED_PAGES_MAX, SIMULATED_PAGES_MIN};
use crate::download::DownloadSpec;
use crate::error::{ToolError, ToolResult};
use crate::models::AcceptedFile;

pub const SPLIT_ARCHIVE_NAME: &str = "split-pages.zip";

/// How the document is cut.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SplitMethod {
    /// One PDF per page.
    #[default]
    All,
    /// One PDF with pages 2, 4, 6...
    Even,
    /// One PDF with pages 1, 3, 5...
    Odd,
    /// A new PDF every `n` pages.
    Every(u32),
    /// One PDF with the pages of a range expression.
    Ranges(String),
}

impl SplitMethod {
    pub fn label(&self) -> String {
        match self {
            SplitMethod::All => "Extract all pages (one PDF per page)".to_string(),
            SplitMethod::Even => "Extract even pages".to_string(),
            SplitMethod::Odd => "Extract odd pages".to_string(),
            SplitMethod::Every(n) => format!("Every {} pages", n),
            SplitMethod::Ranges(expr) => format!("Page ranges: {}", expr),
        }
    }

    /// Page lists of the documents this method produces.
    pub fn plan(&self, total_pages: u32) -> ToolResult<Vec<Vec<u32>>> {
        if total_pages == 0 {
            return Err(ToolError::InvalidPageRange(
                "the document has no pages".to_string(),
            ));
        }
        let pages = 1..=total_pages;

        let plan: Vec<Vec<u32>> = match self {
            SplitMethod::All => pages.map(|p| vec![p]).collect(),
            SplitMethod::Even => vec![pages.filter(|p| p % 2 == 0).collect()],
            SplitMethod::Odd => vec![pages.filter(|p| p % 2 == 1).collect()],
            SplitMethod::Every(0) => {
                return Err(ToolError::InvalidOption {
                    field: "every".to_string(),
                    message: "page count must be at least 1".to_string(),
                })
            }
            SplitMethod::Every(n) => pages
                .collect::<Vec<_>>()
                .chunks(*n as usize)
                .map(|chunk| chunk.to_vec())
                .collect(),
            SplitMethod::Ranges(expr) => vec![parse_page_ranges(expr, total_pages)?],
        };

        Ok(plan.into_iter().filter(|doc| !doc.is_empty()).collect())
    }
}

/// File and options chosen on the split page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitRequest {
    pub file: Option<AcceptedFile>,
    pub total_pages: u32,
    pub method: SplitMethod,
}

impl SplitRequest {
    pub fn process(&self) -> ToolResult<ToolOutcome> {
        require_file(self.file.as_ref())?;
        let plan = self.method.plan(self.total_pages)?;
        if plan.is_empty() {
            return Err(ToolError::InvalidPageRange(
                "no pages selected".to_string(),
            ));
        }

        let pages = plan.iter().map(Vec::len).sum();
        Ok(
            ToolOutcome::new(ToolKind::Split, DownloadSpec::zip(SPLIT_ARCHIVE_NAME)).with_detail(
                OutcomeDetail::Split {
                    documents: plan.len(),
                    pages,
                },
            ),
        )
    }
}

/// Page count shown for a freshly selected file.
pub fn simulated_page_count<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(SIMULATED_PAGES_MIN..=SIMULATED_PAGES_MAX)
}

/// Parse a range expression into sorted, de-duplicated page numbers.
///
/// Every part must be a page or an ascending range within
/// `1..=total_pages`.
///
/// ```
/// use pdftools::tools::parse_page_ranges;
///
/// assert_eq!(parse_page_ranges("1-3, 5, 7-9", 10).unwrap(), vec![1, 2, 3, 5, 7, 8, 9]);
/// assert!(parse_page_ranges("4-2", 10).is_err());
/// ```
pub fn parse_page_ranges(expr: &str, total_pages: u32) -> ToolResult<Vec<u32>> {
    if expr.trim().is_empty() {
        return Err(ToolError::InvalidPageRange(
            "page range cannot be empty".to_string(),
        ));
    }

    let mut pages = BTreeSet::new();
    for part in expr.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = match part.split_once('-') {
            Some((start, end)) => (parse_page(start, part)?, parse_page(end, part)?),
            None => {
                let page = parse_page(part, part)?;
                (page, page)
            }
        };

        if start > end {
            return Err(ToolError::InvalidPageRange(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        if end > total_pages {
            return Err(ToolError::InvalidPageRange(format!(
                "page {} exceeds total pages {}",
                end, total_pages
            )));
        }
        pages.extend(start..=end);
    }

    if pages.is_empty() {
        return Err(ToolError::InvalidPageRange(
            "page range cannot be empty".to_string(),
        ));
    }
    Ok(pages.into_iter().collect())
}

fn parse_page(raw: &str, part: &str) -> ToolResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(ToolError::InvalidPageRange(
            "page numbers start at 1".to_string(),
        )),
        Ok(page) => Ok(page),
        Err(_) => Err(ToolError::InvalidPageRange(format!(
            "'{}' is not a page or range",
            part
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request(method: SplitMethod, total_pages: u32) -> SplitRequest {
        SplitRequest {
            file: Some(AcceptedFile::new("book.pdf", 4096, "application/pdf")),
            total_pages,
            method,
        }
    }

    #[test]
    fn test_parse_ranges() {
        assert_eq!(parse_page_ranges("1-3", 10).unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_page_ranges("5, 1, 3", 10).unwrap(), vec![1, 3, 5]);
        assert_eq!(parse_page_ranges("1-3, 2-4", 10).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(parse_page_ranges(" 7 - 9 ,", 10).unwrap(), vec![7, 8, 9]);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for expr in ["", "  ", ",", "0", "a", "1-", "3-1", "1-11", "1-2-3", "12"] {
            assert!(
                parse_page_ranges(expr, 10).is_err(),
                "expected '{}' to be rejected",
                expr
            );
        }
    }

    #[test]
    fn test_all_pages() {
        let outcome = request(SplitMethod::All, 6).process().unwrap();
        assert_eq!(outcome.detail, OutcomeDetail::Split { documents: 6, pages: 6 });
        assert_eq!(outcome.download.file_name, SPLIT_ARCHIVE_NAME);
        assert_eq!(outcome.download.mime, "application/zip");
    }

    #[test]
    fn test_even_and_odd() {
        assert_eq!(SplitMethod::Even.plan(5).unwrap(), vec![vec![2, 4]]);
        assert_eq!(SplitMethod::Odd.plan(5).unwrap(), vec![vec![1, 3, 5]]);
    }

    #[test]
    fn test_every_n() {
        let plan = SplitMethod::Every(5).plan(12).unwrap();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[2], vec![11, 12]);
        assert!(SplitMethod::Every(0).plan(12).is_err());
    }

    #[test]
    fn test_ranges_outcome() {
        let outcome = request(SplitMethod::Ranges("1-3, 5, 7-9".into()), 10)
            .process()
            .unwrap();
        assert_eq!(outcome.detail, OutcomeDetail::Split { documents: 1, pages: 7 });
    }

    #[test]
    fn test_single_page_even_has_nothing() {
        let err = request(SplitMethod::Even, 1).process().unwrap_err();
        assert!(matches!(err, ToolError::InvalidPageRange(_)));
    }

    #[test]
    fn test_requires_file() {
        let req = SplitRequest {
            total_pages: 5,
            ..Default::default()
        };
        assert!(matches!(
            req.process().unwrap_err(),
            ToolError::MissingRequiredInput(_)
        ));
    }

    #[test]
    fn test_simulated_page_count_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let pages = simulated_page_count(&mut rng);
            assert!((SIMULATED_PAGES_MIN..=SIMULATED_PAGES_MAX).contains(&pages));
        }
    }

    proptest! {
        #[test]
        fn prop_ranges_sorted_and_in_bounds(total in 1u32..50, a in 1u32..50, b in 1u32..50) {
            let (lo, hi) = (a.min(b).min(total), a.max(b).min(total));
            let pages = parse_page_ranges(&format!("{}-{}, {}", lo, hi, lo), total).unwrap();
            prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(pages.len() as u32, hi - lo + 1);
        }

        #[test]
        fn prop_every_n_covers_all_pages(total in 1u32..60, n in 1u32..10) {
            let plan = SplitMethod::Every(n).plan(total).unwrap();
            let flat: Vec<u32> = plan.into_iter().flatten().collect();
            prop_assert_eq!(flat, (1..=total).collect::<Vec<_>>());
        }
    }
}
