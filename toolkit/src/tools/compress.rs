//! Compress: shrink one PDF at a chosen level.
//!
//! Sizes are simulated from the original size and the level: at level 100
//! the output is 20% of the input, at level 10 it is 92%.

use serde::{Deserialize, Serialize};

use super::{require_file, OutcomeDetail, ToolKind, ToolOutcome};
use crate::download::DownloadSpec;
use crate::error::ToolResult;
use crate::models::AcceptedFile;

pub const MIN_LEVEL: u8 = 10;
pub const MAX_LEVEL: u8 = 100;

/// At level 100 the output keeps 100 of every 500 bytes, 4 fewer per level.
const SIZE_SCALE: u128 = 500;
const SCALE_PER_LEVEL: u128 = 4;

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Radio presets above the level slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl CompressionPreset {
    pub const ALL: [CompressionPreset; 3] = [
        CompressionPreset::Low,
        CompressionPreset::Medium,
        CompressionPreset::High,
    ];

    pub fn level(&self) -> u8 {
        match self {
            CompressionPreset::Low => 30,
            CompressionPreset::Medium => 70,
            CompressionPreset::High => 90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompressionPreset::Low => "Low",
            CompressionPreset::Medium => "Medium",
            CompressionPreset::High => "High",
        }
    }

    /// The preset whose level is exactly `level`, if any.
    pub fn from_level(level: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.level() == level)
    }
}

/// Keep a slider value inside the supported range.
pub fn clamp_level(level: u8) -> u8 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Simulated output size for `original` bytes at `level`.
pub fn compressed_size(original: u64, level: u8) -> u64 {
    let kept = SIZE_SCALE - SCALE_PER_LEVEL * u128::from(clamp_level(level));
    (u128::from(original) * kept / SIZE_SCALE) as u64
}

/// Whole percent saved, 0 when the original was empty.
pub fn reduction_percent(original: u64, compressed: u64) -> u32 {
    if original == 0 {
        return 0;
    }
    let saved = u128::from(original.saturating_sub(compressed));
    let original = u128::from(original);
    ((saved * 200 + original) / (original * 2)) as u32
}

/// Human readable size: `0 Bytes`, `512 Bytes`, `1.5 KB`, `2.25 MB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressRequest {
    pub file: Option<AcceptedFile>,
    pub level: u8,
}

impl Default for CompressRequest {
    fn default() -> Self {
        Self {
            file: None,
            level: CompressionPreset::default().level(),
        }
    }
}

impl CompressRequest {
    pub fn process(&self) -> ToolResult<ToolOutcome> {
        let file = require_file(self.file.as_ref())?;
        let compressed = compressed_size(file.size, self.level);

        Ok(
            ToolOutcome::new(ToolKind::Compress, DownloadSpec::prefixed("compressed", &file.name))
                .with_detail(OutcomeDetail::Compressed {
                    original: file.size,
                    compressed,
                    reduction_percent: reduction_percent(file.size, compressed),
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use proptest::prelude::*;

    #[test]
    fn test_presets() {
        assert_eq!(CompressionPreset::default().level(), 70);
        assert_eq!(CompressionPreset::from_level(30), Some(CompressionPreset::Low));
        assert_eq!(CompressionPreset::from_level(55), None);
    }

    #[test]
    fn test_clamp_level() {
        assert_eq!(clamp_level(0), 10);
        assert_eq!(clamp_level(50), 50);
        assert_eq!(clamp_level(200), 100);
    }

    #[test]
    fn test_compressed_size() {
        assert_eq!(compressed_size(1000, 70), 440);
        assert_eq!(compressed_size(1000, 100), 200);
        assert_eq!(compressed_size(1000, 10), 920);
        assert_eq!(compressed_size(0, 90), 0);
    }

    #[test]
    fn test_reduction_percent() {
        assert_eq!(reduction_percent(1000, 440), 56);
        assert_eq!(reduction_percent(0, 0), 0);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn test_outcome() {
        let request = CompressRequest {
            file: Some(AcceptedFile::new("report.pdf", 1_000_000, "application/pdf")),
            level: 90,
        };
        let outcome = request.process().unwrap();
        assert_eq!(outcome.download.file_name, "compressed-report.pdf");
        assert_eq!(
            outcome.detail,
            OutcomeDetail::Compressed {
                original: 1_000_000,
                compressed: 280_000,
                reduction_percent: 72,
            }
        );
    }

    #[test]
    fn test_requires_file() {
        let err = CompressRequest::default().process().unwrap_err();
        assert!(matches!(err, ToolError::MissingRequiredInput(_)));
    }

    proptest! {
        #[test]
        fn prop_never_grows(original in 1_000u64..10_000_000_000, level in any::<u8>()) {
            let compressed = compressed_size(original, level);
            prop_assert!(compressed <= original);
            prop_assert!(reduction_percent(original, compressed) <= 80);
        }
    }
}
