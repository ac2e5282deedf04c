//! Edit: add text, an image or a freehand drawing to one PDF.
//!
//! Options are collected per mode but only the active mode's options are
//! checked. Colours are `#rrggbb` strings, the value of an
//! `<input type="color">`.

use serde::{Deserialize, Serialize};

use super::{require_file, ToolKind, ToolOutcome};
use crate::download::DownloadSpec;
use crate::error::{ToolError, ToolResult};
use crate::models::AcceptedFile;

pub const FONT_SIZE_RANGE: (u8, u8) = (8, 72);
pub const OPACITY_RANGE: (u8, u8) = (10, 100);
pub const PEN_SIZE_RANGE: (u8, u8) = (1, 20);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    #[default]
    Text,
    Image,
    Draw,
}

impl EditMode {
    pub const ALL: [EditMode; 3] = [EditMode::Text, EditMode::Image, EditMode::Draw];

    pub fn label(&self) -> &'static str {
        match self {
            EditMode::Text => "Add Text",
            EditMode::Image => "Add Image",
            EditMode::Draw => "Draw",
        }
    }
}

/// Where an inserted image sits on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    #[default]
    Center,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Row-major, as laid out in the position grid.
    pub const GRID: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::MiddleLeft,
        Anchor::Center,
        Anchor::MiddleRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Anchor::TopLeft => "Top Left",
            Anchor::TopCenter => "Top Center",
            Anchor::TopRight => "Top Right",
            Anchor::MiddleLeft => "Middle Left",
            Anchor::Center => "Center",
            Anchor::MiddleRight => "Middle Right",
            Anchor::BottomLeft => "Bottom Left",
            Anchor::BottomCenter => "Bottom Center",
            Anchor::BottomRight => "Bottom Right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenTool {
    #[default]
    Pen,
    Eraser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOptions {
    pub mode: EditMode,
    pub text: String,
    pub font_size: u8,
    pub text_color: String,
    pub image_opacity: u8,
    pub anchor: Anchor,
    pub pen_color: String,
    pub pen_size: u8,
    pub pen_tool: PenTool,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            mode: EditMode::Text,
            text: String::new(),
            font_size: 16,
            text_color: "#000000".to_string(),
            image_opacity: 100,
            anchor: Anchor::Center,
            pen_color: "#ff0000".to_string(),
            pen_size: 3,
            pen_tool: PenTool::Pen,
        }
    }
}

impl EditOptions {
    /// Check the options of the active mode.
    pub fn validate(&self) -> ToolResult<()> {
        match self.mode {
            EditMode::Text => {
                check_range("fontSize", self.font_size, FONT_SIZE_RANGE)?;
                parse_hex_color(&self.text_color).map_err(|e| with_field(e, "textColor"))?;
            }
            EditMode::Image => check_range("imageOpacity", self.image_opacity, OPACITY_RANGE)?,
            EditMode::Draw => {
                check_range("penSize", self.pen_size, PEN_SIZE_RANGE)?;
                parse_hex_color(&self.pen_color).map_err(|e| with_field(e, "penColor"))?;
            }
        }
        Ok(())
    }
}

/// Parse `#rrggbb` into its channels.
pub fn parse_hex_color(value: &str) -> ToolResult<(u8, u8, u8)> {
    let invalid = || ToolError::InvalidOption {
        field: "color".to_string(),
        message: format!("'{}' is not a #rrggbb colour", value),
    };

    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

fn check_range(field: &str, value: u8, (min, max): (u8, u8)) -> ToolResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ToolError::InvalidOption {
            field: field.to_string(),
            message: format!("must be between {} and {}", min, max),
        })
    }
}

fn with_field(err: ToolError, name: &str) -> ToolError {
    match err {
        ToolError::InvalidOption { message, .. } => ToolError::InvalidOption {
            field: name.to_string(),
            message,
        },
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditRequest {
    pub file: Option<AcceptedFile>,
    pub options: EditOptions,
}

impl EditRequest {
    pub fn process(&self) -> ToolResult<ToolOutcome> {
        let file = require_file(self.file.as_ref())?;
        self.options.validate()?;
        Ok(ToolOutcome::new(
            ToolKind::Edit,
            DownloadSpec::prefixed("edited", &file.name),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(options: EditOptions) -> EditRequest {
        EditRequest {
            file: Some(AcceptedFile::new("form.pdf", 100, "application/pdf")),
            options,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let options = EditOptions::default();
        assert_eq!(options.font_size, 16);
        assert_eq!(options.pen_size, 3);
        for mode in EditMode::ALL {
            let options = EditOptions { mode, ..EditOptions::default() };
            assert!(options.validate().is_ok(), "{:?}", mode);
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#000000").unwrap(), (0, 0, 0));
        assert_eq!(parse_hex_color("#FF8000").unwrap(), (255, 128, 0));
        for bad in ["", "000000", "#fff", "#gg0000", "#0000000"] {
            assert!(parse_hex_color(bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_invalid_text_color() {
        let options = EditOptions {
            text_color: "red".into(),
            ..EditOptions::default()
        };
        match request(options).process().unwrap_err() {
            ToolError::InvalidOption { field, .. } => assert_eq!(field, "textColor"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_only_active_mode_checked() {
        let options = EditOptions {
            mode: EditMode::Image,
            pen_color: "nope".into(),
            image_opacity: 5,
            ..EditOptions::default()
        };
        let err = options.validate().unwrap_err();
        assert!(matches!(err, ToolError::InvalidOption { ref field, .. } if field == "imageOpacity"));
    }

    #[test]
    fn test_anchor_grid() {
        assert_eq!(Anchor::GRID.len(), 9);
        assert_eq!(Anchor::GRID[4], Anchor::default());
        assert_eq!(Anchor::BottomRight.label(), "Bottom Right");
    }

    #[test]
    fn test_output_name() {
        let outcome = request(EditOptions::default()).process().unwrap();
        assert_eq!(outcome.download.file_name, "edited-form.pdf");
    }
}
