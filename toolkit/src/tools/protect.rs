//! Protect: set a password and permissions on one PDF.

use serde::{Deserialize, Serialize};

use super::{require_file, ToolKind, ToolOutcome};
use crate::config::MIN_PASSWORD_LEN;
use crate::download::DownloadSpec;
use crate::error::{ToolError, ToolResult};
use crate::models::AcceptedFile;

/// What a reader may do without the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub printing: bool,
    pub copying: bool,
    pub editing: bool,
    pub commenting: bool,
    pub form_filling: bool,
}

impl Default for Permissions {
    fn default() -> Self {
        Self {
            printing: true,
            copying: true,
            editing: false,
            commenting: true,
            form_filling: true,
        }
    }
}

/// One permission checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Printing,
    Copying,
    Editing,
    Commenting,
    FormFilling,
}

impl Permission {
    pub const ALL: [Permission; 5] = [
        Permission::Printing,
        Permission::Copying,
        Permission::Editing,
        Permission::Commenting,
        Permission::FormFilling,
    ];

    /// Checkbox id.
    pub fn id(&self) -> &'static str {
        match self {
            Permission::Printing => "printing",
            Permission::Copying => "copying",
            Permission::Editing => "editing",
            Permission::Commenting => "commenting",
            Permission::FormFilling => "form-filling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Permission::Printing => "Allow printing",
            Permission::Copying => "Allow copying of content",
            Permission::Editing => "Allow editing of content",
            Permission::Commenting => "Allow commenting",
            Permission::FormFilling => "Allow form filling",
        }
    }
}

impl Permissions {
    pub fn get(&self, permission: Permission) -> bool {
        match permission {
            Permission::Printing => self.printing,
            Permission::Copying => self.copying,
            Permission::Editing => self.editing,
            Permission::Commenting => self.commenting,
            Permission::FormFilling => self.form_filling,
        }
    }

    pub fn set(&mut self, permission: Permission, allowed: bool) {
        let slot = match permission {
            Permission::Printing => &mut self.printing,
            Permission::Copying => &mut self.copying,
            Permission::Editing => &mut self.editing,
            Permission::Commenting => &mut self.commenting,
            Permission::FormFilling => &mut self.form_filling,
        };
        *slot = allowed;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProtectRequest {
    pub file: Option<AcceptedFile>,
    pub password: String,
    pub confirm: String,
    pub permissions: Permissions,
}

impl ProtectRequest {
    pub fn password_valid(&self) -> bool {
        self.password.chars().count() >= MIN_PASSWORD_LEN
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm
    }

    pub fn process(&self) -> ToolResult<ToolOutcome> {
        let file = require_file(self.file.as_ref())?;
        if !self.password_valid() {
            return Err(ToolError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }
        if !self.passwords_match() {
            return Err(ToolError::PasswordMismatch);
        }

        Ok(ToolOutcome::new(
            ToolKind::Protect,
            DownloadSpec::prefixed("protected", &file.name),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: &str, confirm: &str) -> ProtectRequest {
        ProtectRequest {
            file: Some(AcceptedFile::new("tax.pdf", 100, "application/pdf")),
            password: password.into(),
            confirm: confirm.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_permissions() {
        let p = Permissions::default();
        assert!(p.printing && p.copying && p.commenting && p.form_filling);
        assert!(!p.editing);
    }

    #[test]
    fn test_permission_fields_toggle() {
        let mut p = Permissions::default();
        for permission in Permission::ALL {
            let before = p.get(permission);
            p.set(permission, !before);
            assert_eq!(p.get(permission), !before);
        }
        assert!(p.editing);
        assert!(!p.printing);
    }

    #[test]
    fn test_weak_password() {
        let err = request("abc", "abc").process().unwrap_err();
        assert_eq!(err, ToolError::WeakPassword { min: 4 });
        assert_eq!(err.to_string(), "Password must be at least 4 characters");
    }

    #[test]
    fn test_mismatch() {
        let err = request("abcd", "abce").process().unwrap_err();
        assert_eq!(err, ToolError::PasswordMismatch);
    }

    #[test]
    fn test_protected_output() {
        let outcome = request("hunter22", "hunter22").process().unwrap();
        assert_eq!(outcome.download.file_name, "protected-tax.pdf");
    }
}
