//! Simulated document job specifications
//!
//! Compress, protect, and combine are presentation-level simulations: they
//! validate their inputs and fabricate plausible outcomes without touching
//! any document bytes.

use thiserror::Error;

/// Unique identifier assigned to a submitted job
pub type JobId = u64;

/// Validation failure for a job submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
    #[error("no input files selected")]
    NoInput,
    #[error("password cannot be empty")]
    EmptyPassword,
    #[error("password too short (min 6 characters)")]
    PasswordTooShort,
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Compression quality preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    Low,
    Medium,
    High,
}

impl CompressionLevel {
    /// Retained image quality shown in the preset card
    pub fn quality_percent(&self) -> u8 {
        match self {
            CompressionLevel::Low => 90,
            CompressionLevel::Medium => 75,
            CompressionLevel::High => 60,
        }
    }

    /// Advertised size-reduction range for the preset card
    pub fn reduction_hint(&self) -> &'static str {
        match self {
            CompressionLevel::Low => "20-30%",
            CompressionLevel::Medium => "40-60%",
            CompressionLevel::High => "70-80%",
        }
    }

    /// Fraction of the input size the fabricated output reports
    pub fn output_ratio(&self) -> f64 {
        match self {
            CompressionLevel::Low => 0.75,
            CompressionLevel::Medium => 0.5,
            CompressionLevel::High => 0.25,
        }
    }
}

/// Encryption preset for the protect job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionLevel {
    /// 128-bit
    Standard,
    /// 256-bit AES
    High,
}

impl EncryptionLevel {
    /// Display label for the preset
    pub fn label(&self) -> &'static str {
        match self {
            EncryptionLevel::Standard => "Standard (128-bit)",
            EncryptionLevel::High => "High (256-bit AES)",
        }
    }
}

/// Document permission toggles carried by a protect job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    pub printing: bool,
    pub copying: bool,
    pub editing: bool,
    pub commenting: bool,
}

impl Default for Permissions {
    fn default() -> Self {
        Self {
            printing: true,
            copying: false,
            editing: false,
            commenting: true,
        }
    }
}

/// Coarse password strength feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    /// Below the 6-character minimum
    TooShort,
    Medium,
    Strong,
}

/// Rate a password by length alone
pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    if len < 6 {
        PasswordStrength::TooShort
    } else if len < 10 {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Strong
    }
}

/// Settings for a protect job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectionSettings {
    pub password: String,
    pub confirm: String,
    pub encryption: EncryptionLevel,
    pub permissions: Permissions,
}

impl ProtectionSettings {
    /// Check the password rules before submission
    pub fn validate(&self) -> Result<(), JobError> {
        if self.password.is_empty() {
            return Err(JobError::EmptyPassword);
        }
        if self.password.chars().count() < 6 {
            return Err(JobError::PasswordTooShort);
        }
        if self.password != self.confirm {
            return Err(JobError::PasswordMismatch);
        }
        Ok(())
    }
}

/// One input file in a combine job's ordered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineInput {
    pub name: String,
    pub pages: u32,
    pub size_bytes: u64,
}

/// Reorder a combine input list, as the drag-to-reorder UI does
///
/// Out-of-range indices leave the list untouched.
pub fn move_input(inputs: &mut Vec<CombineInput>, from: usize, to: usize) -> bool {
    if from >= inputs.len() || to >= inputs.len() {
        return false;
    }
    let moved = inputs.remove(from);
    inputs.insert(to, moved);
    true
}

/// What a submitted job should simulate
#[derive(Debug, Clone, PartialEq)]
pub enum JobSpec {
    Compress {
        level: CompressionLevel,
        input_bytes: u64,
    },
    Protect {
        settings: ProtectionSettings,
        input_count: u32,
    },
    Combine {
        inputs: Vec<CombineInput>,
    },
}

impl JobSpec {
    /// Validate inputs before the job is accepted
    pub fn validate(&self) -> Result<(), JobError> {
        match self {
            JobSpec::Compress { input_bytes, .. } => {
                if *input_bytes == 0 {
                    return Err(JobError::NoInput);
                }
            }
            JobSpec::Protect {
                settings,
                input_count,
            } => {
                if *input_count == 0 {
                    return Err(JobError::NoInput);
                }
                settings.validate()?;
            }
            JobSpec::Combine { inputs } => {
                if inputs.is_empty() {
                    return Err(JobError::NoInput);
                }
            }
        }
        Ok(())
    }

    /// Fabricate the result a completed job reports
    pub fn outcome(&self) -> Outcome {
        match self {
            JobSpec::Compress { level, input_bytes } => {
                let output_bytes = (*input_bytes as f64 * level.output_ratio()).round() as u64;
                Outcome::Compressed {
                    output_bytes,
                    reduction_percent: ((1.0 - level.output_ratio()) * 100.0).round() as u8,
                }
            }
            JobSpec::Protect {
                settings,
                input_count,
            } => Outcome::Protected {
                files: *input_count,
                encryption: settings.encryption,
            },
            JobSpec::Combine { inputs } => Outcome::Combined {
                pages: inputs.iter().map(|i| i.pages).sum(),
                output_bytes: inputs.iter().map(|i| i.size_bytes).sum(),
            },
        }
    }
}

/// Fabricated result of a completed job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Compressed {
        output_bytes: u64,
        reduction_percent: u8,
    },
    Protected {
        files: u32,
        encryption: EncryptionLevel,
    },
    Combined {
        pages: u32,
        output_bytes: u64,
    },
}

/// Format a byte count as the UI displays it, e.g. "15.2 MB"
pub fn format_size(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}
