/// File extension (without the dot) of vCard files, matched case-sensitively.
pub const VCF_EXTENSION: &str = "vcf";
pub const VCF_SUFFIX: &str = const_str::concat!(".", VCF_EXTENSION);
pub const VCF_GLOB: &str = const_str::concat!("*", VCF_SUFFIX);

/// Similarity above which two records are reported as duplicate candidates.
pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 0.9;

/// Fixed TYPE parameters written by the encoder.
pub const PHONE_TYPE: &str = "CELL";
pub const EMAIL_TYPE: &str = "HOME";
pub const ADDRESS_TYPE: &str = "HOME";

/// Settings file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "cardbox.toml";
pub const ENV_PREFIX: &str = "CARDBOX";
