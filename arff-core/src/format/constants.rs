//! Format constants and default resource ceilings

/// Library version reported by loaders
pub const VERSION: &str = "1.1.0";

/// Attribute declaration keyword, matched case-insensitively
pub const ATTRIBUTE_KEYWORD: &str = "@attribute";

/// Prefix of every header directive
pub const DIRECTIVE_PREFIX: char = '@';

/// Prefix of comment lines
pub const COMMENT_PREFIX: char = '%';

/// Marker for a missing value in a data row
pub const MISSING_VALUE: char = '?';

/// Field delimiter of data rows
pub const DELIMITER: char = ',';

/// Characters stripped from both ends of a token
pub const TRIM_CHARS: &[char] = &[' ', '\'', '\n', '\r', '\t'];

/// Type keywords that mark an attribute as numeric (upper-case)
pub const NUMERIC_TYPES: [&str; 3] = ["REAL", "INTEGER", "NUMERIC"];

/// Prefix applied to digit-only state labels
pub const CLASS_LABEL_PREFIX: &str = "Class ";

/// Default maximum file size (100 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Default maximum number of retained samples
pub const DEFAULT_MAX_SAMPLES: usize = 1_000_000;

/// Default maximum number of declared attributes
pub const DEFAULT_MAX_FEATURES: usize = 10_000;
