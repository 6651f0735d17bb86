// Single source of truth for all default values.

// --- Severity ---
pub const DEFAULT_SEVERITY_HIGH: u64 = 200;
pub const DEFAULT_SEVERITY_MEDIUM: u64 = 80;
pub const DEFAULT_SEVERITY_LOW: u64 = 1;

// --- Mode ---
pub const DEFAULT_DETECT_EXPLAIN: bool = true;

// --- Evidence ---
pub const DEFAULT_EVIDENCE_LIMIT: usize = 50;

// --- Fallback ---
pub const DEFAULT_DEMO_ON_EMPTY: bool = false;
