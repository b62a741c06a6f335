//! Scoring policy constants
//!
//! Every number the Trust Score depends on lives here; the calculator
//! and the tests both read these rather than restating them.

/// Sub-score maximums, summing to 100
pub const PROTOCOL_MAX: u32 = 40;
pub const COMMUNITY_MAX: u32 = 20;
pub const DEPLOYMENT_MAX: u32 = 10;
pub const DOCS_MAX: u32 = 8;
pub const DEPS_MAX: u32 = 20;
pub const BADGE_MAX: u32 = 2;

/// Flat protocol credit when an evaluation has not analyzed features.
/// Pending analysis is worth most of the points so unevaluated support
/// is not punished.
pub const PROTOCOL_UNANALYZED_CREDIT: u32 = 35;

/// Per-feature protocol weights
pub const WEIGHT_TOOLS: u32 = 8;
pub const WEIGHT_RESOURCES: u32 = 8;
pub const WEIGHT_PROMPTS: u32 = 5;
pub const WEIGHT_SAMPLING: u32 = 5;
pub const WEIGHT_STDIO: u32 = 4;
pub const WEIGHT_HTTP: u32 = 4;
pub const WEIGHT_ROOTS: u32 = 3;
pub const WEIGHT_LOGGING: u32 = 3;
pub const WEIGHT_OAUTH2: u32 = 2;

/// Community step functions: first entry whose threshold the adjusted
/// value does not exceed wins; values past the table earn the `_OVER`
/// points.
pub const STAR_STEPS: [(u64, u32); 5] = [(10, 0), (50, 2), (100, 4), (500, 6), (1000, 8)];
pub const STAR_STEPS_OVER: u32 = 10;
pub const CONTRIBUTOR_STEPS: [(u64, u32); 3] = [(1, 0), (3, 2), (10, 4)];
pub const CONTRIBUTOR_STEPS_OVER: u32 = 6;
pub const ISSUE_STEPS: [(u64, u32); 2] = [(5, 0), (20, 2)];
pub const ISSUE_STEPS_OVER: u32 = 4;

/// Deployment maturity credits
pub const CI_CREDIT: u32 = 5;
pub const RELEASES_CREDIT: u32 = 5;

/// A readme must be longer than this to earn documentation credit
pub const README_MIN_CHARS: usize = 100;

/// Brand name looked for in readmes for the badge-usage credit
pub const BRAND_NAME: &str = "MCPdex";

/// Dependency scoring policy
pub const DEPS_UNANALYZED_CREDIT: u32 = 15;
pub const SIGNIFICANT_IMPORTANCE: u8 = 5;
pub const SIGNIFICANT_ALLOWANCE: usize = 10;
pub const COUNT_PENALTY_CAP: u32 = 10;
pub const RARITY_MIN_POPULATION: usize = 10;
pub const RARITY_MIN_USERS: usize = 5;
pub const RARITY_PENALTY: u32 = 2;
pub const RARITY_PENALTY_CAP: u32 = 10;

/// Fixed breakdown for remote-endpoint records, which are never
/// evaluated against repository or dependency signals
pub const REMOTE_PROTOCOL: u32 = 30;
pub const REMOTE_COMMUNITY: u32 = 15;
pub const REMOTE_DEPLOYMENT: u32 = 8;
pub const REMOTE_DOCS: u32 = 6;
pub const REMOTE_DEPS: u32 = 15;
pub const REMOTE_BADGE: u32 = 1;
pub const REMOTE_TOTAL: u32 = 75;
