/// ======================= Ledger data provider =======================
/// Esplora API base URL - public endpoint, no authentication required
pub const DEFAULT_API_BASE_URL: &str = "https://blockstream.info/api";

/// User agent sent with every provider request
pub const USER_AGENT: &str = "silsila-transaction-explorer";

/// Request timeout for a single provider call
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;

/// Courtesy delay applied after every transaction-detail cache miss,
/// so one trace never hammers the free provider
pub const DEFAULT_FETCH_DELAY_MS: u64 = 200;

/// ======================= Trace limits =======================
/// Depth used when the caller supplies none or an out-of-range value
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Accepted depth range at the front door
pub const MIN_TRACE_DEPTH: usize = 1;
pub const MAX_TRACE_DEPTH: usize = 10;

/// Hard cap on distinct addresses discovered in one trace, root included
pub const DEFAULT_MAX_ADDRESSES: usize = 50;

/// ======================= Front door =======================
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;

pub const TRACE_USAGE_HINT: &str = "/api/trace?address=<bitcoin_address>&depth=<optional_depth>";

pub const EDUCATIONAL_NOTE: &str = "This shows the transaction history of the address. \
Each connection represents where coins came from. \
Bitcoin's public ledger makes all of this traceable.";
