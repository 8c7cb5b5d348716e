//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by the
//! `RUST_LOG` environment variable (default `warn`). Output goes to stderr so
//! that `order-bot extract` can print clean JSON on stdout.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown, and final store size
//! - **Order Book**: creates, summaries, and rejected drafts with the reason
//! - **Conversation**: the state each message arrives in and the food type picked at Welcome
//! - **Extraction**: raw text and the number of matched items, at `trace`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Placed orders and lifecycle events
//! RUST_LOG=info order-bot chat
//!
//! # Every request and conversation turn
//! RUST_LOG=debug order-bot chat
//!
//! # Extraction details for a single line
//! RUST_LOG=order_bot::extractor=trace order-bot extract -r "tasty bites" 2 burger
//! ```
//!
//! With `RUST_LOG=info` a full checkout looks like:
//!
//! ```text
//! INFO Ordering service started restaurants=2
//! INFO Actor started entity_type="Order"
//! INFO Created entity_type="Order" id=ORDER10001 size=1
//! INFO handle:place_order: Order placed id=ORDER10001 state=Delivery restaurant=tasty bites items=2
//! INFO Action ok entity_type="Order" id=ORDER10001
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // entity type is already a field
        .compact()
        .init();
}
