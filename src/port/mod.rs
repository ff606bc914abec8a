//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!     ┌─────────────────────────┐
//!     │  CLI / HTTP proxy       │  inbound adapters
//!     └────────────┬────────────┘
//!                  ▼
//!     ┌─────────────────────────┐
//!     │  Application            │  aggregation, filtering, pagination
//!     └────────────┬────────────┘
//!                  ▼
//!          ┌───────────────┐
//!          │ CatalogSource │  outbound port
//!          └───────┬───────┘
//!                  ▼
//!     ┌─────────────────────────┐
//!     │  Upstream REST client   │  outbound adapter
//!     └─────────────────────────┘
//! ```

pub mod outbound;

pub use outbound::catalog::CatalogSource;
