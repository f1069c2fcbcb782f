//! Data layer: core types, decoding, aggregation, and encoding.
//!
//! Architecture:
//! ```text
//!  stdin / file  (csv or json)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  decode   │  parse + validate source → NumericList
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ NumericList  │  ordered Vec<Option<f32>>, read-only
//!   └─────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │   ops     │  sum / minmax / lt4 → result list
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  encode   │  csv line or json record → stdout / file
//!   └──────────┘
//! ```

pub mod decode;
pub mod encode;
pub mod model;
pub mod ops;
