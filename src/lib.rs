//! # Kitchen Shelves
//!
//! > **A simulation of a kitchen's order-holding shelves.**
//!
//! Orders arrive at random, wait on temperature-appropriate shelves while their
//! value decays, and leave with a courier or as waste. Three independently timed
//! event streams (arrivals, couriers, heartbeats) drive one shelf manager, which
//! must never see two of them interleave.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One Owner, Many Producers
//! The [`ShelfManager`](manager::ShelfManager) lives inside a single
//! [`KitchenActor`](kitchen_actor::KitchenActor). Producers hold cheap
//! [`KitchenClient`](clients::KitchenClient) clones and send requests over a
//! bounded channel; the actor handles each one to completion before receiving
//! the next. There are no locks around the shelves.
//!
//! ### Outcomes Are Values
//! A full shelf, a rejected arrival or an expired order are ordinary results, not
//! errors. Only broken invariants and a vanished actor travel through `Err`.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each layer has its own `thiserror` enum: [`OrderError`](model::OrderError),
//! [`ShelfError`](shelf::ShelfError), [`KitchenError`](kitchen_actor::KitchenError),
//! [`ConfigError`](config::ConfigError) and [`CatalogError`](sources::CatalogError).
//! Shelf errors convert into kitchen errors with `#[from]`.
//!
//! ### 2. Consistent Snapshots
//! After every mutating request the actor publishes a complete
//! [`KitchenStatus`](model::KitchenStatus) on a `watch` channel. Readers never
//! observe a shelf mid-mutation.
//!
//! ### 3. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Orders, temperatures, shelf tags and the status snapshot types.
//!
//! ### 2. The Engine ([`shelf`], [`manager`])
//! - **[`shelf`]**: one capacity-bounded shelf with its decay modifier.
//! - **[`manager`]**: routing, aging, reclamation and pickup across all four shelves.
//!
//! ### 3. The Actor ([`kitchen_actor`], [`clients`])
//! - **[`kitchen_actor`]**: the single consumer, plus mock helpers for testing.
//! - **[`clients`]**: the typed client and the [`StatusView`](clients::StatusView) boundary.
//!
//! ### 4. The Outside World ([`sources`], [`config`], [`lifecycle`])
//! - **[`sources`]**: the order catalog and the three timed producers.
//! - **[`config`]**: TOML configuration with canonical defaults.
//! - **[`lifecycle`]**: [`KitchenSystem`](lifecycle::KitchenSystem) start and shutdown.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- --catalog data/orders.json --run-for 30
//! ```

pub mod clients;
pub mod config;
pub mod kitchen_actor;
pub mod lifecycle;
pub mod manager;
pub mod model;
pub mod shelf;
pub mod sources;
