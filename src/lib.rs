//! # Order Bot
//!
//! > **A conversational food-ordering assistant built on resource-oriented actors.**
//!
//! The heart of the crate is a small, pure extractor that reads free text such as
//! `"I want chicken biryani and 3 roti"` and turns it into priced line items from a
//! restaurant's menu. Around it sit a chat flow that walks the user from choosing a
//! restaurant to giving a delivery address, and an actor-backed order book that
//! stores every placed order.
//!
//! ## 🚀 Core Concepts
//!
//! ### Extraction
//! One left-to-right pass over the lowercase tokens: a leading number is the quantity,
//! then the longest menu phrase of up to three words wins, then a single-word synonym.
//! Anything else is skipped. Unknown restaurants and unmatched text give an empty list,
//! never an error. See [`extractor`].
//!
//! ### Explicit conversation context
//! [`conversation::respond`] keeps no state of its own. The caller passes the
//! [`ConversationContext`](conversation::ConversationContext) in and gets the updated one
//! back inside the [`Reply`](conversation::Reply), so any number of sessions can share
//! one service.
//!
//! ### Actors for the order book
//! Placed orders live in a [`ResourceActor`](framework::ResourceActor) running in its
//! own Tokio task. The shared [`MenuCatalog`](menu::MenuCatalog) is injected as the
//! actor's context and checked in `on_create`.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Vocabulary ([`menu`], [`extractor`], [`model`])
//! - **Role**: Menus, synonyms, and the pure extraction routine.
//! - **Key items**: [`MenuCatalog`](menu::MenuCatalog), [`extractor::extract`], [`LineItem`](model::LineItem).
//!
//! ### 2. The Flow ([`conversation`])
//! - **Role**: The Welcome → SelectRestaurant → Ordering → Checkout → Payment → Delivery → NewOrder state machine.
//! - **Key items**: [`respond`](conversation::respond), [`Turn`](conversation::Turn), [`PendingOrder`](conversation::PendingOrder).
//!
//! ### 3. The Engine ([`framework`], [`order_actor`], [`clients`])
//! - **Role**: Generic actor plumbing, the `Order` entity, and the typed [`OrderClient`](clients::OrderClient).
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: Loads configuration, spawns the order book, runs turns, and shuts down cleanly.
//! - **Key items**: [`OrderingService`](lifecycle::OrderingService), [`AppConfig`](config::AppConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use order_bot::extractor::extract;
//!
//! let items = extract("2 burger 1 pizza", "tasty bites");
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[0].item, "Burger");
//! assert_eq!(items[0].quantity, 2);
//! ```
//!
//! ### Running the CLI
//!
//! ```bash
//! order-bot extract -r "desi delight" I want chicken biryani and 3 roti
//! RUST_LOG=info order-bot chat
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod conversation;
pub mod extractor;
pub mod framework;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod order_actor;
