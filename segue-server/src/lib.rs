//! AG-UI protocol support and HTTP endpoints for segue agents.
//!
//! This crate turns any [`segue_core::Runnable`] into an AG-UI compatible
//! SSE endpoint. The [`agui`] module holds the protocol core: event types,
//! classification, tool call correlation, and the stream adapter. The
//! [`SegueRouter`] wraps it all in an axum application.
//!
//! # Example
//!
//! ```rust,no_run
//! use segue_core::Runnable;
//! use segue_server::SegueRouter;
//!
//! # async fn example(runnable: impl Runnable + 'static) -> Result<(), Box<dyn std::error::Error>> {
//! // Build the router with an AG-UI endpoint
//! let app = SegueRouter::new(runnable)
//!     .with_agui("/api/copilotkit")
//!     .build()?;
//!
//! // Serve with axum
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The adapter can also be used without the HTTP layer, for embedding in a
//! different transport:
//!
//! ```rust
//! use futures::StreamExt;
//! use segue_server::agui::{AguiAdapter, Task};
//! # use segue_core::{RawEvent, RawEventStream, Runnable};
//! # struct MyAgent;
//! # impl Runnable for MyAgent {
//! #     fn stream_events(&self, _query: &str) -> RawEventStream {
//! #         futures::stream::iter(vec![]).boxed()
//! #     }
//! # }
//!
//! # async fn example() {
//! let adapter = AguiAdapter::new(MyAgent);
//! let mut events = Box::pin(adapter.stream_events(Task::new("run-1", "hello")));
//! while let Some(event) = events.next().await {
//!     println!("{}", serde_json::to_string(&event).unwrap());
//! }
//! # }
//! ```

pub mod agui;
pub mod error;
pub mod router;
pub(crate) mod state;

// Re-exports
pub use error::{BuildError, ServerError, ServerResult};
pub use router::SegueRouter;

// AG-UI protocol types (for consumers who need to reference the event types)
pub use agui::{AguiAdapter, AguiEvent, Task};
