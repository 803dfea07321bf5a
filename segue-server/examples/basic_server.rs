//! Basic segue server example with a demo agent.
//!
//! This example creates an HTTP server that exposes a small scripted agent
//! via the AG-UI protocol.
//!
//! Run with:
//! ```sh
//! cargo run -p segue-server --example basic_server
//! ```
//!
//! Test with curl:
//! ```sh
//! curl -X POST http://localhost:3000/api/copilotkit \
//!   -H "Content-Type: application/json" \
//!   -d '{"message": "Hello!"}' \
//!   -N
//! ```

use futures::StreamExt;
use segue_core::{EventEmitter, RawEvent, RawEventStream, Runnable};
use segue_server::SegueRouter;
use serde_json::json;
use tokio::sync::mpsc;

/// A demo agent that narrates a short scripted run: a thinking phase, one
/// tool call, a streamed answer, and a custom chart signal.
struct DemoAgent;

impl Runnable for DemoAgent {
    fn stream_events(&self, query: &str) -> RawEventStream {
        let query = query.to_string();

        async_stream::stream! {
            yield Ok(RawEvent::chain_start("demo_agent"));
            yield Ok(RawEvent::node_start("lookup"));
            yield Ok(RawEvent::tool_start("word_count", json!({ "text": query })));
            let words = query.split_whitespace().count();
            yield Ok(RawEvent::tool_end("word_count", json!({ "words": words })));
            yield Ok(RawEvent::node_end("lookup"));

            yield Ok(RawEvent::node_start("respond"));
            let count = words.to_string();
            for part in ["Your message has ", count.as_str(), " word(s)."] {
                yield Ok(RawEvent::model_chunk(part));
            }

            // Surface a custom signal the way agent code would: through an
            // emitter, then forward whatever it queued.
            let (tx, mut rx) = mpsc::channel(8);
            let emitter = EventEmitter::new(tx);
            emitter.emit_chart("bar", json!([words]), Some("word count"));
            while let Ok(event) = rx.try_recv() {
                yield Ok(event);
            }

            yield Ok(RawEvent::node_end("respond"));
            yield Ok(RawEvent::chain_end("demo_agent"));
        }
        .boxed()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,segue=debug".into()),
        )
        .init();

    // Build the router with an AG-UI endpoint
    let app = SegueRouter::new(DemoAgent)
        .with_agui("/api/copilotkit")
        .build()?;

    // Start the server
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    println!("Server running at http://localhost:3000");
    println!("AG-UI endpoint: POST http://localhost:3000/api/copilotkit");

    axum::serve(listener, app).await?;

    Ok(())
}
