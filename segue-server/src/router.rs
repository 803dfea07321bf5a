//! Router builder for segue HTTP endpoints.

use std::sync::Arc;

use axum::Router;
use segue_core::Runnable;
use tower_http::trace::TraceLayer;

use crate::agui::AguiAdapter;
use crate::error::BuildError;
use crate::state::AppState;

/// Builder for configuring segue HTTP endpoints.
///
/// # Example
///
/// ```rust,no_run
/// use segue_core::Runnable;
/// use segue_server::SegueRouter;
///
/// # async fn example(runnable: impl Runnable + 'static) -> Result<(), Box<dyn std::error::Error>> {
/// // Simple setup with an AG-UI endpoint
/// let app = SegueRouter::new(runnable)
///     .with_agui("/api/copilotkit")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SegueRouter {
    runnable: Arc<dyn Runnable>,
    agui_path: Option<String>,
}

impl SegueRouter {
    /// Create a new router builder with the given runnable.
    ///
    /// The runnable will be wrapped in an `Arc` for sharing across handlers.
    pub fn new(runnable: impl Runnable + 'static) -> Self {
        Self::from_arc(Arc::new(runnable))
    }

    /// Create a new router builder from an existing `Arc<dyn Runnable>`.
    ///
    /// Use this when you need to share the runnable with other parts of
    /// your application.
    pub fn from_arc(runnable: Arc<dyn Runnable>) -> Self {
        Self {
            runnable,
            agui_path: None,
        }
    }

    /// Enable the AG-UI protocol endpoint at the specified path.
    ///
    /// The endpoint accepts POST requests and responds with an SSE stream
    /// of AG-UI events.
    pub fn with_agui(mut self, path: impl Into<String>) -> Self {
        self.agui_path = Some(path.into());
        self
    }

    /// Build the router with all configured endpoints.
    ///
    /// Returns an axum `Router` that can be served directly or merged with
    /// other routes.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoEndpoints`] if no endpoints were configured.
    /// Call `.with_agui()` before `.build()`.
    pub fn build(self) -> Result<Router, BuildError> {
        let Some(agui_path) = self.agui_path else {
            return Err(BuildError::NoEndpoints);
        };

        let state = AppState::new(AguiAdapter::from_arc(self.runnable));

        use crate::agui::handler::agui_handler;
        use axum::routing::post;

        let router = Router::new()
            .route(&agui_path, post(agui_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Ok(router)
    }

    /// Build the router and nest it under a prefix path.
    ///
    /// This is useful when integrating with an existing application router.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoEndpoints`] if no endpoints were configured.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use segue_core::Runnable;
    /// # use segue_server::SegueRouter;
    /// # use axum::Router;
    /// # async fn example(runnable: impl Runnable + 'static) -> Result<(), Box<dyn std::error::Error>> {
    /// // Nest segue routes under /agent
    /// let segue = SegueRouter::new(runnable)
    ///     .with_agui("/stream")  // Will be at /agent/stream
    ///     .build_nested("/agent")?;
    ///
    /// // Merge with existing routes
    /// let app = Router::new().merge(segue);
    /// # Ok(())
    /// # }
    /// ```
    pub fn build_nested(self, prefix: impl Into<String>) -> Result<Router, BuildError> {
        Ok(Router::new().nest(&prefix.into(), self.build()?))
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
