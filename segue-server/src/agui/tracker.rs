//! Correlation of tool call start/end notifications.

use std::collections::HashMap;

use uuid::Uuid;

/// Issues and retires correlation ids for in-flight tool calls.
///
/// Tool start and end notifications arrive as separate raw events linked
/// only by tool name, so the tracker maps each open call's name to a freshly
/// generated opaque id. One tracker belongs to exactly one run; access is
/// strictly sequential within that run, so no locking is involved.
///
/// A second start for a name that is already open replaces the tracked id,
/// leaving the first call unmatchable. The raw event shape carries no
/// upstream call id that would allow anything better.
#[derive(Debug, Default)]
pub struct ToolCallTracker {
    active_calls: HashMap<String, String>,
}

impl ToolCallTracker {
    /// Create a tracker with no open calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a tool call, returning the generated call id.
    pub fn start_call(&mut self, tool_name: &str) -> String {
        let call_id = Uuid::new_v4().simple().to_string();
        self.active_calls
            .insert(tool_name.to_string(), call_id.clone());
        call_id
    }

    /// Retire the open call for `tool_name`, returning its id.
    ///
    /// Returns `None` when no call is open for that name. That is an
    /// expected outcome (an orphaned end notification), not an error.
    pub fn end_call(&mut self, tool_name: &str) -> Option<String> {
        self.active_calls.remove(tool_name)
    }

    /// Look up the open call id for `tool_name` without retiring it.
    pub fn get_call_id(&self, tool_name: &str) -> Option<&str> {
        self.active_calls.get(tool_name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_then_end_returns_same_id() {
        let mut tracker = ToolCallTracker::new();

        let call_id = tracker.start_call("search");
        assert_eq!(tracker.get_call_id("search"), Some(call_id.as_str()));
        assert_eq!(tracker.end_call("search"), Some(call_id));
        assert_eq!(tracker.get_call_id("search"), None);
    }

    #[test]
    fn test_end_without_start_is_none() {
        let mut tracker = ToolCallTracker::new();
        assert_eq!(tracker.end_call("ghost"), None);
    }

    #[test]
    fn test_end_consumes_the_record() {
        let mut tracker = ToolCallTracker::new();
        tracker.start_call("search");

        assert!(tracker.end_call("search").is_some());
        assert_eq!(tracker.end_call("search"), None);
    }

    #[test]
    fn test_distinct_tools_track_independently() {
        let mut tracker = ToolCallTracker::new();

        let search_id = tracker.start_call("search");
        let fetch_id = tracker.start_call("fetch");
        assert_ne!(search_id, fetch_id);

        assert_eq!(tracker.end_call("fetch"), Some(fetch_id));
        assert_eq!(tracker.end_call("search"), Some(search_id));
    }

    #[test]
    fn test_ids_are_unique_across_calls_of_same_tool() {
        let mut tracker = ToolCallTracker::new();

        let first = tracker.start_call("search");
        tracker.end_call("search");
        let second = tracker.start_call("search");

        assert_ne!(first, second);
    }

    #[test]
    fn test_duplicate_start_replaces_tracked_id() {
        // A second start before the first end wins; the first call can no
        // longer be matched.
        let mut tracker = ToolCallTracker::new();

        let first = tracker.start_call("search");
        let second = tracker.start_call("search");
        assert_ne!(first, second);

        assert_eq!(tracker.end_call("search"), Some(second));
        assert_eq!(tracker.end_call("search"), None);
    }
}
