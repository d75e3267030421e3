//! Request-scoped trace id, carried in a tokio task-local so error
//! responses and log lines can name the request without threading it
//! through every call.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

const NO_TRACE: &str = "unknown";

/// Trace id of the request being served, or `"unknown"` outside one.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| NO_TRACE.to_string())
}

/// Run `future` with `trace_id` in scope. Set by `RequestTrace`.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_outside_a_request() {
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn scoped_then_cleared() {
        let seen = with_trace_id("req-1".into(), async { trace_id() }).await;
        assert_eq!(seen, "req-1");
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn inner_scope_shadows_outer() {
        with_trace_id("outer".into(), async {
            let inner = with_trace_id("inner".into(), async { trace_id() }).await;
            assert_eq!(inner, "inner");
            assert_eq!(trace_id(), "outer");
        })
        .await;
    }
}
