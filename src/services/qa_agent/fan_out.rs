use crate::errors::{UnitFailure, UnitFailureCause, UnitKind};
use crate::utils::{Diagnostic, DiagnosticLevel, DiagnosticSink};
use futures::future::{join_all, BoxFuture};
use std::any::Any;
use std::time::Duration;
use tokio::task::{self, JoinError};

/// One detector or analyzer invocation, ready to be spawned.
pub struct UnitTask<T> {
    pub name: String,
    pub timeout: Duration,
    pub run: BoxFuture<'static, anyhow::Result<T>>,
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn join_failure(error: JoinError) -> UnitFailureCause {
    if error.is_panic() {
        UnitFailureCause::Panicked(panic_message(error.into_panic()))
    } else {
        UnitFailureCause::Failed("task was cancelled".to_string())
    }
}

/// Spawns every task, waits for all of them and returns the successful
/// outputs in task order. Failures, panics and timeouts are recorded in the
/// sink and dropped; they never cancel sibling tasks.
pub async fn fan_out<T: Send + 'static>(
    kind: UnitKind,
    tasks: Vec<UnitTask<T>>,
    sink: &dyn DiagnosticSink,
) -> Vec<(String, T)> {
    let mut units = Vec::with_capacity(tasks.len());
    let mut handles = Vec::with_capacity(tasks.len());

    for UnitTask { name, timeout, run } in tasks {
        units.push((name, timeout));
        handles.push(task::spawn(tokio::time::timeout(timeout, run)));
    }

    let results = join_all(handles).await;

    let mut outputs = Vec::with_capacity(results.len());
    for ((unit, timeout), result) in units.into_iter().zip(results) {
        let cause = match result {
            Ok(Ok(Ok(output))) => {
                outputs.push((unit, output));
                continue;
            }
            Ok(Ok(Err(e))) => UnitFailureCause::Failed(format!("{:#}", e)),
            Ok(Err(_elapsed)) => UnitFailureCause::TimedOut(timeout),
            Err(e) => join_failure(e),
        };

        let failure = UnitFailure { unit, kind, cause };
        sink.record(Diagnostic::new(
            DiagnosticLevel::Error,
            Some(&failure.unit),
            failure.to_string(),
        ));
    }

    outputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemorySink;

    fn task<F>(name: &str, timeout_ms: u64, run: F) -> UnitTask<u32>
    where
        F: std::future::Future<Output = anyhow::Result<u32>> + Send + 'static,
    {
        UnitTask {
            name: name.to_string(),
            timeout: Duration::from_millis(timeout_ms),
            run: Box::pin(run),
        }
    }

    async fn succeed_after(value: u32, delay_ms: u64) -> anyhow::Result<u32> {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        Ok(value)
    }

    async fn fail() -> anyhow::Result<u32> {
        anyhow::bail!("boom")
    }

    async fn explode() -> anyhow::Result<u32> {
        panic!("detector exploded")
    }

    #[tokio::test]
    async fn keeps_order_and_isolates_failures() {
        let sink = MemorySink::new();
        let tasks = vec![
            task("slow_ok", 1_000, succeed_after(1, 20)),
            task("fails", 1_000, fail()),
            task("panics", 1_000, explode()),
            task("hangs", 10, succeed_after(3, 5_000)),
            task("fast_ok", 1_000, succeed_after(2, 0)),
        ];

        let outputs = fan_out(UnitKind::Detector, tasks, &sink).await;
        assert_eq!(
            outputs,
            vec![("slow_ok".to_string(), 1), ("fast_ok".to_string(), 2)]
        );

        let messages: Vec<String> = sink.errors().into_iter().map(|d| d.message).collect();
        assert_eq!(
            messages,
            vec![
                "detector fails failed: boom".to_string(),
                "detector panics failed: panicked: detector exploded".to_string(),
                "detector hangs failed: timed out after 10ms".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn empty_phase_yields_nothing() {
        let sink = MemorySink::new();
        let outputs = fan_out::<u32>(UnitKind::Analyzer, Vec::new(), &sink).await;
        assert!(outputs.is_empty());
        assert!(sink.entries().is_empty());
    }
}
