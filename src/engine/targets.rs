// src/engine/targets.rs

//! Independent evaluation of one rule set against several targets.

use tracing::{debug, info};

use crate::dag::RuleGraph;
use crate::engine::executor::RuleExecutor;
use crate::engine::report::SessionReport;
use crate::engine::session::Session;
use crate::errors::{Error, Result};

/// Run one session per target, in parallel.
///
/// Each target gets its own [`RuleGraph::clone`] (the rule catalog is
/// shared, the scheduling state is not) and its own executor built by
/// `make_executor`. Sessions run on Tokio's blocking pool since rule
/// evaluation is synchronous.
///
/// Reports are returned in the same order as `targets`. The first session
/// error (e.g. a dependency cycle) is returned after all sessions finished.
pub async fn run_per_target<P, T, E, F>(
    graph: &RuleGraph<P>,
    targets: Vec<T>,
    mut make_executor: F,
) -> Result<Vec<(T, SessionReport)>>
where
    P: Send + Sync + 'static,
    T: ToString + Send + 'static,
    E: RuleExecutor<P> + Send + 'static,
    F: FnMut(&T) -> E,
{
    info!(targets = targets.len(), "evaluating rule set per target");

    let mut handles = Vec::with_capacity(targets.len());

    for target in targets {
        let executor = make_executor(&target);
        let session = Session::new(graph.clone(), executor).with_label(target.to_string());
        debug!(target = %session.label(), "spawning session");

        handles.push(tokio::task::spawn_blocking(move || {
            let result = session.run();
            (target, result)
        }));
    }

    let mut reports = Vec::with_capacity(handles.len());
    let mut first_error = None;

    for handle in handles {
        let (target, result) = handle.await.map_err(Error::from)?;
        match result {
            Ok(report) => reports.push((target, report)),
            Err(e) => {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(reports),
    }
}
