//! Concurrent execution of the three descent methods.
//!
//! Each method runs on the blocking thread pool and hands its result back
//! exactly once through its own oneshot channel. Results are handled in
//! arrival order; a method that fails to deliver is logged and skipped.

use optimiser_core::solvers::{DescentConfig, Method};
use optimiser_core::types::{Point, SolverResult};
use tokio::sync::oneshot;
use tracing::{error, info};

use crate::persistence::{file_stem, TraceSink};
use crate::report;
use crate::CliError;

/// A method's delivered result.
#[derive(Debug, Clone)]
pub struct Completed {
    /// Which method produced the result
    pub method: Method,
    /// Labelled trace
    pub result: SolverResult,
}

fn launch(method: Method, config: DescentConfig, start: Point) -> oneshot::Receiver<SolverResult> {
    let (tx, rx) = oneshot::channel();

    tokio::task::spawn_blocking(move || {
        let result = SolverResult::new(method.minimise(config, start));
        if tx.send(result).is_err() {
            error!(method = %method, "Result receiver dropped before delivery");
        }
    });

    rx
}

/// Run all methods from `start` concurrently and call `on_complete` for each
/// result as it arrives.
///
/// Returns the delivered results in arrival order.
pub async fn run_concurrently<F>(
    start: Point,
    config: DescentConfig,
    mut on_complete: F,
) -> Vec<Completed>
where
    F: FnMut(&Completed),
{
    let mut gradient = launch(Method::GradientDescent, config, start);
    let mut coordinate = launch(Method::CoordinateDescent, config, start);
    let mut newton = launch(Method::Newton, config, start);

    let mut gradient_done = false;
    let mut coordinate_done = false;
    let mut newton_done = false;
    let mut completed = Vec::with_capacity(Method::ALL.len());

    while !(gradient_done && coordinate_done && newton_done) {
        let (method, delivery) = tokio::select! {
            delivery = &mut gradient, if !gradient_done => {
                gradient_done = true;
                (Method::GradientDescent, delivery)
            }
            delivery = &mut coordinate, if !coordinate_done => {
                coordinate_done = true;
                (Method::CoordinateDescent, delivery)
            }
            delivery = &mut newton, if !newton_done => {
                newton_done = true;
                (Method::Newton, delivery)
            }
        };

        match delivery {
            Ok(result) => {
                info!(
                    method = %method,
                    iterations = result.iterations(),
                    "Solver finished"
                );
                let done = Completed { method, result };
                on_complete(&done);
                completed.push(done);
            }
            Err(_) => {
                let err = CliError::TaskFailed(method.name().to_string());
                error!(method = %method, "{}", err);
            }
        }
    }

    completed
}

/// Print the summary of a result and store its trace.
///
/// Runs on the task driving the result loop; the sink blocks it while
/// storing. A storage failure is reported and does not affect the other
/// results.
pub fn report_and_store(done: &Completed, sink: &dyn TraceSink) {
    report::print_summary(done.method, &done.result);

    let stem = file_stem(done.method, &done.result);
    match sink.store(&stem, done.result.trace()) {
        Ok(path) => {
            println!(
                "All intermediate results have been successfully written to {}\n",
                path.display()
            );
        }
        Err(err) => {
            error!(method = %done.method, stem = %stem, error = %err, "Failed to store trace");
            println!("Error while writing into a file");
        }
    }
}

/// Run all methods, reporting and storing each result as it arrives.
pub async fn run(start: Point, config: DescentConfig, sink: &dyn TraceSink) -> Vec<Completed> {
    info!(
        start = %start,
        tolerance = config.tolerance(),
        max_iterations = config.max_iterations(),
        "Launching solvers"
    );

    run_concurrently(start, config, |done| report_and_store(done, sink)).await
}
