use crate::{config::Config, invocation::Invocation};
use ferrand::{Context, Registry, arguments};
use std::thread::scope;
use tracing::{debug, info_span};

/// The result of one evaluation, tied to the invocation that produced it.
#[derive(Debug)]
pub struct Evaluation<'c> {
    pub worker: usize,
    pub invocation: &'c Invocation,
    pub result: ferrand::Result<String>,
}

impl Evaluation<'_> {
    /// The stderr line for a failed evaluation, `None` on success.
    pub fn failure(&self) -> Option<String> {
        let err = self.result.as_ref().err()?;
        Some(format!(
            "error: worker {}: {}: {err}",
            self.worker, self.invocation
        ))
    }
}

/// Evaluates every invocation `config.count` times on each of
/// `config.workers` threads.
///
/// Results are returned grouped by worker, in worker order, and within a
/// worker in invocation order. A bind failure (unknown key, wrong arity) is
/// reported once per worker and the invocation is skipped.
pub fn run<'c>(config: &'c Config, registry: &Registry) -> Vec<Evaluation<'c>> {
    scope(|s| {
        let handles: Vec<_> = (0..config.workers)
            .map(|worker| s.spawn(move || run_worker(worker, config, registry)))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(evaluations) => evaluations,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

fn run_worker<'c>(worker: usize, config: &'c Config, registry: &Registry) -> Vec<Evaluation<'c>> {
    let _span = info_span!("worker", worker).entered();
    let mut ctx = Context {
        previous_result: None,
        sampler: Some(format!("worker-{worker}")),
    };
    let mut evaluations = Vec::with_capacity(config.invocations.len() * config.count);

    for invocation in &config.invocations {
        let args = arguments(invocation.args.iter().map(String::as_str));
        let bound = match registry.bind(&invocation.key, args) {
            Ok(bound) => bound,
            Err(e) => {
                debug!(%invocation, error = %e, "bind failed");
                evaluations.push(Evaluation {
                    worker,
                    invocation,
                    result: Err(e),
                });
                continue;
            }
        };

        for _ in 0..config.count {
            let result = bound.evaluate(&ctx);
            if let Ok(value) = &result {
                ctx.previous_result = Some(value.clone());
            }
            evaluations.push(Evaluation {
                worker,
                invocation,
                result,
            });
        }
    }

    evaluations
}
