//! The fitness entry point.
//!
//! Every replication gets its own service area, call stream and RNG (derived
//! from `config.seed` and the replication index), so replications are
//! independent and their order of execution does not affect the result.

use ems_core::{SimConfig, SimRng};
use ems_policy::{NearestAvailable, RepositionTable, TableReposition};
use ems_scenario::{AreaSource, CallSource, EdmontonArea, SyntheticCalls};
use ems_sim::{NoopObserver, RunObserver, SimBuilder};

use crate::{Metrics, MetricsResult, ReplicationMetrics, aggregate};

/// Offset used to split the call-stream RNG from the engine RNG.
const CALL_STREAM: u64 = 1;

/// A candidate policy and the fleet it is evaluated with.
#[derive(Clone, Debug, PartialEq)]
pub struct PolicyRequest {
    /// Station numbers in priority order.  Duplicates are allowed; numbers
    /// outside the area are ignored.
    pub policy:     Vec<u32>,
    /// Repositioning triggers while fewer than this many units are free.
    pub threshold:  usize,
    pub ambulances: usize,
    pub stations:   usize,
}

/// Run `config.iterations` replications of `request` and average them.
pub fn evaluate_policy<A, C>(
    request:     &PolicyRequest,
    area_source: &A,
    call_source: &C,
    config:      &SimConfig,
) -> MetricsResult<Metrics>
where
    A: AreaSource + ?Sized,
    C: CallSource + ?Sized,
{
    let replications = evaluate_replications(request, area_source, call_source, config)?;
    let metrics = aggregate(&replications);
    tracing::info!(
        policy = ?request.policy,
        threshold = request.threshold,
        replications = replications.len(),
        median = metrics.median_response_time,
        coverage = metrics.coverage,
        lost = metrics.lost_calls,
        "policy evaluated",
    );
    Ok(metrics)
}

/// Per-replication metrics, in replication order.
pub fn evaluate_replications<A, C>(
    request:     &PolicyRequest,
    area_source: &A,
    call_source: &C,
    config:      &SimConfig,
) -> MetricsResult<Vec<ReplicationMetrics>>
where
    A: AreaSource + ?Sized,
    C: CallSource + ?Sized,
{
    config.validate()?;
    let one = |r: usize| run_replication(r, request, area_source, call_source, config, &mut NoopObserver);

    #[cfg(not(feature = "parallel"))]
    {
        (0..config.iterations).map(one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        let run_all = || -> MetricsResult<Vec<ReplicationMetrics>> {
            (0..config.iterations).into_par_iter().map(one).collect()
        };
        match config.num_threads {
            Some(n) => rayon::ThreadPoolBuilder::new().num_threads(n).build()?.install(run_all),
            None => run_all(),
        }
    }
}

/// Evaluate `policy` on the Edmonton area with synthetic calls and default
/// settings apart from `iterations` and `seed`.
pub fn fitness_function(
    policy:          &[u32],
    th:              usize,
    ambulance_count: usize,
    station_count:   usize,
    iterations:      usize,
    seed:            u64,
) -> MetricsResult<Metrics> {
    let request = PolicyRequest {
        policy:     policy.to_vec(),
        threshold:  th,
        ambulances: ambulance_count,
        stations:   station_count,
    };
    let config = SimConfig { seed, iterations, ..SimConfig::default() };
    evaluate_policy(&request, &EdmontonArea, &SyntheticCalls::default(), &config)
}

/// Run replication `r` alone, reporting events to `observer`.
///
/// Gives the same metrics as entry `r` of [`evaluate_replications`].
pub fn run_replication<A, C, O>(
    r:           usize,
    request:     &PolicyRequest,
    area_source: &A,
    call_source: &C,
    config:      &SimConfig,
    observer:    &mut O,
) -> MetricsResult<ReplicationMetrics>
where
    A: AreaSource + ?Sized,
    C: CallSource + ?Sized,
    O: RunObserver,
{
    let mut rng = SimRng::for_replication(config.seed, r);
    let area = area_source.service_area(request.ambulances, request.stations)?;
    let calls = call_source.calls(&mut rng.child(CALL_STREAM))?;
    let reposition = TableReposition::new(RepositionTable::build(&request.policy), request.threshold);

    let mut run = SimBuilder::new(config.clone(), area, calls, NearestAvailable, reposition)
        .rng(rng)
        .build()?;
    run.run(observer)?;

    let obs = run.into_observations();
    let metrics = ReplicationMetrics::from_observations(&obs, config.coverage_threshold_minutes);
    tracing::debug!(
        replication = r,
        calls = obs.calls_handled,
        samples = obs.travel_times.len(),
        median = metrics.median_response_time,
        coverage = metrics.coverage,
        lost = metrics.lost_calls,
        "replication finished",
    );
    Ok(metrics)
}
