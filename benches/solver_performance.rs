//! Performance benchmarks for the implicit solver
//!
//! One implicit step is a forward and a backward sweep over the grid, so the
//! cost of a run should be linear in both the node count and the step count.
//!
//! # What We're Measuring
//!
//! 1. **Spatial scaling**: fixed 1 000 steps, growing node count
//! 2. **Temporal scaling**: fixed 101 nodes, growing step count
//! 3. **Bare sweep**: one forward/backward pass without the solver around it
//!
//! # Expected Results
//!
//! ```text
//! nodes=101:    baseline
//! nodes=1001:   ~10× slower
//! nodes=10001:  ~100× slower (may leave L2 cache)
//! ```
//!
//! Throughput is reported as node updates (nx · nt) per second and should
//! stay roughly flat across sizes.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench solver_performance
//!
//! # Only the spatial group
//! cargo bench --bench solver_performance spatial
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::time::Duration;

use heat_rs::physics::Material;
use heat_rs::solver::sweep::{SweepCoefficients, TridiagonalStencil};
use heat_rs::solver::{DirichletBoundaries, ImplicitSolver, Scenario, Solver, SolverConfiguration};

const LENGTH: f64 = 0.1;

fn copper() -> Scenario {
    Scenario::new(
        LENGTH,
        Material::new(8960.0, 400.0, 400.0),
        DirichletBoundaries::new(200.0, 50.0),
        20.0,
    )
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Scaling with the number of grid nodes at 1 000 time steps
fn benchmark_spatial_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Implicit Solver spatial");
    group.measurement_time(Duration::from_secs(10));

    let scenario = copper();
    let solver = ImplicitSolver::new();

    for cells in [100usize, 1_000, 10_000] {
        let config = SolverConfiguration::new(LENGTH / cells as f64, 0.001, 1.0);
        group.throughput(Throughput::Elements(((cells + 1) * 1_000) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(cells + 1), &config, |b, config| {
            b.iter(|| solver.solve(black_box(&scenario), black_box(config)).unwrap());
        });
    }

    group.finish();
}

/// Scaling with the number of time steps on 101 nodes
fn benchmark_temporal_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Implicit Solver temporal");

    let scenario = copper();
    let solver = ImplicitSolver::new();

    for steps in [100usize, 1_000, 10_000] {
        let config = SolverConfiguration::new(0.001, 0.01, steps as f64 * 0.01);
        group.throughput(Throughput::Elements((101 * steps) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(steps), &config, |b, config| {
            b.iter(|| solver.solve(black_box(&scenario), black_box(config)).unwrap());
        });
    }

    group.finish();
}

/// A single forward/backward sweep, no allocation in the measured loop
fn benchmark_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("Thomas sweep");

    for nodes in [101usize, 1_001, 10_001] {
        let stencil = TridiagonalStencil::implicit_heat(1.0);
        let rhs: Vec<f64> = (0..nodes).map(|i| 20.0 + i as f64 * 1e-3).collect();
        let mut out = vec![0.0; nodes];
        let mut sweep = SweepCoefficients::new(nodes);

        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_function(BenchmarkId::from_parameter(nodes), |b| {
            b.iter(|| {
                sweep.forward(black_box(&stencil), 200.0, black_box(&rhs));
                sweep.backward(200.0, 50.0, black_box(&mut out));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_spatial_scaling,
    benchmark_temporal_scaling,
    benchmark_sweep,
);
criterion_main!(benches);
