//! Benchmarks for the admission pipeline.
//!
//! Benchmarks cover:
//! - Admission queue operations (push/admit/take)
//! - Ordered resource-lock acquisition
//! - End-to-end pipeline runs with contending queues

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use admission_pipeline::builders::build_pipeline;
use admission_pipeline::config::SimulationConfig;
use admission_pipeline::core::{AdmissionQueue, Job, ResourceRegistry, UnitOfWork};

struct NoopWork;

impl UnitOfWork for NoopWork {
    fn perform(&self, job: &Job) {
        black_box(job.id);
    }
}

// ============================================================================
// Queue Benchmarks
// ============================================================================

fn bench_queue_admit_take(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_admit_take");

    for size in [100u32, 1_000, 10_000] {
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                // Ring sized to the load so the single-threaded drain below
                // never blocks.
                let q = AdmissionQueue::new(size as usize);
                for id in 0..size {
                    q.push_pending(Job::new(id, 0, vec![], 1));
                }
                q.seal();
                while q.admit_next() {}
                while let Some(job) = q.take_next() {
                    black_box(job.id);
                }
            });
        });
    }
    group.finish();
}

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn bench_registry_acquire(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_acquire");

    for set_size in [1usize, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(set_size),
            &set_size,
            |b, &set_size| {
                let registry = ResourceRegistry::new(16);
                let resources: Vec<usize> = (0..set_size).map(|i| i * 2).collect();
                b.iter(|| {
                    let claim = registry.acquire_for_job(&resources);
                    black_box(claim.held());
                });
            },
        );
    }
    group.finish();
}

// ============================================================================
// End-to-End Scenario Benchmarks
// ============================================================================

fn bench_end_to_end_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end_run");
    group.sample_size(10);

    for jobs in [100u32, 1_000] {
        group.throughput(Throughput::Elements(u64::from(jobs)));
        group.bench_with_input(BenchmarkId::from_parameter(jobs), &jobs, |b, &jobs| {
            b.iter(|| {
                let config = SimulationConfig::new()
                    .with_num_resources(8)
                    .with_num_queues(4)
                    .with_num_processors(4)
                    .with_queue_capacity(8);
                let pipeline = build_pipeline(config, NoopWork).unwrap();

                for id in 0..jobs {
                    let resources = vec![(id as usize) % 8, ((id as usize) * 3) % 8];
                    pipeline
                        .submit(Job::new(id, (id as usize) % 4, resources, 4))
                        .unwrap();
                }
                pipeline.seal();
                pipeline.run();
                black_box(pipeline.ledger().total_completed());
            });
        });
    }
    group.finish();
}

criterion_group!(queue_benches, bench_queue_admit_take);
criterion_group!(registry_benches, bench_registry_acquire);
criterion_group!(scenario_benches, bench_end_to_end_run);

criterion_main!(queue_benches, registry_benches, scenario_benches);
