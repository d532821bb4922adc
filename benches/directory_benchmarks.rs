use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use orgdir::hierarchy::{HierarchySpec, OrgChart};
use orgdir::{DirectoryStore, Employee, QueryEngine, Team};

const DEPARTMENTS: [&str; 4] = ["Upstream", "Finance", "Technical Services", "Human Resources"];
const TITLES: [&str; 4] = ["Drilling Engineer", "Financial Analyst", "IT Security Specialist", "Coordinator"];
const FAN_OUT: usize = 5;

fn synthetic(size: usize) -> (DirectoryStore, HierarchySpec) {
    let employees: Vec<Employee> = (0..size)
        .map(|i| {
            Employee::new(
                format!("e{}", i),
                format!("Person {}", i),
                TITLES[i % TITLES.len()],
                DEPARTMENTS[i % DEPARTMENTS.len()],
            )
            .with_location(if i % 3 == 0 { "Riyadh" } else { "Dhahran" })
            .with_skills([format!("Skill {}", i % 50), "Cybersecurity".to_string()])
        })
        .collect();

    let teams: Vec<Team> = (0..size / 10)
        .map(|t| {
            Team::new(format!("t{}", t), format!("Team {}", t), "Cross-functional squad")
                .with_members((0..10).map(|m| format!("e{}", t * 10 + m)))
        })
        .collect();

    // Every node i > 0 reports to (i - 1) / FAN_OUT
    let mut spec = HierarchySpec::new("e0");
    for i in 1..size {
        spec = spec.with_reports(format!("e{}", (i - 1) / FAN_OUT), [format!("e{}", i)]);
    }

    let store = DirectoryStore::from_records(employees, teams).unwrap();
    (store, spec)
}

/// Benchmark canonical hierarchy assembly
fn bench_chart_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_build");

    for size in [100, 1000, 10_000].iter() {
        let (store, spec) = synthetic(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let chart = OrgChart::build(&store, &spec, 64).unwrap();
                criterion::black_box(chart.len());
            });
        });
    }
    group.finish();
}

/// Benchmark root-to-leaf chain resolution
fn bench_reporting_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("reporting_chain");

    for size in [100, 1000, 10_000].iter() {
        let (store, spec) = synthetic(*size);
        let chart = OrgChart::build(&store, &spec, 64).unwrap();
        let target = format!("e{}", size - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let chain = chart.reporting_chain(&store, &target);
                criterion::black_box(chain.map(|c| c.len()));
            });
        });
    }
    group.finish();
}

/// Benchmark substring search and keyword interpretation
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let engine = QueryEngine::new();

    for size in [100, 1000, 10_000].iter() {
        let (store, _) = synthetic(*size);

        group.bench_with_input(BenchmarkId::new("employees", size), size, |b, _| {
            b.iter(|| {
                let hits = engine.search_employees(&store, "security");
                criterion::black_box(hits.len());
            });
        });

        group.bench_with_input(BenchmarkId::new("interpret", size), size, |b, _| {
            b.iter(|| {
                let answer = engine.interpret(&store, "Find finance analysts in Riyadh");
                criterion::black_box(answer.employees.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chart_build, bench_reporting_chain, bench_search);
criterion_main!(benches);
