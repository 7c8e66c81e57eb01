// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vestibule::arguments::ProcessArguments;
use vestibule::environment::{EnvironmentFlags, is_env_set};
use vestibule::mode::select_mode;

fn bench_environment_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("environment_probe");

    unsafe {
        std::env::set_var("VESTIBULE_BENCH_SET", "1");
        std::env::remove_var("VESTIBULE_BENCH_UNSET");
    }

    group.bench_function("is_env_set_present", |b| {
        b.iter(|| is_env_set(black_box("VESTIBULE_BENCH_SET")))
    });

    group.bench_function("is_env_set_absent", |b| {
        b.iter(|| is_env_set(black_box("VESTIBULE_BENCH_UNSET")))
    });

    group.bench_function("capture_snapshot", |b| {
        b.iter(EnvironmentFlags::capture)
    });

    group.finish();
}

fn bench_mode_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("mode_selection");

    let defaults = EnvironmentFlags::from_parts(false, false, false, false);
    let runtime_only = EnvironmentFlags::from_parts(true, false, false, false);
    let crash = EnvironmentFlags::from_parts(false, true, false, false);

    group.bench_function("application_main", |b| {
        b.iter(|| select_mode(black_box(&defaults)))
    });
    group.bench_function("embedded_runtime", |b| {
        b.iter(|| select_mode(black_box(&runtime_only)))
    });
    group.bench_function("crash_service", |b| {
        b.iter(|| select_mode(black_box(&crash)))
    });

    group.finish();
}

fn bench_token_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_scan");

    let short = ProcessArguments::from_argv(vec!["host".to_string(), "--CI".to_string()]);
    let long = ProcessArguments::from_argv(
        (0..64)
            .map(|i| format!("--option-{i}"))
            .chain(std::iter::once("--ci".to_string()))
            .collect(),
    );

    group.bench_function("short_argv", |b| {
        b.iter(|| short.contains_ignore_ascii_case(black_box("--ci")))
    });
    group.bench_function("long_argv", |b| {
        b.iter(|| long.contains_ignore_ascii_case(black_box("--ci")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_environment_probe,
    bench_mode_selection,
    bench_token_scan
);
criterion_main!(benches);
