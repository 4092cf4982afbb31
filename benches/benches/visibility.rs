// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use lookout_viewport::{Host, MediaQueryList, Probe};

/// A long page of equally tall rows, scrolled to the middle.
struct Feed {
    rows: usize,
    row_height: f64,
    scroll: f64,
}

impl Host for Feed {
    type Node = usize;

    fn inner_width(&self) -> f64 {
        1280.0
    }
    fn inner_height(&self) -> f64 {
        800.0
    }
    fn client_width(&self) -> f64 {
        1265.0
    }
    fn client_height(&self) -> f64 {
        800.0
    }
    fn page_x_offset(&self) -> Option<f64> {
        Some(0.0)
    }
    fn page_y_offset(&self) -> Option<f64> {
        Some(self.scroll)
    }
    fn scroll_left(&self) -> f64 {
        0.0
    }
    fn scroll_top(&self) -> f64 {
        self.scroll
    }
    fn bounding_client_rect(&self, row: &usize) -> Option<Rect> {
        if *row >= self.rows {
            return None;
        }
        let top = *row as f64 * self.row_height - self.scroll;
        Some(Rect::new(0.0, top, 1265.0, top + self.row_height))
    }
    fn match_media(&self, _query: &str) -> Option<MediaQueryList> {
        None
    }
}

fn feed(rows: usize) -> Feed {
    let row_height = 48.0;
    Feed {
        rows,
        row_height,
        scroll: rows as f64 * row_height / 2.0,
    }
}

fn bench_scan_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility/scan");

    // Models a lazy loader checking every row after a scroll event.
    for rows in [128usize, 1_024, 8_192] {
        let probe = Probe::new(feed(rows));
        let ids: Vec<usize> = (0..rows).collect();
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(
            BenchmarkId::new("intersects_viewport", rows),
            &ids,
            |b, ids| {
                b.iter(|| {
                    let visible = ids
                        .iter()
                        .filter(|id| probe.intersects_viewport(id, 200.0))
                        .count();
                    black_box(visible);
                });
            },
        );

        // Same answer via the two axis tests: measures each row twice.
        group.bench_with_input(BenchmarkId::new("intersects_x_and_y", rows), &ids, |b, ids| {
            b.iter(|| {
                let visible = ids
                    .iter()
                    .filter(|id| probe.intersects_x(id, 200.0) && probe.intersects_y(id, 200.0))
                    .count();
                black_box(visible);
            });
        });
    }

    group.finish();
}

fn bench_viewport_queries(c: &mut Criterion) {
    let probe = Probe::new(feed(1_024));
    c.bench_function("viewport/size_and_scroll", |b| {
        b.iter(|| black_box((probe.viewport(), probe.scroll_x(), probe.scroll_y())));
    });
}

criterion_group!(benches, bench_scan_rows, bench_viewport_queries);
criterion_main!(benches);
