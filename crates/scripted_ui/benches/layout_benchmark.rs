//! Benchmark for layout and render of a list screen.
//!
//! Run with: cargo bench --package scripted_ui --bench layout_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scripted_ui::{
    build_tree, ButtonKind, CommandRenderer, ManualClock, NoSound, ScriptedUi, UiConfig, UiData, UiEvent, Vec2,
};

const SCREEN: &str = r"
Margins(20) {
    Vertical {
        Using(title) { Text(size = 30, color = YELLOW) }
        Scrollable(Scroller(Fill(GRAY))) {
            Using(rows) {
                List(VERTICAL) {
                    Height(24, Chain {
                        FocusableKeys(Fill(LIGHT_GRAY))
                        Using(name) { Text }
                        Using(icons) { Icons }
                    })
                }
            }
        }
        Horizontal {
            Using(EXIT) { Button }
            Stretch
            Using(HIGHLIGHT_NEXT) { Button }
        }
    }
}
";

fn screen_data(rows: usize) -> UiData {
    UiData::record([
        ("title", UiData::label("Inventory")),
        (
            "rows",
            UiData::list((0..rows).map(|i| {
                UiData::record([
                    ("name", UiData::label(format!("Item {i}"))),
                    ("icons", UiData::icons(["FRAME", "SWORD"])),
                ])
            })),
        ),
    ])
}

fn create_ui() -> ScriptedUi {
    ScriptedUi::new(build_tree(SCREEN).unwrap(), UiConfig::default()).unwrap()
}

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_list_screen", |b| {
        b.iter(|| black_box(build_tree(black_box(SCREEN))));
    });
}

fn benchmark_render(c: &mut Criterion) {
    let ui = create_ui();
    let clock = ManualClock::default();

    for rows in [10, 100, 1000] {
        let data = screen_data(rows);
        let mut state = ui.new_state();
        let mut renderer = CommandRenderer::new(1280.0, 720.0);

        c.bench_function(&format!("render_list_{rows}_rows"), |b| {
            b.iter(|| {
                renderer.begin_frame();
                ui.render(&data, &mut state, &mut renderer, &clock);
                black_box(renderer.end_frame())
            });
        });
    }
}

fn benchmark_dispatch(c: &mut Criterion) {
    let ui = create_ui();
    let clock = ManualClock::default();
    let data = screen_data(100);
    let mut state = ui.new_state();
    let mut renderer = CommandRenderer::new(1280.0, 720.0);
    ui.render(&data, &mut state, &mut renderer, &clock);

    c.bench_function("dispatch_pointer_move_100_rows", |b| {
        let mut y = 0.0_f32;
        b.iter(|| {
            y = (y + 7.0) % 720.0;
            let event = UiEvent::Pointer {
                kind: ButtonKind::Moved,
                pos: Vec2::new(200.0, y),
            };
            black_box(ui.handle_event(&data, &mut state, &mut renderer, &clock, &mut NoSound, &event))
        });
    });
}

criterion_group!(benches, benchmark_parse, benchmark_render, benchmark_dispatch);
criterion_main!(benches);
