// benches/game_page.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use url::Url;

use ggj_scrape::core::sanitize::split_list;
use ggj_scrape::specs::game::parse_game;

fn field(label: &str, item: &str) -> String {
    format!(
        r#"<div class="field"><div class="field__label">{label}</div><div class="field__items"><div class="field__item">{item}</div></div></div>"#
    )
}

fn sample_page() -> String {
    let description = "<p>A long description. </p>".repeat(40);
    let blocks = [
        format!(r#"<div class="field"><div class="field__items"><div class="field__item">{description}</div></div></div>"#),
        field("Jam Site:", r#"<a href="/2020/jam-sites/lyon">Lyon</a>"#),
        field("Jam Year:", "2020"),
        field("Platforms:", "<a>Windows, Mac OS X, Web standard (HTML5, Java, Javascript, Flash)</a>"),
        field("Tools and Technologies:", "<a>Unity (any product), Blender, Audacity, Game Salad (Mac desktop, iPhone, iPad)</a>"),
        field("Credits:", "<p>Ana, Bo, Cy</p>"),
        field("Game Tags:", "2D, Puzzle, Casual (Relaxing, Short), Platformer"),
        field("Executable:", r#"<a href="/f.zip">f.zip</a>"#),
    ];
    format!(
        "<html><head><title>x</title></head><body><nav>{}</nav><article>{}</article></body></html>",
        "<a href=\"/\">menu</a>".repeat(50),
        blocks.concat()
    )
}

fn bench_game_page(c: &mut Criterion) {
    let doc = sample_page();
    let page = Url::parse("https://globalgamejam.org/2020/games/sample").unwrap();

    c.bench_function("parse_game", |b| {
        b.iter(|| {
            let rec = parse_game(black_box(&doc), &page).unwrap();
            black_box(rec.len())
        })
    });

    let list = "Unity (any product), Game Salad (Mac desktop, iPhone, iPad), Blender, ".repeat(20);
    c.bench_function("split_list", |b| b.iter(|| black_box(split_list(black_box(&list))).len()));
}

criterion_group!(benches, bench_game_page);
criterion_main!(benches);
