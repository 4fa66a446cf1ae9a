use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gamerls_core::parser::{
    ContentTypeParser, GameParser, LanguageParser, ParserConfig, QualityParser,
};
use gamerls_core::types::ParseMode;

const INPUTS: &[&str] = &[
    "Cyberpunk.2077.v2.1-CODEX",
    "Elden Ring [FitGirl Repack]",
    "Baldurs Gate 3 Update v4 1 1 6848561 RUNE",
    "FIFA 17 Super Deluxe Edition 2016 PC RePack от xatab",
    "[MTBB] Kimi no Na wa. (2016) v2 [97681524].mkv",
    "Portal 2 (2011) [Ps3][EUR FREE][MULTi5]",
];

fn bench_title_parse(c: &mut Criterion) {
    let full = GameParser::new(ParserConfig::default()).unwrap();
    let light = GameParser::new(ParserConfig::new().with_mode(ParseMode::Light)).unwrap();

    c.bench_function("parse_title_full_single", |b| {
        b.iter(|| full.parse_title(black_box(INPUTS[0])));
    });

    c.bench_function("parse_title_full_batch", |b| {
        b.iter(|| {
            for input in INPUTS {
                let _ = full.parse_title(black_box(input));
            }
        });
    });

    c.bench_function("parse_title_light_batch", |b| {
        b.iter(|| {
            for input in INPUTS {
                let _ = light.parse_title(black_box(input));
            }
        });
    });
}

fn bench_classifiers(c: &mut Criterion) {
    let quality = QualityParser::new().unwrap();
    let languages = LanguageParser::new().unwrap();
    let content_type = ContentTypeParser::new().unwrap();

    c.bench_function("classify_batch", |b| {
        b.iter(|| {
            for input in INPUTS {
                let _ = quality.parse(black_box(input));
                let _ = languages.parse(black_box(input));
                let _ = content_type.parse(black_box(input));
            }
        });
    });
}

criterion_group!(benches, bench_title_parse, bench_classifiers);
criterion_main!(benches);
