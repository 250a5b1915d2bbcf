use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sukta_import::{extract_translation, find_record, patch_translation};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A curated page: site chrome around a hymn of `verses` paragraphs.
fn hymn_page(verses: usize) -> String {
    let mut s = String::from(
        "<!DOCTYPE html><html><head><title>Rigveda 1.1</title>\
         <style>.box{margin:0}</style></head><body>\n\
         <div class=\"nav\"><a href=\"/\">Home</a> | <a href=\"/rv\">Rigveda</a></div>\n\
         <div class=\"box hymn\">\n",
    );
    for i in 1..=verses {
        s.push_str(&format!(
            "<p>{i}. I laud Agni, the chosen Priest, God, minister of sacrifice,<br>\n\
             The hotar, lavishest of wealth &amp; worthy of the ancient seers.</p>\n"
        ));
    }
    s.push_str("</div>\n<p class=\"footer\">&copy; sacred-texts</p></body></html>");
    s
}

/// A pretty-printed dataset of `suktas` records with verse arrays.
fn dataset(suktas: u32) -> String {
    let mut s = String::from("[\n");
    for n in 1..=suktas {
        if n > 1 {
            s.push_str(",\n");
        }
        s.push_str(&format!(
            "    {{\n\
             \x20       \"id\": \"1.{n}\",\n\
             \x20       \"mandala\": 1,\n\
             \x20       \"sukta\": {n},\n\
             \x20       \"rishi\": \"Madhuchchhandas Vaishvamitra\",\n\
             \x20       \"verses\": [{{\"number\": 1, \"sanskrit\": \"agním īḷe puróhitaṃ\"}}]\n\
             \x20   }}"
        ));
    }
    s.push_str("\n]\n");
    s
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    for verses in [3usize, 12, 50] {
        let html = hymn_page(verses);
        group.bench_with_input(BenchmarkId::from_parameter(verses), &html, |b, html| {
            b.iter(|| extract_translation(black_box(html)))
        });
    }
    group.finish();
}

/// Lookup and patch cost grows with the record's position in the document.
fn bench_patch(c: &mut Criterion) {
    let blob = dataset(191);
    let text = extract_translation(&hymn_page(9));

    let mut group = c.benchmark_group("patch");
    for sukta in [1u32, 96, 191] {
        group.bench_with_input(BenchmarkId::new("find_record", sukta), &sukta, |b, &s| {
            b.iter(|| find_record(black_box(&blob), 1, s))
        });
        group.bench_with_input(BenchmarkId::new("patch_translation", sukta), &sukta, |b, &s| {
            b.iter(|| patch_translation(black_box(&blob), 1, s, black_box(&text)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract, bench_patch);
criterion_main!(benches);
