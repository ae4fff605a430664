//! Performance benchmarks for product-extract.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use product_extract::{extract, extract_with_options, Options, SelectorMap};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Example Product 4 — Buy Now</title>
    <meta property="og:title" content="Example Product 4">
</head>
<body>
    <nav><a href="/">Home</a><a href="/catalog">Catalog</a></nav>
    <div class="product">
        <h1 class="product-title">Example Product 4</h1>
        <div id="pricing">
            <span class="price">₹1,199.00</span>
            <div class="availability" id="availability">In stock</div>
        </div>
        <ul class="specs">
            <li>Color: Black</li>
            <li>Weight: 104g</li>
            <li>SKU: SKU0004</li>
        </ul>
        <p class="blurb">Ships in 24 hours. Free returns within 30 days.
        Compare at $24.99 in stores. Pre-order the next revision today.</p>
    </div>
    <footer>Copyright example.com</footer>
</body>
</html>
"#;

fn bench_heuristic_extraction(c: &mut Criterion) {
    c.bench_function("extract_heuristics", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_selector_extraction(c: &mut Criterion) {
    let options = Options {
        selectors: SelectorMap {
            title: Some("h1.product-title".to_string()),
            price: Some("span.price".to_string()),
            availability: Some("#availability".to_string()),
        },
        ..Options::default()
    };

    c.bench_function("extract_selectors", |b| {
        b.iter(|| extract_with_options(black_box(SAMPLE_HTML), &options));
    });
}

criterion_group!(
    benches,
    bench_heuristic_extraction,
    bench_selector_extraction
);
criterion_main!(benches);
