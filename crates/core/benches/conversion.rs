use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use verba_core::hast::{Element, Node};
use verba_core::{BasicParser, Parser, VFile, to_html, to_nlcst};

const PROSE: &str = "The quick brown fox jumps over the lazy dog. Does it? It does, twice!";

/// An article with `sections` sections, each mixing explicit and implicit paragraphs.
fn article(sections: usize) -> Node {
    let children = (0..sections)
        .map(|index| {
            Element::new("section")
                .with_children(vec![
                    Element::new("h2").with_children(vec![Node::text(format!("Section {}", index))]).into(),
                    Node::text("\n"),
                    Element::new("p")
                        .with_children(vec![
                            Node::text(PROSE),
                            Element::new("em").with_children(vec![Node::text(" Really.")]).into(),
                        ])
                        .into(),
                    Node::text(PROSE),
                    Element::new("a").with_children(vec![Node::text(" More")]).into(),
                    Element::new("code").with_children(vec![Node::text("let x = 1;")]).into(),
                    Element::new("ul")
                        .with_children(vec![
                            Element::new("li").with_children(vec![Node::text(PROSE)]).into(),
                            Element::new("li").with_children(vec![Node::text("Short item")]).into(),
                        ])
                        .into(),
                    Element::new("script").with_children(vec![Node::text("track();")]).into(),
                ])
                .into()
        })
        .collect();

    Node::root(vec![Element::new("article").with_children(children).into()])
}

fn bench_convert(c: &mut Criterion) {
    let parser = BasicParser::new();
    let mut group = c.benchmark_group("convert");

    for sections in [1, 10, 100] {
        let mut tree = article(sections);
        let file = VFile::new(to_html(&mut tree));

        group.bench_with_input(BenchmarkId::new("sections", sections), &tree, |b, tree| {
            b.iter(|| to_nlcst(black_box(tree), &file, &parser))
        });
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let parser = BasicParser::new();
    let text = PROSE.repeat(20);

    c.bench_function("tokenize", |b| b.iter(|| parser.tokenize(black_box(&text))));
}

fn bench_serialize(c: &mut Criterion) {
    let tree = article(10);

    c.bench_function("to_html", |b| {
        b.iter(|| {
            let mut tree = tree.clone();
            to_html(black_box(&mut tree))
        })
    });
}

criterion_group!(benches, bench_convert, bench_tokenize, bench_serialize);
criterion_main!(benches);
