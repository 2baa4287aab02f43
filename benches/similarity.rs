//! Benchmarks for the similarity pipeline over a synthetic taxonomy.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lexisim::concept::{Concept, ConceptId};
use lexisim::ontology::MemoryOntology;
use lexisim::similarity::SimilarityEngine;
use lexisim::text::SimpleTokenizer;

/// A balanced taxonomy: `depth` levels, `fanout` children per node.
fn synthetic_ontology(depth: usize, fanout: usize) -> MemoryOntology {
    let mut ont = MemoryOntology::new();
    ont.insert_concept(Concept::noun("n0.n.01", "the synthetic root concept"));
    let mut frontier = vec!["n0".to_owned()];
    let mut counter = 0usize;
    for level in 0..depth {
        let mut next = Vec::new();
        for parent in &frontier {
            for _ in 0..fanout {
                counter += 1;
                let name = format!("n{counter}");
                ont.insert_concept(
                    Concept::noun(
                        format!("{name}.n.01"),
                        format!("synthetic concept at level {} under {parent}", level + 1),
                    )
                    .with_hypernyms([format!("{parent}.n.01")]),
                );
                next.push(name);
            }
        }
        frontier = next;
    }
    // Index the first and last leaf of the bottom level as lookup words.
    let first_leaf = format!("{}.n.01", frontier.first().expect("non-empty taxonomy"));
    let last_leaf = format!("{}.n.01", frontier.last().expect("non-empty taxonomy"));
    ont.index_word("alpha", vec![ConceptId::new(first_leaf)]);
    ont.index_word("omega", vec![ConceptId::new(last_leaf)]);
    ont
}

fn bench_compare(c: &mut Criterion) {
    let ont = synthetic_ontology(5, 3);
    let engine = SimilarityEngine::new(Arc::new(ont), Arc::new(SimpleTokenizer::new()));

    c.bench_function("compare_distant_leaves", |b| {
        b.iter(|| {
            let cmp = engine.compare(black_box("alpha"), black_box("omega")).unwrap();
            black_box(cmp.similarity)
        })
    });

    c.bench_function("compare_identical_word", |b| {
        b.iter(|| {
            let cmp = engine.compare(black_box("alpha"), black_box("alpha")).unwrap();
            black_box(cmp.similarity)
        })
    });
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
