use cssquery::{
    Combinator, ComplexSelector, ComplexStep, CompoundSelector, Selector, SimpleSelector,
    Specificity, query_selector_all,
    simple_element::SimpleElementFactory,
};

fn main() {
    // <svg><g class="layer"><circle id="dot"/><circle/></g><rect/></svg>
    let mut f = SimpleElementFactory::new();
    let root = f
        .elem("svg")
        .child(
            f.elem("g")
                .attr("class", "layer")
                .child(f.elem("circle").attr("id", "dot"))
                .child(f.elem("circle")),
        )
        .child(f.elem("rect"))
        .build();

    // g.layer > circle
    let selector = Selector::Complex(ComplexSelector {
        steps: vec![
            ComplexStep {
                compound: CompoundSelector {
                    parts: vec![
                        SimpleSelector::Type("g".into()),
                        SimpleSelector::Class("layer".into()),
                    ],
                },
                combinator: Some(Combinator::Child),
            },
            ComplexStep {
                compound: CompoundSelector {
                    parts: vec![SimpleSelector::Type("circle".into())],
                },
                combinator: None,
            },
        ],
    });

    let matches = query_selector_all(&root, &selector, f.registry()).unwrap();
    println!("specificity: {:#x}", Specificity::of(&selector).value());
    for m in &matches {
        println!("matched: {m:?}");
    }
}
