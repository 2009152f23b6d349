use error_relay::render::{component, render, Element, Node, RenderScope};
use error_relay::Failure;


#[test]
fn render_returns_children_unmodified() {
    let page = component("Page", |scope: &mut RenderScope| {
        let header = scope.render_child(&Node::from(Element::new("h1").text("Orders")))?;
        let body = scope.render_child(&component("Table", |_| Ok(Node::text("3 rows"))))?;
        Ok(Node::Fragment(vec![header, body]))
    });

    let output = render(&page).unwrap();
    assert_eq!(output.text_content(), "Orders3 rows");
}

#[test]
fn uncontained_error_reaches_the_caller() {
    let page = component("Page", |scope: &mut RenderScope| {
        scope.render_child(&component("Broken", |_| Err(Failure::new("no boundary"))))
    });

    assert_eq!(render(&page).unwrap_err().message(), "no boundary");
}

#[test]
fn uncontained_panic_unwinds_into_the_caller() {
    let page = component("Page", |_| panic!("nobody catches this"));

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| render(&page)));
    assert!(outcome.is_err());
}

#[test]
fn find_helpers_walk_fragments() {
    let node = Node::Fragment(vec![
        Node::Empty,
        Element::new("div")
            .child(Element::new("span").attr("data-testid", "badge").text("new"))
            .into(),
    ]);

    assert_eq!(node.find_by_test_id("badge").unwrap().tag(), "span");
    assert!(node.find_by_text("new").is_some());
    assert!(node.find_by_test_id("missing").is_none());
}
