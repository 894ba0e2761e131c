use pagecraft::{
    parse_graph, render_document, render_page, try_render_document, Anchor, ButtonRole,
    ComponentKind, ImageUpdate, InputStore, InputValue, LayoutError, MemoryInputStore, NavAction,
    Page, PageContext, PageEpoch, Widget,
};
use pretty_assertions::assert_eq;

fn render(json: &str, ctx: &PageContext) -> Page {
    let graph = parse_graph(json).unwrap();
    render_page(&graph, ctx, &MemoryInputStore::new(), PageEpoch(1))
}

// The scenario from the editor-export shape this interpreter consumes:
// a header in flow order plus a bottom-anchored button overlay.
#[test]
fn test_header_and_bottom_button_scenario() {
    let json = r#"{
        "ROOT": { "nodes": ["a", "b"] },
        "a": { "type": "HeaderText", "props": { "text": "Hi" } },
        "b": { "type": "ButtonComponent", "props": { "pagePosition": "bottom", "text": "Next" } }
    }"#;
    let page = render(json, &PageContext::default());

    assert_eq!(page.flow.len(), 1);
    assert!(matches!(
        &page.flow[0],
        Widget::Text { content, .. } if content == "Hi"
    ));

    assert_eq!(page.overlays.len(), 1);
    assert_eq!(page.overlays[0].anchor, Anchor::Bottom);
    assert!(matches!(
        &page.overlays[0].widget,
        Widget::Button { label, role: ButtonRole::Primary, .. } if label == "Next"
    ));

    // The scroll area keeps clearance for the fixed bottom button.
    assert!(page.bottom_clearance > 0.0);
}

#[test]
fn test_text_fallback_chain_uses_page_title() {
    let json = r#"{
        "ROOT": { "nodes": ["h"] },
        "h": { "type": "HeaderText" }
    }"#;
    let ctx = PageContext {
        title: Some("Welcome".to_string()),
        ..Default::default()
    };
    let page = render(json, &ctx);
    assert!(matches!(
        &page.flow[0],
        Widget::Text { content, .. } if content == "Welcome"
    ));

    let bare = render(json, &PageContext::default());
    assert!(matches!(
        &bare.flow[0],
        Widget::Text { content, .. } if content == "Header"
    ));
}

#[test]
fn test_slider_bounds_come_from_page_context() {
    let json = r#"{
        "ROOT": { "nodes": ["s"] },
        "s": { "type": "Slider" }
    }"#;
    let ctx = PageContext {
        key: Some("amount".to_string()),
        min: Some(0.0),
        max: Some(500.0),
        ..Default::default()
    };
    let page = render(json, &ctx);
    match &page.flow[0] {
        Widget::Slider {
            key,
            value,
            min,
            max,
            step,
        } => {
            assert_eq!(key.as_deref(), Some("amount"));
            assert_eq!((*min, *max, *step), (0.0, 500.0, 1.0));
            // No stored value: falls back to min.
            assert_eq!(*value, 0.0);
        }
        other => panic!("expected slider, got {:?}", other),
    }
}

#[test]
fn test_interactive_kinds_read_initial_value_from_store() {
    let json = r#"{
        "ROOT": { "nodes": ["i", "s", "c"] },
        "i": { "type": "TextInput", "props": { "key": "name" } },
        "s": { "type": "Slider", "props": { "key": "amount", "max": 50 } },
        "c": { "type": "SingleSelect", "props": { "key": "plan", "options": ["Free", "Pro"] } }
    }"#;

    let mut store = MemoryInputStore::new();
    store.update("name", InputValue::Text("Ada".to_string()));
    store.update("amount", InputValue::Number(200.0));
    store.update("plan", InputValue::Text("Pro".to_string()));

    let graph = parse_graph(json).unwrap();
    let page = render_page(&graph, &PageContext::default(), &store, PageEpoch(1));

    assert!(matches!(
        &page.flow[0],
        Widget::Input { value: Some(v), .. } if v == "Ada"
    ));
    // Stored value is clamped into the resolved bounds.
    assert!(matches!(
        &page.flow[1],
        Widget::Slider { value, max, .. } if *value == 50.0 && *max == 50.0
    ));
    assert!(matches!(
        &page.flow[2],
        Widget::Select { selected: Some(s), .. } if s == "Pro"
    ));
}

#[test]
fn test_select_defaults_to_first_option() {
    let json = r#"{
        "ROOT": { "nodes": ["c"] },
        "c": { "type": "SingleSelect" }
    }"#;
    let ctx = PageContext {
        key: Some("plan".to_string()),
        options: vec!["Starter".to_string(), "Team".to_string()],
        ..Default::default()
    };
    let page = render(json, &ctx);
    assert!(matches!(
        &page.flow[0],
        Widget::Select { options, selected: Some(s), .. }
            if options.len() == 2 && s == "Starter"
    ));
}

#[test]
fn test_input_placeholder_chain() {
    let json = r#"{
        "ROOT": { "nodes": ["i"] },
        "i": { "type": "TextInput" }
    }"#;
    let ctx = PageContext {
        placeholder: Some("Your name".to_string()),
        ..Default::default()
    };
    let page = render(json, &ctx);
    assert!(matches!(
        &page.flow[0],
        Widget::Input { placeholder, value: None, .. } if placeholder == "Your name"
    ));
}

#[test]
fn test_navigation_button_actions_and_labels() {
    let json = r#"{
        "ROOT": { "nodes": ["back", "next", "finish"] },
        "back": { "type": "NavigationButton", "props": { "action": "back" } },
        "next": { "type": "NavigationButton" },
        "finish": { "type": "NavigationButton", "props": { "action": "finish" } }
    }"#;
    let page = render(json, &PageContext::default());

    let roles: Vec<_> = page
        .flow
        .iter()
        .map(|w| match w {
            Widget::Button { label, role, .. } => (label.clone(), *role),
            other => panic!("expected button, got {:?}", other),
        })
        .collect();

    assert_eq!(
        roles,
        vec![
            ("Back".to_string(), ButtonRole::Navigation(NavAction::Back)),
            ("Next".to_string(), ButtonRole::Navigation(NavAction::Next)),
            ("Done".to_string(), ButtonRole::Navigation(NavAction::Finish)),
        ]
    );
}

#[test]
fn test_image_node_is_a_placeholder_with_late_update() {
    let json = r#"{
        "ROOT": { "nodes": ["img"] },
        "img": { "type": "ImageComponent", "props": { "height": 240 } }
    }"#;
    let ctx = PageContext {
        image_url: Some("https://cdn.example.com/hero.png".to_string()),
        ..Default::default()
    };
    let graph = parse_graph(json).unwrap();
    let page = render_page(&graph, &ctx, &MemoryInputStore::new(), PageEpoch(4));

    match &page.flow[0] {
        Widget::Image {
            node_id,
            url,
            height,
            ..
        } => {
            assert_eq!(node_id, "img");
            assert_eq!(url.as_deref(), Some("https://cdn.example.com/hero.png"));
            assert_eq!(*height, Some(240.0));

            // The loader's late result is matched against the render pass.
            let fresh = ImageUpdate {
                epoch: PageEpoch(4),
                node_id: node_id.clone(),
            };
            let stale = ImageUpdate {
                epoch: PageEpoch(3),
                node_id: node_id.clone(),
            };
            assert!(page.accepts_image(&fresh));
            assert!(!page.accepts_image(&stale));
        }
        other => panic!("expected image, got {:?}", other),
    }
}

#[test]
fn test_parse_failure_paths_yield_fallback_page() {
    let ctx = PageContext::default();
    let store = MemoryInputStore::new();

    for bad in ["{ not json", "[]", "42", r#""a string""#, r#"{ "page": {} }"#] {
        let page = render_document(bad, &ctx, &store, PageEpoch(9));
        assert_eq!(page, Page::unable_to_render(PageEpoch(9)), "input: {bad}");
    }

    assert!(matches!(
        try_render_document("{ not json", &ctx, &store, PageEpoch(9)),
        Err(LayoutError::InvalidJson { .. })
    ));
    assert!(matches!(
        try_render_document("[]", &ctx, &store, PageEpoch(9)),
        Err(LayoutError::NotAnObject)
    ));
    assert!(matches!(
        try_render_document(r#"{ "page": {} }"#, &ctx, &store, PageEpoch(9)),
        Err(LayoutError::MissingRoot)
    ));
}

#[test]
fn test_orphan_nodes_are_never_rendered() {
    let json = r#"{
        "ROOT": { "nodes": ["a"] },
        "a": { "type": "BodyText", "props": { "text": "reachable" } },
        "orphan": { "type": "HeaderText", "props": { "text": "unreachable" } }
    }"#;
    let graph = parse_graph(json).unwrap();
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.get("orphan").unwrap().kind, ComponentKind::HeaderText);

    let page = render(json, &PageContext::default());
    assert_eq!(page.flow.len(), 1);
    assert!(matches!(
        &page.flow[0],
        Widget::Text { content, .. } if content == "reachable"
    ));
}

#[test]
fn test_full_onboarding_page_document() {
    // A realistic export: top progress label, scrolling content with a
    // nested container, and a bottom navigation row.
    let json = r##"{
        "ROOT": { "isCanvas": true, "nodes": ["progress", "hero", "content", "nav"] },
        "progress": {
            "type": { "resolvedName": "BodyText" },
            "props": { "text": "Step 2 of 5", "pagePosition": "top", "textAlign": "center" }
        },
        "hero": {
            "type": { "resolvedName": "ImageComponent" },
            "props": { "url": "https://cdn.example.com/step2.png", "height": 220.5 }
        },
        "content": {
            "type": { "resolvedName": "Container" },
            "isCanvas": true,
            "props": { "spacing": 12, "padding": { "top": 24, "left": 16, "right": 16 } },
            "nodes": ["title", "subtitle", "gap", "field"]
        },
        "title": {
            "type": { "resolvedName": "HeaderText" },
            "props": { "text": "Tell us about you", "fontSize": 32, "color": "#111827" }
        },
        "subtitle": { "type": { "resolvedName": "BodyText" } },
        "gap": { "type": { "resolvedName": "Spacer" }, "props": { "height": 24 } },
        "field": { "type": { "resolvedName": "TextInput" } },
        "nav": {
            "type": { "resolvedName": "NavigationButton" },
            "props": { "pagePosition": "bottom", "action": "next", "backgroundColor": "#2563eb" }
        }
    }"##;

    let ctx = PageContext {
        title: Some("Tell us about you".to_string()),
        subtitle: Some("This helps personalize your plan".to_string()),
        placeholder: Some("Full name".to_string()),
        key: Some("full_name".to_string()),
        ..Default::default()
    };
    let page = render(json, &ctx);

    // Flow: hero image + content stack, in document order.
    assert_eq!(page.flow.len(), 2);
    assert!(matches!(&page.flow[0], Widget::Image { .. }));
    match &page.flow[1] {
        Widget::Stack {
            spacing,
            padding,
            children,
            ..
        } => {
            assert_eq!(*spacing, 12.0);
            assert_eq!(padding.left, 16.0);
            assert_eq!(padding.bottom, 0.0);
            assert_eq!(children.len(), 4);
            assert!(matches!(
                &children[1],
                Widget::Text { content, .. } if content == "This helps personalize your plan"
            ));
            assert!(matches!(&children[2], Widget::Spacer { height } if *height == 24.0));
            assert!(matches!(
                &children[3],
                Widget::Input { key: Some(k), placeholder, .. }
                    if k == "full_name" && placeholder == "Full name"
            ));
        }
        other => panic!("expected stack, got {:?}", other),
    }

    // Overlays: top label and bottom nav, original order preserved.
    assert_eq!(page.overlays.len(), 2);
    assert_eq!(page.overlays[0].anchor, Anchor::Top);
    assert_eq!(page.overlays[1].anchor, Anchor::Bottom);
    assert!(page.bottom_clearance > 0.0);
}

#[test]
fn test_rendering_twice_is_identical() {
    let json = r#"{
        "ROOT": { "nodes": ["a", "b", "c"] },
        "a": { "type": "HeaderText" },
        "b": { "type": "SingleSelect", "props": { "options": ["x", "y"] } },
        "c": { "type": "NavigationButton", "props": { "pagePosition": "bottom" } }
    }"#;
    let ctx = PageContext {
        title: Some("Pick one".to_string()),
        key: Some("choice".to_string()),
        ..Default::default()
    };
    let mut store = MemoryInputStore::new();
    store.update("choice", InputValue::Text("y".to_string()));

    let graph = parse_graph(json).unwrap();
    let first = render_page(&graph, &ctx, &store, PageEpoch(2));
    let second = render_page(&graph, &ctx, &store, PageEpoch(2));
    assert_eq!(first, second);
}
