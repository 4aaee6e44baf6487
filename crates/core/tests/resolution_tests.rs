//! Integration tests for query state resolution.
//!
//! These tests exercise the public component and hook surfaces together with
//! providers, covering the precedence chain override > registry > built-in.

use query_handler_core::{
    DefaultVisuals, HookOutput, PlaceholderKind, QueryError, QueryResult, View, VisualContext,
    VisualOverrides, VisualSource, query_handler, use_query_handler,
};

fn failed(message: &str) -> QueryResult<Vec<String>> {
    QueryResult::failed(QueryError::new(message))
}

/// Scenario: data ["Item 1"], no overrides, no provider.
#[test]
fn test_item_scenario_without_provider() {
    let ctx: VisualContext<String> = VisualContext::new();
    let query = QueryResult::success(vec!["Item 1".to_string()]);

    let view = query_handler(&ctx, Some(&query), None, "Data Loaded");
    assert!(view.is_children());

    let output = use_query_handler(&ctx, Some(&query), None);
    assert_eq!(output.content(), Some(&vec!["Item 1".to_string()]));
}

#[test]
fn test_error_message_rendered_by_builtin() {
    let ctx: VisualContext<String> = VisualContext::new();
    let query = failed("Test Error");

    let output = use_query_handler(&ctx, Some(&query), None);
    let placeholder = output.placeholder().expect("error placeholder");
    assert_eq!(placeholder.kind, PlaceholderKind::Error);
    assert_eq!(placeholder.source, VisualSource::BuiltIn);
    assert_eq!(placeholder.visual(), "Error: Test Error");
}

#[test]
fn test_error_without_error_object() {
    let ctx: VisualContext<String> = VisualContext::new();
    let mut query: QueryResult<Vec<String>> = QueryResult::idle();
    query.is_error = true;

    let output = use_query_handler(&ctx, Some(&query), None);
    assert_eq!(output.placeholder().unwrap().visual(), "Error: ");
}

#[test]
fn test_override_beats_registry() {
    let ctx = VisualContext::new().provide(
        DefaultVisuals::new()
            .with_loading("registry loading".to_string())
            .with_error("registry error".to_string()),
    );
    let overrides = VisualOverrides::new().with_loading("override loading".to_string());

    let loading: QueryResult<Vec<String>> = QueryResult::loading();
    let output = use_query_handler(&ctx, Some(&loading), Some(&overrides));
    let placeholder = output.placeholder().unwrap();
    assert_eq!(placeholder.source, VisualSource::Override);
    assert_eq!(placeholder.visual(), "override loading");

    let error = failed("boom");
    let output = use_query_handler(&ctx, Some(&error), Some(&overrides));
    let placeholder = output.placeholder().unwrap();
    assert_eq!(placeholder.source, VisualSource::Registry);
    assert_eq!(placeholder.visual(), "registry error");
}

#[test]
fn test_registry_default_used_without_override() {
    let ctx =
        VisualContext::new().provide(DefaultVisuals::new().with_empty("Nothing yet".to_string()));
    let query: QueryResult<Vec<String>> = QueryResult::success(vec![]);

    match query_handler(&ctx, Some(&query), None, ()) {
        View::Placeholder(placeholder) => {
            assert_eq!(placeholder.source, VisualSource::Registry);
            assert_eq!(placeholder.visual(), "Nothing yet");
        }
        View::Children(()) => panic!("expected registry empty visual"),
    }
}

#[test]
fn test_nested_providers_do_not_merge() {
    let outer = VisualContext::new().provide(
        DefaultVisuals::new()
            .with_loading("outer loading".to_string())
            .with_empty("outer empty".to_string()),
    );
    let inner = outer.provide(DefaultVisuals::new().with_loading("inner loading".to_string()));

    let loading: QueryResult<Vec<String>> = QueryResult::loading();
    let output = use_query_handler(&inner, Some(&loading), None);
    assert_eq!(output.placeholder().unwrap().visual(), "inner loading");

    // The outer empty visual must not leak into the inner subtree.
    let empty: QueryResult<Vec<String>> = QueryResult::success_empty();
    let output = use_query_handler(&inner, Some(&empty), None);
    let placeholder = output.placeholder().unwrap();
    assert_eq!(placeholder.source, VisualSource::BuiltIn);
    assert_eq!(placeholder.visual(), "No Data Found");
}

#[test]
fn test_absent_query_renders_children_and_hook_content_none() {
    let ctx: VisualContext<String> = VisualContext::new();

    let view = query_handler::<Vec<String>, _, _>(&ctx, None, None, "children");
    assert_eq!(view, View::Children("children"));

    let output = use_query_handler::<Vec<String>, String>(&ctx, None, None);
    assert_eq!(output, HookOutput::Content(None));
}

#[test]
fn test_json_value_payloads() {
    let ctx: VisualContext<String> = VisualContext::new();

    let empty_array = QueryResult::success(serde_json::json!([]));
    assert!(!use_query_handler(&ctx, Some(&empty_array), None).is_content());

    let empty_object = QueryResult::success(serde_json::json!({}));
    assert!(use_query_handler(&ctx, Some(&empty_object), None).is_content());
}

#[test]
fn test_resolution_across_threads_shares_context() {
    let ctx =
        VisualContext::new().provide(DefaultVisuals::new().with_loading("shared".to_string()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                let query: QueryResult<Vec<u8>> = QueryResult::loading();
                let output = use_query_handler(&ctx, Some(&query), None);
                output.placeholder().map(|p| p.visual().clone())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("shared"));
    }
}
