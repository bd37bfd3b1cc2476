//! Dashboard Tab Tests
//!
//! Tab strip resolution against the standard registry, per-tab content
//! rendering, and the markdown sanitization boundary.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use proptest::prelude::*;
    use serde_json::json;
    use tab_resolver::content::{COMING_SOON_TITLE, UNSUPPORTED_TITLE};
    use tab_resolver::*;

    #[test]
    fn test_null_and_empty_remote_agree() {
        let registry = standard_registry();
        let from_null = resolve_tabs(None, registry);
        let from_empty = resolve_tabs(Some(&[][..]), registry);

        assert_eq!(from_null, from_empty);
        let keys: Vec<&str> = from_null.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "overview",
                "vitals",
                "labs",
                "prescriptions",
                "insurance",
                "referrals",
                "clinical_notes",
                "longevity"
            ]
        );
        assert!(from_null.windows(2).all(|w| w[0].display_order < w[1].display_order));
        assert!(from_null.iter().all(|t| t.id < 0 && t.scope == "system"));
    }

    #[test]
    fn test_practice_tabs_filtered_and_ordered() {
        let remote = practice_tabs();
        let tabs = resolve_tabs(Some(remote.as_slice()), standard_registry());
        let keys: Vec<&str> = tabs.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["overview", "longevity", "policies", "scheduler", "cohort_query"]
        );
    }

    #[test]
    fn test_every_practice_tab_renders() {
        let registry = standard_registry();
        let ctx = PatientContext::new("PAT-100").with_name("Rosa Diaz");
        let remote = practice_tabs();
        let tabs = resolve_tabs(Some(remote.as_slice()), registry);

        let payloads: Vec<RenderPayload> = tabs
            .iter()
            .map(|t| render_tab_content(t, &ctx, registry))
            .collect();

        match &payloads[0] {
            RenderPayload::Builtin(view) => assert_eq!(view.patient_id, "PAT-100"),
            other => panic!("overview should be builtin, got {:?}", other),
        }
        match &payloads[2] {
            RenderPayload::Html(html) => {
                assert!(html.as_str().contains("<h2>Office hours</h2>"));
                assert!(!html.as_str().contains("<script"));
                assert!(!html.as_str().contains("steal()"));
            }
            other => panic!("policies should be html, got {:?}", other),
        }
        match &payloads[3] {
            RenderPayload::Iframe(frame) => {
                assert_eq!(frame.src, "https://book.example.org/embed");
                assert_eq!(frame.sandbox, IFRAME_SANDBOX);
            }
            other => panic!("scheduler should be an iframe, got {:?}", other),
        }
        assert!(matches!(&payloads[4], RenderPayload::Notice(n) if n.title == COMING_SOON_TITLE));
    }

    #[test]
    fn test_broken_tab_does_not_affect_neighbours() {
        let registry = standard_registry();
        let ctx = PatientContext::new("PAT-100");
        let tabs = vec![
            tab(1, "mystery", "builtin_component", 10, json!({})),
            tab(2, "frame", "iframe", 20, json!({"url": "javascript:alert(1)"})),
            tab(3, "labs", "builtin_component", 30, json!({})),
        ];
        let payloads: Vec<RenderPayload> = tabs
            .iter()
            .map(|t| render_tab_content(t, &ctx, registry))
            .collect();

        assert!(matches!(&payloads[0], RenderPayload::Notice(n) if n.title == UNSUPPORTED_TITLE));
        assert!(matches!(&payloads[1], RenderPayload::Notice(n) if n.title == UNSUPPORTED_TITLE));
        assert!(matches!(&payloads[2], RenderPayload::Builtin(_)));
    }

    #[test]
    fn test_sanitizer_strips_script_and_javascript_links() {
        let html = sanitize_markdown("<script>alert(1)</script>").unwrap();
        assert!(!html.as_str().contains("<script"));

        let html = sanitize_markdown(r#"<a href="javascript:alert(1)">x</a>"#).unwrap();
        assert!(!html.as_str().contains("javascript:"));
    }

    #[test]
    fn test_tab_configs_from_server_json() {
        let body = json!([
            {
                "id": 3, "key": "labs", "label": "Labs", "icon": "flask-conical",
                "contentType": "builtin_component", "displayOrder": 2, "scope": "practice"
            },
            {
                "id": 5, "key": "board", "label": "Board", "icon": "kanban",
                "contentType": "kanban", "isVisible": true, "displayOrder": 1
            }
        ]);
        let configs: Vec<TabConfig> = serde_json::from_value(body).unwrap();
        let view = tabs_view::<String>(Some(Ok(configs)), standard_registry());

        assert!(matches!(view, TabsView::Ready { source: TabSource::Remote, .. }));
        assert_eq!(view.active(None).unwrap().key, "board");
        assert_eq!(
            view.active(None).unwrap().content_type,
            ContentType::Other("kanban".to_string())
        );
    }

    proptest! {
        #[test]
        fn prop_remote_resolution_is_sorted_and_visible(
            entries in proptest::collection::vec((any::<bool>(), -50i32..50), 1..20)
        ) {
            let remote: Vec<TabConfig> = entries
                .iter()
                .enumerate()
                .map(|(i, (visible, order))| {
                    let mut t = tab(i as i64, &format!("tab{}", i), "markdown", *order, json!({}));
                    t.is_visible = *visible;
                    t
                })
                .collect();
            let tabs = resolve_tabs(Some(remote.as_slice()), standard_registry());

            prop_assert!(tabs.iter().all(|t| t.is_visible));
            prop_assert!(tabs.windows(2).all(|w| w[0].display_order <= w[1].display_order));
            prop_assert_eq!(tabs.len(), entries.iter().filter(|(v, _)| *v).count());
        }
    }
}
