use chrono::NaiveDate;
use crm_widget_glue::{GlueConfig, GlueError, render_bundle_tags, render_declarative, render_mount};
use crm_widget_models::{
    DatePickerConfig, ResourceOption, ResourceSelectBundle, ResourceTableBundle, TableRow,
    WidgetKind, decode_bundle,
};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn embedded_props(script: &str) -> anyhow::Result<Value> {
    let start = script
        .find('>')
        .ok_or_else(|| anyhow::anyhow!("props script has no opening tag"))?;
    let end = script
        .rfind("</script>")
        .ok_or_else(|| anyhow::anyhow!("props script has no closing tag"))?;
    Ok(serde_json::from_str(&script[start + 1..end])?)
}

#[test]
fn selector_mount_round_trips_props_through_the_page() -> anyhow::Result<()> {
    init_tracing();
    let config = GlueConfig::default();
    let bundle = ResourceSelectBundle {
        name: "region".into(),
        options: vec![ResourceOption::new(1, "North </script> & South")],
        initial_selection: None,
    };

    let snippet = render_mount(&config, WidgetKind::ResourceSelect, "region", &bundle)?;

    assert_eq!(snippet.anchor, r#"<div id="region"></div>"#);
    assert!(snippet.props_script.starts_with(
        r#"<script type="application/json" id="region-props">"#
    ));
    assert_eq!(snippet.props_script.matches("</script>").count(), 1);
    assert!(snippet.call_script.contains(
        r#"crmWidgets.createResourceSelect(document.getElementById("region"), JSON.parse(document.getElementById("region-props").textContent));"#
    ));
    assert!(snippet.call_script.starts_with("<script>window.crmWidgetsReady.then("));

    let decoded = decode_bundle::<ResourceSelectBundle>(embedded_props(&snippet.props_script)?);
    assert!(decoded.is_clean());
    assert_eq!(decoded.bundle, bundle);
    Ok(())
}

#[test]
fn table_and_date_picker_use_their_own_entry_points() -> anyhow::Result<()> {
    init_tracing();
    let config = GlueConfig::default();
    let table = ResourceTableBundle {
        field_name: "contacts".into(),
        resource_type: "Person".into(),
        rows: vec![TableRow::new(4, "Ada")],
    };
    let picker = DatePickerConfig {
        name: Some("start_date".into()),
        value: NaiveDate::from_ymd_opt(2024, 2, 29),
        ..DatePickerConfig::default()
    };

    let table_snippet = render_mount(&config, WidgetKind::ResourceTable, "contacts", &table)?;
    let picker_snippet = render_mount(&config, WidgetKind::DatePicker, "start-date", &picker)?;

    assert!(table_snippet.call_script.contains("crmWidgets.createResourceTable("));
    assert!(picker_snippet.call_script.contains("crmWidgets.createDatePicker("));
    assert_eq!(
        embedded_props(&picker_snippet.props_script)?,
        json!({ "name": "start_date", "value": "2024-02-29", "required": false, "disabled": false })
    );
    let rendered = table_snippet.to_string();
    assert_eq!(rendered.lines().count(), 3);
    Ok(())
}

#[test]
fn declarative_anchor_references_its_props_script() -> anyhow::Result<()> {
    init_tracing();
    let config = GlueConfig {
        props_suffix: "-data".into(),
        ..GlueConfig::default()
    };
    let html = render_declarative(
        &config,
        WidgetKind::ResourceTable,
        "orders",
        &json!({ "fieldName": "orders", "resourceType": "SalesOrder", "rows": [] }),
    )?;
    let (anchor, script) = html
        .split_once('\n')
        .ok_or_else(|| anyhow::anyhow!("expected anchor and script lines"))?;
    assert_eq!(
        anchor,
        r#"<div id="orders" data-crm-widget="resource-table" data-crm-props-ref="orders-data"></div>"#
    );
    assert!(script.contains(r#"id="orders-data""#));
    assert_eq!(embedded_props(script)?["fieldName"], "orders");
    Ok(())
}

#[test]
fn unsafe_anchor_ids_are_rejected() {
    init_tracing();
    let err = render_mount(
        &GlueConfig::default(),
        WidgetKind::DatePicker,
        "x\"); alert(1); (\"",
        &json!({}),
    )
    .unwrap_err();
    assert!(matches!(err, GlueError::InvalidAnchorId { .. }));
}

#[test]
fn bundle_tags_load_stylesheet_script_and_module() -> anyhow::Result<()> {
    init_tracing();
    let tags = render_bundle_tags(&GlueConfig::default())?;
    let lines: Vec<_> = tags.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"<link rel="stylesheet" href="/static/bundle.css">"#,
            r#"<script src="/static/crm_widgets.js"></script>"#,
            r#"<script>window.crmWidgetsReady = crmWidgets("/static/crm_widgets_bg.wasm");</script>"#,
        ]
    );
    Ok(())
}

#[test]
fn invalid_namespace_blocks_rendering() {
    let config = GlueConfig {
        namespace: "window.crm".into(),
        ..GlueConfig::default()
    };
    assert!(matches!(
        render_bundle_tags(&config),
        Err(GlueError::InvalidNamespace { .. })
    ));
    assert!(matches!(
        render_mount(&config, WidgetKind::ResourceSelect, "a", &json!({})),
        Err(GlueError::InvalidNamespace { .. })
    ));
}
