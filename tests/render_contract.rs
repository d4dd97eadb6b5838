//! Dashboard rendering contract, exercised with a recording fake backend
//! instead of a real graphical library.

use status_charts::charts::{
    ChartRenderer, ChartSpec, RenderError, RenderHandle, StatusDashboard, COLUMN_CONTAINER,
    PIE_CONTAINER,
};
use status_charts::data::Totals;

/// Fake backend that records every render call.
#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<(String, ChartSpec)>,
    fail_on: Option<String>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(
        &mut self,
        container_id: &str,
        spec: &ChartSpec,
    ) -> Result<RenderHandle, RenderError> {
        if self.fail_on.as_deref() == Some(container_id) {
            return Err(RenderError::Backend(format!(
                "container {container_id} missing"
            )));
        }
        self.calls.push((container_id.to_string(), spec.clone()));
        Ok(RenderHandle {
            container: container_id.to_string(),
            width: 640,
            height: 480,
        })
    }
}

#[test]
fn dashboard_renders_pie_then_column_into_fixed_containers() {
    let mut renderer = RecordingRenderer::default();
    let handles = StatusDashboard::new(Totals::new(8, 1, 1))
        .render_charts(&mut renderer)
        .unwrap();

    assert_eq!(renderer.calls.len(), 2);
    assert_eq!(renderer.calls[0].0, PIE_CONTAINER);
    assert_eq!(renderer.calls[1].0, COLUMN_CONTAINER);
    assert_eq!(handles[0].container, PIE_CONTAINER);
    assert_eq!(handles[1].container, COLUMN_CONTAINER);
}

#[test]
fn rendered_specs_carry_percentages_and_raw_counts() {
    let mut renderer = RecordingRenderer::default();
    StatusDashboard::new(Totals::new(8, 1, 1))
        .render_charts(&mut renderer)
        .unwrap();

    let ChartSpec::Pie { slices, .. } = &renderer.calls[0].1 else {
        panic!("first call must carry the pie spec");
    };
    let labels: Vec<String> = slices.iter().map(|s| s.data_label()).collect();
    assert_eq!(labels, ["Passed: 80.0 %", "Failed: 10.0 %", "Warning: 10.0 %"]);

    let ChartSpec::Column { series, y_min, .. } = &renderer.calls[1].1 else {
        panic!("second call must carry the column spec");
    };
    let values: Vec<u64> = series.iter().map(|s| s.value).collect();
    assert_eq!(values, [8, 1, 1]);
    assert_eq!(*y_min, 0);
}

#[test]
fn zero_totals_render_no_data_pie_and_zero_bars() {
    let mut renderer = RecordingRenderer::default();
    StatusDashboard::new(Totals::new(0, 0, 0))
        .render_charts(&mut renderer)
        .unwrap();

    let ChartSpec::Pie { slices, .. } = &renderer.calls[0].1 else {
        panic!("first call must carry the pie spec");
    };
    assert!(slices.is_empty());

    let ChartSpec::Column { series, .. } = &renderer.calls[1].1 else {
        panic!("second call must carry the column spec");
    };
    assert!(series.iter().all(|s| s.value == 0));
}

#[test]
fn rendering_twice_produces_identical_specs() {
    let dashboard = StatusDashboard::new(Totals::new(5, 5, 0));

    let mut first = RecordingRenderer::default();
    dashboard.render_charts(&mut first).unwrap();
    let mut second = RecordingRenderer::default();
    dashboard.render_charts(&mut second).unwrap();

    assert_eq!(first.calls, second.calls);
}

#[test]
fn backend_failure_on_pie_stops_before_the_column_call() {
    let mut renderer = RecordingRenderer {
        fail_on: Some(PIE_CONTAINER.to_string()),
        ..Default::default()
    };

    let result = StatusDashboard::new(Totals::new(8, 1, 1)).render_charts(&mut renderer);
    assert!(result.is_err());
    assert!(renderer.calls.is_empty());
}
