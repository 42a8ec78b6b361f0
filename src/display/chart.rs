//! The payload handed to the line-chart collaborator, and scoped replacement
//! of whatever chart instance that collaborator is currently showing.
use crate::config::ChartStyle;
use crate::model::ChartSeries;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(rename = "borderColor")]
    pub border_color: String,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
}

/// Everything a line chart needs: categorical x labels (unit counts), the
/// cost and revenue series, and static styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    pub labels: Vec<u64>,
    pub datasets: [Dataset; 2],
    pub style: ChartStyle,
}

impl ChartPayload {
    pub fn new(series: &ChartSeries, style: &ChartStyle) -> Self {
        let cost = Dataset {
            label: style.cost.label.clone(),
            data: series.total_costs(),
            border_color: style.cost.border_color.clone(),
            background_color: style.cost.background_color.clone(),
            fill: style.cost.fill,
            tension: style.cost.tension,
        };
        let revenue = Dataset {
            label: style.revenue.label.clone(),
            data: series.total_revenues(),
            border_color: style.revenue.border_color.clone(),
            background_color: style.revenue.background_color.clone(),
            fill: style.revenue.fill,
            tension: style.revenue.tension,
        };
        Self {
            labels: series.units(),
            datasets: [cost, revenue],
            style: style.clone(),
        }
    }

    pub fn cost(&self) -> &Dataset { &self.datasets[0] }
    pub fn revenue(&self) -> &Dataset { &self.datasets[1] }
}

/// A rendering surface that can draw a chart and later tear it down.
pub trait ChartSink {
    /// Whatever identifies a drawn chart to the sink (widget id, canvas, ...).
    type Handle;

    fn draw(&mut self, payload: &ChartPayload) -> Self::Handle;
    fn dispose(&mut self, handle: Self::Handle);
}

/// Owns at most one live chart on a sink.
///
/// `replace` disposes the previous chart before the next one is drawn, and
/// dropping the slot disposes whatever is still live.
pub struct ChartSlot<S: ChartSink> {
    sink: S,
    current: Option<S::Handle>,
}

impl<S: ChartSink> ChartSlot<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, current: None }
    }

    pub fn replace(&mut self, payload: &ChartPayload) -> &S::Handle {
        self.clear();
        debug!(points = payload.labels.len(), "drawing chart");
        self.current.insert(self.sink.draw(payload))
    }

    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            debug!("disposing previous chart");
            self.sink.dispose(old);
        }
    }

    pub fn current(&self) -> Option<&S::Handle> {
        self.current.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: ChartSink> Drop for ChartSlot<S> {
    fn drop(&mut self) {
        self.clear();
    }
}
