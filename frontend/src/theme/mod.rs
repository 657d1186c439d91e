//! Chart theming: brand palette, formatting defaults, and the one-time
//! defaults patch applied before any chart mounts.
//!
//! The charting library keeps a shared mutable defaults object on the
//! host page; [`ChartDefaults::branded`] builds our patch for it and
//! [`install`] publishes the result as JSON on a window global for the
//! chart bootstrap to fold in. Everything else in the module is a pure
//! transformation over in-memory configuration, except
//! [`vertical_gradient`], which needs a live drawing surface.

pub mod format;
pub mod palette;

use palette::Color;
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

/// Window global the branded defaults are published under.
pub const GLOBAL_DEFAULTS_NAME: &str = "chartThemeDefaults";

/// A dataset fill. Gradients carry their parameters only; the chart host
/// turns them into a live `CanvasGradient` via [`vertical_gradient`] at
/// draw time, since a gradient exists relative to a rendered chart area.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Fill {
    Solid { color: String },
    Gradient { base: String, alpha_start: f64, alpha_end: f64 },
}

impl Fill {
    pub fn solid(color: Color) -> Self {
        Fill::Solid { color: color.hex() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    /// Per-dataset chart type override ("bar", "line", ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
}

/// The defaults patch: text and grid colors, element styling, per-scale
/// tick/grid/title styling, and legend/title/tooltip plugin defaults.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDefaults {
    pub color: String,
    pub border_color: String,
    pub maintain_aspect_ratio: bool,
    pub elements: ElementDefaults,
    pub scales: BTreeMap<String, ScaleDefaults>,
    pub plugins: PluginDefaults,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefaults {
    pub line: LineDefaults,
    pub bar: BarDefaults,
    pub point: PointDefaults,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDefaults {
    pub tension: f64,
    pub border_width: f64,
    pub border_color: String,
    pub background_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDefaults {
    pub border_width: f64,
    pub background_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointDefaults {
    pub radius: f64,
    pub hover_radius: f64,
    pub background_color: String,
    pub border_color: String,
    pub border_width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleDefaults {
    pub ticks: TickDefaults,
    pub grid: GridDefaults,
    pub title: TitleDefaults,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickDefaults {
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDefaults {
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDefaults {
    pub color: String,
    pub font_weight: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDefaults {
    pub legend: LegendDefaults,
    pub title: TitleDefaults,
    pub tooltip: TooltipDefaults,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendDefaults {
    pub labels_color: String,
    pub use_point_style: bool,
    pub point_style: String,
    pub box_width: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipDefaults {
    pub background_color: String,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub border_width: f64,
    pub display_colors: bool,
    pub use_point_style: bool,
}

const SCALE_TYPES: [&str; 4] = ["category", "time", "linear", "logarithmic"];

impl ChartDefaults {
    pub fn branded() -> Self {
        let scale = ScaleDefaults {
            ticks: TickDefaults {
                color: palette::TEXT.hex(),
            },
            grid: GridDefaults {
                color: palette::GRAY_200.hex(),
            },
            title: TitleDefaults {
                color: palette::TEXT.hex(),
                font_weight: 600,
            },
        };
        let scales = SCALE_TYPES
            .iter()
            .map(|kind| (kind.to_string(), scale.clone()))
            .collect();

        Self {
            color: palette::TEXT.hex(),
            border_color: palette::GRAY_200.hex(),
            maintain_aspect_ratio: true,
            elements: ElementDefaults {
                line: LineDefaults {
                    tension: 0.25,
                    border_width: 2.0,
                    border_color: palette::BLUE.hex(),
                    background_color: palette::BLUE.rgba(0.2),
                },
                bar: BarDefaults {
                    border_width: 0.0,
                    background_color: palette::BLUE.hex(),
                },
                point: PointDefaults {
                    radius: 3.0,
                    hover_radius: 4.0,
                    background_color: palette::WHITE.hex(),
                    border_color: palette::BLUE.hex(),
                    border_width: 2.0,
                },
            },
            scales,
            plugins: PluginDefaults {
                legend: LegendDefaults {
                    labels_color: palette::TEXT.hex(),
                    use_point_style: true,
                    point_style: "circle".to_string(),
                    box_width: 8,
                },
                title: TitleDefaults {
                    color: palette::TEXT.hex(),
                    font_weight: 600,
                },
                tooltip: TooltipDefaults {
                    background_color: palette::TEXT.hex(),
                    title_color: palette::WHITE.hex(),
                    body_color: palette::WHITE.hex(),
                    border_color: palette::GRAY_200.hex(),
                    border_width: 1.0,
                    display_colors: true,
                    use_point_style: true,
                },
            },
        }
    }
}

/// Publishes the branded defaults as JSON on a window global so the chart
/// bootstrap can fold them into the library's shared defaults object.
pub fn install(defaults: &ChartDefaults) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match serde_json::to_string(defaults) {
        Ok(json) => {
            let _ = js_sys::Reflect::set(
                &window,
                &JsValue::from_str(GLOBAL_DEFAULTS_NAME),
                &JsValue::from_str(&json),
            );
        }
        Err(err) => gloo_console::error!(format!("chart defaults not installed: {err}")),
    }
}

/// Rectangle of the rendered chart area, in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartArea {
    pub top: f64,
    pub bottom: f64,
}

/// Vertical fade used for area fills under lines.
pub fn vertical_gradient(
    ctx: &CanvasRenderingContext2d,
    area: &ChartArea,
    base: Color,
    alpha_start: f64,
    alpha_end: f64,
) -> Result<CanvasGradient, JsValue> {
    let gradient = ctx.create_linear_gradient(0.0, area.top, 0.0, area.bottom);
    gradient.add_color_stop(0.0, &base.rgba(alpha_start))?;
    gradient.add_color_stop(1.0, &base.rgba(alpha_end))?;
    Ok(gradient)
}

/// Assigns brand colors to datasets in input order. Colors a dataset
/// already sets are kept, per property. With `gradients`, non-bar datasets
/// trade their solid fill for a vertical fade of the same base color.
pub fn apply_palette(config: &mut ChartConfig, gradients: bool) {
    let picks = palette::series(config.data.datasets.len() as i32);
    for (i, dataset) in config.data.datasets.iter_mut().enumerate() {
        let base = picks.get(i).copied().unwrap_or(palette::BLUE);
        if dataset.background_color.is_none() {
            dataset.background_color = Some(Fill::solid(base));
        }
        if dataset.border_color.is_none() {
            dataset.border_color = Some(base.hex());
        }
        if gradients && dataset.kind.as_deref() != Some("bar") {
            dataset.background_color = Some(Fill::Gradient {
                base: base.hex(),
                alpha_start: 0.25,
                alpha_end: 0.0,
            });
        }
    }
}

/// Quick single-series configurations for the simpler dashboard panels.
pub mod presets {
    use super::{ChartConfig, ChartData, Dataset};

    pub fn bar_basic(labels: Vec<String>, series_label: &str, data: Vec<f64>) -> ChartConfig {
        ChartConfig {
            kind: "bar".to_string(),
            data: ChartData {
                labels,
                datasets: vec![Dataset {
                    label: series_label.to_string(),
                    data,
                    ..Default::default()
                }],
            },
        }
    }

    pub fn line_basic(labels: Vec<String>, series_label: &str, data: Vec<f64>) -> ChartConfig {
        ChartConfig {
            kind: "line".to_string(),
            data: ChartData {
                labels,
                datasets: vec![Dataset {
                    label: series_label.to_string(),
                    data,
                    fill: Some(true),
                    ..Default::default()
                }],
            },
        }
    }
}
