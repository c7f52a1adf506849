//! Chart Component
//!
//! Time-series line chart drawn as SVG from precomputed geometry, with a
//! hover tooltip.

use eventdash::ChartPanelView;
use leptos::*;
use wasm_bindgen::JsCast;

/// Screen rectangle of the rendered chart, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Map a pointer position onto chart coordinates.
///
/// The SVG scales uniformly with its panel, so both axes use their own ratio
/// of logical to rendered size.
pub fn to_chart_coords(client_x: f64, client_y: f64, rect: ScreenRect, size: (f64, f64)) -> Option<(f64, f64)> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x = (client_x - rect.left) * size.0 / rect.width;
    let y = (client_y - rect.top) * size.1 / rect.height;
    Some((x, y))
}

fn screen_rect(ev: &ev::MouseEvent) -> Option<ScreenRect> {
    let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    Some(ScreenRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

fn px(v: f64) -> String {
    format!("{:.2}", v)
}

/// Chart panel component
#[component]
pub fn ChartPanel(panel: ChartPanelView) -> impl IntoView {
    let ChartPanelView {
        title,
        title_style,
        panel_style,
        geometry,
        style,
        series_name,
        grid_color,
        axis_color,
        tooltip_style,
        ..
    } = panel;

    let (width, height) = (geometry.width, geometry.height);
    let plot = geometry.plot;
    let view_box = format!("0 0 {} {}", width, height);

    let (hovered, set_hovered) = create_signal(None::<usize>);
    let geometry = store_value(geometry);

    let on_move = move |ev: ev::MouseEvent| {
        let Some(rect) = screen_rect(&ev) else {
            return;
        };
        let hit = to_chart_coords(ev.client_x() as f64, ev.client_y() as f64, rect, (width, height))
            .and_then(|(x, y)| geometry.with_value(|g| g.hit_test(x, y)));
        if hovered.get_untracked() != hit {
            set_hovered.set(hit);
        }
    };

    // Static layers
    let grid = geometry.with_value(|g| {
        g.grid
            .iter()
            .map(|line| {
                view! {
                    <line
                        x1=px(line.from.x)
                        y1=px(line.from.y)
                        x2=px(line.to.x)
                        y2=px(line.to.y)
                        stroke=grid_color.clone()
                        stroke-dasharray=style.grid_dash.clone()
                    />
                }
            })
            .collect_view()
    });

    let x_labels = geometry.with_value(|g| {
        g.x_ticks
            .iter()
            .map(|tick| {
                view! {
                    <text
                        x=px(tick.position)
                        y=px(plot.bottom() + 18.0)
                        text-anchor="middle"
                        font-size="12"
                        fill=axis_color.clone()
                    >
                        {tick.label.clone()}
                    </text>
                }
            })
            .collect_view()
    });

    let y_labels = geometry.with_value(|g| {
        g.y_ticks
            .iter()
            .map(|tick| {
                view! {
                    <text
                        x=px(plot.left - 8.0)
                        y=px(tick.position + 4.0)
                        text-anchor="end"
                        font-size="12"
                        fill=axis_color.clone()
                    >
                        {tick.label.clone()}
                    </text>
                }
            })
            .collect_view()
    });

    let line = geometry.with_value(|g| g.line_path()).map(|d| {
        view! {
            <path
                d=d
                fill="none"
                stroke=style.stroke.clone()
                stroke-width=px(style.stroke_width)
            />
        }
    });

    let dot_radius = style.dot_radius;
    let markers = geometry.with_value(|g| {
        g.markers
            .iter()
            .map(|marker| {
                let index = marker.index;
                view! {
                    <circle
                        cx=px(marker.center.x)
                        cy=px(marker.center.y)
                        r=move || {
                            if hovered.get() == Some(index) {
                                px(dot_radius + 2.0)
                            } else {
                                px(dot_radius)
                            }
                        }
                        fill="#fff"
                        stroke=style.stroke.clone()
                        stroke-width=px(style.stroke_width)
                    />
                }
            })
            .collect_view()
    });

    let empty_caption = geometry.with_value(|g| g.empty_caption()).map(|caption| {
        view! {
            <text
                x=px(plot.left + plot.width / 2.0)
                y=px(plot.top + plot.height / 2.0)
                text-anchor="middle"
                font-size="14"
                fill=axis_color.clone()
            >
                {caption}
            </text>
        }
    });

    // Vertical cursor under the hovered point
    let cursor_color = axis_color.clone();
    let cursor = move || {
        hovered
            .get()
            .and_then(|i| geometry.with_value(|g| g.tooltip(i)))
            .map(|tip| {
                view! {
                    <line
                        x1=px(tip.anchor.x)
                        y1=px(plot.top)
                        x2=px(tip.anchor.x)
                        y2=px(plot.bottom())
                        stroke=cursor_color.clone()
                    />
                }
            })
    };

    let value_color = style.stroke.clone();
    let tooltip = move || {
        hovered
            .get()
            .and_then(|i| geometry.with_value(|g| g.tooltip(i)))
            .map(|tip| {
                let position = format!(
                    "{} left: {:.2}%; top: {:.2}%; transform: translate(12px, -50%);",
                    tooltip_style,
                    tip.anchor.x / width * 100.0,
                    tip.anchor.y / height * 100.0
                );
                view! {
                    <div style=position>
                        <p style="margin: 0;">{tip.label}</p>
                        <p style=format!("margin: 0; color: {};", value_color)>
                            {format!("{} : {}", series_name, tip.value)}
                        </p>
                    </div>
                }
            })
    };

    view! {
        <div style=panel_style>
            <h2 style=title_style>{title}</h2>

            <div style="position: relative;">
                <svg
                    viewBox=view_box
                    width="100%"
                    style="display: block; height: auto;"
                    on:mousemove=on_move
                    on:mouseleave=move |_| set_hovered.set(None)
                >
                    <g>{grid}</g>
                    <line
                        x1=px(plot.left)
                        y1=px(plot.bottom())
                        x2=px(plot.right())
                        y2=px(plot.bottom())
                        stroke=axis_color.clone()
                    />
                    <line
                        x1=px(plot.left)
                        y1=px(plot.top)
                        x2=px(plot.left)
                        y2=px(plot.bottom())
                        stroke=axis_color.clone()
                    />
                    <g>{x_labels}</g>
                    <g>{y_labels}</g>
                    {cursor}
                    {line}
                    <g>{markers}</g>
                    {empty_caption}
                </svg>

                {tooltip}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_maps_to_chart_coords() {
        let rect = ScreenRect {
            left: 100.0,
            top: 50.0,
            width: 400.0,
            height: 150.0,
        };
        assert_eq!(
            to_chart_coords(300.0, 125.0, rect, (800.0, 300.0)),
            Some((400.0, 150.0))
        );
        assert_eq!(
            to_chart_coords(100.0, 50.0, rect, (800.0, 300.0)),
            Some((0.0, 0.0))
        );
    }

    #[test]
    fn test_collapsed_chart_has_no_coords() {
        let rect = ScreenRect {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
        };
        assert_eq!(to_chart_coords(10.0, 10.0, rect, (800.0, 300.0)), None);
    }
}
