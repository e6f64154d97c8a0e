//! Drawing the peer graph and showing it in a window.

use std::fmt::Display;

use minifb::{Key, ScaleMode, Window, WindowOptions};
use nalgebra::Point2;
use plotters::{coord::Shift, prelude::*};

use crate::{
    colormap::{viridis, Normalization},
    config::CanvasConfiguration,
    error::{Error, Result},
    graph::PeerGraph,
};

const TITLE_FONT_SIZE: i32 = 36;
const COLORBAR_WIDTH: i32 = 160;
const COLORBAR_LABEL_AREA: i32 = 90;
const COLORBAR_STEPS: usize = 256;
/// Room left around the [-1, 1] layout box so node circles aren't clipped.
const LAYOUT_PADDING: f64 = 0.05;

/// A rendered canvas, one `0RGB` word per pixel as expected by the display window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl Frame {
    /// Packs a row-major RGB byte buffer.
    fn from_rgb(width: usize, height: usize, rgb: &[u8]) -> Self {
        let pixels = rgb
            .chunks_exact(3)
            .map(|p| u32::from(p[0]) << 16 | u32::from(p[1]) << 8 | u32::from(p[2]))
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }
}

/// The plot title, naming the connection cap used to build the graph.
pub fn title(conn_limit: usize) -> String {
    format!("Betweenness Centrality of peer graph (max {conn_limit} connections per node)")
}

/// Draws the graph with nodes coloured by centrality and a colour bar spanning the observed
/// centrality range.
///
/// `centrality` and `positions` are indexed by node.
pub fn render(
    graph: &PeerGraph,
    centrality: &[f64],
    positions: &[Point2<f64>],
    canvas: &CanvasConfiguration,
    conn_limit: usize,
) -> Result<Frame> {
    debug_assert_eq!(centrality.len(), graph.node_count());
    debug_assert_eq!(positions.len(), graph.node_count());

    let (width, height) = (canvas.width, canvas.height);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    let norm = Normalization::determine(centrality);

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let root = root
            .titled(&title(conn_limit), ("sans-serif", TITLE_FONT_SIZE))
            .map_err(draw_err)?;
        let (graph_area, colorbar_area) =
            root.split_horizontally((width as i32 - COLORBAR_WIDTH).max(0));

        draw_graph(&graph_area, graph, centrality, positions, &norm, canvas)?;
        draw_colorbar(&colorbar_area, &norm)?;

        root.present().map_err(draw_err)?;
    }

    Ok(Frame::from_rgb(width as usize, height as usize, &buffer))
}

/// Opens a window showing the frame and blocks until it's closed or Escape is pressed.
pub fn show(frame: &Frame, title: &str) -> Result<()> {
    let mut window = Window::new(
        title,
        frame.width,
        frame.height,
        WindowOptions {
            resize: true,
            scale_mode: ScaleMode::AspectRatioStretch,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&frame.pixels, frame.width, frame.height)?;
    }

    Ok(())
}

//
// Private
//

fn draw_graph<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    graph: &PeerGraph,
    centrality: &[f64],
    positions: &[Point2<f64>],
    norm: &Normalization,
    canvas: &CanvasConfiguration,
) -> Result<()> {
    let bound = 1.0 + LAYOUT_PADDING;
    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .build_cartesian_2d(-bound..bound, -bound..bound)
        .map_err(draw_err)?;

    let edge_style = BLACK.mix(canvas.edge_opacity).stroke_width(1);
    chart
        .draw_series(graph.edges().iter().map(|edge| {
            let (s, t) = (positions[*edge.source()], positions[*edge.target()]);
            PathElement::new(vec![(s.x, s.y), (t.x, t.y)], edge_style)
        }))
        .map_err(draw_err)?;

    // Nodes go on top of the edges.
    let radius = canvas.node_radius as i32;
    chart
        .draw_series(positions.iter().zip(centrality).map(|(p, c)| {
            Circle::new((p.x, p.y), radius, viridis(norm.scale(*c)).filled())
        }))
        .map_err(draw_err)?;

    Ok(())
}

fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    norm: &Normalization,
) -> Result<()> {
    let (low, high) = colorbar_range(norm);

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .right_y_label_area_size(COLORBAR_LABEL_AREA)
        .build_cartesian_2d(0f64..1f64, low..high)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_labels(10)
        .y_label_formatter(&|v| format!("{v:.3}"))
        .draw()
        .map_err(draw_err)?;

    let step = (high - low) / COLORBAR_STEPS as f64;
    chart
        .draw_series((0..COLORBAR_STEPS).map(|i| {
            let t = (i as f64 + 0.5) / COLORBAR_STEPS as f64;
            let y = low + step * i as f64;
            Rectangle::new([(0.0, y), (1.0, y + step)], viridis(t).filled())
        }))
        .map_err(draw_err)?;

    Ok(())
}

/// The axis range of the colour bar. A degenerate range is widened so the axis can be drawn.
fn colorbar_range(norm: &Normalization) -> (f64, f64) {
    if norm.min < norm.max {
        (norm.min, norm.max)
    } else {
        (norm.min - 0.5, norm.min + 0.5)
    }
}

fn draw_err<E: Display>(err: E) -> Error {
    Error::Render(err.to_string())
}
