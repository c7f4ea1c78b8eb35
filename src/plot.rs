//! Plot windows for waveform and spectrum views
//!
//! Rendering is delegated to eframe/egui_plot: each call opens one native
//! window with a single zoomable plot and blocks until it is closed.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::audio::AudioBuffer;
use crate::dsp::SpectrumView;
use crate::error::{HamwaveError, Result};

/// One named line on a plot
struct Series {
    name: String,
    points: Vec<[f64; 2]>,
}

/// A single-plot window
struct PlotWindow {
    plot_id: &'static str,
    x_label: String,
    y_label: String,
    series: Vec<Series>,
}

impl eframe::App for PlotWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new(self.plot_id)
                .legend(Legend::default())
                .x_axis_label(self.x_label.clone())
                .y_axis_label(self.y_label.clone())
                .allow_boxed_zoom(true)
                .allow_drag(true)
                .allow_scroll(true)
                .allow_zoom(true)
                .show(ui, |plot_ui| {
                    for s in &self.series {
                        let points: PlotPoints = s.points.iter().copied().collect();
                        plot_ui.line(Line::new(points).name(&s.name).width(1.0));
                    }
                });
        });
    }
}

fn show_window(title: &str, window: PlotWindow) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 600.0])
            .with_min_inner_size([600.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(title, options, Box::new(move |_cc| Ok(Box::new(window))))
        .map_err(|e| HamwaveError::PlotError {
            details: e.to_string(),
        })
}

/// Show amplitude vs time for every channel of a buffer
///
/// An empty buffer opens an empty plot; that is a successful run.
pub fn show_waveform(buffer: &AudioBuffer, title: &str) -> Result<()> {
    let sample_rate = buffer.sample_rate() as f64;
    let series = (0..buffer.channels())
        .map(|ch| Series {
            name: format!("channel {ch}"),
            points: buffer
                .channel_samples(ch)
                .iter()
                .enumerate()
                .map(|(i, &s)| [i as f64 / sample_rate, s as f64])
                .collect(),
        })
        .collect();

    show_window(
        title,
        PlotWindow {
            plot_id: "waveform_plot",
            x_label: "Time (seconds)".to_string(),
            y_label: "Amplitude".to_string(),
            series,
        },
    )
}

/// Show magnitude vs frequency for a computed spectrum
pub fn show_spectrum(view: &SpectrumView, title: &str) -> Result<()> {
    let points = view
        .frequencies
        .iter()
        .zip(view.magnitudes.iter())
        .map(|(&f, &m)| [f as f64, m as f64])
        .collect();

    show_window(
        title,
        PlotWindow {
            plot_id: "spectrum_plot",
            x_label: "Frequency (Hz)".to_string(),
            y_label: "Magnitude".to_string(),
            series: vec![Series {
                name: "magnitude".to_string(),
                points,
            }],
        },
    )
}
