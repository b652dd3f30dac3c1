use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use log::{error, info};

use atmocalc::{evaluate_text, profile, ProfileConfig, Quantity, Report};

fn main() -> eframe::Result {
    pretty_env_logger::init();

    let sweep = ProfileConfig {
        step: 500.0,
        ..ProfileConfig::default()
    };
    let profiles = match profile(&sweep) {
        Ok(reports) => Profiles::from_reports(&reports),
        Err(err) => {
            error!("Cannot tabulate profiles: {err}");
            Profiles::default()
        }
    };
    info!("Tabulated {} altitudes", profiles.temperature.len());

    let app = AtmoViz {
        input: String::new(),
        outcome: None,
        selected: None,
        show_about: false,
        profiles,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native("Atmosphere Calculator", options, Box::new(|_| Ok(Box::new(app))))
}

/// `[value, altitude km]` pairs for the profile plots.
#[derive(Default)]
struct Profiles {
    temperature: Vec<[f64; 2]>,
    log_pressure: Vec<[f64; 2]>,
    log_density: Vec<[f64; 2]>,
}

impl Profiles {
    fn from_reports(reports: &[Report]) -> Self {
        let series = |quantity: Quantity, map: fn(f64) -> f64| -> Vec<[f64; 2]> {
            reports
                .iter()
                .filter_map(|r| r.get(quantity).map(|v| [map(v), r.altitude / 1000.0]))
                .filter(|p| p[0].is_finite())
                .collect()
        };
        Self {
            temperature: series(Quantity::Temperature, |t| t),
            log_pressure: series(Quantity::Pressure, f64::log10),
            log_density: series(Quantity::Density, f64::log10),
        }
    }
}

struct AtmoViz {
    input: String,
    outcome: Option<Result<Report, String>>,
    selected: Option<Quantity>,
    show_about: bool,
    profiles: Profiles,
}

impl AtmoViz {
    fn calculate(&mut self) {
        self.outcome = Some(evaluate_text(&self.input).map_err(|err| err.to_string()));
    }

    fn results(&mut self, ui: &mut egui::Ui) {
        let report = match &self.outcome {
            None => {
                ui.label("Enter a height and press Calculate.");
                return;
            }
            Some(Err(message)) => {
                ui.colored_label(egui::Color32::LIGHT_RED, message.as_str());
                return;
            }
            Some(Ok(report)) => report,
        };

        let mut clicked = None;
        egui::Grid::new("readings").striped(true).show(ui, |ui| {
            for reading in &report.readings {
                let color = if self.selected == Some(reading.quantity) {
                    egui::Color32::RED
                } else {
                    egui::Color32::WHITE
                };
                ui.label(format!("{} =", reading.symbol()));
                let value = egui::RichText::new(reading.formatted()).color(color).monospace();
                let response = ui
                    .add(egui::Label::new(value).sense(egui::Sense::click()))
                    .on_hover_text(reading.quantity.name());
                if response.clicked() {
                    clicked = Some(reading.quantity);
                }
                ui.label(reading.unit());
                ui.end_row();
            }
        });
        if clicked.is_some() {
            self.selected = clicked;
        }
    }
}

impl eframe::App for AtmoViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Height (m):");
                let response = ui.text_edit_singleline(&mut self.input);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Calculate").clicked() || submitted {
                    self.calculate();
                }
                if ui.button("About").clicked() {
                    self.show_about = true;
                }
            });
        });

        egui::SidePanel::left("results")
            .min_width(280.0)
            .show(ctx, |ui| self.results(ui));

        egui::Window::new("About")
            .open(&mut self.show_about)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Standard atmosphere from -2000 m to 1 200 000 m.");
                ui.label("Click a value to highlight it.");
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let third_w = available.x / 3.0 - 8.0;

            ui.horizontal(|ui| {
                let plots: [(&str, &str, &[[f64; 2]]); 3] = [
                    ("Temperature (K)", "temperature", &self.profiles.temperature),
                    ("log10 Pressure (Pa)", "pressure", &self.profiles.log_pressure),
                    ("log10 Density (kg/m^3)", "density", &self.profiles.log_density),
                ];
                for (label, id, data) in plots {
                    ui.vertical(|ui| {
                        ui.label(label);
                        let points: PlotPoints = data.iter().copied().collect();
                        Plot::new(id)
                            .width(third_w)
                            .height(available.y - 24.0)
                            .x_axis_label(label)
                            .y_axis_label("Altitude (km)")
                            .show(ui, |plot_ui| {
                                plot_ui.line(Line::new(id, points));
                            });
                    });
                }
            });
        });
    }
}
