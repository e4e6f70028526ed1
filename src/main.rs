use eframe::egui;
use serde_json::json;

use osd_console::{logging, OsdConsole, OsdSettings};

struct DemoApp {
    console: OsdConsole,
    frame: u64,
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("osd_console demo");
            ui.label("CTRL+` toggles the console overlay.");
        });

        self.frame += 1;
        self.console.log_wrapped(format!("frame {}", self.frame));
        if self.frame % 60 == 0 {
            self.console.log_pretty(
                json!({ "1": [1, 2, 3], "2": [4, 5, 6, [8, 9, 10]] }),
                true,
            );
        }

        self.console.tick(ctx);
        ctx.request_repaint();
    }
}

fn main() -> anyhow::Result<()> {
    logging::init(true);

    let settings = OsdSettings::load("osd_console.json")?;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "osd_console demo",
        native_options,
        Box::new(move |_cc| {
            Box::new(DemoApp {
                console: OsdConsole::new(settings),
                frame: 0,
            })
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run demo window: {err}"))?;

    Ok(())
}
