mod app;
mod audio;
mod convert;
mod messages;
mod panels;
mod states;
mod worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([360.0, 600.0])
            .with_title("Invitation"),
        ..Default::default()
    };

    eframe::run_native(
        "Invitation",
        options,
        Box::new(|cc| Ok(Box::new(app::InvitationApp::new(&cc.egui_ctx, config_path)))),
    )
}
