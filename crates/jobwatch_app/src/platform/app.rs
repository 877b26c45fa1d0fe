use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::anyhow;
use eframe::egui;
use jobwatch_core::{update, AppState, AppViewModel, Msg, ThemeStore};
use jobwatch_engine::{LocalStorage, QueryRunner};
use jobwatch_logging::jw_info;

use super::effects::EffectRunner;
use super::persistence::persistent_theme_store;
use super::ui::{self, UiAction};
use crate::config::AppConfig;

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    jw_info!(
        "Starting JobWatch against {} (state in {:?})",
        config.client.base_url,
        config.state_dir
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("JobWatch")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "JobWatch",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(JobWatchApp::new(cc, config)?))
        }),
    )
    .map_err(|err| anyhow!("ui error: {err}"))
}

struct JobWatchApp {
    state: AppState,
    theme: ThemeStore,
    effects: EffectRunner,
    view: AppViewModel,
    logo_dir: Option<PathBuf>,
    tick_interval: Duration,
    last_tick: Instant,
}

impl JobWatchApp {
    fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self, jobwatch_engine::NetworkError> {
        let mut theme = persistent_theme_store(LocalStorage::open(&config.state_dir));
        cc.egui_ctx.set_visuals(ui::visuals(theme.get_theme()));
        let ctx = cc.egui_ctx.clone();
        theme.subscribe(move |theme| ctx.set_visuals(ui::visuals(theme)));

        let ctx = cc.egui_ctx.clone();
        let runner = QueryRunner::with_api(config.client, move || ctx.request_repaint())?;

        let start_route = config.start_route;
        let state = AppState::with_settings(config.state);
        let view = state.view(theme.get_theme());
        let mut app = Self {
            state,
            theme,
            effects: EffectRunner::new(runner),
            view,
            logo_dir: config.logo_dir,
            tick_interval: config.tick_interval,
            last_tick: Instant::now(),
        };
        app.dispatch(Msg::Navigate {
            route: start_route,
            now: Instant::now(),
        });
        Ok(app)
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.effects.enqueue(effects);
        if state.consume_dirty() {
            self.view = state.view(self.theme.get_theme());
        }
        self.state = state;
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Navigate(route) => self.dispatch(Msg::Navigate {
                route,
                now: Instant::now(),
            }),
            UiAction::ToggleCompany(company) => self.dispatch(Msg::CompanyToggled(company)),
            UiAction::ToggleTheme => {
                let theme = self.theme.toggle();
                jw_info!("Theme switched to {:?}", theme);
                self.view = self.state.view(theme);
            }
        }
    }
}

impl eframe::App for JobWatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for msg in self.effects.drain(Instant::now()) {
            self.dispatch(msg);
        }

        let now = Instant::now();
        if now.duration_since(self.last_tick) >= self.tick_interval {
            self.last_tick = now;
            self.dispatch(Msg::Tick { now });
        }

        let mut actions = Vec::new();
        egui::SidePanel::left("nav")
            .resizable(false)
            .exact_width(200.0)
            .show(ctx, |ui| ui::nav::show(ui, &self.view, &mut actions));
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::show_page(ui, &self.view, self.logo_dir.as_deref(), &mut actions)
        });

        for action in actions {
            self.apply(action);
        }

        ctx.request_repaint_after(self.tick_interval);
    }
}
