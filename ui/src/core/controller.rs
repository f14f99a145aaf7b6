//! The page controller: every piece of page state behind one command
//! dispatch.
//!
//! UI events arrive as `Command`s. `PageController::dispatch` applies them
//! synchronously and returns the `Effect`s the platform layer still has to
//! carry out (timers, downloads, printing, scrolling). Nothing in here
//! touches the DOM, so tests drive the whole page by calling `dispatch`.

use tracing::{debug, info, warn};

use super::animation::{AnimationFallback, AnimationState};
use super::catalog::{Material, MATERIALS};
use super::chart::{ChartRenderer, CHART_DATA};
use super::config::PageConfig;
use super::export::{export_vector, SvgExport};
use super::modal::MaterialModal;
use super::nav::{NavController, SectionOffset};
use super::progress::{AddOutcome, ProgressStore};
use super::scheduler::{ScheduledTimer, TimerEvent};
use super::storage::KeyValueStore;
use super::toast::{Severity, Toast, ToastNotifier};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    OpenMaterial(String),
    SaveMaterial(String),
    CloseModal,
    /// Bar or legend click; both resolve to the same index.
    SelectBar(usize),
    ExportChart,
    PrintPage,
    ToggleMenu,
    Search(String),
    Scroll {
        scroll_y: f64,
        sections: Vec<SectionOffset>,
    },
    KeyPressed(String),
    AnimationFailed(usize),
    Timer(TimerEvent),
    /// Outcome of an `Effect::Download`, reported back by the platform.
    ExportFinished(Result<(), String>),
    /// Outcome of an `Effect::Print`.
    PrintFinished(Result<(), String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Schedule(ScheduledTimer),
    Download(SvgExport),
    Print,
    ScrollToFirstArticle,
}

impl Effect {
    pub fn into_timer(self) -> Option<ScheduledTimer> {
        match self {
            Effect::Schedule(timer) => Some(timer),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct PageController<S> {
    config: PageConfig,
    progress: ProgressStore<S>,
    toasts: ToastNotifier,
    modal: MaterialModal,
    chart: ChartRenderer,
    nav: NavController,
    animations: AnimationFallback,
    materials: Vec<Material>,
}

impl<S: KeyValueStore> PageController<S> {
    pub fn new(store: S, config: PageConfig) -> Self {
        Self::with_materials(store, config, MATERIALS.to_vec())
    }

    pub fn with_materials(store: S, config: PageConfig, materials: Vec<Material>) -> Self {
        let progress = ProgressStore::load(store, config.storage_key);
        info!(
            saved = progress.titles().len(),
            materials = materials.len(),
            "page controller ready"
        );
        Self {
            toasts: ToastNotifier::new(config.toast_visible_ms, config.toast_fade_ms),
            progress,
            modal: MaterialModal::new(),
            chart: ChartRenderer::render(&CHART_DATA),
            nav: NavController::new(),
            animations: AnimationFallback::new(),
            materials,
            config,
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Vec<Effect> {
        debug!(?command, "dispatch");
        let mut effects = Vec::new();
        match command {
            Command::OpenMaterial(title) => self.modal.open(&title),
            Command::SaveMaterial(title) => self.save_material(&title, &mut effects),
            Command::CloseModal => self.modal.close(),
            Command::SelectBar(index) => self.select_bar(index, &mut effects),
            Command::ExportChart => {
                effects.push(Effect::Download(export_vector(&self.chart, &self.config)));
            }
            Command::PrintPage => effects.push(Effect::Print),
            Command::ToggleMenu => {
                self.nav.toggle_menu();
            }
            Command::Search(keyword) => self.nav.filter_cards(&keyword),
            Command::Scroll { scroll_y, sections } => {
                self.nav
                    .update_active_link(scroll_y, &sections, self.config.scroll_threshold_px);
            }
            Command::KeyPressed(key) => {
                if key == self.config.jump_key && !self.materials.is_empty() {
                    effects.push(Effect::ScrollToFirstArticle);
                }
            }
            Command::AnimationFailed(slot) => {
                if self.animations.fail(slot) {
                    warn!(slot, "animation failed to load; showing placeholder");
                }
            }
            Command::Timer(event) => {
                if let Some(next) = self.toasts.on_timer(event) {
                    effects.push(Effect::Schedule(next));
                }
            }
            Command::ExportFinished(outcome) => match outcome {
                Ok(()) => self.notify(
                    "Infografis diekspor sebagai SVG.",
                    Severity::Success,
                    &mut effects,
                ),
                Err(reason) => self.notify(
                    format!("Gagal mengekspor infografis: {reason}"),
                    Severity::Error,
                    &mut effects,
                ),
            },
            Command::PrintFinished(outcome) => match outcome {
                Ok(()) => self.notify("Membuka dialog cetak...", Severity::Info, &mut effects),
                Err(_) => self.notify(
                    "Dialog cetak tidak dapat dibuka.",
                    Severity::Error,
                    &mut effects,
                ),
            },
        }
        effects
    }

    fn save_material(&mut self, title: &str, effects: &mut Vec<Effect>) {
        match self.progress.add_if_absent(title) {
            Ok(AddOutcome::Added) => {
                self.notify(
                    format!("{title} disimpan ke progres Anda."),
                    Severity::Success,
                    effects,
                );
            }
            Ok(AddOutcome::AlreadyPresent) => {
                self.notify(format!("{title} sudah ada di progres."), Severity::Info, effects);
            }
            Err(err) => {
                warn!(%err, title, "failed to persist progress");
                self.notify(
                    format!("Gagal menyimpan {title} ke progres."),
                    Severity::Error,
                    effects,
                );
            }
        }
    }

    fn select_bar(&mut self, index: usize, effects: &mut Vec<Effect>) {
        self.chart.highlight(index);
        if let Some(caption) = self.chart.bar(index).map(|bar| bar.caption()) {
            self.notify(caption, Severity::Info, effects);
        }
    }

    fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        effects: &mut Vec<Effect>,
    ) {
        effects.push(Effect::Schedule(self.toasts.show(message, severity)));
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn saved_titles(&self) -> &[String] {
        self.progress.titles()
    }

    pub fn is_saved(&self, title: &str) -> bool {
        self.progress.contains(title)
    }

    pub fn toasts(&self) -> &[Toast] {
        self.toasts.toasts()
    }

    pub fn modal(&self) -> &MaterialModal {
        &self.modal
    }

    pub fn chart(&self) -> &ChartRenderer {
        &self.chart
    }

    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn visible_materials(&self) -> impl Iterator<Item = &Material> + '_ {
        self.materials
            .iter()
            .filter(|material| self.nav.card_visible(material.title))
    }

    pub fn animation_state(&self, slot: usize) -> AnimationState {
        self.animations.state(slot)
    }
}
