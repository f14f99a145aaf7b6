//! End-to-end page behavior driven through `PageController::dispatch`, with
//! an in-memory store and a fast-forwarded scheduler standing in for the
//! browser.

use ui::core::catalog::SECTIONS;
use ui::core::config::{PageConfig, STORAGE_KEY};
use ui::core::nav::SectionOffset;
use ui::core::scheduler::ManualScheduler;
use ui::core::storage::MemoryStore;
use ui::core::toast::{Severity, ToastPhase};
use ui::core::{Command, Effect, PageController};

struct Harness {
    page: PageController<MemoryStore>,
    store: MemoryStore,
    scheduler: ManualScheduler,
}

impl Harness {
    fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    fn with_store(store: MemoryStore) -> Self {
        Self {
            page: PageController::new(store.clone(), PageConfig::default()),
            store,
            scheduler: ManualScheduler::new(),
        }
    }

    /// Dispatches and queues any timers; other effects are returned.
    fn send(&mut self, command: Command) -> Vec<Effect> {
        let mut rest = Vec::new();
        for effect in self.page.dispatch(command) {
            match effect {
                Effect::Schedule(timer) => self.scheduler.schedule(timer),
                other => rest.push(other),
            }
        }
        rest
    }

    fn advance(&mut self, ms: u64) {
        let page = &mut self.page;
        self.scheduler.advance(ms, |event| {
            page.dispatch(Command::Timer(event))
                .into_iter()
                .filter_map(Effect::into_timer)
                .collect()
        });
    }

    fn persisted(&self) -> Vec<String> {
        self.store
            .raw(STORAGE_KEY)
            .map(|raw| serde_json::from_str(&raw).unwrap())
            .unwrap_or_default()
    }
}

fn page_sections() -> Vec<SectionOffset> {
    SECTIONS
        .iter()
        .enumerate()
        .map(|(i, section)| SectionOffset::new(section.id, i as f64 * 800.0))
        .collect()
}

#[test]
fn saving_twice_persists_once() {
    let mut h = Harness::new();
    h.send(Command::SaveMaterial("Matematika Dasar".into()));
    h.send(Command::SaveMaterial("Matematika Dasar".into()));

    assert_eq!(h.persisted(), vec!["Matematika Dasar".to_string()]);
    let last = h.page.toasts().last().unwrap();
    assert_eq!(last.severity, Severity::Info);
    assert!(last.message.contains("sudah ada"));
}

#[test]
fn progress_survives_reload() {
    let store = MemoryStore::new();
    {
        let mut h = Harness::with_store(store.clone());
        h.send(Command::SaveMaterial("A".into()));
        h.send(Command::SaveMaterial("B".into()));
    }
    let reloaded = Harness::with_store(store);
    assert_eq!(reloaded.page.saved_titles(), ["A".to_string(), "B".to_string()]);
}

#[test]
fn corrupt_progress_starts_empty() {
    let h = Harness::with_store(MemoryStore::with_entry(STORAGE_KEY, "{oops"));
    assert!(h.page.saved_titles().is_empty());
    assert!(h.page.toasts().is_empty());
}

#[test]
fn toast_fades_then_disappears() {
    let mut h = Harness::new();
    h.send(Command::SaveMaterial("Sains Eksperimen".into()));

    h.advance(2_499);
    assert_eq!(h.page.toasts()[0].phase, ToastPhase::Visible);

    h.advance(1);
    assert_eq!(h.page.toasts()[0].phase, ToastPhase::Fading);

    h.advance(299);
    assert_eq!(h.page.toasts().len(), 1);

    h.advance(1);
    assert!(h.page.toasts().is_empty());
    assert_eq!(h.scheduler.pending(), 0);
}

#[test]
fn staggered_toasts_expire_independently() {
    let mut h = Harness::new();
    h.send(Command::PrintPage);
    h.send(Command::PrintFinished(Ok(())));
    h.advance(1_000);
    h.send(Command::SelectBar(0));

    h.advance(1_800);
    let messages: Vec<_> = h.page.toasts().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["Sekolah: 75%"]);
}

#[test]
fn modal_opens_replaces_and_closes() {
    let mut h = Harness::new();
    h.send(Command::OpenMaterial("Membaca Kreatif".into()));
    h.send(Command::OpenMaterial("Seni Menggambar".into()));
    assert!(h.page.modal().is_open());
    assert_eq!(h.page.modal().title(), "Seni Menggambar");

    h.send(Command::CloseModal);
    assert!(!h.page.modal().is_open());
}

#[test]
fn bar_and_legend_click_highlight_the_same_bar() {
    let mut h = Harness::new();
    h.send(Command::SelectBar(2));

    let stroked: Vec<_> = h
        .page
        .chart()
        .bars()
        .iter()
        .filter(|bar| bar.stroke.is_some())
        .map(|bar| bar.label)
        .collect();
    assert_eq!(stroked, vec!["Mandiri"]);
    assert_eq!(h.page.toasts()[0].message, "Mandiri: 60%");
}

#[test]
fn sekolah_is_the_tallest_bar() {
    let h = Harness::new();
    let bars = h.page.chart().bars();
    let sekolah = bars.iter().find(|bar| bar.label == "Sekolah").unwrap();
    assert!(bars.iter().all(|bar| bar.height <= sekolah.height));
}

#[test]
fn export_downloads_current_chart() {
    let mut h = Harness::new();
    h.send(Command::SelectBar(1));
    let effects = h.send(Command::ExportChart);

    let [Effect::Download(export)] = effects.as_slice() else {
        panic!("expected a single download, got {effects:?}");
    };
    assert_eq!(export.filename, "infografis.svg");
    assert_eq!(export.mime, "image/svg+xml;charset=utf-8");
    assert_eq!(export.markup.matches("stroke=").count(), 1);
    assert_eq!(
        h.page.toasts().last().map(|t| t.severity),
        Some(Severity::Info)
    );

    h.send(Command::ExportFinished(Ok(())));
    assert_eq!(
        h.page.toasts().last().map(|t| t.message.as_str()),
        Some("Infografis diekspor sebagai SVG.")
    );
}

#[test]
fn search_hides_non_matching_cards() {
    let mut h = Harness::new();
    h.send(Command::Search("mat".into()));

    for material in h.page.materials() {
        let expected = material.title.to_lowercase().contains("mat");
        assert_eq!(h.page.nav().card_visible(material.title), expected, "{}", material.title);
    }
    let visible: Vec<_> = h.page.visible_materials().map(|m| m.title).collect();
    assert_eq!(visible, vec!["Matematika Dasar", "Informatika Ringkas"]);
}

#[test]
fn scrolling_into_komunitas_activates_only_its_link() {
    let mut h = Harness::new();
    // komunitas is the fourth section, starting at 2400px
    h.send(Command::Scroll {
        scroll_y: 2_500.0,
        sections: page_sections(),
    });

    let active: Vec<_> = SECTIONS
        .iter()
        .filter(|section| h.page.nav().is_link_active(&section.href()))
        .map(|section| section.id)
        .collect();
    assert_eq!(active, vec!["komunitas"]);
}

#[test]
fn menu_toggle_flips_aria_expanded() {
    let mut h = Harness::new();
    h.send(Command::ToggleMenu);
    assert_eq!(h.page.nav().aria_expanded(), "true");
    h.send(Command::ToggleMenu);
    assert_eq!(h.page.nav().aria_expanded(), "false");
}

#[test]
fn shortcut_jumps_to_first_article() {
    let mut h = Harness::new();
    assert_eq!(
        h.send(Command::KeyPressed("1".into())),
        vec![Effect::ScrollToFirstArticle]
    );
    assert!(h.send(Command::KeyPressed("Enter".into())).is_empty());
}

#[test]
fn failed_export_shows_only_an_error_toast() {
    let mut h = Harness::new();
    let effects = h.send(Command::ExportChart);
    assert!(matches!(effects.as_slice(), [Effect::Download(_)]));

    h.send(Command::ExportFinished(Err("blob rejected".into())));
    let toasts: Vec<_> = h
        .page
        .toasts()
        .iter()
        .map(|t| (t.severity, t.message.as_str()))
        .collect();
    assert_eq!(
        toasts,
        vec![(Severity::Error, "Gagal mengekspor infografis: blob rejected")]
    );
}
