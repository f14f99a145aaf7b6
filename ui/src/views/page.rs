use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use tracing::{debug, info, warn};

use crate::components::{MaterialModalView, SiteNavbar, ToastStack};
use crate::core::config::PageConfig;
use crate::core::scheduler::ScheduledTimer;
use crate::core::{timing, Command, Effect, PageController};
use crate::platform::{self, PageStore};

use super::{CommunitySection, DownloadSection, HeroSection, InfographicSection, MaterialsSection};

const EDUKREASI_CSS: Asset = asset!("/assets/edukreasi.css");

pub type Controller = PageController<PageStore>;

type SenderSlot = Rc<RefCell<Option<UnboundedSender<Command>>>>;

/// Shared controller plus the dispatcher every child sends commands to.
pub(crate) fn use_page() -> (Signal<Controller>, Coroutine<Command>) {
    (
        use_context::<Signal<Controller>>(),
        use_coroutine_handle::<Command>(),
    )
}

/// Root of the EduKreasi page. Owns the controller and the command loop.
#[component]
pub fn EduKreasiPage() -> Element {
    let controller = use_context_provider(|| {
        Signal::new(Controller::new(PageStore::open(), PageConfig::default()))
    });
    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let dispatcher = {
        let sender_slot = sender_slot.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<Command>| {
            let sender_slot = sender_slot.clone();
            let mut controller = controller;
            async move {
                while let Some(command) = rx.next().await {
                    let effects = controller.with_mut(|page| page.dispatch(command));
                    for effect in effects {
                        run_effect(effect, &sender_slot);
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(dispatcher.tx());

    use_hook(move || {
        if let Err(err) = platform::install_page_listeners(dispatcher.tx()) {
            warn!(%err, "scroll and keyboard listeners not installed");
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: EDUKREASI_CSS }

        SiteNavbar {}
        main { class: "page",
            HeroSection {}
            MaterialsSection {}
            InfographicSection {}
            CommunitySection {}
            DownloadSection {}
        }
        MaterialModalView {}
        ToastStack {}
    }
}

fn run_effect(effect: Effect, sender_slot: &SenderSlot) {
    match effect {
        Effect::Schedule(timer) => queue_timer(sender_slot.clone(), timer),
        Effect::Download(export) => {
            let outcome =
                match platform::download_text(export.filename, export.mime, &export.markup) {
                    Ok(Some(path)) => {
                        info!(%path, "chart exported");
                        Ok(())
                    }
                    Ok(None) => {
                        debug!(filename = export.filename, "chart download started");
                        Ok(())
                    }
                    Err(err) => {
                        warn!(%err, "chart export failed");
                        Err(err.to_string())
                    }
                };
            report(sender_slot, Command::ExportFinished(outcome));
        }
        Effect::Print => {
            let outcome = platform::print_page().map_err(|err| {
                warn!(%err, "print dialog unavailable");
                err.to_string()
            });
            report(sender_slot, Command::PrintFinished(outcome));
        }
        Effect::ScrollToFirstArticle => {
            if let Err(err) = platform::scroll_to_first_article() {
                debug!(%err, "jump to first article skipped");
            }
        }
    }
}

fn queue_timer(sender_slot: SenderSlot, timer: ScheduledTimer) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(timer.delay_ms).await;
            let _ = sender.unbounded_send(Command::Timer(timer.event));
        });
    }
}

fn report(sender_slot: &SenderSlot, command: Command) {
    if let Some(sender) = sender_slot.borrow().as_ref() {
        let _ = sender.unbounded_send(command);
    }
}
